//! Shared fixture for CLI tests: a workspace plus a shell script that
//! stands in for the Python interpreter.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

const FAKE_PYTHON: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "Python 3.11.4"
    exit 0
fi
if [ "$1" = "-m" ]; then
    [ -f "$5" ] || exit 7
    printf "%s\n" "$*" >> install.log
    exit "${FAKE_INSTALL_EXIT:-0}"
fi
printf "%s\n" "$*" >> delegate.log
exit "${FAKE_DELEGATE_EXIT:-0}"
"#;

pub struct Workspace {
    _temp_dir: TempDir,
    pub root: PathBuf,
    pub runtime: PathBuf,
    config_home: PathBuf,
}

impl Workspace {
    /// Empty root with the fake runtime installed next to it.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("launcher");
        let bin = temp_dir.path().join("bin");
        let config_home = temp_dir.path().join("config");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&bin).unwrap();
        fs::create_dir_all(&config_home).unwrap();

        let runtime = bin.join("python3");
        fs::write(&runtime, FAKE_PYTHON).unwrap();
        fs::set_permissions(&runtime, fs::Permissions::from_mode(0o755)).unwrap();

        Self {
            _temp_dir: temp_dir,
            root,
            runtime,
            config_home,
        }
    }

    /// Root containing `requirements.txt` and `launcher.py`.
    pub fn ready() -> Self {
        let ws = Self::new();
        ws.write("requirements.txt", "requests\n");
        ws.write("launcher.py", "print('launcher')\n");
        ws
    }

    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.root.join(name), contents).unwrap();
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn read(&self, relative: &str) -> Option<String> {
        fs::read_to_string(self.root.join(relative)).ok()
    }

    /// `bootstrap -C <root>` with an isolated environment, no runtime selected.
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("bootstrap").unwrap();
        cmd.arg("-C").arg(&self.root);
        self.isolate(&mut cmd);
        cmd
    }

    /// Run from the root's parent with `-C launcher` and the fake runtime.
    pub fn relative_command(&self) -> Command {
        let parent = self.root.parent().unwrap();
        let mut cmd = Command::cargo_bin("bootstrap").unwrap();
        cmd.current_dir(parent)
            .arg("-C")
            .arg(self.root.file_name().unwrap())
            .arg("--runtime")
            .arg(&self.runtime);
        self.isolate(&mut cmd);
        cmd
    }

    fn isolate(&self, cmd: &mut Command) {
        cmd.env_remove("BOOTSTRAP_RUNTIME")
            .env_remove("RUST_LOG")
            .env_remove("LOG_LEVEL")
            .env("LOG_OUTPUT", "console")
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env("HOME", &self.config_home);
    }

    /// `bare_command` using the fake runtime.
    pub fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.arg("--runtime").arg(&self.runtime);
        cmd
    }
}

pub fn all_dirs_exist(root: &Path) -> bool {
    ["sources", "sources/versions", "sources/assets", "sources/libraries"]
        .iter()
        .all(|dir| root.join(dir).is_dir())
}
