use std::env;

/// Operating systems the bootstrap distinguishes between.
#[derive(Debug, PartialEq, Eq)]
pub enum Os {
    Linux,
    MacOS,
    Windows,
    Unsupported,
}

/// CPU architectures reported in diagnostics.
#[derive(Debug, PartialEq, Eq)]
pub enum Arch {
    Amd64,
    Arm64,
    Unsupported,
}

pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

pub fn get_platform_info() -> Platform {
    let os = match env::consts::OS {
        "linux" => Os::Linux,
        "macos" => Os::MacOS,
        "windows" => Os::Windows,
        _ => Os::Unsupported,
    };

    let arch = match env::consts::ARCH {
        "x86_64" => Arch::Amd64,
        "aarch64" => Arch::Arm64,
        _ => Arch::Unsupported,
    };

    Platform { os, arch }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let os_str = match self.os {
            Os::Linux => "linux",
            Os::MacOS => "darwin",
            Os::Windows => "windows",
            Os::Unsupported => "unsupported_os",
        };
        let arch_str = match self.arch {
            Arch::Amd64 => "amd64",
            Arch::Arm64 => "arm64",
            Arch::Unsupported => "unsupported_arch",
        };
        write!(f, "{}_{}", os_str, arch_str)
    }
}
