pub struct InstallMessages {
    pub failed_hint: &'static str,
    pub installing: &'static str,
    pub manifest_hint: &'static str,
    pub skipped: &'static str,
    pub success: &'static str,
}

pub const INSTALL_MESSAGES: InstallMessages = InstallMessages {
    failed_hint: "Check your internet connection, then try manually: {command}",
    installing: "Installing dependencies from {manifest}...",
    manifest_hint: "Make sure {manifest} is present in {root}",
    skipped: "Skipping dependency installation",
    success: "Dependencies installed",
};
