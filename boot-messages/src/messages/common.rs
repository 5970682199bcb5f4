pub struct CommonMessages {
    pub banner: &'static str,
    pub config_exists: &'static str,
    pub config_loaded: &'static str,
    pub config_written: &'static str,
    pub debug_hint: &'static str,
    pub error_generic: &'static str,
    pub thank_you: &'static str,
}

pub const COMMON_MESSAGES: CommonMessages = CommonMessages {
    banner: "🚀 Preparing the launcher in {root}",
    config_exists: "{path} already exists, leaving it unchanged",
    config_loaded: "Using configuration from {path}",
    config_written: "Wrote default configuration to {path}",
    debug_hint: "Run again with --debug for more detail",
    error_generic: "❌ Error: {error}",
    thank_you: "\nThank you for using the launcher!",
};
