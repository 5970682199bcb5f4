pub struct PreflightMessages {
    pub candidate_unusable: &'static str,
    pub checking: &'static str,
    pub found: &'static str,
    pub found_unknown_version: &'static str,
}

pub const PREFLIGHT_MESSAGES: PreflightMessages = PreflightMessages {
    candidate_unusable: "{runtime} is on PATH but '--version' failed ({outcome})",
    checking: "Checking for Python...",
    found: "Found Python {version} ({path})",
    found_unknown_version: "Found {path}, but could not read its version from '{output}'",
};
