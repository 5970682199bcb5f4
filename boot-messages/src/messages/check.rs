pub struct CheckMessages {
    pub all_ok: &'static str,
    pub directory_missing: &'static str,
    pub directory_present: &'static str,
    pub entry_point_missing: &'static str,
    pub entry_point_present: &'static str,
    pub header: &'static str,
    pub issues_found: &'static str,
    pub manifest_missing: &'static str,
    pub manifest_present: &'static str,
    pub runtime_missing: &'static str,
    pub runtime_present: &'static str,
}

pub const CHECK_MESSAGES: CheckMessages = CheckMessages {
    all_ok: "\nEverything is ready. Run without --check to start the launcher.",
    directory_missing: "{path} (will be created)",
    directory_present: "{path}",
    entry_point_missing: "Entry point {path} not found",
    entry_point_present: "Entry point {path}",
    header: "🔍 Checking launcher prerequisites in {root}\n",
    issues_found: "\n{count} blocking issue(s) found.",
    manifest_missing: "Manifest {path} not found",
    manifest_present: "Manifest {path}",
    runtime_missing: "Python runtime: {error}",
    runtime_present: "Python {version} ({path})",
};
