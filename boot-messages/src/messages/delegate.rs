pub struct DelegateMessages {
    pub failed: &'static str,
    pub finished: &'static str,
    pub not_started: &'static str,
    pub propagating: &'static str,
    pub starting: &'static str,
}

pub const DELEGATE_MESSAGES: DelegateMessages = DelegateMessages {
    failed: "❌ The launcher exited with an error ({outcome})",
    finished: "Launcher finished",
    not_started: "❌ The launcher could not be started: {reason}",
    propagating: "Exiting with the launcher's status {code}",
    starting: "Starting {entry_point}...",
};
