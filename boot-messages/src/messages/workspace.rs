pub struct WorkspaceMessages {
    pub created: &'static str,
    pub preparing: &'static str,
    pub ready: &'static str,
}

pub const WORKSPACE_MESSAGES: WorkspaceMessages = WorkspaceMessages {
    created: "Created {path}",
    preparing: "Preparing workspace directories...",
    ready: "Workspace ready ({created} created, {existing} already present)",
};
