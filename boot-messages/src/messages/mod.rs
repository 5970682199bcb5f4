//! Central registry for all user-facing message templates.
//!
//! Organized by bootstrap stage:
//! - `preflight` - runtime detection
//! - `workspace` - directory scaffolding
//! - `install` - dependency installation
//! - `delegate` - launching the entry point
//! - `check` - the `--check` diagnostics report
//! - `common` - banner, closing lines and generic errors
//!
//! Templates use `{variable}` syntax and are filled with `msg!`.

mod check;
mod common;
mod delegate;
mod install;
mod preflight;
mod workspace;

pub use check::{CheckMessages, CHECK_MESSAGES};
pub use common::{CommonMessages, COMMON_MESSAGES};
pub use delegate::{DelegateMessages, DELEGATE_MESSAGES};
pub use install::{InstallMessages, INSTALL_MESSAGES};
pub use preflight::{PreflightMessages, PREFLIGHT_MESSAGES};
pub use workspace::{WorkspaceMessages, WORKSPACE_MESSAGES};

pub struct Messages {
    pub preflight: PreflightMessages,
    pub workspace: WorkspaceMessages,
    pub install: InstallMessages,
    pub delegate: DelegateMessages,
    pub check: CheckMessages,
    pub common: CommonMessages,
}

pub const MESSAGES: Messages = Messages {
    preflight: PREFLIGHT_MESSAGES,
    workspace: WORKSPACE_MESSAGES,
    install: INSTALL_MESSAGES,
    delegate: DELEGATE_MESSAGES,
    check: CHECK_MESSAGES,
    common: COMMON_MESSAGES,
};
