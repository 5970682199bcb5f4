pub mod command_stream;
pub mod error;
pub mod file_system;
pub mod output_macros;
pub mod platform;

// Re-export the process helpers used by every stage
pub use command_stream::{capture_command, locate_tool, run_inherited};
pub use command_stream::{CapturedOutput, ExitOutcome};
