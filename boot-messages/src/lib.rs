//! boot-messages
//!
//! Centralized messaging for the launcher bootstrap.
//! Provides the message templates, a message builder, and the `msg!`
//! macro used to fill `{variable}` placeholders.

pub mod builder;
pub mod macros;
pub mod messages;

pub use builder::MessageBuilder;
pub use messages::MESSAGES;
