//! rvt-messages
//!
//! Centralized messaging for the rvt CLI.
//! Provides the message templates, a message builder, and the `msg!` macro
//! that fills `{variable}` placeholders at runtime.

pub mod builder;
pub mod macros;
pub mod messages;

pub use messages::MESSAGES;
