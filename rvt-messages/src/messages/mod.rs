//! Central registry for all user-facing message templates.
//!
//! Organized by domain:
//! - `scaffold` - Progress and summary lines for the scaffold procedure
//! - `prompt` - Interactive questions
//! - `common` - Errors and hints shared across the CLI
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.
//!
//! ```rust
//! use rvt_messages::MESSAGES;
//!
//! let line = MESSAGES.scaffold.installing_css;
//! ```

mod common;
mod prompt;
mod scaffold;

pub use common::{CommonMessages, COMMON_MESSAGES};
pub use prompt::{PromptMessages, PROMPT_MESSAGES};
pub use scaffold::{ScaffoldMessages, SCAFFOLD_MESSAGES};

/// Unified messages struct containing all domain-specific message modules
pub struct Messages {
    pub scaffold: ScaffoldMessages,
    pub prompt: PromptMessages,
    pub common: CommonMessages,
}

/// Global messages constant - main entry point for all message templates
pub const MESSAGES: Messages = Messages {
    scaffold: SCAFFOLD_MESSAGES,
    prompt: PROMPT_MESSAGES,
    common: COMMON_MESSAGES,
};
