//! Registration-time validation failures.

use thiserror::Error;

/// Rejected command or plugin declarations.
///
/// These fire while a bot is being assembled, never during dispatch; a
/// command that fails validation is simply not registered.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("command does not declare any alias")]
    NoAliases,

    #[error("invalid alias `{0}`: aliases must be non-empty and contain no whitespace")]
    InvalidAlias(String),

    #[error("command `{0}` declares the same alias twice")]
    RepeatedAlias(String),

    #[error("command `{command}` does not declare any action")]
    NoActions { command: String },

    #[error(
        "command `{command}` declares two actions with the same subcommand alias `{alias}` \
         and signature ({signature})"
    )]
    DuplicateAction {
        command: String,
        alias: String,
        signature: String,
    },

    #[error("a command with alias `{0}` is already registered")]
    DuplicateAlias(String),
}
