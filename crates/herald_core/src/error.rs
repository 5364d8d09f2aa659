//! User-facing command failure taxonomy.

use thiserror::Error;

use crate::translation::Translator;

/// Why a command invocation failed.
///
/// The first three variants are binding diagnoses: expected, recoverable
/// outcomes reported back to the user. `Handler` wraps whatever the chosen
/// action's handler returned; the dispatcher never inspects it and never
/// retries another action after a handler has run.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("missing arguments: {}", .names.join(", "))]
    MissingArguments { names: Vec<String> },

    #[error("failed to parse argument {position}: {message}")]
    ArgumentParse { position: usize, message: String },

    #[error("invalid syntax or unknown subcommand")]
    UnknownSubcommand,

    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl CommandError {
    /// Renders the localized message a bot would send back to the user.
    pub fn render(&self, translator: &Translator) -> String {
        match self {
            CommandError::MissingArguments { names } => translator
                .translate("core", "missing_arguments")
                .replace("{arguments}", &names.join(", ")),
            CommandError::ArgumentParse { position, message } => translator
                .translate("core", "parse_failure")
                .replace("{position}", &position.to_string())
                .replace("{message}", message),
            CommandError::UnknownSubcommand => translator.translate("core", "invalid_syntax"),
            CommandError::Handler(err) => err.to_string(),
        }
    }
}
