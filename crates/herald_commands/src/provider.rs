//! Registry of built commands, keyed by alias.

use std::collections::HashMap;
use std::sync::Arc;

use herald_core::Tokens;
use tracing::debug;

use crate::command::Command;
use crate::error::RegistrationError;

/// Owns a set of commands and resolves invocation aliases to them.
///
/// Aliases are matched case-insensitively; registration rejects an alias
/// that is already taken.
#[derive(Default)]
pub struct CommandProvider {
    commands: Vec<Arc<dyn Command>>,
    by_alias: HashMap<String, Arc<dyn Command>>,
}

impl CommandProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under all of its aliases.
    pub fn add(&mut self, command: impl Command + 'static) -> Result<(), RegistrationError> {
        self.add_shared(Arc::new(command))
    }

    pub fn add_shared(&mut self, command: Arc<dyn Command>) -> Result<(), RegistrationError> {
        for alias in command.aliases() {
            if self.by_alias.contains_key(&alias.to_ascii_lowercase()) {
                return Err(RegistrationError::DuplicateAlias(alias.clone()));
            }
        }
        for alias in command.aliases() {
            self.by_alias
                .insert(alias.to_ascii_lowercase(), Arc::clone(&command));
        }
        debug!(aliases = ?command.aliases(), "registered command");
        self.commands.push(command);
        Ok(())
    }

    /// Looks a command up by alias, case-insensitively.
    pub fn get(&self, alias: &str) -> Option<Arc<dyn Command>> {
        self.by_alias.get(&alias.to_ascii_lowercase()).cloned()
    }

    /// Resolves the command named by token 0 of an invocation.
    pub fn resolve(&self, tokens: &Tokens) -> Option<Arc<dyn Command>> {
        tokens.get(0).and_then(|name| self.get(name))
    }

    /// All registered commands, in registration order.
    pub fn commands(&self) -> &[Arc<dyn Command>] {
        &self.commands
    }
}
