//! Explicit command registration.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use herald_core::{CommandError, Context, PermissionLevel, Scope};

use crate::action::{ActionDescriptor, ErasedHandler, HandlerFuture, ParamList};
use crate::command::Command;
use crate::dispatch;
use crate::error::RegistrationError;

/// Builds a [`DeclaredCommand`] from explicitly listed actions.
///
/// Every action pairs a parameter tuple with a handler whose signature the
/// compiler checks against the parsers' output types. Declaration order is
/// preserved and is the order candidates are tried at dispatch time.
pub struct CommandBuilder {
    aliases: Vec<String>,
    description: String,
    permission_level: PermissionLevel,
    scope: Scope,
    actions: Vec<ActionDescriptor>,
}

impl CommandBuilder {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            aliases: vec![alias.into()],
            description: String::new(),
            permission_level: PermissionLevel::default(),
            scope: Scope::default(),
            actions: Vec::new(),
        }
    }

    /// Adds an extra invocation alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn permission_level(mut self, level: PermissionLevel) -> Self {
        self.permission_level = level;
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Declares the base action, tried when no subcommand token is present.
    pub fn action<L, H, Fut>(self, params: L, handler: H) -> Self
    where
        L: ParamList,
        H: Fn(Context, L::Values) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.push_action(String::new(), params, handler)
    }

    /// Declares an action selected by a leading subcommand token.
    pub fn subcommand<L, H, Fut>(self, alias: impl Into<String>, params: L, handler: H) -> Self
    where
        L: ParamList,
        H: Fn(Context, L::Values) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.push_action(alias.into(), params, handler)
    }

    fn push_action<L, H, Fut>(mut self, alias: String, params: L, handler: H) -> Self
    where
        L: ParamList,
        H: Fn(Context, L::Values) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let erased: ErasedHandler<L::Values> =
            Arc::new(move |ctx: Context, values: L::Values| -> HandlerFuture {
                Box::pin(handler(ctx, values))
            });
        self.actions.push(ActionDescriptor::new(alias, params, erased));
        self
    }

    /// Validates the declaration set and produces the runnable command.
    pub fn build(self) -> Result<DeclaredCommand, RegistrationError> {
        if self.aliases.is_empty() {
            return Err(RegistrationError::NoAliases);
        }
        for (index, alias) in self.aliases.iter().enumerate() {
            if alias.is_empty() || alias.chars().any(char::is_whitespace) {
                return Err(RegistrationError::InvalidAlias(alias.clone()));
            }
            if self.aliases[..index]
                .iter()
                .any(|earlier| earlier.eq_ignore_ascii_case(alias))
            {
                return Err(RegistrationError::RepeatedAlias(alias.clone()));
            }
        }
        if self.actions.is_empty() {
            return Err(RegistrationError::NoActions {
                command: self.aliases[0].clone(),
            });
        }
        for action in &self.actions {
            if action.alias.chars().any(char::is_whitespace) {
                return Err(RegistrationError::InvalidAlias(action.alias.clone()));
            }
        }
        for (index, action) in self.actions.iter().enumerate() {
            let conflict = self.actions[..index].iter().any(|earlier| {
                earlier.alias.eq_ignore_ascii_case(&action.alias)
                    && earlier.signature == action.signature
            });
            if conflict {
                return Err(RegistrationError::DuplicateAction {
                    command: self.aliases[0].clone(),
                    alias: action.alias.clone(),
                    signature: action.signature.join(", "),
                });
            }
        }
        Ok(DeclaredCommand {
            aliases: self.aliases,
            description: self.description,
            permission_level: self.permission_level,
            scope: self.scope,
            actions: self.actions,
        })
    }
}

/// A command declared through [`CommandBuilder`]: an immutable action
/// table plus the dispatch logic that picks exactly one action per
/// invocation.
#[derive(Debug)]
pub struct DeclaredCommand {
    aliases: Vec<String>,
    description: String,
    permission_level: PermissionLevel,
    scope: Scope,
    actions: Vec<ActionDescriptor>,
}

#[async_trait]
impl Command for DeclaredCommand {
    async fn run(&self, ctx: Context) -> Result<(), CommandError> {
        dispatch::dispatch(&self.actions, &ctx).await
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn permission_level(&self) -> PermissionLevel {
        self.permission_level
    }

    fn scope(&self) -> Scope {
        self.scope
    }
}
