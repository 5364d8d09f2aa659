//! Plugins bundle commands with lifecycle hooks.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::info;

use crate::command::Command;
use crate::error::RegistrationError;
use crate::provider::CommandProvider;

type ReadyHook = Box<dyn Fn() -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// A named set of commands contributed to a bot, with an optional hook run
/// once the platform connection is ready.
pub struct Plugin {
    name: String,
    commands: CommandProvider,
    on_ready: Option<ReadyHook>,
}

impl Plugin {
    pub fn builder(name: impl Into<String>) -> PluginBuilder {
        PluginBuilder {
            name: name.into(),
            commands: Vec::new(),
            on_ready: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command_provider(&self) -> &CommandProvider {
        &self.commands
    }

    /// Runs the ready hook, if any.
    pub async fn on_ready(&self) -> anyhow::Result<()> {
        if let Some(hook) = &self.on_ready {
            hook().await?;
        }
        info!(plugin = %self.name, "plugin ready");
        Ok(())
    }
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name)
            .field("on_ready", &self.on_ready.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

/// Builds a [`Plugin`]; command aliases are validated against each other
/// when `build` assembles the provider.
pub struct PluginBuilder {
    name: String,
    commands: Vec<Arc<dyn Command>>,
    on_ready: Option<ReadyHook>,
}

impl PluginBuilder {
    pub fn command(mut self, command: impl Command + 'static) -> Self {
        self.commands.push(Arc::new(command));
        self
    }

    /// Sets the callback invoked when the bot comes online.
    pub fn on_ready<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.on_ready = Some(Box::new(move || Box::pin(hook())));
        self
    }

    pub fn build(self) -> Result<Plugin, RegistrationError> {
        let mut provider = CommandProvider::new();
        for command in self.commands {
            provider.add_shared(command)?;
        }
        Ok(Plugin {
            name: self.name,
            commands: provider,
            on_ready: self.on_ready,
        })
    }
}
