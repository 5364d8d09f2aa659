//! The command contract.

use async_trait::async_trait;
use herald_core::{CommandError, Context, PermissionLevel, Scope};

/// One invocable bot command.
///
/// Implementations are built once at registration and shared read-only
/// across concurrent invocations.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command against one invocation.
    async fn run(&self, ctx: Context) -> Result<(), CommandError>;

    /// Names this command answers to; the first one is canonical.
    fn aliases(&self) -> &[String];

    /// Short human-readable summary, empty when undocumented.
    fn description(&self) -> &str {
        ""
    }

    fn permission_level(&self) -> PermissionLevel {
        PermissionLevel::default()
    }

    fn scope(&self) -> Scope {
        Scope::default()
    }
}
