//! Command model and dispatch engine for the herald framework.
//!
//! Commands declare one or more actions: a base action and/or subcommands,
//! each with an ordered, typed parameter list and an async handler. At
//! runtime the dispatcher decides once whether the token after the command
//! name selects a subcommand, tries the matching actions in declaration
//! order, parses arguments with the declared parsers (the final parameter
//! consuming the rest of the input as one value), runs the first action
//! that binds completely, and otherwise reports a single aggregated
//! failure.
//!
//! ```
//! use herald_commands::{param, Command, CommandBuilder, Int, Word};
//! use herald_core::{Context, Tokens};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let ban = CommandBuilder::new("ban")
//!     .subcommand(
//!         "temp",
//!         (param("user_id", Int), param("reason", Word)),
//!         |ctx: Context, (id, reason): (i64, String)| async move {
//!             ctx.reply(&format!("temporarily banned {id}: {reason}")).await
//!         },
//!     )
//!     .action(
//!         (param("user_id", Int),),
//!         |ctx: Context, (id,): (i64,)| async move {
//!             ctx.reply(&format!("banned {id}")).await
//!         },
//!     )
//!     .build()?;
//!
//! let ctx = Context::builder(Tokens::parse("ban 42")).build();
//! ban.run(ctx).await?;
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod builder;
pub mod command;
mod dispatch;
pub mod error;
pub mod parser;
pub mod parsers;
pub mod plugin;
pub mod provider;

#[cfg(test)]
mod tests;

pub use action::{param, HandlerFuture, Param, ParamList};
pub use builder::{CommandBuilder, DeclaredCommand};
pub use command::Command;
pub use error::RegistrationError;
pub use parser::{ParseError, Parser};
pub use parsers::{Boolean, Float, Int, Word};
pub use plugin::{Plugin, PluginBuilder};
pub use provider::CommandProvider;
