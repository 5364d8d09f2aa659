//! Invocation-scoped types for the herald command framework.
//!
//! This crate holds everything one command invocation carries: the
//! tokenized input, the [`Context`] handed to parsers and handlers, the
//! translation lookup used to render user-facing messages, permission and
//! scope metadata, and the [`CommandError`] taxonomy surfaced when an
//! invocation fails. The command model and dispatch engine live in
//! `herald-commands`.

pub mod context;
pub mod error;
pub mod permission;
pub mod tokens;
pub mod translation;

pub use context::{Context, ContextBuilder, Messenger, NoopMessenger};
pub use error::CommandError;
pub use permission::{ChannelKind, PermissionLevel, Scope};
pub use tokens::Tokens;
pub use translation::{TranslationError, Translator};
