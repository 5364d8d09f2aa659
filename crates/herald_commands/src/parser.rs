//! Typed token parser contract.

use async_trait::async_trait;
use herald_core::Context;
use thiserror::Error;

/// Failure to read a token as the parser's target type.
///
/// The message is user-facing: it ends up verbatim inside the "failed to
/// parse argument N" reply.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Turns one token into a typed value.
///
/// Parsers are stateless and shared across concurrent invocations. A parser
/// may suspend (remote lookups are fine); the dispatcher waits for each
/// result before invoking the next parser of the same candidate.
#[async_trait]
pub trait Parser: Send + Sync {
    /// The value this parser produces.
    type Output: Send + 'static;

    async fn parse(&self, ctx: &Context, token: &str) -> Result<Self::Output, ParseError>;
}
