use async_trait::async_trait;
use herald_core::Context;

use crate::parser::{ParseError, Parser};

/// Parses a token as a signed 64-bit integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int;

#[async_trait]
impl Parser for Int {
    type Output = i64;

    async fn parse(&self, _ctx: &Context, token: &str) -> Result<i64, ParseError> {
        token
            .parse()
            .map_err(|_| ParseError::new(format!("`{token}` is not a valid integer")))
    }
}
