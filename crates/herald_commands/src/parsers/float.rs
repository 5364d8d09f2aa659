use async_trait::async_trait;
use herald_core::Context;

use crate::parser::{ParseError, Parser};

/// Parses a token as a 64-bit floating point number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Float;

#[async_trait]
impl Parser for Float {
    type Output = f64;

    async fn parse(&self, _ctx: &Context, token: &str) -> Result<f64, ParseError> {
        token
            .parse()
            .map_err(|_| ParseError::new(format!("`{token}` is not a valid number")))
    }
}
