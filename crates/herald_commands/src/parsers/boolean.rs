use async_trait::async_trait;
use herald_core::Context;

use crate::parser::{ParseError, Parser};

/// Parses a token as a yes/no flag.
///
/// Accepts `true`/`false`, `yes`/`no` and `on`/`off`, case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

#[async_trait]
impl Parser for Boolean {
    type Output = bool;

    async fn parse(&self, _ctx: &Context, token: &str) -> Result<bool, ParseError> {
        match token.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" => Ok(true),
            "false" | "no" | "off" => Ok(false),
            _ => Err(ParseError::new(format!("`{token}` is not a valid yes/no value"))),
        }
    }
}
