use async_trait::async_trait;
use herald_core::Context;

use crate::parser::{ParseError, Parser};

/// Passes a token through verbatim.
///
/// As the final parameter of an action this receives the whole remaining
/// input re-joined, so it doubles as a free-form text argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct Word;

#[async_trait]
impl Parser for Word {
    type Output = String;

    async fn parse(&self, _ctx: &Context, token: &str) -> Result<String, ParseError> {
        Ok(token.to_owned())
    }
}
