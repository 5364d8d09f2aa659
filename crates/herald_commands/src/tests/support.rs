use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use herald_core::{Context, Messenger, Tokens};

use crate::parser::{ParseError, Parser};

pub(crate) fn runtime() -> tokio::runtime::Runtime {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
    tokio::runtime::Runtime::new().unwrap()
}

pub(crate) fn context(input: &str) -> Context {
    Context::builder(Tokens::parse(input)).build()
}

#[derive(Default)]
pub(crate) struct RecordingMessenger {
    replies: Mutex<Vec<String>>,
}

impl RecordingMessenger {
    pub(crate) fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn reply(&self, content: &str) -> anyhow::Result<()> {
        self.replies.lock().unwrap().push(content.to_owned());
        Ok(())
    }
}

/// Counts invocations before passing the token through.
#[derive(Clone, Default)]
pub(crate) struct CountingWord {
    pub(crate) calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Parser for CountingWord {
    type Output = String;

    async fn parse(&self, _ctx: &Context, token: &str) -> Result<String, ParseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(token.to_owned())
    }
}

/// Rejects every token.
#[derive(Clone, Copy, Default)]
pub(crate) struct AlwaysFails;

#[async_trait]
impl Parser for AlwaysFails {
    type Output = String;

    async fn parse(&self, _ctx: &Context, token: &str) -> Result<String, ParseError> {
        Err(ParseError::new(format!("`{token}` rejected")))
    }
}
