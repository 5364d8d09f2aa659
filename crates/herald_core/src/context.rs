//! Per-invocation context handed to parsers and handlers.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::permission::ChannelKind;
use crate::tokens::Tokens;
use crate::translation::Translator;

/// The engine-facing slice of the platform gateway.
///
/// Parsers and handlers only ever need to push text back to wherever the
/// invocation came from; connecting to the platform is the host's job.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends `content` back to the channel the invocation came from.
    async fn reply(&self, content: &str) -> anyhow::Result<()>;
}

/// Discards every reply. Useful for headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMessenger;

#[async_trait]
impl Messenger for NoopMessenger {
    async fn reply(&self, _content: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

struct Inner {
    tokens: Tokens,
    prefix: String,
    channel: ChannelKind,
    translator: Arc<Translator>,
    messenger: Arc<dyn Messenger>,
}

/// Everything one invocation carries. Cheap to clone; all state is shared
/// behind an `Arc` and immutable for the lifetime of the invocation.
#[derive(Clone)]
pub struct Context {
    inner: Arc<Inner>,
}

impl Context {
    pub fn builder(tokens: Tokens) -> ContextBuilder {
        ContextBuilder {
            tokens,
            prefix: "!".to_string(),
            channel: ChannelKind::default(),
            translator: None,
            messenger: None,
        }
    }

    /// The tokenized invocation text.
    pub fn tokens(&self) -> &Tokens {
        &self.inner.tokens
    }

    /// The command prefix the invocation was made with.
    pub fn prefix(&self) -> &str {
        &self.inner.prefix
    }

    pub fn channel(&self) -> ChannelKind {
        self.inner.channel
    }

    pub fn translator(&self) -> &Translator {
        &self.inner.translator
    }

    /// Looks up the message template registered under `namespace`/`key`.
    pub fn translate(&self, namespace: &str, key: &str) -> String {
        self.inner.translator.translate(namespace, key)
    }

    /// Sends `content` back to the invocation's channel.
    pub async fn reply(&self, content: &str) -> anyhow::Result<()> {
        self.inner.messenger.reply(content).await
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("tokens", &self.inner.tokens)
            .field("prefix", &self.inner.prefix)
            .field("channel", &self.inner.channel)
            .finish_non_exhaustive()
    }
}

/// Builds a [`Context`]. Defaults: prefix `"!"`, guild channel, the
/// default translator, a [`NoopMessenger`].
pub struct ContextBuilder {
    tokens: Tokens,
    prefix: String,
    channel: ChannelKind,
    translator: Option<Arc<Translator>>,
    messenger: Option<Arc<dyn Messenger>>,
}

impl ContextBuilder {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn channel(mut self, channel: ChannelKind) -> Self {
        self.channel = channel;
        self
    }

    pub fn translator(mut self, translator: Arc<Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn messenger(mut self, messenger: Arc<dyn Messenger>) -> Self {
        self.messenger = Some(messenger);
        self
    }

    pub fn build(self) -> Context {
        Context {
            inner: Arc::new(Inner {
                tokens: self.tokens,
                prefix: self.prefix,
                channel: self.channel,
                translator: self
                    .translator
                    .unwrap_or_else(|| Arc::new(Translator::with_defaults())),
                messenger: self.messenger.unwrap_or_else(|| Arc::new(NoopMessenger)),
            }),
        }
    }
}
