//! Typed parameter lists and the erased action descriptors built from them.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use herald_core::Context;

use crate::parser::{ParseError, Parser};

/// One declared parameter: a display name plus the parser that reads it.
pub struct Param<P> {
    name: &'static str,
    parser: P,
}

/// Declares a named parameter.
pub fn param<P: Parser>(name: &'static str, parser: P) -> Param<P> {
    Param { name, parser }
}

/// Why one candidate action failed to bind.
///
/// A candidate either binds completely or produces exactly one of these;
/// the dispatcher aggregates them across candidates into a single reported
/// error.
#[derive(Debug)]
pub enum Diagnosis {
    /// The invocation supplied fewer tokens than the candidate has
    /// parameters. Carries the names of the parameters beyond what was
    /// available.
    MissingArguments { names: Vec<String> },
    /// A parser rejected its assigned token. `position` is 1-based.
    ParseFailure { position: usize, cause: ParseError },
}

/// A fixed-arity list of parameters.
///
/// Implemented for tuples of [`Param`] up to five entries. The tuple of
/// parsed values is what the handler receives, so parser output types and
/// the handler signature must line up at compile time.
#[async_trait]
pub trait ParamList: Send + Sync + 'static {
    /// The tuple of parsed values.
    type Values: Send + 'static;

    /// Number of declared parameters.
    fn arity(&self) -> usize;

    /// Parameter display names, in declaration order.
    fn names(&self) -> Vec<&'static str>;

    /// Parser output type names. Two actions on the same subcommand alias
    /// may not share this signature.
    fn signature(&self) -> Vec<&'static str>;

    /// Parses `tokens` (one per parameter, already assigned by the
    /// dispatcher) strictly in declaration order. The first failing parser
    /// stops the attempt; later parsers are not invoked.
    async fn bind(&self, ctx: &Context, tokens: &[String]) -> Result<Self::Values, Diagnosis>;
}

#[async_trait]
impl ParamList for () {
    type Values = ();

    fn arity(&self) -> usize {
        0
    }

    fn names(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn signature(&self) -> Vec<&'static str> {
        Vec::new()
    }

    async fn bind(&self, _ctx: &Context, _tokens: &[String]) -> Result<(), Diagnosis> {
        Ok(())
    }
}

macro_rules! impl_param_list {
    ($( $P:ident => $idx:tt ),+) => {
        #[async_trait]
        impl<$($P: Parser + 'static),+> ParamList for ($(Param<$P>,)+) {
            type Values = ($($P::Output,)+);

            fn arity(&self) -> usize {
                [$(stringify!($P)),+].len()
            }

            fn names(&self) -> Vec<&'static str> {
                vec![$(self.$idx.name),+]
            }

            fn signature(&self) -> Vec<&'static str> {
                vec![$(std::any::type_name::<$P::Output>()),+]
            }

            async fn bind(
                &self,
                ctx: &Context,
                tokens: &[String],
            ) -> Result<Self::Values, Diagnosis> {
                Ok(($(
                    match self.$idx.parser.parse(ctx, &tokens[$idx]).await {
                        Ok(value) => value,
                        Err(cause) => {
                            return Err(Diagnosis::ParseFailure {
                                position: $idx + 1,
                                cause,
                            });
                        }
                    },
                )+))
            }
        }
    };
}

impl_param_list!(P1 => 0);
impl_param_list!(P1 => 0, P2 => 1);
impl_param_list!(P1 => 0, P2 => 1, P3 => 2);
impl_param_list!(P1 => 0, P2 => 1, P3 => 2, P4 => 3);
impl_param_list!(P1 => 0, P2 => 1, P3 => 2, P4 => 3, P5 => 4);

/// Boxed future returned by action handlers.
pub type HandlerFuture = BoxFuture<'static, anyhow::Result<()>>;

pub(crate) type ErasedHandler<V> = Arc<dyn Fn(Context, V) -> HandlerFuture + Send + Sync>;

/// A fully bound candidate: parsed values captured, handler ready to run.
pub(crate) struct BoundAction {
    invoke: Box<dyn FnOnce(Context) -> HandlerFuture + Send>,
}

impl BoundAction {
    pub(crate) async fn invoke(self, ctx: Context) -> anyhow::Result<()> {
        (self.invoke)(ctx).await
    }
}

#[async_trait]
trait ErasedAction: Send + Sync {
    async fn try_bind(&self, ctx: &Context, tokens: &[String]) -> Result<BoundAction, Diagnosis>;
}

struct Action<L: ParamList> {
    params: L,
    handler: ErasedHandler<L::Values>,
}

#[async_trait]
impl<L: ParamList> ErasedAction for Action<L> {
    async fn try_bind(&self, ctx: &Context, tokens: &[String]) -> Result<BoundAction, Diagnosis> {
        let values = self.params.bind(ctx, tokens).await?;
        let handler = Arc::clone(&self.handler);
        Ok(BoundAction {
            invoke: Box::new(move |ctx| handler(ctx, values)),
        })
    }
}

/// One candidate binding of a command: an optional subcommand alias (empty
/// for the base action), a typed parameter list, and the handler invoked
/// once every parameter parses.
pub(crate) struct ActionDescriptor {
    pub(crate) alias: String,
    pub(crate) arity: usize,
    pub(crate) param_names: Vec<&'static str>,
    pub(crate) signature: Vec<&'static str>,
    binder: Box<dyn ErasedAction>,
}

impl ActionDescriptor {
    pub(crate) fn new<L: ParamList>(
        alias: String,
        params: L,
        handler: ErasedHandler<L::Values>,
    ) -> Self {
        Self {
            arity: params.arity(),
            param_names: params.names(),
            signature: params.signature(),
            alias,
            binder: Box::new(Action { params, handler }),
        }
    }

    pub(crate) fn is_base(&self) -> bool {
        self.alias.is_empty()
    }

    pub(crate) async fn try_bind(
        &self,
        ctx: &Context,
        tokens: &[String],
    ) -> Result<BoundAction, Diagnosis> {
        self.binder.try_bind(ctx, tokens).await
    }
}

impl fmt::Debug for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("alias", &self.alias)
            .field("param_names", &self.param_names)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
