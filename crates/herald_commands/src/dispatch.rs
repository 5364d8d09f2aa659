//! Action resolution and argument binding for one invocation.
//!
//! Subcommand resolution is one global decision per invocation: if the
//! token after the command name matches any declared subcommand alias
//! (case-insensitively), only that alias's actions are candidates and
//! arguments start one token later; otherwise only base actions are
//! candidates. Candidates are then tried strictly in declaration order and
//! the first one that binds completely wins.

use herald_core::{CommandError, Context};
use tracing::debug;

use crate::action::{ActionDescriptor, BoundAction, Diagnosis};
use crate::parser::ParseError;

pub(crate) async fn dispatch(
    actions: &[ActionDescriptor],
    ctx: &Context,
) -> Result<(), CommandError> {
    let tokens = ctx.tokens();
    let subcommand = tokens
        .get(1)
        .filter(|token| actions.iter().any(|a| a.alias.eq_ignore_ascii_case(token)));
    let first_arg = if subcommand.is_some() { 2 } else { 1 };

    let candidates = actions.iter().filter(|action| match subcommand {
        Some(sub) => action.alias.eq_ignore_ascii_case(sub),
        None => action.is_base(),
    });

    let mut missing: Vec<String> = Vec::new();
    let mut first_parse_failure: Option<(usize, ParseError)> = None;

    for action in candidates {
        match try_candidate(action, ctx, first_arg).await {
            Ok(bound) => {
                debug!(?action, "candidate bound, dispatching handler");
                return bound.invoke(ctx.clone()).await.map_err(CommandError::Handler);
            }
            Err(Diagnosis::MissingArguments { names }) => {
                debug!(?action, "skipping candidate: missing arguments");
                for name in names {
                    if !missing.contains(&name) {
                        missing.push(name);
                    }
                }
            }
            Err(Diagnosis::ParseFailure { position, cause }) => {
                debug!(?action, position, "skipping candidate: argument failed to parse");
                if first_parse_failure.is_none() {
                    first_parse_failure = Some((position, cause));
                }
            }
        }
    }

    // No candidate bound. Missing arguments take priority over parse
    // failures; with neither recorded, no candidate existed at all.
    if !missing.is_empty() {
        return Err(CommandError::MissingArguments { names: missing });
    }
    if let Some((position, cause)) = first_parse_failure {
        return Err(CommandError::ArgumentParse {
            position,
            message: cause.message().to_owned(),
        });
    }
    Err(CommandError::UnknownSubcommand)
}

/// Arity precheck and token assignment for one candidate, then the
/// sequential parse. Every parameter needs at least one real token; the
/// final parameter receives the re-joined tail of the input, which may
/// span several words.
async fn try_candidate(
    action: &ActionDescriptor,
    ctx: &Context,
    first_arg: usize,
) -> Result<BoundAction, Diagnosis> {
    let tokens = ctx.tokens();
    let available = tokens.token_count().saturating_sub(first_arg);
    if available < action.arity {
        let names = action.param_names[available..]
            .iter()
            .map(|name| (*name).to_owned())
            .collect();
        return Err(Diagnosis::MissingArguments { names });
    }

    let mut assigned = Vec::with_capacity(action.arity);
    for index in 0..action.arity.saturating_sub(1) {
        // the arity precheck guarantees these positions exist
        assigned.push(tokens.get(first_arg + index).unwrap_or_default().to_owned());
    }
    if action.arity > 0 {
        assigned.push(tokens.tail(first_arg + action.arity - 1));
    }

    action.try_bind(ctx, &assigned).await
}
