use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use herald_core::CommandError;

use crate::builder::CommandBuilder;
use crate::command::Command;
use crate::parsers::{Boolean, Int, Word};
use crate::param;
use crate::tests::support::{context, runtime, AlwaysFails, CountingWord};

#[test]
fn test_base_action_binds_typed_arguments() {
    let rt = runtime();
    rt.block_on(async {
        let captured = Arc::new(Mutex::new(None));
        let cap = Arc::clone(&captured);
        let cmd = CommandBuilder::new("greet")
            .action(
                (param("name", Word), param("times", Int)),
                move |_ctx, (name, times): (String, i64)| {
                    let cap = Arc::clone(&cap);
                    async move {
                        *cap.lock().unwrap() = Some((name, times));
                        Ok(())
                    }
                },
            )
            .build()
            .unwrap();

        cmd.run(context("greet alice 3")).await.unwrap();
        assert_eq!(
            captured.lock().unwrap().take(),
            Some(("alice".to_string(), 3))
        );
    });
}

#[test]
fn test_zero_arity_action_runs_and_ignores_extra_tokens() {
    let rt = runtime();
    rt.block_on(async {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let cmd = CommandBuilder::new("ping")
            .action((), move |_ctx, ()| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            })
            .build()
            .unwrap();

        cmd.run(context("ping")).await.unwrap();
        cmd.run(context("ping trailing words")).await.unwrap();
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    });
}

#[test]
fn test_greedy_tail_binds_remaining_tokens() {
    let rt = runtime();
    rt.block_on(async {
        let captured = Arc::new(Mutex::new(None));
        let cap = Arc::clone(&captured);
        let cmd = CommandBuilder::new("close")
            .action(
                (param("id", Int), param("reason", Word)),
                move |_ctx, (id, reason): (i64, String)| {
                    let cap = Arc::clone(&cap);
                    async move {
                        *cap.lock().unwrap() = Some((id, reason));
                        Ok(())
                    }
                },
            )
            .build()
            .unwrap();

        cmd.run(context("close 42 no longer needed")).await.unwrap();
        assert_eq!(
            captured.lock().unwrap().take(),
            Some((42, "no longer needed".to_string()))
        );
    });
}

#[test]
fn test_overloaded_arity_selects_candidate_with_enough_tokens() {
    let rt = runtime();
    rt.block_on(async {
        let wide = Arc::new(AtomicUsize::new(0));
        let narrow = Arc::new(AtomicUsize::new(0));
        let wide_counter = Arc::clone(&wide);
        let narrow_counter = Arc::clone(&narrow);
        // The three-argument overload is declared first but cannot match a
        // single-token invocation; the one-argument overload must win.
        let cmd = CommandBuilder::new("tag")
            .action(
                (param("a", Word), param("b", Word), param("c", Word)),
                move |_ctx, _values: (String, String, String)| {
                    let counter = Arc::clone(&wide_counter);
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    }
                },
            )
            .action((param("a", Word),), move |_ctx, _values: (String,)| {
                let counter = Arc::clone(&narrow_counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            })
            .build()
            .unwrap();

        cmd.run(context("tag only")).await.unwrap();
        assert_eq!(wide.load(Ordering::SeqCst), 0);
        assert_eq!(narrow.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn test_subcommand_precedence_over_base_action() {
    let rt = runtime();
    rt.block_on(async {
        let base_runs = Arc::new(AtomicUsize::new(0));
        let base_counter = Arc::clone(&base_runs);
        let cmd = CommandBuilder::new("tag")
            .subcommand("list", (param("page", Int),), |_ctx, _values: (i64,)| async move {
                Ok(())
            })
            .action((param("name", Word),), move |_ctx, _values: (String,)| {
                let counter = Arc::clone(&base_counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            })
            .build()
            .unwrap();

        // "list" is a declared subcommand, so the base action must never be
        // tried with "list" as its argument, even though it would bind.
        let err = cmd.run(context("tag list")).await.unwrap_err();
        match err {
            CommandError::MissingArguments { names } => {
                assert_eq!(names, vec!["page".to_string()]);
            }
            other => panic!("expected MissingArguments, got {other:?}"),
        }
        assert_eq!(base_runs.load(Ordering::SeqCst), 0);
    });
}

#[test]
fn test_subcommand_alias_matches_case_insensitively() {
    let rt = runtime();
    rt.block_on(async {
        let captured = Arc::new(Mutex::new(None));
        let cap = Arc::clone(&captured);
        let cmd = CommandBuilder::new("tag")
            .subcommand("List", (param("page", Int),), move |_ctx, (page,): (i64,)| {
                let cap = Arc::clone(&cap);
                async move {
                    *cap.lock().unwrap() = Some(page);
                    Ok(())
                }
            })
            .build()
            .unwrap();

        cmd.run(context("tag LIST 5")).await.unwrap();
        assert_eq!(captured.lock().unwrap().take(), Some(5));
    });
}

#[test]
fn test_missing_arguments_lists_unsupplied_names() {
    let rt = runtime();
    rt.block_on(async {
        let cmd = CommandBuilder::new("ban")
            .subcommand(
                "temp",
                (param("user", Int), param("duration", Int), param("reason", Word)),
                |_ctx, _values: (i64, i64, String)| async move { Ok(()) },
            )
            .build()
            .unwrap();

        let err = cmd.run(context("ban temp 42")).await.unwrap_err();
        match err {
            CommandError::MissingArguments { names } => {
                assert_eq!(names, vec!["duration".to_string(), "reason".to_string()]);
            }
            other => panic!("expected MissingArguments, got {other:?}"),
        }
    });
}

#[test]
fn test_missing_argument_names_deduplicated_across_overloads() {
    let rt = runtime();
    rt.block_on(async {
        let cmd = CommandBuilder::new("note")
            .action(
                (param("id", Int), param("text", Word)),
                |_ctx, _values: (i64, String)| async move { Ok(()) },
            )
            .action(
                (param("id", Int), param("text", Word), param("extra", Word)),
                |_ctx, _values: (i64, String, String)| async move { Ok(()) },
            )
            .build()
            .unwrap();

        let err = cmd.run(context("note 7")).await.unwrap_err();
        match err {
            CommandError::MissingArguments { names } => {
                assert_eq!(names, vec!["text".to_string(), "extra".to_string()]);
            }
            other => panic!("expected MissingArguments, got {other:?}"),
        }
    });
}

#[test]
fn test_missing_arguments_preferred_over_parse_failure() {
    let rt = runtime();
    rt.block_on(async {
        let cmd = CommandBuilder::new("warn")
            .action((param("user", Int),), |_ctx, _values: (i64,)| async move { Ok(()) })
            .action(
                (param("user", Int), param("count", Int), param("reason", Word)),
                |_ctx, _values: (i64, i64, String)| async move { Ok(()) },
            )
            .build()
            .unwrap();

        // One candidate fails to parse, the other is short on tokens; the
        // missing-arguments diagnosis must win regardless of order.
        let err = cmd.run(context("warn abc")).await.unwrap_err();
        assert!(matches!(err, CommandError::MissingArguments { .. }));
    });
}

#[test]
fn test_parse_failure_reports_first_candidate_in_declaration_order() {
    let rt = runtime();
    rt.block_on(async {
        let cmd = CommandBuilder::new("set")
            .action((param("value", Int),), |_ctx, _values: (i64,)| async move { Ok(()) })
            .action((param("flag", Boolean),), |_ctx, _values: (bool,)| async move { Ok(()) })
            .build()
            .unwrap();

        let err = cmd.run(context("set abc")).await.unwrap_err();
        match err {
            CommandError::ArgumentParse { position, message } => {
                assert_eq!(position, 1);
                assert_eq!(message, "`abc` is not a valid integer");
            }
            other => panic!("expected ArgumentParse, got {other:?}"),
        }
    });
}

#[test]
fn test_parse_failure_position_is_one_based() {
    let rt = runtime();
    rt.block_on(async {
        let cmd = CommandBuilder::new("repeat")
            .action(
                (param("what", Word), param("times", Int)),
                |_ctx, _values: (String, i64)| async move { Ok(()) },
            )
            .build()
            .unwrap();

        let err = cmd.run(context("repeat hello lots")).await.unwrap_err();
        match err {
            CommandError::ArgumentParse { position, message } => {
                assert_eq!(position, 2);
                assert!(message.contains("lots"));
            }
            other => panic!("expected ArgumentParse, got {other:?}"),
        }
    });
}

#[test]
fn test_parse_failure_stops_remaining_parsers() {
    let rt = runtime();
    rt.block_on(async {
        let second = CountingWord::default();
        let calls = Arc::clone(&second.calls);
        let cmd = CommandBuilder::new("mix")
            .action(
                (param("first", AlwaysFails), param("second", second)),
                |_ctx, _values: (String, String)| async move { Ok(()) },
            )
            .build()
            .unwrap();

        let err = cmd.run(context("mix a b")).await.unwrap_err();
        assert!(matches!(err, CommandError::ArgumentParse { position: 1, .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    });
}

#[test]
fn test_first_bound_candidate_wins_and_later_parsers_never_run() {
    let rt = runtime();
    rt.block_on(async {
        let first_runs = Arc::new(AtomicUsize::new(0));
        let second_runs = Arc::new(AtomicUsize::new(0));
        let first_counter = Arc::clone(&first_runs);
        let second_counter = Arc::clone(&second_runs);
        let second_parser = CountingWord::default();
        let second_parser_calls = Arc::clone(&second_parser.calls);

        let cmd = CommandBuilder::new("echo")
            .action((param("text", Word),), move |_ctx, _values: (String,)| {
                let counter = Arc::clone(&first_counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            })
            .action((param("text", second_parser),), move |_ctx, _values: (String,)| {
                let counter = Arc::clone(&second_counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            })
            .build()
            .unwrap();

        cmd.run(context("echo hi")).await.unwrap();
        assert_eq!(first_runs.load(Ordering::SeqCst), 1);
        assert_eq!(second_runs.load(Ordering::SeqCst), 0);
        assert_eq!(second_parser_calls.load(Ordering::SeqCst), 0);
    });
}

#[test]
fn test_handler_error_propagates_without_retry() {
    let rt = runtime();
    rt.block_on(async {
        let fallback_runs = Arc::new(AtomicUsize::new(0));
        let fallback_counter = Arc::clone(&fallback_runs);
        let cmd = CommandBuilder::new("boom")
            .action((param("text", Word),), |_ctx, _values: (String,)| async move {
                Err(anyhow::anyhow!("backend unavailable"))
            })
            .action((param("text", Word),), move |_ctx, _values: (String,)| {
                let counter = Arc::clone(&fallback_counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            })
            .build()
            .unwrap();

        let err = cmd.run(context("boom x")).await.unwrap_err();
        match err {
            CommandError::Handler(inner) => {
                assert_eq!(inner.to_string(), "backend unavailable");
            }
            other => panic!("expected Handler, got {other:?}"),
        }
        assert_eq!(fallback_runs.load(Ordering::SeqCst), 0);
    });
}

#[test]
fn test_unknown_subcommand_when_no_candidate_exists() {
    let rt = runtime();
    rt.block_on(async {
        let cmd = CommandBuilder::new("tag")
            .subcommand("add", (param("name", Word),), |_ctx, _values: (String,)| async move {
                Ok(())
            })
            .build()
            .unwrap();

        // Token 1 matches no alias and there is no base action.
        let err = cmd.run(context("tag remove x")).await.unwrap_err();
        assert!(matches!(err, CommandError::UnknownSubcommand));

        // No token 1 at all, still no base action.
        let err = cmd.run(context("tag")).await.unwrap_err();
        assert!(matches!(err, CommandError::UnknownSubcommand));
    });
}

#[test]
fn test_repeated_resolution_is_idempotent() {
    let rt = runtime();
    rt.block_on(async {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let cap = Arc::clone(&captured);
        let cmd = CommandBuilder::new("add")
            .action((param("value", Int),), move |_ctx, (value,): (i64,)| {
                let cap = Arc::clone(&cap);
                async move {
                    cap.lock().unwrap().push(value);
                    Ok(())
                }
            })
            .build()
            .unwrap();

        cmd.run(context("add 9")).await.unwrap();
        cmd.run(context("add 9")).await.unwrap();
        assert_eq!(*captured.lock().unwrap(), vec![9, 9]);

        let first = cmd.run(context("add nope")).await.unwrap_err();
        let second = cmd.run(context("add nope")).await.unwrap_err();
        match (first, second) {
            (
                CommandError::ArgumentParse { position: p1, message: m1 },
                CommandError::ArgumentParse { position: p2, message: m2 },
            ) => {
                assert_eq!(p1, p2);
                assert_eq!(m1, m2);
            }
            other => panic!("expected matching ArgumentParse errors, got {other:?}"),
        }
    });
}
