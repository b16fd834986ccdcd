//! Script execution tests.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use keyline_dispatch::{Dispatcher, ParamKind};
use keyline_foundation::{ErrorKind, Result};
use keyline_runtime::{LineEditor, ReadResult, Repl, ReplConfig, ScriptSummary};

/// Editor that never produces input; scripts do not read from it.
struct NoInput;

impl LineEditor for NoInput {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

/// Writes `contents` to a uniquely named file in the temp directory.
fn script(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "keyline-{}-{name}.kl",
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

fn counting_repl(config: ReplConfig) -> (Repl<NoInput>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let dispatcher = Dispatcher::new();
    let counter = Arc::clone(&calls);
    dispatcher.register_command("tick", vec![ParamKind::integer("n")], move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (Repl::with_editor(NoInput, dispatcher, config), calls)
}

#[test]
fn script_runs_every_line() {
    let path = script("every", "# setup\ntick 1\n\ntick 2\n  tick 3  \n");
    let (repl, calls) = counting_repl(ReplConfig::new());

    let summary = repl.execute_script(&path).unwrap();
    assert_eq!(summary, ScriptSummary { executed: 3, failed: 0 });
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    fs::remove_file(path).ok();
}

#[test]
fn script_counts_failures_and_continues() {
    let path = script("continue", "tick 1\ntick x\nnope\ntick 2\n");
    let (repl, calls) = counting_repl(ReplConfig::new());

    let summary = repl.execute_script(&path).unwrap();
    assert_eq!(summary, ScriptSummary { executed: 2, failed: 2 });
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    fs::remove_file(path).ok();
}

#[test]
fn stop_on_error_reports_line() {
    let path = script("stop", "tick 1\ntick x\ntick 2\n");
    let (repl, calls) = counting_repl(ReplConfig::batch());

    let err = repl.execute_script(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoViableOverload { .. }));
    let context = err.context.unwrap();
    assert_eq!(context.line, Some(2));
    assert_eq!(context.input.as_deref(), Some("tick x"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    fs::remove_file(path).ok();
}

#[test]
fn exit_ends_script() {
    let path = script("exit", "tick 1\nexit\ntick 2\n");
    let (repl, calls) = counting_repl(ReplConfig::new());

    let summary = repl.execute_script(&path).unwrap();
    assert_eq!(summary.executed, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    fs::remove_file(path).ok();
}

#[test]
fn missing_script_is_io_error() {
    let (repl, _) = counting_repl(ReplConfig::new());
    let err = repl
        .execute_script(&std::env::temp_dir().join("keyline-does-not-exist.kl"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
}
