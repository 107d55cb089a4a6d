//! Integration tests for the real subprocess path.
//!
//! Uses a stub shell script in place of the slide compiler, so the
//! `SlidevBackend` invocation shape (argument order, stdout capture,
//! non-zero exit mapping) is exercised end to end without slidev installed.

#![cfg(unix)]

use deckmill::batch::{self, OutcomeKind};
use deckmill::builder::{BackendError, DeckBackend, SlidevBackend};
use deckmill::task::derive_task;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write an executable stub script and return its path.
fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Stub that echoes the invocation shape the way the tests want to see it.
fn write_echo_stub(dir: &Path) -> PathBuf {
    write_stub(dir, "stub-slidev", r#"echo "deck=$1 out=$3 base=$5""#)
}

fn write_deck(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "# Deck\n").unwrap();
    path
}

#[test]
fn backend_passes_out_and_base_flags_positionally() {
    let tmp = TempDir::new().unwrap();
    let stub = write_echo_stub(tmp.path());
    let deck = write_deck(tmp.path(), "intro.md");

    let backend = SlidevBackend::new(stub.to_string_lossy(), vec![]);
    let task = derive_task(&deck, "https://site.example", Path::new("dist"));

    let stdout = backend.build(&task).unwrap();
    assert_eq!(
        stdout.trim(),
        format!(
            "deck={} out=dist/intro base=https://site.example/intro/index.html",
            deck.display()
        )
    );
}

#[test]
fn backend_forwards_leading_args_before_the_deck() {
    let tmp = TempDir::new().unwrap();
    // With a leading arg, the deck shifts to $2 and --out's value to $4.
    let stub = write_stub(tmp.path(), "stub-slidev", r#"echo "lead=$1 deck=$2 out=$4""#);
    let deck = write_deck(tmp.path(), "intro.md");

    let backend = SlidevBackend::new(stub.to_string_lossy(), vec!["build".to_string()]);
    let task = derive_task(&deck, "https://site.example", Path::new("dist"));

    let stdout = backend.build(&task).unwrap();
    assert_eq!(
        stdout.trim(),
        format!("lead=build deck={} out=dist/intro", deck.display())
    );
}

#[test]
fn non_zero_exit_maps_to_command_failed_with_stderr() {
    let tmp = TempDir::new().unwrap();
    let stub = write_stub(tmp.path(), "stub-slidev", "echo 'template error' >&2\nexit 3");
    let deck = write_deck(tmp.path(), "broken.md");

    let backend = SlidevBackend::new(stub.to_string_lossy(), vec![]);
    let task = derive_task(&deck, "https://site.example", Path::new("dist"));

    match backend.build(&task).unwrap_err() {
        BackendError::CommandFailed(message) => {
            assert!(message.contains("template error"), "message: {message}");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[test]
fn batch_over_stub_tool_reports_per_deck_outcomes() {
    let tmp = TempDir::new().unwrap();
    let stub = write_echo_stub(tmp.path());
    let intro = write_deck(tmp.path(), "intro.md");
    let missing = tmp.path().join("missing.md");
    let closures = write_deck(tmp.path(), "closures.md");

    let backend = SlidevBackend::new(stub.to_string_lossy(), vec![]);
    let inputs = vec![intro, missing, closures];
    let report = batch::run(&backend, &inputs, "https://site.example", Path::new("dist"));

    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(report.built(), 2);
    assert_eq!(report.missing(), 1);
    assert_eq!(report.failed(), 0);

    // Outcomes stay in input order, and only existing decks reached the tool.
    assert!(matches!(
        report.outcomes[0].kind,
        OutcomeKind::Built { .. }
    ));
    assert!(matches!(report.outcomes[1].kind, OutcomeKind::Missing));
    assert!(matches!(
        report.outcomes[2].kind,
        OutcomeKind::Built { .. }
    ));

    match &report.outcomes[2].kind {
        OutcomeKind::Built { output } => {
            assert!(output.contains("out=dist/closures"));
            assert!(output.contains("base=https://site.example/closures/index.html"));
        }
        other => panic!("expected Built, got {other:?}"),
    }
}

#[test]
fn batch_continues_past_a_failing_build() {
    let tmp = TempDir::new().unwrap();
    // Fail only for the deck named broken.md, succeed otherwise.
    let stub = write_stub(
        tmp.path(),
        "stub-slidev",
        r#"case "$1" in *broken*) exit 1 ;; *) echo ok ;; esac"#,
    );
    let broken = write_deck(tmp.path(), "broken.md");
    let intro = write_deck(tmp.path(), "intro.md");

    let backend = SlidevBackend::new(stub.to_string_lossy(), vec![]);
    let inputs = vec![broken, intro];
    let report = batch::run(&backend, &inputs, "https://site.example", Path::new("dist"));

    assert!(matches!(
        report.outcomes[0].kind,
        OutcomeKind::Failed { .. }
    ));
    assert!(matches!(
        report.outcomes[1].kind,
        OutcomeKind::Built { .. }
    ));
    assert!(!report.all_built());
}
