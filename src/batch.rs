//! Batch orchestration of deck builds.
//!
//! Takes an ordered list of deck files and runs each through the same
//! two-branch decision: the input exists and is handed to the build backend,
//! or it is missing and reported as a diagnostic. Items are fully
//! independent — one deck's failure never stops the rest of the batch — and
//! outcomes are collected in input order, one per deck.
//!
//! Missing inputs are reported to stderr as they are encountered
//! (`Error while building <name> slides.`); the structured per-deck results
//! land in the returned [`BatchReport`], which the CLI formats through
//! [`crate::output`].

use crate::builder::{BackendError, DeckBackend};
use crate::task::{BuildTask, derive_tasks};
use std::path::{Path, PathBuf};

/// What happened to one deck.
#[derive(Debug)]
pub enum OutcomeKind {
    /// The external tool ran and exited zero; `output` is its stdout.
    Built { output: String },
    /// The input file does not exist; no build was invoked.
    Missing,
    /// The external tool could not be spawned or exited non-zero.
    Failed { error: BackendError },
}

/// One deck's task paired with its result.
#[derive(Debug)]
pub struct DeckOutcome {
    pub task: BuildTask,
    pub kind: OutcomeKind,
}

/// Ordered per-deck outcomes for one batch invocation.
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<DeckOutcome>,
}

impl BatchReport {
    pub fn built(&self) -> usize {
        self.count(|k| matches!(k, OutcomeKind::Built { .. }))
    }

    pub fn missing(&self) -> usize {
        self.count(|k| matches!(k, OutcomeKind::Missing))
    }

    pub fn failed(&self) -> usize {
        self.count(|k| matches!(k, OutcomeKind::Failed { .. }))
    }

    /// True when every deck in the batch built successfully.
    pub fn all_built(&self) -> bool {
        self.built() == self.outcomes.len()
    }

    fn count(&self, pred: impl Fn(&OutcomeKind) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.kind)).count()
    }
}

/// Run a batch: one outcome per input, in input order.
///
/// Decks are processed strictly sequentially. The orchestrator holds no
/// state across items beyond the immutable `base_prefix` and `out_root`.
pub fn run(
    backend: &impl DeckBackend,
    inputs: &[PathBuf],
    base_prefix: &str,
    out_root: &Path,
) -> BatchReport {
    let mut outcomes = Vec::with_capacity(inputs.len());

    for task in derive_tasks(inputs, base_prefix, out_root) {
        let kind = if !task.input.exists() {
            eprintln!("Error while building {} slides.", task.name);
            OutcomeKind::Missing
        } else {
            match backend.build(&task) {
                Ok(output) => OutcomeKind::Built { output },
                Err(error) => OutcomeKind::Failed { error },
            }
        };
        outcomes.push(DeckOutcome { task, kind });
    }

    BatchReport { outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::tests::MockBackend;
    use crate::test_helpers::{outcome_labels, write_deck};
    use tempfile::TempDir;

    #[test]
    fn builds_every_existing_deck() {
        let tmp = TempDir::new().unwrap();
        let decks = vec![
            write_deck(tmp.path(), "intro.md", "# Intro"),
            write_deck(tmp.path(), "closures.md", "# Closures"),
        ];

        let backend = MockBackend::new();
        let report = run(&backend, &decks, "https://site.example", Path::new("dist"));

        assert_eq!(report.built(), 2);
        assert_eq!(report.missing(), 0);
        assert_eq!(report.failed(), 0);
        assert!(report.all_built());
        assert_eq!(backend.get_invocations().len(), 2);
    }

    #[test]
    fn missing_deck_is_reported_and_skipped() {
        let tmp = TempDir::new().unwrap();
        let decks = vec![
            write_deck(tmp.path(), "intro.md", "# Intro"),
            tmp.path().join("missing.md"),
        ];

        let backend = MockBackend::new();
        let report = run(&backend, &decks, "https://site.example", Path::new("dist"));

        assert_eq!(outcome_labels(&report), vec!["built", "missing"]);
        // Exactly one invocation: the missing deck never reaches the backend.
        let invocations = backend.get_invocations();
        assert_eq!(invocations.len(), 1);
        assert!(invocations[0].input.ends_with("intro.md"));
    }

    #[test]
    fn derived_paths_match_the_input_name() {
        let tmp = TempDir::new().unwrap();
        let decks = vec![
            write_deck(tmp.path(), "intro.md", "# Intro"),
            tmp.path().join("missing.md"),
        ];

        let backend = MockBackend::new();
        let report = run(&backend, &decks, "https://site.example", Path::new("dist"));

        let intro = &report.outcomes[0].task;
        assert_eq!(intro.out_dir, Path::new("dist/intro"));
        assert_eq!(intro.base_url, "https://site.example/intro/index.html");

        let missing = &report.outcomes[1].task;
        assert_eq!(missing.name, "missing");
        assert!(matches!(report.outcomes[1].kind, OutcomeKind::Missing));
    }

    #[test]
    fn failed_build_does_not_stop_the_batch() {
        let tmp = TempDir::new().unwrap();
        let decks = vec![
            write_deck(tmp.path(), "a.md", "# A"),
            write_deck(tmp.path(), "b.md", "# B"),
            write_deck(tmp.path(), "c.md", "# C"),
        ];

        // Results pop from the end: a → Ok, b → Err, c → Ok.
        let backend = MockBackend::with_results(vec![
            Ok(String::new()),
            Err("exit 1".to_string()),
            Ok(String::new()),
        ]);
        let report = run(&backend, &decks, "https://site.example", Path::new("dist"));

        assert_eq!(outcome_labels(&report), vec!["built", "failed", "built"]);
        assert_eq!(backend.get_invocations().len(), 3);
        assert!(!report.all_built());
    }

    #[test]
    fn outcome_order_matches_input_order() {
        let tmp = TempDir::new().unwrap();
        let decks = vec![
            write_deck(tmp.path(), "zeta.md", "# Z"),
            tmp.path().join("gone.md"),
            write_deck(tmp.path(), "alpha.md", "# A"),
        ];

        let backend = MockBackend::new();
        let report = run(&backend, &decks, "https://site.example", Path::new("dist"));

        let names: Vec<&str> = report
            .outcomes
            .iter()
            .map(|o| o.task.name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "gone", "alpha"]);
    }

    #[test]
    fn rerun_selects_the_same_decks() {
        let tmp = TempDir::new().unwrap();
        let decks = vec![
            write_deck(tmp.path(), "intro.md", "# Intro"),
            tmp.path().join("missing.md"),
        ];

        let first = run(
            &MockBackend::new(),
            &decks,
            "https://site.example",
            Path::new("dist"),
        );
        let second = run(
            &MockBackend::new(),
            &decks,
            "https://site.example",
            Path::new("dist"),
        );

        assert_eq!(outcome_labels(&first), outcome_labels(&second));
        for (a, b) in first.outcomes.iter().zip(second.outcomes.iter()) {
            assert_eq!(a.task, b.task);
        }
    }

    #[test]
    fn captured_output_is_kept_per_deck() {
        let tmp = TempDir::new().unwrap();
        let decks = vec![write_deck(tmp.path(), "intro.md", "# Intro")];

        let backend = MockBackend::with_results(vec![Ok("built intro\n".to_string())]);
        let report = run(&backend, &decks, "https://site.example", Path::new("dist"));

        match &report.outcomes[0].kind {
            OutcomeKind::Built { output } => assert_eq!(output, "built intro\n"),
            other => panic!("expected Built, got {other:?}"),
        }
    }
}
