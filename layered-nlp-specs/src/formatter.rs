//! Failure and summary formatting for harness output.

use crate::failures::FailureState;
use crate::runner::CheckOutcome;
use std::fmt::Write;

/// Format a failed check with its input, expectation and hint.
///
/// `reason` comes from the expected-failures ledger entry, if any.
pub fn format_failure(
    fixture_name: &str,
    outcome: &CheckOutcome,
    state: FailureState,
    reason: Option<&str>,
) -> String {
    let mut output = String::new();

    // Header
    let marker = match state {
        FailureState::Known => " (known)",
        FailureState::Pending => " (pending)",
        FailureState::Regression => "",
    };
    writeln!(output, "\nFAIL: {}:{}{}", fixture_name, outcome.check_id, marker).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "  input:    {}", outcome.input).unwrap();
    writeln!(output, "  expected: {}", outcome.expected).unwrap();
    writeln!(output, "  actual:   {}", outcome.actual).unwrap();
    if let Some(reason) = reason {
        writeln!(output, "  reason:   {}", reason).unwrap();
    }

    if let Some(hint) = generate_hint(outcome) {
        writeln!(output).unwrap();
        writeln!(output, "  hint: {}", hint).unwrap();
    }

    output
}

/// Format a summary of all results.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let mut output = String::new();

    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    writeln!(output, "\n{}: {}", status, fixture_name).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        passed, failed, expected_failures, regressions
    )
    .unwrap();

    output
}

fn generate_hint(outcome: &CheckOutcome) -> Option<String> {
    if outcome.actual.contains("no fixture document for") {
        return Some(
            "add a document with this exact text; resolved text that differs from the input is annotated again"
                .to_string(),
        );
    }
    if outcome.expected.contains('!') != outcome.actual.contains('!') {
        return Some(
            "negated relations are prefixed with '!' - check for a negation child on the verb or object"
                .to_string(),
        );
    }
    if outcome.actual == "(none)" {
        return Some(
            "no triples were produced - check the subject and object dependency labels".to_string(),
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(expected: &str, actual: &str) -> CheckOutcome {
        CheckOutcome {
            check_id: "X0".to_string(),
            passed: false,
            input: "Cats never eat fish".to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    #[test]
    fn test_format_failure() {
        let output = format_failure(
            "triples.ron",
            &outcome("(Cats, eat, fish)", "(Cats, !eat, fish)"),
            FailureState::Regression,
            None,
        );
        insta::assert_snapshot!(output.trim(), @r###"
        FAIL: triples.ron:X0

          input:    Cats never eat fish
          expected: (Cats, eat, fish)
          actual:   (Cats, !eat, fish)

          hint: negated relations are prefixed with '!' - check for a negation child on the verb or object
        "###);
    }

    #[test]
    fn test_failure_marker_and_hints() {
        let output = format_failure(
            "triples.ron",
            &outcome("(ring, belong to, Miro)", "(none)"),
            FailureState::Known,
            Some("no object child"),
        );
        assert!(output.contains("FAIL: triples.ron:X0 (known)"));
        assert!(output.contains("  reason:   no object child"));
        assert!(output.contains("no triples were produced"));

        let output = format_failure(
            "coref.ron",
            &outcome("Miro", "error: annotator unavailable: no fixture document for \"x\""),
            FailureState::Pending,
            None,
        );
        assert!(output.contains("(pending)"));
        assert!(output.contains("add a document with this exact text"));

        let output = format_failure(
            "coref.ron",
            &outcome("Miro smiles", "Miro smile"),
            FailureState::Regression,
            None,
        );
        assert!(!output.contains("hint:"));
    }

    #[test]
    fn test_format_summary_pass() {
        let output = format_summary("coref.ron", 10, 0, 0, 0);
        assert!(output.contains("PASS: coref.ron"));
        assert!(output.contains("10 passed"));
    }

    #[test]
    fn test_format_summary_with_regressions() {
        let output = format_summary("coref.ron", 10, 2, 1, 1);
        assert!(output.contains("FAIL: coref.ron"));
        assert!(output.contains("10 passed"));
        assert!(output.contains("1 regressions"));
    }
}
