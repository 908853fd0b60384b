//! Runs fixture cases through the resolver and the extractor.

use layered_coref::CorefResolver;
use layered_triples::{Triple, TripleExtractor};

use crate::config::PipelineConfig;
use crate::failures::{ExpectedFailures, FailureState, HarnessResult};
use crate::fixture::{extraction_ref, resolution_ref, ExtractionCase, MatchMode, NlpFixture};
use crate::formatter::{format_failure, format_summary};
use crate::FixtureAnnotator;

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// `R<case>`, `X<case>` or `X<case>.[<triple>]`
    pub check_id: String,
    pub passed: bool,
    /// Input text; batch inputs are joined with ` | `
    pub input: String,
    pub expected: String,
    pub actual: String,
}

/// All check outcomes for one fixture.
#[derive(Debug, Clone, Default)]
pub struct FixtureReport {
    pub title: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl FixtureReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> + '_ {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn outcome(&self, check_id: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.check_id == check_id)
    }
}

/// Run every enabled case of a fixture.
///
/// The fixture's documents answer all annotation requests, including the
/// re-annotation of coreference-resolved text during extraction.
pub fn run_fixture(fixture: &NlpFixture, config: &PipelineConfig) -> FixtureReport {
    let annotator = FixtureAnnotator::from_fixture(fixture);
    let mut outcomes = Vec::new();

    if config.resolutions {
        let resolver = CorefResolver::new(annotator.clone(), fixture.config.coref.clone());
        for (idx, case) in fixture.resolutions.iter().enumerate() {
            let actual = match resolver.resolve(&case.input) {
                Ok(text) => text,
                Err(err) => format!("error: {}", err),
            };
            outcomes.push(CheckOutcome {
                check_id: resolution_ref(idx),
                passed: actual == case.expected,
                input: case.input.clone(),
                expected: case.expected.clone(),
                actual,
            });
        }
    }

    if config.extractions {
        for (idx, case) in fixture.extractions.iter().enumerate() {
            outcomes.extend(check_extraction(fixture, &annotator, idx, case));
        }
    }

    FixtureReport {
        title: fixture.title.clone(),
        outcomes,
    }
}

fn check_extraction(
    fixture: &NlpFixture,
    annotator: &FixtureAnnotator,
    idx: usize,
    case: &ExtractionCase,
) -> Vec<CheckOutcome> {
    let mut config = fixture.config.clone();
    if let Some(solve_coref) = case.solve_coref {
        config.solve_coref = solve_coref;
    }
    let extractor = TripleExtractor::new(annotator.clone(), config);

    let mut triples = Vec::new();
    let mut errors = Vec::new();
    for result in extractor.extract(&case.inputs) {
        match result {
            Ok(triple) => triples.push(triple),
            Err(err) => errors.push(err.to_string()),
        }
    }

    let input = case.inputs.join(" | ");
    let actual = render_triples(&triples, &errors);

    match case.mode {
        MatchMode::Exact => vec![CheckOutcome {
            check_id: extraction_ref(idx, None),
            passed: errors.is_empty() && triples == case.expected,
            input,
            expected: render_triples(&case.expected, &[]),
            actual,
        }],
        MatchMode::Contains => case
            .expected
            .iter()
            .enumerate()
            .map(|(item, triple)| CheckOutcome {
                check_id: extraction_ref(idx, Some(item)),
                passed: triples.contains(triple),
                input: input.clone(),
                expected: triple.to_string(),
                actual: actual.clone(),
            })
            .collect(),
    }
}

fn render_triples(triples: &[Triple], errors: &[String]) -> String {
    let rendered: Vec<String> = triples
        .iter()
        .map(ToString::to_string)
        .chain(errors.iter().map(|err| format!("error: {}", err)))
        .collect();
    if rendered.is_empty() {
        "(none)".to_string()
    } else {
        rendered.join(", ")
    }
}

/// Run a set of named fixtures against the expected-failures ledger.
///
/// Returns the tally and a printable report of summaries and failures.
pub fn run_harness(
    fixtures: &[(String, NlpFixture)],
    expected: &ExpectedFailures,
    config: &PipelineConfig,
) -> (HarnessResult, String) {
    let mut result = HarnessResult::new();
    let mut output = String::new();

    for (name, fixture) in fixtures {
        let report = run_fixture(fixture, config);
        let mut failed = 0;
        let mut expected_failures = 0;
        let mut regressions = 0;

        for outcome in &report.outcomes {
            if outcome.passed {
                result.record_pass();
                continue;
            }
            let state = expected.is_expected(name, &outcome.check_id);
            result.record_failure(state);
            failed += 1;
            match state {
                FailureState::Regression => regressions += 1,
                FailureState::Known | FailureState::Pending => expected_failures += 1,
            }
            let reason = expected
                .entry(name, &outcome.check_id)
                .and_then(|entry| entry.reason.as_deref());
            output.push_str(&format_failure(name, outcome, state, reason));
        }

        log::debug!("{}: {} checks, {} failed", name, report.outcomes.len(), failed);
        output.push_str(&format_summary(
            name,
            report.passed(),
            failed,
            expected_failures,
            regressions,
        ));
    }

    (result, output)
}
