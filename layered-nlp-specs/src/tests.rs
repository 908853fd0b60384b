use crate::{
    load_all_fixtures, run_fixture, run_harness, ExpectedFailures, MatchMode, NlpFixture,
    PipelineConfig,
};
use layered_triples::Triple;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and parse a fixture file from the fixtures directory.
fn load_fixture(name: &str) -> NlpFixture {
    crate::load_fixture(&fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

#[test]
fn test_copular_fixture() {
    let fixture = load_fixture("copular.ron");

    assert_eq!(fixture.title, "Copular sentences");
    assert_eq!(fixture.config.coref.first_person_token, "Miro");
    assert!(fixture.config.solve_coref);
    assert_eq!(fixture.documents.len(), 2);
    assert_eq!(
        fixture.extractions[0].expected,
        vec![Triple::new("beer", "be", "nice")]
    );
    assert_eq!(fixture.check_count(), 4);
}

#[test]
fn test_fixture_documents_validate() {
    let fixture = load_fixture("chains.ron");

    let doc = fixture
        .document("Barrack Obama was born in Hawaii. He smiled.")
        .expect("document present");
    assert_eq!(doc.len(), 10);
    assert_eq!(doc.chains().len(), 1);
    assert_eq!(doc.entity_text(&doc.entities()[0]), "Barrack Obama");
    assert_eq!(doc.head_of(0).text, "Obama");
    assert!(fixture.document("He smiled.").is_none());
}

#[test]
fn test_contains_cases_expand_per_triple() {
    let fixture = load_fixture("triples.ron");

    assert!(!fixture.config.solve_coref);
    let last = fixture.extractions.last().unwrap();
    assert_eq!(last.mode, MatchMode::Contains);
    assert_eq!(last.inputs.len(), 2);

    let report = run_fixture(&fixture, &PipelineConfig::extractions_only());
    assert_eq!(report.outcomes.len(), fixture.check_count());
    assert!(report.outcome("X4.[0]").unwrap().passed);
    assert!(report.outcome("X4.[1]").unwrap().passed);
}

#[test]
fn test_first_person_fixture() {
    let fixture = load_fixture("first_person.ron");
    let report = run_fixture(&fixture, &PipelineConfig::standard());

    let we = report.outcome("R2").unwrap();
    assert!(we.passed, "{:?}", we);
    assert_eq!(report.outcome("R4").unwrap().actual, "");

    let ring = report.outcome("X3.[0]").unwrap();
    assert!(!ring.passed);
    assert_eq!(ring.actual, "(none)");
}

#[test]
fn test_coref_pre_pass_reannotates() {
    let fixture = load_fixture("chains.ron");
    let report = run_fixture(&fixture, &PipelineConfig::extractions_only());

    let obama = report.outcome("X0").unwrap();
    assert!(obama.passed, "{:?}", obama);
    assert_eq!(obama.actual, "(Barrack Obama, born in, Hawaii)");
}

// ============================================================================
// Harness over every fixture
// ============================================================================

#[test]
fn test_all_fixtures_against_expected_failures() {
    let fixtures = load_all_fixtures(&fixtures_dir()).unwrap();
    let expected = ExpectedFailures::load(
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("expected-failures.toml"),
    )
    .unwrap();

    let (result, output) = run_harness(&fixtures, &expected, &PipelineConfig::standard());

    assert!(result.success(), "{}", output);
    assert_eq!(result.exit_code(), 0);
    assert_eq!(result.expected_failures, expected.count());
    assert_eq!(
        result.total,
        fixtures.iter().map(|(_, f)| f.check_count()).sum::<usize>()
    );
}

#[test]
fn test_expected_failures_are_not_stale() {
    let fixtures = load_all_fixtures(&fixtures_dir()).unwrap();
    let expected = ExpectedFailures::load(
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("expected-failures.toml"),
    )
    .unwrap();

    let reports: Vec<_> = fixtures
        .iter()
        .map(|(name, fixture)| (name.clone(), run_fixture(fixture, &PipelineConfig::standard())))
        .collect();
    let stale = expected.stale(&reports);
    assert!(
        stale.is_empty(),
        "remove passing entries from expected-failures.toml: {:?}",
        stale
    );
}
