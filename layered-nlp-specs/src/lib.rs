#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven testing infrastructure for coreference resolution and
//! triple extraction.
//!
//! ## Overview
//!
//! Test cases are defined declaratively in `.ron` fixture files. Each
//! fixture carries the annotated documents an external parser would have
//! produced, so resolver and extractor behavior can be regression-tested
//! without loading a model.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture file types and check references
//! - [`annotator`] - Serves fixture documents through the `Annotator` trait
//! - [`loader`] - Fixture file loading
//! - [`runner`] - Test runner for executing fixtures
//! - [`errors`] - Error types for the spec system
//! - [`formatter`] - Failure and summary formatting
//! - [`failures`] - Expected failures tracking via TOML

pub mod annotator;
pub mod config;
pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

// Re-exports for convenient access to core types
pub use annotator::FixtureAnnotator;
pub use config::PipelineConfig;
pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{
    extraction_ref, resolution_ref, ExtractionCase, MatchMode, NlpFixture, ResolutionCase,
};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture, parse_fixture};
pub use runner::{run_fixture, run_harness, CheckOutcome, FixtureReport};

#[cfg(test)]
mod tests;
