//! Core types for `.ron` fixture files.
//!
//! A fixture bundles pre-annotated documents (standing in for a parser
//! model) with the resolutions and extractions expected from them:
//!
//! ```ron
//! (
//!     title: "Copular sentences",
//!     config: (coref: (first_person_token: "Miro")),
//!     documents: [
//!         (
//!             text: "beer is nice",
//!             tokens: [
//!                 (text: "beer", pos: "NOUN", dep: "nsubj", head: 1),
//!                 (text: "is", lemma: Some("be"), pos: "AUX", dep: "ROOT", head: 1),
//!                 (text: "nice", pos: "ADJ", dep: "acomp", head: 1),
//!             ],
//!         ),
//!     ],
//!     extractions: [
//!         (inputs: ["beer is nice"], expected: [("beer", "be", "nice")]),
//!     ],
//! )
//! ```

use layered_annotation::AnnotatedDocument;
use layered_triples::{ExtractorConfig, Triple};
use serde::Deserialize;

/// A parsed `.ron` fixture document.
#[derive(Debug, Clone, Deserialize)]
pub struct NlpFixture {
    #[serde(default)]
    pub title: String,
    /// Resolver and extractor settings shared by every case
    #[serde(default)]
    pub config: ExtractorConfig,
    /// Annotations returned for exactly matching input text
    #[serde(default)]
    pub documents: Vec<AnnotatedDocument>,
    #[serde(default)]
    pub resolutions: Vec<ResolutionCase>,
    #[serde(default)]
    pub extractions: Vec<ExtractionCase>,
}

/// Expected coreference-resolved text for one input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolutionCase {
    pub input: String,
    pub expected: String,
}

/// Expected triples for a batch of inputs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtractionCase {
    pub inputs: Vec<String>,
    /// Overrides `config.solve_coref` for this case
    #[serde(default)]
    pub solve_coref: Option<bool>,
    pub expected: Vec<Triple>,
    #[serde(default)]
    pub mode: MatchMode,
}

/// How extracted triples are compared with the expected list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MatchMode {
    /// Same triples in the same order; one check per case.
    Exact,
    /// Every expected triple appears somewhere; one check per triple.
    Contains,
}

impl Default for MatchMode {
    fn default() -> Self {
        MatchMode::Exact
    }
}

impl NlpFixture {
    /// Find the annotation for `text`.
    pub fn document(&self, text: &str) -> Option<&AnnotatedDocument> {
        self.documents.iter().find(|doc| doc.text() == text)
    }

    /// Total number of checks [`run_fixture`](crate::run_fixture) will produce.
    pub fn check_count(&self) -> usize {
        let extraction_checks: usize = self
            .extractions
            .iter()
            .map(|case| match case.mode {
                MatchMode::Exact => 1,
                MatchMode::Contains => case.expected.len(),
            })
            .sum();
        self.resolutions.len() + extraction_checks
    }
}

/// Check reference for resolution case `case` (e.g. `R2`).
pub fn resolution_ref(case: usize) -> String {
    format!("R{}", case)
}

/// Check reference for extraction case `case`; `item` names one expected
/// triple in [`MatchMode::Contains`] cases (e.g. `X0.[1]`).
pub fn extraction_ref(case: usize, item: Option<usize>) -> String {
    match item {
        Some(item) => format!("X{}.[{}]", case, item),
        None => format!("X{}", case),
    }
}
