//! Fixture-backed stand-in for the external annotator.

use std::collections::HashMap;
use std::sync::Arc;

use layered_annotation::{AnnotatedDocument, AnnotationError, Annotator};

use crate::NlpFixture;

/// Answers `annotate` with the fixture document whose text matches exactly.
#[derive(Debug, Clone, Default)]
pub struct FixtureAnnotator {
    documents: Arc<HashMap<String, AnnotatedDocument>>,
}

impl FixtureAnnotator {
    pub fn new(documents: impl IntoIterator<Item = AnnotatedDocument>) -> Self {
        let documents = documents
            .into_iter()
            .map(|doc| (doc.text().to_string(), doc))
            .collect();
        Self {
            documents: Arc::new(documents),
        }
    }

    pub fn from_fixture(fixture: &NlpFixture) -> Self {
        Self::new(fixture.documents.iter().cloned())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Annotator for FixtureAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, AnnotationError> {
        self.documents
            .get(text)
            .cloned()
            .ok_or_else(|| AnnotationError::Unavailable {
                message: format!("no fixture document for {:?}", text),
            })
    }
}
