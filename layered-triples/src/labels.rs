//! Dependency-label sets driving the matcher.

use std::collections::BTreeSet;

use layered_annotation::Token;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static STANDARD: Lazy<DependencyLabels> = Lazy::new(|| DependencyLabels {
    negations: set(&["no", "not", "n't", "never", "none"]),
    subjects: set(&["nsubj", "nsubjpass", "csubj", "csubjpass", "agent", "expl"]),
    objects: set(&["dobj", "dative", "attr", "oprd", "pobj"]),
    copular_objects: set(&["attr", "acomp", "pobj"]),
});

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Label vocabularies. Missing fields take the standard values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyLabels {
    /// Lowercased words that negate their head
    pub negations: BTreeSet<String>,
    /// Subject relations
    pub subjects: BTreeSet<String>,
    /// Object relations
    pub objects: BTreeSet<String>,
    /// Complement relations of "be"
    pub copular_objects: BTreeSet<String>,
}

impl DependencyLabels {
    /// English labels shared by every default-configured matcher.
    pub fn standard() -> &'static DependencyLabels {
        &STANDARD
    }

    pub fn is_subject(&self, token: &Token) -> bool {
        self.subjects.contains(&token.dep)
    }

    pub fn is_object(&self, token: &Token) -> bool {
        self.objects.contains(&token.dep)
    }

    pub fn is_copular_object(&self, token: &Token) -> bool {
        self.copular_objects.contains(&token.dep)
    }

    pub fn is_negation(&self, token: &Token) -> bool {
        self.negations.contains(&token.lower())
    }
}

impl Default for DependencyLabels {
    fn default() -> Self {
        STANDARD.clone()
    }
}
