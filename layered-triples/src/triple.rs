use std::fmt;

use serde::{Deserialize, Serialize};

/// A (subject, relation, object) fact.
///
/// Serializes as a 3-element sequence: `["Apple", "founded in", "Cupertino"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct Triple {
    pub subject: String,
    /// Verb lemma, optionally followed by a preposition; prefixed with `!` when negated
    pub relation: String,
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            relation: relation.into(),
            object: object.into(),
        }
    }

    pub fn is_negated(&self) -> bool {
        self.relation.starts_with('!')
    }
}

impl From<(String, String, String)> for Triple {
    fn from((subject, relation, object): (String, String, String)) -> Self {
        Self {
            subject,
            relation,
            object,
        }
    }
}

impl From<Triple> for (String, String, String) {
    fn from(triple: Triple) -> Self {
        (triple.subject, triple.relation, triple.object)
    }
}

impl<'a> From<(&'a str, &'a str, &'a str)> for Triple {
    fn from((subject, relation, object): (&'a str, &'a str, &'a str)) -> Self {
        Self::new(subject, relation, object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.relation, self.object)
    }
}
