//! Tokens and coarse part-of-speech tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse part-of-speech tag (Universal POS subset).
///
/// Only the tags the resolvers distinguish get their own variant; every
/// other tag (`DET`, `ADP`, `PUNCT`, ...) collapses into [`PartOfSpeech::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartOfSpeech {
    /// `NOUN`
    Noun,
    /// `PROPN`
    ProperNoun,
    /// `PRON`
    Pronoun,
    /// `VERB`
    Verb,
    /// `AUX`
    Auxiliary,
    /// Any other tag
    Other,
}

impl PartOfSpeech {
    /// Parse a coarse tag. Unknown tags map to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "NOUN" => Self::Noun,
            "PROPN" => Self::ProperNoun,
            "PRON" => Self::Pronoun,
            "VERB" => Self::Verb,
            "AUX" => Self::Auxiliary,
            _ => Self::Other,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::ProperNoun => "PROPN",
            Self::Pronoun => "PRON",
            Self::Verb => "VERB",
            Self::Auxiliary => "AUX",
            Self::Other => "X",
        }
    }

    /// `NOUN` or `PROPN`.
    pub fn is_nominal(&self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }

    /// `VERB` or `AUX`.
    pub fn is_verbal(&self) -> bool {
        matches!(self, Self::Verb | Self::Auxiliary)
    }
}

impl From<String> for PartOfSpeech {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<PartOfSpeech> for String {
    fn from(pos: PartOfSpeech) -> Self {
        pos.tag().to_string()
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A token as supplied by the annotator, before tree links are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawToken {
    pub text: String,
    /// Base form; the surface text is used when absent.
    #[serde(default)]
    pub lemma: Option<String>,
    pub pos: PartOfSpeech,
    pub dep: String,
    /// Index of the syntactic head. Roots point at themselves.
    pub head: usize,
}

/// A validated token inside an [`AnnotatedDocument`](crate::AnnotatedDocument).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Position in the document (0-based)
    pub index: usize,
    /// Surface text
    pub text: String,
    /// Base form
    pub lemma: String,
    /// Coarse part of speech
    pub pos: PartOfSpeech,
    /// Dependency relation to the head
    pub dep: String,
    /// Head index; equal to `index` for a sentence root
    pub head: usize,
    /// Dependents, ascending by index
    pub children: Vec<usize>,
}

impl Token {
    /// Lowercased surface text.
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn is_root(&self) -> bool {
        self.head == self.index
    }

    pub fn has_dep(&self, label: &str) -> bool {
        self.dep == label
    }
}
