//! The index-to-replacement map built during one resolution.
//!
//! Writes are last-wins per token index. Every write is also appended to an
//! ordered log so callers can see which rule produced a substitution and
//! which later rule overrode it.

use std::collections::BTreeMap;
use std::fmt;

use layered_annotation::AnnotatedDocument;

use crate::observer::ResolutionObserver;

/// The rule that produced a substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// "I" / "me" -> first-person token
    FirstPerson,
    /// Verb after "I" agrees with the third-person replacement ("have" -> "has")
    VerbAgreement,
    /// "my" / "mine" -> first-person token + `'s`
    Possessive,
    /// "who" -> the closest preceding proper noun
    RelativePronoun,
    /// "we" -> list of preceding nominals
    PluralWe,
    /// Mention of a single-token chain -> the chain's canonical noun
    ChainCanonical,
    /// Single-token mention of a plural chain -> the joined plural mention
    PluralChain,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::FirstPerson => "first_person",
            Rule::VerbAgreement => "verb_agreement",
            Rule::Possessive => "possessive",
            Rule::RelativePronoun => "relative_pronoun",
            Rule::PluralWe => "plural_we",
            Rule::ChainCanonical => "chain_canonical",
            Rule::PluralChain => "plural_chain",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One write into the [`ReplacementMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Token index being rewritten
    pub index: usize,
    /// The token's surface text
    pub original: String,
    /// Text rendered in place of the token
    pub replacement: String,
    pub rule: Rule,
}

/// Last-write-wins map from token index to replacement text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    current: BTreeMap<usize, String>,
    log: Vec<Replacement>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a write, returning the replacement it overrides.
    pub fn insert(&mut self, replacement: Replacement) -> Option<String> {
        let previous = self
            .current
            .insert(replacement.index, replacement.replacement.clone());
        self.log.push(replacement);
        previous
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.current.get(&index).map(String::as_str)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.current.contains_key(&index)
    }

    /// Number of rewritten tokens.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Current replacements in token order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.current.iter().map(|(&i, s)| (i, s.as_str()))
    }

    /// Every write in the order it happened, overridden ones included.
    pub fn log(&self) -> &[Replacement] {
        &self.log
    }

    /// The surviving write for each rewritten index, in token order.
    pub fn final_replacements(&self) -> Vec<&Replacement> {
        let mut latest: BTreeMap<usize, &Replacement> = BTreeMap::new();
        for replacement in &self.log {
            latest.insert(replacement.index, replacement);
        }
        latest.into_values().collect()
    }

    /// The replacement for `index`, or the token's own surface text.
    pub fn resolved_text<'a>(&'a self, document: &'a AnnotatedDocument, index: usize) -> &'a str {
        self.get(index).unwrap_or(&document[index].text)
    }

    /// Substitute replacements into the token sequence and join with spaces.
    pub fn render(&self, document: &AnnotatedDocument) -> String {
        let joined = document
            .tokens()
            .iter()
            .map(|token| self.resolved_text(document, token.index))
            .collect::<Vec<_>>()
            .join(" ");
        tidy_punctuation(&joined)
    }
}

/// Undo the whitespace that token joining puts before commas and periods.
pub fn tidy_punctuation(text: &str) -> String {
    text.replace(" , ", ", ").replace(" .", ".")
}

/// Writes into a [`ReplacementMap`] for one document, notifying the observer.
pub(crate) struct MapWriter<'a> {
    document: &'a AnnotatedDocument,
    observer: &'a dyn ResolutionObserver,
    map: ReplacementMap,
}

impl<'a> MapWriter<'a> {
    pub(crate) fn new(document: &'a AnnotatedDocument, observer: &'a dyn ResolutionObserver) -> Self {
        Self {
            document,
            observer,
            map: ReplacementMap::new(),
        }
    }

    pub(crate) fn document(&self) -> &'a AnnotatedDocument {
        self.document
    }

    pub(crate) fn map(&self) -> &ReplacementMap {
        &self.map
    }

    pub(crate) fn write(&mut self, index: usize, replacement: String, rule: Rule) {
        let replacement = Replacement {
            index,
            original: self.document[index].text.clone(),
            replacement,
            rule,
        };
        self.observer.on_replacement(&replacement);
        self.map.insert(replacement);
    }

    pub(crate) fn finish(self) -> ReplacementMap {
        self.map
    }
}
