//! Coreference chains as produced by the upstream annotator.
//!
//! Chains are read-only input. A [`Mention`] lists the token indices that
//! stand for the entity in one place; coordinated mentions ("He and his
//! wife") list the head token of each conjunct and are called plural.

use serde::{Deserialize, Serialize};

/// One occurrence of a referring expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mention(Vec<usize>);

impl Mention {
    pub fn new(indexes: Vec<usize>) -> Self {
        Self(indexes)
    }

    pub fn indexes(&self) -> &[usize] {
        &self.0
    }

    /// First token index of the mention.
    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for multi-token (coordinated) mentions.
    pub fn is_plural(&self) -> bool {
        self.0.len() > 1
    }
}

impl From<Vec<usize>> for Mention {
    fn from(indexes: Vec<usize>) -> Self {
        Self(indexes)
    }
}

/// A set of mentions referring to the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoreferenceChain {
    mentions: Vec<Mention>,
}

impl CoreferenceChain {
    pub fn new(mentions: Vec<Mention>) -> Self {
        Self { mentions }
    }

    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    pub fn has_plural_mention(&self) -> bool {
        self.mentions.iter().any(Mention::is_plural)
    }

    /// The mention with the most tokens; the earliest one wins ties.
    pub fn longest_mention(&self) -> Option<&Mention> {
        let mut longest: Option<&Mention> = None;
        for mention in &self.mentions {
            if longest.map_or(true, |best| mention.len() > best.len()) {
                longest = Some(mention);
            }
        }
        longest
    }
}

impl From<Vec<Vec<usize>>> for CoreferenceChain {
    fn from(mentions: Vec<Vec<usize>>) -> Self {
        Self::new(mentions.into_iter().map(Mention::from).collect())
    }
}
