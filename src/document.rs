//! The validated annotated document.
//!
//! An [`AnnotatedDocument`] is produced once per text by the external
//! annotator and never mutated afterwards. Construction derives the child
//! lists from head links and rejects structurally broken input, so the
//! navigation helpers below can index freely.

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::ops::Index;

use crate::{AnnotationError, CoreferenceChain, EntitySpan, Mention, PartOfSpeech, RawToken, Token};

/// Unvalidated document as delivered by an annotator or read from a fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub text: String,
    pub tokens: Vec<RawToken>,
    #[serde(default)]
    pub entities: Vec<EntitySpan>,
    #[serde(default)]
    pub chains: Vec<CoreferenceChain>,
}

/// Ordered tokens with dependency tree, entity spans and coreference chains.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct AnnotatedDocument {
    text: String,
    tokens: Vec<Token>,
    entities: Vec<EntitySpan>,
    chains: Vec<CoreferenceChain>,
}

impl AnnotatedDocument {
    /// Validate raw annotations and derive the tree links.
    pub fn from_parts(
        text: impl Into<String>,
        raw_tokens: Vec<RawToken>,
        entities: Vec<EntitySpan>,
        chains: Vec<CoreferenceChain>,
    ) -> Result<Self, AnnotationError> {
        let len = raw_tokens.len();

        for (index, raw) in raw_tokens.iter().enumerate() {
            if raw.head >= len {
                return Err(AnnotationError::HeadOutOfRange {
                    token: index,
                    head: raw.head,
                    len,
                });
            }
        }

        let mut children = vec![Vec::new(); len];
        for (index, raw) in raw_tokens.iter().enumerate() {
            if raw.head != index {
                children[raw.head].push(index);
            }
        }

        let tokens: Vec<Token> = raw_tokens
            .into_iter()
            .zip(children)
            .enumerate()
            .map(|(index, (raw, children))| {
                let lemma = match raw.lemma {
                    Some(lemma) => lemma,
                    None => raw.text.clone(),
                };
                Token {
                    index,
                    lemma,
                    text: raw.text,
                    pos: raw.pos,
                    dep: raw.dep,
                    head: raw.head,
                    children,
                }
            })
            .collect();

        for token in &tokens {
            if depth_in(&tokens, token.index).is_none() {
                return Err(AnnotationError::CyclicHead { token: token.index });
            }
        }

        for entity in &entities {
            if entity.is_empty() || entity.end > len {
                return Err(AnnotationError::EntityOutOfRange {
                    label: entity.label.clone(),
                    start: entity.start,
                    end: entity.end,
                    len,
                });
            }
        }

        for (chain_idx, chain) in chains.iter().enumerate() {
            for mention in chain.mentions() {
                if mention.is_empty() {
                    return Err(AnnotationError::EmptyMention { chain: chain_idx });
                }
                if let Some(&index) = mention.indexes().iter().find(|&&i| i >= len) {
                    return Err(AnnotationError::MentionOutOfRange {
                        chain: chain_idx,
                        index,
                        len,
                    });
                }
            }
        }

        Ok(Self {
            text: text.into(),
            tokens,
            entities,
            chains,
        })
    }

    /// The text this document was annotated from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn entities(&self) -> &[EntitySpan] {
        &self.entities
    }

    pub fn chains(&self) -> &[CoreferenceChain] {
        &self.chains
    }

    /// The syntactic head of a token. A root is its own head.
    pub fn head_of(&self, index: usize) -> &Token {
        &self.tokens[self.tokens[index].head]
    }

    pub fn children(&self, index: usize) -> impl Iterator<Item = &Token> + '_ {
        self.tokens[index].children.iter().map(move |&c| &self.tokens[c])
    }

    /// Dependents positioned before the token.
    pub fn lefts(&self, index: usize) -> impl Iterator<Item = &Token> + '_ {
        self.children(index).filter(move |c| c.index < index)
    }

    /// Dependents positioned after the token.
    pub fn rights(&self, index: usize) -> impl Iterator<Item = &Token> + '_ {
        self.children(index).filter(move |c| c.index > index)
    }

    /// The token immediately following `index`, if any.
    pub fn next_token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index + 1)
    }

    /// Number of head links between a token and its root.
    pub fn depth(&self, index: usize) -> usize {
        depth_in(&self.tokens, index).unwrap_or(0)
    }

    /// The span token closest to the root of the tree.
    ///
    /// Candidates are span tokens whose head lies outside the span (or that
    /// are roots themselves); the shallowest wins, earliest on ties.
    pub fn entity_root(&self, entity: &EntitySpan) -> Option<&Token> {
        let mut best: Option<(&Token, usize)> = None;
        for token in self.tokens.get(entity.range())? {
            if !token.is_root() && entity.contains(token.head) {
                continue;
            }
            let depth = self.depth(token.index);
            if best.map_or(true, |(_, d)| depth < d) {
                best = Some((token, depth));
            }
        }
        best.map(|(token, _)| token)
    }

    /// Surface text of a span, tokens joined by single spaces.
    pub fn entity_text(&self, entity: &EntitySpan) -> String {
        self.tokens
            .get(entity.range())
            .unwrap_or_default()
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Surface text of a mention, tokens joined by single spaces.
    pub fn mention_text(&self, mention: &Mention) -> String {
        mention
            .indexes()
            .iter()
            .filter_map(|&i| self.tokens.get(i))
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Index<usize> for AnnotatedDocument {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl TryFrom<RawDocument> for AnnotatedDocument {
    type Error = AnnotationError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        Self::from_parts(raw.text, raw.tokens, raw.entities, raw.chains)
    }
}

fn depth_in(tokens: &[Token], index: usize) -> Option<usize> {
    let mut current = index;
    for depth in 0..=tokens.len() {
        let head = tokens[current].head;
        if head == current {
            return Some(depth);
        }
        current = head;
    }
    None
}

/// Incremental construction of an [`AnnotatedDocument`], mostly for tests
/// and annotator adapters.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    raw: RawDocument,
}

impl DocumentBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            raw: RawDocument {
                text: text.into(),
                ..RawDocument::default()
            },
        }
    }

    /// Append a token. `head` is an absolute index; pass the token's own
    /// index for a root.
    pub fn token(mut self, text: &str, pos: PartOfSpeech, dep: &str, head: usize) -> Self {
        self.raw.tokens.push(RawToken {
            text: text.to_string(),
            lemma: None,
            pos,
            dep: dep.to_string(),
            head,
        });
        self
    }

    /// Set the lemma of the most recently added token.
    pub fn lemma(mut self, lemma: &str) -> Self {
        if let Some(last) = self.raw.tokens.last_mut() {
            last.lemma = Some(lemma.to_string());
        }
        self
    }

    pub fn entity(mut self, label: &str, start: usize, end: usize) -> Self {
        self.raw.entities.push(EntitySpan::new(label, start, end));
        self
    }

    pub fn chain(mut self, mentions: Vec<Vec<usize>>) -> Self {
        self.raw.chains.push(CoreferenceChain::from(mentions));
        self
    }

    pub fn build(self) -> Result<AnnotatedDocument, AnnotationError> {
        AnnotatedDocument::try_from(self.raw)
    }
}
