//! Dependency-pattern matching over one annotated document.
//!
//! Two passes, entity/preposition first:
//!
//! 1. For each entity, the prepositions hanging off the head of the entity's
//!    root yield `(entity, "<head> <prep>", prep child)`.
//! 2. For each verb, subjects on its left and objects on its right yield
//!    `(subject, lemma, object)`, with coordinated subjects and objects
//!    followed through "and" and a copular shortcut for "be".

use layered_annotation::{dep, AnnotatedDocument, PartOfSpeech, Token};

use crate::{DependencyLabels, Triple};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMatcher {
    labels: DependencyLabels,
}

impl DependencyMatcher {
    pub fn new(labels: DependencyLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &DependencyLabels {
        &self.labels
    }

    /// Both passes, concatenated in pass order.
    pub fn extract(&self, document: &AnnotatedDocument) -> Vec<Triple> {
        let mut triples = self.entity_preposition_triples(document);
        triples.extend(self.svo_triples(document));
        triples
    }

    /// `("Apple", "founded in", "Cupertino")` from "Apple was founded in Cupertino".
    pub fn entity_preposition_triples(&self, document: &AnnotatedDocument) -> Vec<Triple> {
        let mut triples = Vec::new();
        for entity in document.entities() {
            let head = match document.entity_root(entity) {
                Some(root) => document.head_of(root.index),
                None => continue,
            };
            let subject = document.entity_text(entity);
            for prep in document.children(head.index).filter(|t| t.has_dep(dep::PREP)) {
                let relation = format!("{} {}", head.text, prep.text);
                for child in document.children(prep.index) {
                    triples.push(Triple::new(subject.clone(), relation.clone(), child.text.clone()));
                }
            }
        }
        triples
    }

    /// Subject-verb-object triples for every `VERB`/`AUX` in document order.
    pub fn svo_triples(&self, document: &AnnotatedDocument) -> Vec<Triple> {
        let mut triples = Vec::new();
        for verb in document.tokens().iter().filter(|t| t.pos.is_verbal()) {
            let subjects = self.subjects(document, verb);

            if verb.lemma == "be" {
                for subject in &subjects {
                    for object in document.rights(verb.index).filter(|t| self.labels.is_copular_object(t)) {
                        triples.push(Triple::new(subject.text.clone(), verb.lemma.clone(), object.text.clone()));
                    }
                }
                continue;
            }

            let objects = self.objects(document, verb);
            let relation = relation_text(document, verb);
            let verb_negated = self.is_negated(document, verb);
            for subject in &subjects {
                for object in &objects {
                    let relation = if verb_negated || self.is_negated(document, object) {
                        format!("!{}", relation)
                    } else {
                        relation.clone()
                    };
                    triples.push(Triple::new(subject.text.clone(), relation, object.text.clone()));
                }
            }

            if subjects.is_empty() {
                triples.extend(self.fallback_triple(document, verb, &objects));
            }
        }
        triples
    }

    /// Subject-labelled left children plus their coordinated conjuncts.
    pub fn subjects<'d>(&self, document: &'d AnnotatedDocument, verb: &Token) -> Vec<&'d Token> {
        let mut subjects: Vec<&Token> = document
            .lefts(verb.index)
            .filter(|t| self.labels.is_subject(t))
            .collect();
        let more = self.conjuncts(document, &subjects, |t| {
            self.labels.is_subject(t) || t.pos == PartOfSpeech::Noun
        });
        subjects.extend(more);
        subjects
    }

    /// Object-labelled right children plus their coordinated conjuncts.
    pub fn objects<'d>(&self, document: &'d AnnotatedDocument, verb: &Token) -> Vec<&'d Token> {
        let mut objects: Vec<&Token> = document
            .rights(verb.index)
            .filter(|t| self.labels.is_object(t))
            .collect();
        let more = self.conjuncts(document, &objects, |t| {
            self.labels.is_object(t) || t.pos == PartOfSpeech::Noun
        });
        objects.extend(more);
        objects
    }

    /// Tokens coordinated with `seeds` through "and", depth first.
    ///
    /// A seed with an "and" among its right children contributes every right
    /// child passing `accept`, and those are expanded in turn. The result is
    /// de-duplicated and never contains a seed.
    pub fn conjuncts<'d>(
        &self,
        document: &'d AnnotatedDocument,
        seeds: &[&'d Token],
        accept: impl Fn(&Token) -> bool,
    ) -> Vec<&'d Token> {
        let mut unique: Vec<&Token> = Vec::new();
        for token in expand_conjuncts(document, seeds, &accept) {
            let seen = seeds.iter().chain(unique.iter()).any(|t| t.index == token.index);
            if !seen {
                unique.push(token);
            }
        }
        unique
    }

    /// Whether any child of `token` is a negation word.
    pub fn is_negated(&self, document: &AnnotatedDocument, token: &Token) -> bool {
        document
            .children(token.index)
            .any(|child| self.labels.is_negation(child))
    }

    /// Subject and object found by position when the verb has no subject child.
    ///
    /// The last subject-labelled token up to the verb is the subject; the
    /// first object-labelled token from the verb on is the object, joined
    /// with its predecessor when that one is a compound.
    fn fallback_triple(
        &self,
        document: &AnnotatedDocument,
        verb: &Token,
        objects: &[&Token],
    ) -> Option<Triple> {
        let tokens = document.tokens();
        let subject = tokens[..=verb.index]
            .iter()
            .filter(|t| self.labels.is_subject(t))
            .last()?;
        if !objects.is_empty() {
            return None;
        }
        let next = document.next_token(verb.index)?;
        if next.has_dep(dep::ROOT) {
            return None;
        }

        let object = tokens[verb.index..]
            .iter()
            .find(|t| self.labels.is_object(t))?;
        let object_text = match object.index.checked_sub(1).map(|i| &tokens[i]) {
            Some(prev) if object.index > verb.index && prev.has_dep(dep::COMPOUND) => {
                format!("{} {}", prev.text, object.text)
            }
            _ => object.text.clone(),
        };

        Some(Triple::new(
            subject.text.clone(),
            relation_text(document, verb),
            object_text,
        ))
    }
}

/// Verb lemma, extended by the next token when that token is a preposition.
fn relation_text(document: &AnnotatedDocument, verb: &Token) -> String {
    match document.next_token(verb.index) {
        Some(next) if next.has_dep(dep::PREP) => format!("{} {}", verb.lemma, next.text),
        _ => verb.lemma.clone(),
    }
}

fn expand_conjuncts<'d>(
    document: &'d AnnotatedDocument,
    seeds: &[&'d Token],
    accept: &dyn Fn(&Token) -> bool,
) -> Vec<&'d Token> {
    let mut found = Vec::new();
    for seed in seeds {
        if !document.rights(seed.index).any(|t| t.lower() == "and") {
            continue;
        }
        let accepted: Vec<&Token> = document.rights(seed.index).filter(|t| accept(t)).collect();
        let deeper = expand_conjuncts(document, &accepted, accept);
        found.extend(accepted);
        found.extend(deeper);
    }
    found
}
