use std::collections::VecDeque;
use std::iter::Enumerate;
use std::sync::Arc;

use layered_annotation::{AnnotatedDocument, AnnotationError, Annotator};
use layered_coref::{CorefResolver, ResolutionObserver};

use crate::{DependencyMatcher, ExtractError, ExtractorConfig, Triple};

/// Annotates documents, optionally resolves coreferences, and matches triples.
pub struct TripleExtractor<A> {
    resolver: CorefResolver<A>,
    matcher: DependencyMatcher,
    solve_coref: bool,
    model: String,
}

impl<A> TripleExtractor<A> {
    pub fn new(annotator: A, config: ExtractorConfig) -> Self {
        let ExtractorConfig {
            coref,
            solve_coref,
            model,
            labels,
        } = config;
        Self {
            resolver: CorefResolver::new(annotator, coref),
            matcher: DependencyMatcher::new(labels),
            solve_coref,
            model,
        }
    }

    /// Observe substitutions made by the coreference pre-pass.
    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.resolver = self.resolver.with_observer(observer);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn solve_coref(&self) -> bool {
        self.solve_coref
    }

    pub fn resolver(&self) -> &CorefResolver<A> {
        &self.resolver
    }

    pub fn matcher(&self) -> &DependencyMatcher {
        &self.matcher
    }

    /// Match an already-annotated document. No coreference pass is applied.
    pub fn extract_annotated(&self, document: &AnnotatedDocument) -> Vec<Triple> {
        self.matcher.extract(document)
    }
}

impl<A: Annotator> TripleExtractor<A> {
    /// Build the annotator for `config.model` with `loader`, then the extractor.
    pub fn load<F>(config: ExtractorConfig, loader: F) -> Result<Self, AnnotationError>
    where
        F: FnOnce(&str) -> Result<A, AnnotationError>,
    {
        let annotator = loader(&config.model)?;
        Ok(Self::new(annotator, config))
    }

    /// Triples of one document. Blank text yields none.
    ///
    /// With coreference solving on, the document is resolved first; the
    /// resolved text is annotated again only when it differs from the input.
    pub fn extract_document(&self, text: &str) -> Result<Vec<Triple>, AnnotationError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let annotator = self.resolver.annotator();
        let mut document = annotator.annotate(text)?;
        if self.solve_coref {
            let resolution = self.resolver.resolve_document(&document);
            if resolution.text != text {
                document = annotator.annotate(&resolution.text)?;
            }
        }
        let triples = self.extract_annotated(&document);
        log::trace!("{} triples from {:?}", triples.len(), document.text());
        Ok(triples)
    }

    /// Lazily extract from each document in turn.
    pub fn extract<I>(&self, documents: I) -> Triples<'_, A, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Triples {
            extractor: self,
            documents: documents.into_iter().enumerate(),
            pending: VecDeque::new(),
        }
    }
}

/// Iterator returned by [`TripleExtractor::extract`].
///
/// A document is annotated only once the previous document's triples are
/// drained. A failing document yields one error and iteration continues.
pub struct Triples<'e, A, I> {
    extractor: &'e TripleExtractor<A>,
    documents: Enumerate<I>,
    pending: VecDeque<Triple>,
}

impl<'e, A, I> Iterator for Triples<'e, A, I>
where
    A: Annotator,
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Triple, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(triple) = self.pending.pop_front() {
                return Some(Ok(triple));
            }
            let (position, text) = self.documents.next()?;
            match self.extractor.extract_document(text.as_ref()) {
                Ok(triples) => self.pending.extend(triples),
                Err(source) => return Some(Err(ExtractError::Document { position, source })),
            }
        }
    }
}

/// Host-facing triple extraction contract.
pub trait TriplesExtractor {
    /// Triples of every document that could be processed.
    fn extract_triples(&self, documents: &[&str]) -> Vec<Triple>;
}

impl<A: Annotator> TriplesExtractor for TripleExtractor<A> {
    fn extract_triples(&self, documents: &[&str]) -> Vec<Triple> {
        self.extract(documents)
            .filter_map(|result| match result {
                Ok(triple) => Some(triple),
                Err(err) => {
                    log::warn!("skipping {}", err);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_annotation::{dep, DocumentBuilder, PartOfSpeech::*};
    use layered_coref::{CorefConfig, NoopObserver};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stand-in for a parser model: a fixed set of pre-annotated sentences.
    fn annotate(text: &str) -> Result<AnnotatedDocument, AnnotationError> {
        let builder = match text {
            "beer is nice" => DocumentBuilder::new(text)
                .token("beer", Noun, dep::NSUBJ, 1)
                .token("is", Auxiliary, dep::ROOT, 1)
                .lemma("be")
                .token("nice", Other, dep::ACOMP, 1),
            "I love my baby" => DocumentBuilder::new(text)
                .token("I", Pronoun, dep::NSUBJ, 1)
                .token("love", Verb, dep::ROOT, 1)
                .token("my", Pronoun, dep::POSS, 3)
                .token("baby", Noun, dep::DOBJ, 1),
            "Miro loves Miro's baby" => DocumentBuilder::new(text)
                .token("Miro", ProperNoun, dep::NSUBJ, 1)
                .token("loves", Verb, dep::ROOT, 1)
                .lemma("love")
                .token("Miro", ProperNoun, dep::POSS, 4)
                .token("'s", Other, "case", 2)
                .token("baby", Noun, dep::DOBJ, 1),
            "Apple was founded in Cupertino in the year 1981." => DocumentBuilder::new(text)
                .token("Apple", ProperNoun, dep::NSUBJPASS, 2)
                .token("was", Auxiliary, dep::AUXPASS, 2)
                .lemma("be")
                .token("founded", Verb, dep::ROOT, 2)
                .lemma("found")
                .token("in", Other, dep::PREP, 2)
                .token("Cupertino", ProperNoun, dep::POBJ, 3)
                .token("in", Other, dep::PREP, 2)
                .token("the", Other, dep::DET, 7)
                .token("year", Noun, dep::POBJ, 5)
                .token("1981", Other, "nummod", 7)
                .token(".", Other, dep::PUNCT, 2)
                .entity("ORG", 0, 1)
                .entity("GPE", 4, 5)
                .entity("DATE", 6, 9),
            _ => {
                return Err(AnnotationError::Unavailable {
                    message: format!("unknown text {:?}", text),
                })
            }
        };
        builder.build()
    }

    type Annotate = fn(&str) -> Result<AnnotatedDocument, AnnotationError>;

    fn extractor(config: ExtractorConfig) -> TripleExtractor<Annotate> {
        TripleExtractor::new(annotate as Annotate, config).with_observer(Arc::new(NoopObserver))
    }

    fn miro() -> ExtractorConfig {
        ExtractorConfig::default().with_coref(CorefConfig::speaker("Miro"))
    }

    #[test]
    fn test_copular_document() {
        let triples = extractor(miro()).extract_triples(&["beer is nice"]);
        assert_eq!(triples, vec![Triple::new("beer", "be", "nice")]);
    }

    #[test]
    fn test_entity_pass_first() {
        let triples = extractor(miro())
            .extract_triples(&["Apple was founded in Cupertino in the year 1981."]);
        assert_eq!(
            triples,
            vec![
                Triple::new("Apple", "founded in", "Cupertino"),
                Triple::new("Apple", "founded in", "year"),
            ]
        );
    }

    #[test]
    fn test_coref_pre_pass() {
        let triples = extractor(miro()).extract_triples(&["I love my baby"]);
        assert_eq!(triples, vec![Triple::new("Miro", "love", "baby")]);

        let triples = extractor(miro().with_solve_coref(false)).extract_triples(&["I love my baby"]);
        assert_eq!(triples, vec![Triple::new("I", "love", "baby")]);
    }

    #[test]
    fn test_empty_inputs() {
        let extractor = extractor(miro());
        assert!(extractor.extract_triples(&[]).is_empty());
        assert!(extractor.extract_triples(&["", "  "]).is_empty());
    }

    #[test]
    fn test_failed_document_does_not_stop_batch() {
        let extractor = extractor(miro());
        let results: Vec<_> = extractor
            .extract(vec!["beer is nice", "no such text", "beer is nice"])
            .collect();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Ok(Triple::new("beer", "be", "nice")));
        match &results[1] {
            Err(ExtractError::Document { position, .. }) => assert_eq!(*position, 1),
            other => panic!("expected a document error, got {:?}", other),
        }
        assert_eq!(results[2], Ok(Triple::new("beer", "be", "nice")));

        assert_eq!(
            extractor.extract_triples(&["no such text", "beer is nice"]),
            vec![Triple::new("beer", "be", "nice")]
        );
    }

    #[test]
    fn test_lazy_annotation() {
        let calls = AtomicUsize::new(0);
        let counting = |text: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            annotate(text)
        };
        let extractor = TripleExtractor::new(counting, miro().with_solve_coref(false));

        let mut triples = extractor.extract(["beer is nice", "beer is nice"]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(triples.next().is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(triples.count(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unchanged_text_is_annotated_once() {
        let calls = AtomicUsize::new(0);
        let counting = |text: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            annotate(text)
        };
        let extractor = TripleExtractor::new(counting, miro());

        assert_eq!(
            extractor.extract_document("beer is nice").unwrap(),
            vec![Triple::new("beer", "be", "nice")]
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // resolved text differs, so it is annotated again
        assert_eq!(
            extractor.extract_document("I love my baby").unwrap(),
            vec![Triple::new("Miro", "love", "baby")]
        );
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_load_passes_model() {
        let config = ExtractorConfig {
            model: "en_core_web_sm".to_string(),
            ..miro()
        };
        let extractor = TripleExtractor::load(config, |model| {
            assert_eq!(model, "en_core_web_sm");
            Ok(annotate as Annotate)
        })
        .unwrap();
        assert_eq!(extractor.model(), "en_core_web_sm");

        let err = TripleExtractor::<Annotate>::load(miro(), |model| {
            Err(AnnotationError::Unavailable {
                message: format!("{} is not installed", model),
            })
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExtractorConfig>();
        assert_send_sync::<TripleExtractor<Annotate>>();
    }
}
