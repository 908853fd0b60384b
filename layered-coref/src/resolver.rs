//! Staged coreference resolution over one document.

use std::fmt;
use std::sync::Arc;

use layered_annotation::{AnnotatedDocument, AnnotationError, Annotator, DocumentDisplay};

use crate::replacement::MapWriter;
use crate::{chain, pronoun, CorefConfig, LogObserver, ReplacementMap, ResolutionObserver};

/// One step of the resolution pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Rule-based pronoun and possessive rewriting
    Pronouns,
    /// Canonical noun for chains of single-token mentions
    SingularChains,
    /// Joined longest mention for chains with a multi-token mention
    PluralChains,
}

impl Stage {
    /// Order used by [`CorefResolver::resolve_document`]. Later stages
    /// overwrite earlier ones at the same token index.
    pub const ORDER: [Stage; 3] = [Stage::Pronouns, Stage::SingularChains, Stage::PluralChains];
}

/// Outcome of resolving one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Rendered text
    pub text: String,
    pub replacements: ReplacementMap,
}

impl Resolution {
    /// Underline each surviving replacement as `replacement [rule]`.
    pub fn display<'a>(&self, document: &'a AnnotatedDocument) -> DocumentDisplay<'a> {
        let mut display = DocumentDisplay::new(document);
        for replacement in self.replacements.final_replacements() {
            display.include_span(
                replacement.index,
                replacement.index,
                format!("{} [{}]", replacement.replacement, replacement.rule),
            );
        }
        display
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Rewrites referring expressions into their referents.
///
/// ```
/// use layered_annotation::{dep, AnnotationError, DocumentBuilder, PartOfSpeech::*};
/// use layered_coref::{CorefConfig, CorefResolver};
///
/// let annotator = |text: &str| {
///     DocumentBuilder::new(text)
///         .token("I", Pronoun, dep::NSUBJ, 1)
///         .token("smile", Verb, dep::ROOT, 1)
///         .build()
/// };
/// let resolver = CorefResolver::new(annotator, CorefConfig::speaker("Miro"));
/// assert_eq!(resolver.resolve("I smile")?, "Miro smiles");
/// # Ok::<(), AnnotationError>(())
/// ```
pub struct CorefResolver<A> {
    annotator: A,
    config: CorefConfig,
    observer: Arc<dyn ResolutionObserver>,
}

impl<A> CorefResolver<A> {
    pub fn new(annotator: A, config: CorefConfig) -> Self {
        Self {
            annotator,
            config,
            observer: Arc::new(LogObserver),
        }
    }

    /// Replace the default [`LogObserver`].
    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &CorefConfig {
        &self.config
    }

    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    /// Resolve an already-annotated document.
    pub fn resolve_document(&self, document: &AnnotatedDocument) -> Resolution {
        self.resolve_stages(document, &Stage::ORDER)
    }

    /// Resolve with an explicit stage sequence.
    pub fn resolve_stages(&self, document: &AnnotatedDocument, stages: &[Stage]) -> Resolution {
        let mut writer = MapWriter::new(document, self.observer.as_ref());
        for stage in stages {
            match stage {
                Stage::Pronouns => pronoun::resolve_pronouns(&mut writer, &self.config),
                Stage::SingularChains => chain::canonicalize_chains(&mut writer),
                Stage::PluralChains => chain::join_plural_chains(&mut writer, &self.config),
            }
        }
        let replacements = writer.finish();
        Resolution {
            text: replacements.render(document),
            replacements,
        }
    }
}

impl<A: Annotator> CorefResolver<A> {
    /// Annotate and resolve `text`. Blank input comes back unchanged.
    pub fn resolve(&self, text: &str) -> Result<String, AnnotationError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }
        let document = self.annotator.annotate(text)?;
        Ok(self.resolve_document(&document).text)
    }
}

/// Host-facing coreference contract.
pub trait CoreferenceSolver {
    fn solve_corefs(&self, text: &str) -> Result<String, AnnotationError>;
}

impl<A: Annotator> CoreferenceSolver for CorefResolver<A> {
    fn solve_corefs(&self, text: &str) -> Result<String, AnnotationError> {
        self.resolve(text)
    }
}
