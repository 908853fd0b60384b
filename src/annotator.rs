use crate::{AnnotatedDocument, AnnotationError};

/// Boundary to the external annotation pipeline.
///
/// Tokenization, tagging, parsing, NER and coreference detection all happen
/// behind this trait. Implementations are expected to be expensive and may
/// block; resolvers call `annotate` once per text they need analyzed.
///
/// Closures work as annotators, which keeps tests free of model loading:
///
/// ```
/// use layered_annotation::{AnnotatedDocument, AnnotationError, Annotator};
///
/// let annotator = |text: &str| -> Result<AnnotatedDocument, AnnotationError> {
///     Err(AnnotationError::Unavailable { message: format!("no model for {:?}", text) })
/// };
/// assert!(annotator.annotate("hello").is_err());
/// ```
pub trait Annotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, AnnotationError>;
}

impl<F> Annotator for F
where
    F: Fn(&str) -> Result<AnnotatedDocument, AnnotationError>,
{
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, AnnotationError> {
        self(text)
    }
}
