use layered_annotation::AnnotationError;
use thiserror::Error;

/// Errors surfaced while extracting triples.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// One input document could not be annotated; the rest of the batch is unaffected.
    #[error("document {position}: {source}")]
    Document {
        /// Position of the document in the input sequence
        position: usize,
        source: AnnotationError,
    },
}

/// Errors loading an [`ExtractorConfig`](crate::ExtractorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid extractor config: {0}")]
    Parse(#[from] toml::de::Error),
}
