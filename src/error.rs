//! Error types for annotated documents.

use thiserror::Error;

/// Structural problems in an annotation, or a failing annotator.
///
/// Every variant is fatal for the document it was raised on only;
/// callers skip the document and carry on with the rest of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// A token's head points outside the document.
    #[error("token {token} has head {head}, but the document has {len} tokens")]
    HeadOutOfRange { token: usize, head: usize, len: usize },

    /// Following head links from a token never reaches a root.
    #[error("token {token} is its own ancestor")]
    CyclicHead { token: usize },

    /// An entity span is empty or ends past the last token.
    #[error("entity {label} spans {start}..{end}, but the document has {len} tokens")]
    EntityOutOfRange {
        label: String,
        start: usize,
        end: usize,
        len: usize,
    },

    /// A coreference mention has no tokens.
    #[error("chain {chain} contains an empty mention")]
    EmptyMention { chain: usize },

    /// A coreference mention references a token that does not exist.
    #[error("chain {chain} references token {index}, but the document has {len} tokens")]
    MentionOutOfRange { chain: usize, index: usize, len: usize },

    /// The external annotator could not produce a document.
    #[error("annotator unavailable: {message}")]
    Unavailable { message: String },
}
