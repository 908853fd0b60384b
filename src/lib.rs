#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Annotated token documents for layered-nlp.
//!
//! This crate is the read-only view over the output of an upstream
//! linguistic annotator (tokenizer, POS tagger, dependency parser, NER and
//! coreference detection). Resolvers in `layered-coref` and
//! `layered-triples` consume an [`AnnotatedDocument`]; they never build the
//! annotations themselves.
//!
//! ## Core Types
//!
//! - [`Token`] - surface text, lemma, coarse POS, dependency label and tree links
//! - [`EntitySpan`] - a contiguous named-entity run
//! - [`Mention`] / [`CoreferenceChain`] - coreference clusters
//! - [`AnnotatedDocument`] - validated container of all of the above
//! - [`Annotator`] - the boundary to the external annotation pipeline
//!
//! ## Example
//!
//! ```
//! use layered_annotation::{dep, DocumentBuilder, PartOfSpeech};
//!
//! let doc = DocumentBuilder::new("beer is nice")
//!     .token("beer", PartOfSpeech::Noun, dep::NSUBJ, 1)
//!     .token("is", PartOfSpeech::Auxiliary, dep::ROOT, 1)
//!     .lemma("be")
//!     .token("nice", PartOfSpeech::Other, dep::ACOMP, 1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(doc.len(), 3);
//! assert_eq!(doc.rights(1).map(|t| t.text.as_str()).collect::<Vec<_>>(), vec!["nice"]);
//! ```

mod annotator;
mod chain;
pub mod dep;
mod display;
mod document;
mod entity;
mod error;
mod token;

pub use annotator::Annotator;
pub use chain::{CoreferenceChain, Mention};
pub use display::DocumentDisplay;
pub use document::{AnnotatedDocument, DocumentBuilder, RawDocument};
pub use entity::EntitySpan;
pub use error::AnnotationError;
pub use token::{PartOfSpeech, RawToken, Token};
