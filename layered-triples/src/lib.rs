//! Subject/relation/object triple extraction from dependency-annotated text.
//!
//! ```
//! use layered_annotation::{dep, DocumentBuilder, PartOfSpeech::*};
//! use layered_triples::{DependencyMatcher, Triple};
//!
//! let doc = DocumentBuilder::new("beer is nice")
//!     .token("beer", Noun, dep::NSUBJ, 1)
//!     .token("is", Auxiliary, dep::ROOT, 1)
//!     .lemma("be")
//!     .token("nice", Other, dep::ACOMP, 1)
//!     .build()
//!     .unwrap();
//!
//! let triples = DependencyMatcher::default().extract(&doc);
//! assert_eq!(triples, vec![Triple::new("beer", "be", "nice")]);
//! ```
//!
//! [`TripleExtractor`] wraps the matcher with an [`Annotator`](layered_annotation::Annotator)
//! and an optional coreference pre-pass from `layered-coref`.

mod config;
mod error;
mod extractor;
mod labels;
mod matcher;
mod triple;

pub use config::ExtractorConfig;
pub use error::{ConfigError, ExtractError};
pub use extractor::{TripleExtractor, Triples, TriplesExtractor};
pub use labels::DependencyLabels;
pub use matcher::DependencyMatcher;
pub use triple::Triple;
