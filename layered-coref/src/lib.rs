//! Coreference rewriting over [`layered_annotation`] documents.
//!
//! Resolution runs in ordered stages that all write into one
//! [`ReplacementMap`]:
//!
//! 1. [`Stage::Pronouns`]: first-person pronouns, possessives, "who" and "we".
//! 2. [`Stage::SingularChains`]: every mention of a chain of single-token
//!    mentions becomes the chain's longest proper noun (or noun).
//! 3. [`Stage::PluralChains`]: single-token mentions of a chain holding a
//!    multi-token mention become that mention's joined text.
//!
//! A later stage overwrites an earlier one at the same token index. The map
//! is then rendered back into text.

mod chain;
mod config;
mod observer;
mod pronoun;
mod replacement;
mod resolver;

pub use chain::canonical_token;
pub use config::CorefConfig;
pub use observer::{LogObserver, NoopObserver, RecordingObserver, ResolutionObserver};
pub use replacement::{tidy_punctuation, Replacement, ReplacementMap, Rule};
pub use resolver::{CorefResolver, CoreferenceSolver, Resolution, Stage};
