//! Dependency labels referenced by the resolvers.
//!
//! Labels follow the ClearNLP-style scheme emitted by common English
//! dependency parsers. Labels are plain strings on [`Token`](crate::Token),
//! so parsers with other schemes still load; only these names carry
//! meaning for the built-in rules.

pub const ROOT: &str = "ROOT";

pub const NSUBJ: &str = "nsubj";
pub const NSUBJPASS: &str = "nsubjpass";
pub const CSUBJ: &str = "csubj";
pub const CSUBJPASS: &str = "csubjpass";
pub const AGENT: &str = "agent";
pub const EXPL: &str = "expl";

pub const DOBJ: &str = "dobj";
pub const DATIVE: &str = "dative";
pub const ATTR: &str = "attr";
pub const OPRD: &str = "oprd";
pub const POBJ: &str = "pobj";
pub const ACOMP: &str = "acomp";

pub const PREP: &str = "prep";
pub const COMPOUND: &str = "compound";
pub const CONJ: &str = "conj";
pub const CC: &str = "cc";
pub const NEG: &str = "neg";
pub const DET: &str = "det";
pub const AUX: &str = "aux";
pub const AUXPASS: &str = "auxpass";
pub const POSS: &str = "poss";
pub const PUNCT: &str = "punct";
