//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// Settings fixed at resolver construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorefConfig {
    /// Replaces first-person pronouns ("I", "me"); "my"/"mine" get `'s` appended.
    pub first_person_token: String,
    /// Separator placed before the last item of a plural antecedent list.
    pub join_token: String,
}

impl Default for CorefConfig {
    fn default() -> Self {
        Self {
            first_person_token: "SPEAKER".to_string(),
            join_token: " and ".to_string(),
        }
    }
}

impl CorefConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config speaking as `first_person_token`.
    pub fn speaker(first_person_token: impl Into<String>) -> Self {
        Self {
            first_person_token: first_person_token.into(),
            ..Self::default()
        }
    }

    pub fn with_join_token(mut self, join_token: impl Into<String>) -> Self {
        self.join_token = join_token.into();
        self
    }

    pub(crate) fn possessive(&self) -> String {
        format!("{}'s", self.first_person_token)
    }
}
