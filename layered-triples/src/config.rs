//! Extractor configuration, loadable from TOML.
//!
//! ```toml
//! solve_coref = true
//! model = "en_core_web_trf"
//!
//! [coref]
//! first_person_token = "Miro"
//!
//! [labels]
//! negations = ["no", "not", "n't", "never", "none", "nothing"]
//! ```

use std::fs;
use std::path::Path;

use layered_coref::CorefConfig;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, DependencyLabels};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Settings for the coreference pre-pass
    pub coref: CorefConfig,
    /// Resolve coreferences before extracting
    pub solve_coref: bool,
    /// Passed through to the annotator factory; never interpreted here.
    pub model: String,
    pub labels: DependencyLabels,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            coref: CorefConfig::default(),
            solve_coref: true,
            model: "en_core_web_trf".to_string(),
            labels: DependencyLabels::default(),
        }
    }
}

impl ExtractorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_coref(mut self, coref: CorefConfig) -> Self {
        self.coref = coref;
        self
    }

    pub fn with_solve_coref(mut self, solve_coref: bool) -> Self {
        self.solve_coref = solve_coref;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert!(config.solve_coref);
        assert_eq!(config.model, "en_core_web_trf");
        assert_eq!(config.coref.first_person_token, "SPEAKER");
        assert_eq!(config.coref.join_token, " and ");
        assert_eq!(&config.labels, DependencyLabels::standard());
    }

    #[test]
    fn test_partial_toml() {
        let config = ExtractorConfig::from_toml_str(
            r#"
            solve_coref = false

            [coref]
            first_person_token = "Miro"

            [labels]
            negations = ["not", "nothing"]
            "#,
        )
        .unwrap();

        assert!(!config.solve_coref);
        assert_eq!(config.model, "en_core_web_trf");
        assert_eq!(config.coref.first_person_token, "Miro");
        assert_eq!(config.coref.join_token, " and ");
        assert!(config.labels.negations.contains("nothing"));
        assert!(!config.labels.negations.contains("never"));
        assert_eq!(config.labels.subjects, DependencyLabels::standard().subjects);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model = \"en_core_web_sm\"").unwrap();

        let config = ExtractorConfig::load(file.path()).unwrap();
        assert_eq!(config.model, "en_core_web_sm");
        assert!(config.solve_coref);
    }

    #[test]
    fn test_errors() {
        let err = ExtractorConfig::from_toml_str("solve_coref = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let dir = tempfile::tempdir().unwrap();
        let err = ExtractorConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read "));
    }
}
