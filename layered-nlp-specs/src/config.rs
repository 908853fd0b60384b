//! Pipeline configuration.

/// Which fixture sections the runner checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Check `resolutions` cases.
    pub resolutions: bool,
    /// Check `extractions` cases.
    pub extractions: bool,
}

impl PipelineConfig {
    /// Every section.
    pub fn standard() -> Self {
        Self {
            resolutions: true,
            extractions: true,
        }
    }

    /// Coreference resolution only.
    pub fn resolutions_only() -> Self {
        Self {
            resolutions: true,
            extractions: false,
        }
    }

    /// Triple extraction only.
    pub fn extractions_only() -> Self {
        Self {
            resolutions: false,
            extractions: true,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::standard()
    }
}
