//! Expected-failure ledger, kept in `expected-failures.toml`.
//!
//! ```toml
//! [[known]]
//! fixture = "first_person.ron"
//! check = "X3.[0]"
//! reason = "prepositional objects hang off the preposition"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{FixtureReport, SpecError};

/// Checks allowed to fail, grouped by how soon they should pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Limitations of the rule set; not expected to pass soon.
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Expected to pass once a fix lands.
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// One ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture file name, relative to the fixtures directory.
    pub fixture: String,
    /// Check reference (`R0`, `X1`, `X1.[0]`)
    pub check: String,
    #[serde(default)]
    pub reason: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    pub added: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
}

impl FailureEntry {
    pub fn new(fixture: impl Into<String>, check: impl Into<String>) -> Self {
        Self {
            fixture: fixture.into(),
            check: check.into(),
            reason: None,
            added: None,
            issue: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    fn matches(&self, fixture: &str, check: &str) -> bool {
        self.fixture == fixture && self.check == check
    }
}

/// How a failed check is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    Known,
    Pending,
    /// Not in the ledger.
    Regression,
}

impl ExpectedFailures {
    /// Read the ledger. A missing file is an empty ledger.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SpecError::Parse {
            path: path.display().to_string(),
            line: e
                .span()
                .map(|span| content[..span.start].matches('\n').count() + 1)
                .unwrap_or(0),
            message: e.message().to_string(),
        })
    }

    /// Classify a failure of `check` in `fixture`.
    pub fn is_expected(&self, fixture: &str, check: &str) -> FailureState {
        if self.known.iter().any(|e| e.matches(fixture, check)) {
            FailureState::Known
        } else if self.pending.iter().any(|e| e.matches(fixture, check)) {
            FailureState::Pending
        } else {
            FailureState::Regression
        }
    }

    pub fn entry(&self, fixture: &str, check: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .find(|e| e.matches(fixture, check))
    }

    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    /// Entries whose check now passes or no longer exists.
    pub fn stale<'a>(&'a self, reports: &[(String, FixtureReport)]) -> Vec<&'a FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .filter(|entry| {
                let outcome = reports
                    .iter()
                    .filter(|(name, _)| *name == entry.fixture)
                    .find_map(|(_, report)| report.outcome(&entry.check));
                outcome.map_or(true, |outcome| outcome.passed)
            })
            .collect()
    }
}

/// Tally of a harness run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessResult {
    pub total: usize,
    pub passed: usize,
    /// Known and pending failures
    pub expected_failures: usize,
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process exit code: 1 when anything regressed.
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }

    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => self.expected_failures += 1,
            FailureState::Regression => self.regressions += 1,
        }
    }
}
