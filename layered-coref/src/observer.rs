//! Hooks that see each substitution as it is written.

use std::sync::{Mutex, PoisonError};

use crate::Replacement;

/// Receives every substitution as the resolver writes it.
pub trait ResolutionObserver: Send + Sync {
    fn on_replacement(&self, replacement: &Replacement);
}

impl<F> ResolutionObserver for F
where
    F: Fn(&Replacement) + Send + Sync,
{
    fn on_replacement(&self, replacement: &Replacement) {
        self(replacement)
    }
}

/// Reports substitutions through the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ResolutionObserver for LogObserver {
    fn on_replacement(&self, replacement: &Replacement) {
        log::debug!(
            "coref: token {} {:?} -> {:?} ({})",
            replacement.index,
            replacement.original,
            replacement.replacement,
            replacement.rule
        );
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResolutionObserver for NoopObserver {
    fn on_replacement(&self, _replacement: &Replacement) {}
}

/// Buffers substitutions for later inspection.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Replacement>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded substitutions, oldest first.
    pub fn events(&self) -> Vec<Replacement> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<Replacement> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl ResolutionObserver for RecordingObserver {
    fn on_replacement(&self, replacement: &Replacement) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(replacement.clone());
    }
}
