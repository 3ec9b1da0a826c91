//! Tab-completion over the fixed command set.
//!
//! The first Tab press snapshots the registry's completions for the current
//! input and selects the first; repeated presses cycle through that
//! snapshot, wrapping at the end. Any other edit of the input discards the
//! snapshot, so the next Tab re-filters from scratch.

use crate::interpreter::CommandRegistry;

/// Snapshot-based prefix cycling.
#[derive(Debug, Default)]
pub struct Completion {
    candidates: Vec<String>,
    cursor: Option<usize>,
}

impl Completion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the cycle. On the first press for a prefix, the registry's
    /// [`completions`](CommandRegistry::completions) for `input` become the
    /// snapshot and the first is returned; afterwards `input` is ignored and
    /// the snapshot cycles. Returns the replacement input, or `None` when
    /// nothing matched.
    pub fn advance(&mut self, input: &str, registry: &CommandRegistry) -> Option<String> {
        match self.cursor {
            None => {
                let candidates = registry.completions(input);
                if candidates.is_empty() {
                    return None;
                }
                self.candidates = candidates;
                self.cursor = Some(0);
            }
            Some(i) => {
                self.cursor = Some((i + 1) % self.candidates.len());
            }
        }
        self.cursor.map(|i| self.candidates[i].clone())
    }

    /// Discard the snapshot; the next Tab starts a fresh cycle.
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.cursor = None;
    }

    /// Whether a snapshot is being cycled.
    pub fn is_cycling(&self) -> bool {
        self.cursor.is_some()
    }
}
