//! Update cycle state machine.
//!
//! ```text
//! Idle ──► Triggered ──► Recomputing ──► Rendered ──► Idle
//! ```
//!
//! A cycle starts when a bound control changes, runs the affected handlers
//! and ends once their outputs are committed.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::{HandlerError, HandlerResult};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdatePhase {
    Idle,
    Triggered,
    Recomputing,
    Rendered,
}

impl UpdatePhase {
    /// The only phase reachable from `self`.
    pub fn next(self) -> UpdatePhase {
        match self {
            UpdatePhase::Idle => UpdatePhase::Triggered,
            UpdatePhase::Triggered => UpdatePhase::Recomputing,
            UpdatePhase::Recomputing => UpdatePhase::Rendered,
            UpdatePhase::Rendered => UpdatePhase::Idle,
        }
    }
}

/// Tracks the phase of a single update.
#[derive(Debug, Clone)]
pub struct UpdateCycle {
    phase: UpdatePhase,
    completed: bool,
}

impl Default for UpdateCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateCycle {
    pub fn new() -> Self {
        Self {
            phase: UpdatePhase::Idle,
            completed: false,
        }
    }

    pub fn phase(&self) -> UpdatePhase {
        self.phase
    }

    /// True once the cycle has gone all the way round back to `Idle`.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn advance(&mut self, to: UpdatePhase) -> HandlerResult<()> {
        if self.phase.next() != to {
            return Err(HandlerError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        trace!(from = ?self.phase, to = ?to, "update phase");
        if to == UpdatePhase::Idle {
            self.completed = true;
        }
        self.phase = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut cycle = UpdateCycle::new();
        assert_eq!(cycle.phase(), UpdatePhase::Idle);
        assert!(!cycle.is_complete());

        cycle.advance(UpdatePhase::Triggered).unwrap();
        cycle.advance(UpdatePhase::Recomputing).unwrap();
        cycle.advance(UpdatePhase::Rendered).unwrap();
        cycle.advance(UpdatePhase::Idle).unwrap();

        assert_eq!(cycle.phase(), UpdatePhase::Idle);
        assert!(cycle.is_complete());
    }

    #[test]
    fn test_skipping_a_phase_is_rejected() {
        let mut cycle = UpdateCycle::new();
        let err = cycle.advance(UpdatePhase::Recomputing).unwrap_err();
        assert_eq!(
            err,
            HandlerError::InvalidTransition {
                from: UpdatePhase::Idle,
                to: UpdatePhase::Recomputing,
            }
        );
        assert_eq!(cycle.phase(), UpdatePhase::Idle);
    }

    #[test]
    fn test_next_wraps_to_idle() {
        assert_eq!(UpdatePhase::Rendered.next(), UpdatePhase::Idle);
        assert_eq!(UpdatePhase::Idle.next(), UpdatePhase::Triggered);
    }
}
