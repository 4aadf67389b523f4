/// Phases of the simulated newsletter submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// Accepting input; the submit control shows its original label.
    #[default]
    Idle,
    /// Submission in progress; control disabled, "in progress" label shown.
    Joining,
    /// Success label shown; control still disabled.
    Confirmed,
}

/// Re-entrancy-guarded driver for the submit choreography.
///
/// The page schedules the two fixed delays with one-shot timers; this
/// machine owns which transitions those timers are allowed to make, so a
/// second submit (or a stale timer) can never stack a parallel sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitSequence {
    phase: SubmitPhase,
}

impl SubmitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SubmitPhase::Idle
    }

    /// Starts a submission. Returns false (and changes nothing) unless
    /// idle, which is what swallows re-entrant submits.
    pub fn begin(&mut self) -> bool {
        if self.phase != SubmitPhase::Idle {
            return false;
        }
        self.phase = SubmitPhase::Joining;
        true
    }

    /// Moves to the confirmation label. Only valid from `Joining`, so a
    /// timer that outlived a cancelled sequence is a no-op.
    pub fn confirm(&mut self) -> bool {
        if self.phase != SubmitPhase::Joining {
            return false;
        }
        self.phase = SubmitPhase::Confirmed;
        true
    }

    /// Restores the idle state after the confirmation dwell.
    pub fn finish(&mut self) -> bool {
        if self.phase != SubmitPhase::Confirmed {
            return false;
        }
        self.phase = SubmitPhase::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_round_trip() {
        let mut seq = SubmitSequence::new();
        assert!(seq.begin());
        assert_eq!(seq.phase(), SubmitPhase::Joining);
        assert!(seq.confirm());
        assert_eq!(seq.phase(), SubmitPhase::Confirmed);
        assert!(seq.finish());
        assert!(seq.is_idle());
    }

    #[test]
    fn test_reentrant_begin_is_rejected() {
        let mut seq = SubmitSequence::new();
        assert!(seq.begin());
        // second submit inside the pending window must not restart anything
        assert!(!seq.begin());
        assert_eq!(seq.phase(), SubmitPhase::Joining);

        assert!(seq.confirm());
        assert!(!seq.begin());
        assert_eq!(seq.phase(), SubmitPhase::Confirmed);
    }

    #[test]
    fn test_out_of_order_timers_are_ignored() {
        let mut seq = SubmitSequence::new();
        assert!(!seq.confirm());
        assert!(!seq.finish());
        assert!(seq.is_idle());

        assert!(seq.begin());
        assert!(!seq.finish()); // finish before confirm
        assert_eq!(seq.phase(), SubmitPhase::Joining);
    }

    #[test]
    fn test_sequence_is_restartable_after_finish() {
        let mut seq = SubmitSequence::new();
        assert!(seq.begin());
        assert!(seq.confirm());
        assert!(seq.finish());
        assert!(seq.begin());
        assert_eq!(seq.phase(), SubmitPhase::Joining);
    }
}
