use std::{collections::HashMap, fmt};

use coilpack_core::{Bucket, Observer, PhysicalEvaluator};
use coilpack_search::{Action, Event, Rejection};

/// Counts what happened to every examined tuple.
///
/// Never requests an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    examined: usize,
    accepted: HashMap<Bucket, usize>,
    rejected: HashMap<Rejection, usize>,
    failed: usize,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tuples seen so far.
    #[must_use]
    pub fn examined(&self) -> usize {
        self.examined
    }

    /// Accepted candidates that landed in `bucket`.
    #[must_use]
    pub fn accepted(&self, bucket: Bucket) -> usize {
        self.accepted.get(&bucket).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn accepted_total(&self) -> usize {
        self.accepted.values().sum()
    }

    /// Tuples discarded for `reason`.
    #[must_use]
    pub fn rejected(&self, reason: Rejection) -> usize {
        self.rejected.get(&reason).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }

    /// Tuples the physical evaluator could not evaluate.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }
}

impl<P> Observer<Event<'_, P>, Action> for Tally
where
    P: PhysicalEvaluator,
{
    fn observe(&mut self, event: &Event<'_, P>) -> Option<Action> {
        self.examined += 1;
        match event {
            Event::Accepted { candidate } => {
                *self.accepted.entry(candidate.bucket()).or_default() += 1;
            }
            Event::Rejected { reason, .. } => {
                *self.rejected.entry(*reason).or_default() += 1;
            }
            Event::EvaluationFailed { .. } => self.failed += 1,
        }
        None
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "examined {}, accepted {} (lightweight {}, balanced {}, high margin {}), \
             rejected {}, failed {}",
            self.examined,
            self.accepted_total(),
            self.accepted(Bucket::Lightweight),
            self.accepted(Bucket::Balanced),
            self.accepted(Bucket::HighMargin),
            self.rejected_total(),
            self.failed,
        )
    }
}
