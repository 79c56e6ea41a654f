use coilpack_core::{Candidate, CandidateInput, ParamTuple, PhysicalEvaluator};

use crate::Rejection;

/// Events emitted by the search, one per examined tuple.
pub enum Event<'a, P>
where
    P: PhysicalEvaluator,
{
    /// The tuple passed every hard filter and joined the pool.
    Accepted {
        /// The scored candidate.
        candidate: &'a Candidate,
    },

    /// The tuple was discarded.
    Rejected {
        /// The discarded tuple.
        tuple: ParamTuple,

        /// The first check it failed.
        reason: Rejection,
    },

    /// The physical evaluator could not evaluate the candidate.
    EvaluationFailed {
        /// The geometry that was submitted.
        input: &'a CandidateInput,

        /// The evaluator error.
        error: &'a P::Error,
    },
}

impl<P> Event<'_, P>
where
    P: PhysicalEvaluator,
{
    /// Returns the tuple this event is about.
    #[must_use]
    pub fn tuple(&self) -> ParamTuple {
        match self {
            Self::Accepted { candidate } => candidate.input.tuple,
            Self::Rejected { tuple, .. } => *tuple,
            Self::EvaluationFailed { input, .. } => input.tuple,
        }
    }

    /// Returns `true` if the tuple joined the pool.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
