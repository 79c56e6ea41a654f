use coilpack_core::{Observer, PhysicalEvaluator};
use coilpack_search::{Action, Event};

/// Stops the search once `limit` candidates have been accepted.
///
/// Useful when any handful of feasible designs will do and the full tuple
/// budget is not worth spending. A limit of zero stops at the first event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    limit: usize,
    accepted: usize,
}

impl StopAfter {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, accepted: 0 }
    }

    /// Candidates accepted so far.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

impl<P> Observer<Event<'_, P>, Action> for StopAfter
where
    P: PhysicalEvaluator,
{
    fn observe(&mut self, event: &Event<'_, P>) -> Option<Action> {
        if event.is_accepted() {
            self.accepted += 1;
        }
        (self.accepted >= self.limit).then_some(Action::StopEarly)
    }
}
