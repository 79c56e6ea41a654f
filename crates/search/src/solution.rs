use coilpack_core::Candidate;

/// Why the search stopped examining tuples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every tuple in the grid was examined.
    Exhausted,

    /// The tuple budget ran out with tuples still unexamined.
    TupleCap,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a spring-pack search.
///
/// An empty candidate list is a valid outcome: nothing in the examined space
/// met every hard constraint.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// Ranked, diversity-preserving shortlist.
    pub candidates: Vec<Candidate>,

    /// Tuples examined, accepted or not.
    pub examined: usize,

    /// Candidates that passed every hard filter, before selection.
    pub pool_size: usize,
}
