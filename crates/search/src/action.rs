/// Actions an observer can take during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop examining tuples and rank the pool gathered so far.
    StopEarly,
}
