/// A hook called once per search event, able to steer the search.
///
/// A search hands each event to its observer and reads back an optional
/// action: `None` keeps going, `Some(action)` asks for whatever the search
/// defines (for the pack search, stopping early). Counting, tracing and
/// stopping policies are all observers, so none of them widen the search
/// signature.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` is the observer
/// that ignores every event.
pub trait Observer<E, A> {
    /// Handles one event, optionally returning an action for the search.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
