//! Reusable observers for coilpack searches.
//!
//! Each type here implements [`Observer`] for the search [`Event`] of any
//! physical evaluator, so it can be passed straight to [`search`]:
//!
//! - [`Tally`] — counts examined tuples, acceptances per bucket, rejections
//!   per reason and evaluator failures
//! - [`Recorder`] — keeps an owned trace of every examined tuple
//! - [`StopAfter`] — ends the search once enough candidates were accepted
//!
//! To combine observers, call them from a closure:
//!
//! ```ignore
//! let mut observer = |event: &Event<'_, _>| -> Option<Action> {
//!     let _: Option<Action> = tally.observe(event);
//!     stop.observe(event)
//! };
//! ```
//!
//! [`Observer`]: coilpack_core::Observer
//! [`Event`]: coilpack_search::Event
//! [`search`]: coilpack_search::search

mod recorder;
mod stop_after;
mod tally;

pub use recorder::{Outcome, Record, Recorder};
pub use stop_after::StopAfter;
pub use tally::Tally;
