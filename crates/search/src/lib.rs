//! Bounded design-space search for multi-spring packs.
//!
//! # Algorithm
//!
//! A spring pack is `N` identical helical springs on a bolt circle between two
//! rings. The search walks a discretized grid of wire diameter `d`, active
//! coils `Na`, pack count `N` and spring index `C`, and for every tuple:
//!
//! 1. Derives the geometry and auto-fits the most compact bolt circle that
//!    clears neighbouring springs, the housing and the shaft.
//! 2. Calls the [`PhysicalEvaluator`] for stiffness, loads and stresses.
//! 3. Calls the [`AuditEvaluator`] for a safety verdict.
//! 4. Applies the hard filters: audit status, safety factor, solid height.
//! 5. Scores survivors and classifies them into a [`Bucket`].
//!
//! After at most [`Config::max_tuples`] tuples the pool is ranked by composite
//! score and reduced to a shortlist that keeps every bucket represented.
//!
//! Wire diameters come from a catalog restricted to a band around the
//! template's diameter; see [`practical_series`].
//!
//! # Observer Events
//!
//! The search emits one [`Event`] per examined tuple:
//!
//! - [`Event::Accepted`] — the candidate joined the pool
//! - [`Event::Rejected`] — the tuple was infeasible or failed a hard filter
//! - [`Event::EvaluationFailed`] — the physical evaluator returned an error
//!
//! Observers can return [`Action::StopEarly`] to stop examining tuples; the
//! pool gathered so far is still ranked and returned.
//!
//! [`Bucket`]: coilpack_core::Bucket

mod action;
mod config;
mod driver;
mod error;
mod event;
mod filter;
mod solution;

pub mod autofit;
pub mod grid;
pub mod score;
pub mod select;
pub mod wire_series;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use filter::Rejection;
pub use solution::{Solution, Status};

use coilpack_core::{AuditEvaluator, Observer, OptimizationRequest, PhysicalEvaluator};

/// Searches the design space described by `request`.
///
/// The observer receives an [`Event`] for every examined tuple.
/// See the [module docs](self) for the order of operations and observer
/// actions.
///
/// Infeasible tuples, evaluator failures and filter rejections never abort
/// the search. A run in which nothing survives returns an empty shortlist.
///
/// # Errors
///
/// Returns [`Error::Request`] if the request fails validation.
pub fn search<P, A, Obs>(
    request: &OptimizationRequest,
    physical: &P,
    audit: &A,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    P: PhysicalEvaluator,
    A: AuditEvaluator,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    driver::drive(request, physical, audit, config, observer)
}

/// Searches the design space without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::Request`] if the request fails validation.
pub fn search_unobserved<P, A>(
    request: &OptimizationRequest,
    physical: &P,
    audit: &A,
    config: &Config,
) -> Result<Solution, Error>
where
    P: PhysicalEvaluator,
    A: AuditEvaluator,
{
    search(request, physical, audit, config, &mut ())
}
