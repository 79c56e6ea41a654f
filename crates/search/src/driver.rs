use std::ops::ControlFlow;

use coilpack_core::{
    AuditEvaluator, Candidate, CandidateInput, Observer, OptimizationRequest, ParamTuple,
    PhysicalEvaluator,
};

use crate::{
    Action, Config, Error, Event, Rejection, Solution, Status,
    autofit::build_candidate,
    filter,
    grid::Grid,
    score::score,
    select::select_diverse,
    wire_series::{DEFAULT_WIRE_SERIES, practical_series},
};

/// Core search implementation.
///
/// Walks the grid under the tuple budget, folding accepted candidates into
/// the pool, then hands the pool to the diversity selector.
pub(crate) fn drive<P, A, Obs>(
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
    request.validate()?;

    let constraints = &request.constraints;
    let catalog = constraints
        .wire_series
        .as_deref()
        .unwrap_or(DEFAULT_WIRE_SERIES);
    let wires = practical_series(catalog, request.base_template.wire_diameter);
    let grid = Grid::new(wires, constraints);

    let mut tuples = grid.tuples();
    let mut examined = 0;
    let flow = tuples
        .by_ref()
        .take(config.max_tuples())
        .inspect(|_| examined += 1)
        .try_fold(Vec::new(), |mut pool, tuple| {
            let outcome = assess(tuple, request, physical, audit, config);
            let action = match &outcome {
                Outcome::Accepted(candidate) => {
                    observer.observe(&Event::Accepted { candidate })
                }
                Outcome::Rejected(reason) => observer.observe(&Event::Rejected {
                    tuple,
                    reason: *reason,
                }),
                Outcome::Failed { input, error } => {
                    observer.observe(&Event::EvaluationFailed { input, error })
                }
            };

            if let Outcome::Accepted(candidate) = outcome {
                pool.push(candidate);
            }

            match action {
                Some(Action::StopEarly) => ControlFlow::Break(pool),
                None => ControlFlow::Continue(pool),
            }
        });

    let (pool, status) = match flow {
        ControlFlow::Break(pool) => (pool, Status::StoppedByObserver),
        ControlFlow::Continue(pool) if tuples.next().is_some() => (pool, Status::TupleCap),
        ControlFlow::Continue(pool) => (pool, Status::Exhausted),
    };

    let pool_size = pool.len();
    let candidates = select_diverse(pool, constraints.max_candidates);

    Ok(Solution {
        status,
        candidates,
        examined,
        pool_size,
    })
}

enum Outcome<E> {
    Accepted(Candidate),
    Rejected(Rejection),
    Failed { input: CandidateInput, error: E },
}

/// Runs one tuple through geometry, evaluation, audit, filters and scoring.
fn assess<P, A>(
    tuple: ParamTuple,
    request: &OptimizationRequest,
    physical: &P,
    audit: &A,
    config: &Config,
) -> Outcome<P::Error>
where
    P: PhysicalEvaluator,
    A: AuditEvaluator,
{
    let Some(input) = build_candidate(tuple, request, config) else {
        return Outcome::Rejected(Rejection::Infeasible);
    };

    let result = match physical.evaluate(&input) {
        Ok(result) => result,
        Err(error) => return Outcome::Failed { input, error },
    };

    let verdict = audit.audit(&input, &result);
    if let Err(reason) = filter::check(request, &result, &verdict) {
        return Outcome::Rejected(reason);
    }

    let score = score(request, &input, &result, &verdict);
    Outcome::Accepted(Candidate {
        input,
        physical: result,
        audit: verdict,
        score,
    })
}
