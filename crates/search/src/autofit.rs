//! Candidate geometry and bolt-circle auto-fit.
//!
//! The bolt-circle radius is not an input: it is the most compact radius
//! consistent with three limits.
//!
//! 1. **Spring clearance**: neighbouring springs on a circle of `N` must keep
//!    a minimum gap, so the chord `2·Rbc·sin(π/N)` must span one spring OD
//!    plus the gap.
//! 2. **Housing**: the outermost spring edge must stay inside `max_od`.
//! 3. **Shaft**: the innermost spring edge must stay outside `min_id`.
//!
//! When the limits leave no room the tuple is infeasible and no candidate is
//! built.

use std::f64::consts::PI;

use coilpack_core::{CandidateInput, Envelope, OptimizationRequest, ParamTuple};

use crate::Config;

/// The feasible interval for the bolt-circle radius, in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoltCircleBounds {
    /// Largest of the clearance and shaft minima.
    pub min: f64,

    /// Housing maximum, or infinity for an open housing.
    pub max: f64,
}

impl BoltCircleBounds {
    /// Returns whether `radius` lies inside the interval.
    #[must_use]
    pub fn contains(&self, radius: f64) -> bool {
        self.min <= radius && radius <= self.max
    }
}

/// Computes the feasible bolt-circle interval for one spring size.
///
/// Returns `None` when the interval is empty.
#[must_use]
pub fn bolt_circle_bounds(
    spring_od: f64,
    pack_count: u32,
    envelope: &Envelope,
    min_spring_gap: f64,
) -> Option<BoltCircleBounds> {
    let n = f64::from(pack_count);
    let min_clearance = (spring_od + min_spring_gap) / (2.0 * (PI / n).sin());
    let max_housing = envelope
        .max_od
        .map_or(f64::INFINITY, |max_od| (max_od - spring_od) / 2.0);
    let min_shaft = envelope
        .min_id
        .map_or(0.0, |min_id| (min_id + spring_od) / 2.0);

    let bounds = BoltCircleBounds {
        min: min_clearance.max(min_shaft),
        max: max_housing,
    };

    (bounds.min <= bounds.max).then_some(bounds)
}

/// Derives the full geometry for one tuple, or `None` if it cannot fit.
///
/// The radius targets the tightest packing plus [`Config::radius_margin`];
/// if that overshoots the housing, the margin is dropped.
#[must_use]
pub fn build_candidate(
    tuple: ParamTuple,
    request: &OptimizationRequest,
    config: &Config,
) -> Option<CandidateInput> {
    let d = tuple.wire_diameter;
    let mean_diameter = tuple.spring_index * d;
    let spring_od = mean_diameter + d;
    let envelope = &request.envelope;

    let bounds = bolt_circle_bounds(
        spring_od,
        tuple.pack_count,
        envelope,
        config.min_spring_gap(),
    )?;

    let preferred = bounds.min + config.radius_margin();
    let radius = if preferred > bounds.max {
        bounds.min
    } else {
        preferred
    };

    let allowance = config.ring_allowance();
    let ring_od = envelope
        .max_od
        .unwrap_or(2.0 * radius + spring_od + allowance);
    let ring_id = envelope
        .min_id
        .unwrap_or_else(|| (2.0 * radius - spring_od - allowance).max(0.0));

    let template = &request.base_template;
    Some(CandidateInput {
        tuple,
        mean_diameter,
        total_coils: tuple.active_coils + 2.0,
        bolt_circle_radius: radius,
        ring_od,
        ring_id,
        free_length: template.free_length,
        work_stroke: request.work_stroke(),
        end_condition: template.end_condition,
        material: template.material,
    })
}
