//! Composite scoring and bucket classification.
//!
//! The composite score is lower-is-better:
//!
//! ```text
//! composite = 2.0 · target_error_pct + 1.0 · mass_proxy / 1e6 + 0.2 / max(sf, ε)
//! ```
//!
//! Target accuracy dominates, material comes second, and a thin safety
//! margin costs a little. The mass proxy `N·d²·Dm·max(Na, 1)` is a relative
//! volume signal, not a mass, and is kept in that form so rankings stay
//! comparable between runs.

use coilpack_core::{
    AuditResult, Bucket, CandidateInput, OptimizationRequest, PhysicalResult, Score, Target,
};

pub const TARGET_WEIGHT: f64 = 2.0;
pub const MASS_WEIGHT: f64 = 1.0;
pub const MASS_SCALE: f64 = 1e6;
pub const MARGIN_WEIGHT: f64 = 0.2;

/// Floor for the safety factor in the margin term.
const SAFETY_EPSILON: f64 = 1e-9;

/// Safety factor at or above which a design counts as high margin.
pub const HIGH_MARGIN_SAFETY_FACTOR: f64 = 1.6;

/// Mass proxy at or below which a design can count as lightweight.
pub const LIGHTWEIGHT_MASS_PROXY: f64 = 1.2e6;

/// Target error at or below which a design can count as lightweight.
pub const LIGHTWEIGHT_TARGET_ERROR_PCT: f64 = 8.0;

/// Relative miss of the achieved pack stiffness on the target, in percent.
///
/// A load target is compared against `k · stroke`.
#[must_use]
pub fn target_error_pct(target: &Target, pack_stiffness: f64) -> f64 {
    let (achieved, required) = match *target {
        Target::Stiffness { k_req, .. } => (pack_stiffness, k_req),
        Target::LoadAtStroke { p_req, stroke, .. } => (pack_stiffness * stroke, p_req),
    };
    (achieved - required).abs() / required * 100.0
}

#[must_use]
pub fn mass_proxy(input: &CandidateInput) -> f64 {
    let d = input.wire_diameter();
    f64::from(input.pack_count()) * d * d * input.mean_diameter * input.active_coils().max(1.0)
}

#[must_use]
pub fn composite(target_error_pct: f64, mass_proxy: f64, safety_factor: f64) -> f64 {
    target_error_pct * TARGET_WEIGHT
        + (mass_proxy / MASS_SCALE) * MASS_WEIGHT
        + (1.0 / safety_factor.max(SAFETY_EPSILON)) * MARGIN_WEIGHT
}

/// Classifies a design; high margin takes priority over lightweight.
#[must_use]
pub fn classify(target_error_pct: f64, mass_proxy: f64, safety_factor: f64) -> Bucket {
    if safety_factor >= HIGH_MARGIN_SAFETY_FACTOR {
        Bucket::HighMargin
    } else if mass_proxy <= LIGHTWEIGHT_MASS_PROXY
        && target_error_pct <= LIGHTWEIGHT_TARGET_ERROR_PCT
    {
        Bucket::Lightweight
    } else {
        Bucket::Balanced
    }
}

/// Scores an accepted candidate.
pub(crate) fn score(
    request: &OptimizationRequest,
    input: &CandidateInput,
    physical: &PhysicalResult,
    audit: &AuditResult,
) -> Score {
    let target_error_pct = target_error_pct(&request.target, physical.pack_stiffness);
    let mass_proxy = mass_proxy(input);
    let safety_factor = audit.safety_factor;
    let bucket = classify(target_error_pct, mass_proxy, safety_factor);

    let tolerance = request.target.tolerance_pct();
    let fit = if target_error_pct <= tolerance {
        "within"
    } else {
        "outside"
    };

    let why_bullets = vec![
        format!("Target error {target_error_pct:.2}% ({fit} ±{tolerance}% tolerance)"),
        format!("Safety factor {safety_factor:.2} (audit {})", audit.status),
        format!("Mass proxy {mass_proxy:.0} (relative)"),
        match bucket {
            Bucket::Lightweight => "Lightweight: low material for a close target match".into(),
            Bucket::Balanced => "Balanced: middle ground between margin and material".into(),
            Bucket::HighMargin => "High margin: ample stress reserve".into(),
        },
    ];

    Score {
        target_error_pct,
        mass_proxy,
        safety_factor,
        composite: composite(target_error_pct, mass_proxy, safety_factor),
        bucket,
        why_bullets,
    }
}
