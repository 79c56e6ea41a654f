use coilpack_core::{
    AuditEvaluator, AuditResult, AuditStatus, CandidateInput, FailureMode, PhysicalResult,
};
use thiserror::Error;
use uom::si::pressure::megapascal;

/// Safety verdict from shear stress, travel and clearances.
///
/// A candidate fails if the working stroke drives the springs solid, if
/// neighbouring springs or the rings overlap, or if the corrected shear
/// stress exceeds the allowable. It is flagged `WARN` when the safety factor
/// is below [`StressAudit::warn_below`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressAudit {
    warn_below: f64,
}

/// Errors that can occur when configuring a [`StressAudit`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("warn_below must be finite and at least 1, got {0}")]
pub struct ThresholdError(f64);

impl Default for StressAudit {
    fn default() -> Self {
        Self { warn_below: 1.2 }
    }
}

impl StressAudit {
    /// Creates an audit with a custom warning threshold.
    ///
    /// # Errors
    ///
    /// Returns a [`ThresholdError`] if `warn_below` is below 1 or non-finite.
    pub fn new(warn_below: f64) -> Result<Self, ThresholdError> {
        if warn_below.is_finite() && warn_below >= 1.0 {
            Ok(Self { warn_below })
        } else {
            Err(ThresholdError(warn_below))
        }
    }

    /// Returns the safety factor below which a passing design is flagged.
    #[must_use]
    pub fn warn_below(&self) -> f64 {
        self.warn_below
    }
}

impl AuditEvaluator for StressAudit {
    fn audit(&self, input: &CandidateInput, physical: &PhysicalResult) -> AuditResult {
        let allowable = input.material.allowable_shear_stress.get::<megapascal>();
        let stress = physical.shear_stress.get::<megapascal>().abs();
        let safety_factor = if stress > 0.0 {
            (allowable / stress).max(0.0)
        } else {
            f64::INFINITY
        };

        let failure = if input.work_stroke > physical.max_safe_stroke {
            Some(FailureMode::CoilBind)
        } else if physical.spring_gap < 0.0 {
            Some(FailureMode::SpringClearance)
        } else if physical.boundary_gap.is_some_and(|gap| gap < 0.0) {
            Some(FailureMode::BoundaryClearance)
        } else if safety_factor < 1.0 {
            Some(FailureMode::ShearStress)
        } else {
            None
        };

        let (status, governing_mode) = match failure {
            Some(mode) => (AuditStatus::Fail, mode),
            None if safety_factor < self.warn_below => {
                (AuditStatus::Warn, FailureMode::ShearStress)
            }
            None => (AuditStatus::Pass, FailureMode::ShearStress),
        };

        AuditResult {
            status,
            safety_factor,
            governing_mode,
        }
    }
}
