use coilpack_core::{AuditResult, AuditStatus, OptimizationRequest, PhysicalResult};

/// Why a tuple did not enter the candidate pool.
///
/// Evaluator failures are reported separately, through
/// [`Event::EvaluationFailed`](crate::Event::EvaluationFailed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// No bolt-circle radius satisfies clearance, housing and shaft limits.
    Infeasible,

    /// The audit returned `FAIL`.
    AuditFailed,

    /// The audit returned `WARN` and a clean pass was required.
    AuditNotPassed,

    /// The safety factor is below the requested minimum.
    SafetyFactor,

    /// The solid height exceeds the envelope limit.
    SolidHeight,
}

/// Applies the hard filters in order; the first one that fails wins.
pub(crate) fn check(
    request: &OptimizationRequest,
    physical: &PhysicalResult,
    audit: &AuditResult,
) -> Result<(), Rejection> {
    let constraints = &request.constraints;

    if audit.status == AuditStatus::Fail {
        return Err(Rejection::AuditFailed);
    }
    if constraints.require_audit_pass && audit.status != AuditStatus::Pass {
        return Err(Rejection::AuditNotPassed);
    }
    let safety_factor = audit.safety_factor;
    if safety_factor.is_nan() || safety_factor < constraints.min_safety_factor {
        return Err(Rejection::SafetyFactor);
    }
    if let Some(limit) = request.envelope.max_solid_height {
        if physical.solid_height > limit {
            return Err(Rejection::SolidHeight);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use coilpack_core::{
        BaseTemplate, Constraints, EndCondition, Envelope, FailureMode, Material, Target,
    };
    use uom::si::{f64::Pressure, pressure::megapascal};

    fn request(require_audit_pass: bool, max_solid_height: Option<f64>) -> OptimizationRequest {
        let template = BaseTemplate {
            wire_diameter: 2.0,
            free_length: 50.0,
            work_stroke: 4.0,
            end_condition: EndCondition::ClosedGround,
            material: Material::music_wire(),
        };
        let target = Target::Stiffness {
            k_req: 40.0,
            tolerance_pct: 10.0,
        };
        OptimizationRequest::new(template, target)
            .with_envelope(Envelope {
                max_solid_height,
                ..Envelope::default()
            })
            .with_constraints(Constraints {
                require_audit_pass,
                ..Constraints::default()
            })
    }

    fn physical(solid_height: f64) -> PhysicalResult {
        PhysicalResult {
            pack_stiffness: 40.0,
            spring_rate: 10.0,
            solid_height,
            spring_gap: 1.0,
            boundary_gap: None,
            max_safe_stroke: 20.0,
            work_load: 160.0,
            shear_stress: Pressure::new::<megapascal>(300.0),
        }
    }

    fn audit(status: AuditStatus, safety_factor: f64) -> AuditResult {
        AuditResult {
            status,
            safety_factor,
            governing_mode: FailureMode::ShearStress,
        }
    }

    #[test]
    fn clean_candidate_passes() {
        let result = check(
            &request(true, Some(30.0)),
            &physical(20.0),
            &audit(AuditStatus::Pass, 2.0),
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn fail_is_rejected_even_when_pass_is_not_required() {
        let result = check(
            &request(false, None),
            &physical(20.0),
            &audit(AuditStatus::Fail, 5.0),
        );
        assert_eq!(result, Err(Rejection::AuditFailed));
    }

    #[test]
    fn warn_depends_on_require_audit_pass() {
        let warn = audit(AuditStatus::Warn, 1.15);
        assert_eq!(
            check(&request(true, None), &physical(20.0), &warn),
            Err(Rejection::AuditNotPassed)
        );
        assert_eq!(check(&request(false, None), &physical(20.0), &warn), Ok(()));
    }

    #[test]
    fn safety_factor_below_minimum_is_rejected() {
        let result = check(
            &request(true, None),
            &physical(20.0),
            &audit(AuditStatus::Pass, 1.05),
        );
        assert_eq!(result, Err(Rejection::SafetyFactor));
    }

    #[test]
    fn undefined_safety_factor_is_rejected() {
        let result = check(
            &request(false, None),
            &physical(20.0),
            &audit(AuditStatus::Pass, f64::NAN),
        );
        assert_eq!(result, Err(Rejection::SafetyFactor));
    }

    #[test]
    fn solid_height_limit_is_inclusive() {
        let pass = audit(AuditStatus::Pass, 2.0);
        assert_eq!(check(&request(true, Some(20.0)), &physical(20.0), &pass), Ok(()));
        assert_eq!(
            check(&request(true, Some(20.0)), &physical(20.1), &pass),
            Err(Rejection::SolidHeight)
        );
    }

    #[test]
    fn first_failing_filter_wins() {
        // Low safety factor and tall solid height: the safety filter runs first.
        let result = check(
            &request(true, Some(10.0)),
            &physical(20.0),
            &audit(AuditStatus::Pass, 0.5),
        );
        assert_eq!(result, Err(Rejection::SafetyFactor));
    }
}
