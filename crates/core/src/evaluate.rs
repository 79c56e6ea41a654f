use std::fmt;

use uom::si::f64::Pressure;

use crate::CandidateInput;

/// Mechanical behaviour of one candidate, as computed by a [`PhysicalEvaluator`].
///
/// Lengths are in mm, forces in N, stiffness in N/mm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalResult {
    /// Stiffness of the whole pack.
    pub pack_stiffness: f64,

    /// Stiffness of a single spring.
    pub spring_rate: f64,

    /// Coil-bound height of a single spring.
    pub solid_height: f64,

    /// Smallest gap between neighbouring springs.
    pub spring_gap: f64,

    /// Smallest gap to the housing or shaft, if either bounds the pack.
    pub boundary_gap: Option<f64>,

    /// Travel available before the springs go solid.
    pub max_safe_stroke: f64,

    /// Pack load at the working stroke.
    pub work_load: f64,

    /// Corrected shear stress at the working stroke.
    pub shear_stress: Pressure,
}

/// Verdict of an [`AuditEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "UPPERCASE"))]
pub enum AuditStatus {
    Pass,
    Warn,
    Fail,
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
        })
    }
}

/// The limit that governs an audit verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum FailureMode {
    ShearStress,
    CoilBind,
    SpringClearance,
    BoundaryClearance,
}

/// Safety verdict for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct AuditResult {
    pub status: AuditStatus,

    /// Non-negative; may be infinite for an unloaded spring.
    pub safety_factor: f64,

    pub governing_mode: FailureMode,
}

/// Computes the mechanical behaviour of a candidate.
///
/// Implementations must be pure functions of the candidate input.
/// An `Err` rejects the candidate; it never aborts the search.
///
/// Closures of the form `Fn(&CandidateInput) -> Result<PhysicalResult, E>`
/// implement this trait.
pub trait PhysicalEvaluator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the candidate geometry.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the geometry cannot be evaluated.
    fn evaluate(&self, input: &CandidateInput) -> Result<PhysicalResult, Self::Error>;
}

impl<F, E> PhysicalEvaluator for F
where
    F: Fn(&CandidateInput) -> Result<PhysicalResult, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, input: &CandidateInput) -> Result<PhysicalResult, E> {
        self(input)
    }
}

/// Turns a physical result into a safety verdict.
///
/// Auditing always produces a verdict.
pub trait AuditEvaluator {
    fn audit(&self, input: &CandidateInput, physical: &PhysicalResult) -> AuditResult;
}

impl<F> AuditEvaluator for F
where
    F: Fn(&CandidateInput, &PhysicalResult) -> AuditResult,
{
    fn audit(&self, input: &CandidateInput, physical: &PhysicalResult) -> AuditResult {
        self(input, physical)
    }
}
