//! Reference evaluators for spring-pack searches.
//!
//! - [`HelicalPack`] implements [`PhysicalEvaluator`] with closed-form
//!   helical spring theory: rate, solid height, load, Wahl-corrected shear
//!   stress and clearances.
//! - [`StressAudit`] implements [`AuditEvaluator`], turning a physical result
//!   into a `PASS`/`WARN`/`FAIL` verdict with a safety factor.
//!
//! Both are pure, so they can be shared across any number of searches.
//!
//! [`PhysicalEvaluator`]: coilpack_core::PhysicalEvaluator
//! [`AuditEvaluator`]: coilpack_core::AuditEvaluator

mod audit;
mod helical;

pub use audit::{StressAudit, ThresholdError};
pub use helical::{GeometryError, HelicalPack, shear_stress, spring_rate, wahl_factor};
