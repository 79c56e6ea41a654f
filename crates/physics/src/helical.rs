//! Closed-form behaviour of a pack of identical helical compression springs.

use std::f64::consts::PI;

use coilpack_core::{CandidateInput, PhysicalEvaluator, PhysicalResult};
use thiserror::Error;
use uom::si::{f64::Pressure, pressure::megapascal};

/// Reasons a candidate geometry cannot be evaluated.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("spring index must be greater than 1, got {0}")]
    SpringIndex(f64),
}

/// Evaluates a spring pack with textbook helical spring formulas.
///
/// Lengths are read in mm and the shear modulus in MPa, so stiffness comes
/// out in N/mm and stress in MPa. Every spring in the pack carries the same
/// share of the load, so pack stiffness is `N·k`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelicalPack;

impl PhysicalEvaluator for HelicalPack {
    type Error = GeometryError;

    fn evaluate(&self, input: &CandidateInput) -> Result<PhysicalResult, GeometryError> {
        let d = positive("wire_diameter", input.wire_diameter())?;
        let dm = positive("mean_diameter", input.mean_diameter)?;
        let na = positive("active_coils", input.active_coils())?;
        let n = positive("pack_count", f64::from(input.pack_count()))?;
        let g = positive(
            "shear_modulus",
            input.material.shear_modulus.get::<megapascal>(),
        )?;

        let c = input.spring_index();
        if !c.is_finite() || c <= 1.0 {
            return Err(GeometryError::SpringIndex(c));
        }

        let rate = spring_rate(g, d, dm, na);
        let solid_height = input.total_coils * d;
        let load = rate * input.work_stroke;

        Ok(PhysicalResult {
            pack_stiffness: n * rate,
            spring_rate: rate,
            solid_height,
            spring_gap: input.spring_gap(),
            boundary_gap: Some(boundary_gap(input)),
            max_safe_stroke: input.free_length - solid_height,
            work_load: n * load,
            shear_stress: Pressure::new::<megapascal>(shear_stress(load, d, dm, c)),
        })
    }
}

/// Rate of one spring, `k = G·d⁴ / (8·Dm³·Na)`.
#[must_use]
pub fn spring_rate(shear_modulus: f64, d: f64, dm: f64, na: f64) -> f64 {
    shear_modulus * d.powi(4) / (8.0 * dm.powi(3) * na)
}

/// Wahl correction for curvature and direct shear,
/// `Kw = (4C − 1)/(4C − 4) + 0.615/C`.
#[must_use]
pub fn wahl_factor(c: f64) -> f64 {
    (4.0 * c - 1.0) / (4.0 * c - 4.0) + 0.615 / c
}

/// Corrected shear stress under an axial load, `τ = 8·F·Dm·Kw / (π·d³)`.
#[must_use]
pub fn shear_stress(load: f64, d: f64, dm: f64, c: f64) -> f64 {
    8.0 * load * dm * wahl_factor(c) / (PI * d.powi(3))
}

/// Smaller of the radial gaps to the outer ring and to the inner ring.
fn boundary_gap(input: &CandidateInput) -> f64 {
    let half_od = input.spring_od() / 2.0;
    let housing = input.ring_od / 2.0 - input.bolt_circle_radius - half_od;
    let shaft = input.bolt_circle_radius - half_od - input.ring_id / 2.0;
    housing.min(shaft)
}

fn positive(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NotPositive { name, value })
    }
}
