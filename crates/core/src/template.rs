use uom::si::{f64::Pressure, pressure::megapascal};

/// Spring material properties forwarded to the evaluators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    /// Shear modulus `G`.
    pub shear_modulus: Pressure,

    /// Allowable shear stress used for the safety factor.
    pub allowable_shear_stress: Pressure,
}

impl Material {
    /// Creates a material from values given in megapascal.
    #[must_use]
    pub fn from_megapascal(shear_modulus: f64, allowable_shear_stress: f64) -> Self {
        Self {
            shear_modulus: Pressure::new::<megapascal>(shear_modulus),
            allowable_shear_stress: Pressure::new::<megapascal>(allowable_shear_stress),
        }
    }

    /// Music wire (ASTM A228) with a conservative static allowable.
    #[must_use]
    pub fn music_wire() -> Self {
        Self::from_megapascal(79_300.0, 700.0)
    }
}

/// How the spring ends are finished.
///
/// The search always counts two inactive end coils; the end condition is
/// carried through so evaluators can refine their own solid-height model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum EndCondition {
    #[default]
    ClosedGround,
    ClosedNotGround,
    Open,
}

/// Reference configuration that every candidate inherits and overrides.
///
/// Lengths are in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseTemplate {
    /// Starting wire diameter `d0`, the centre of the wire-series band.
    pub wire_diameter: f64,

    /// Nominal free length of each spring.
    pub free_length: f64,

    /// Axial travel the pack sees in service.
    ///
    /// Load-at-stroke targets override this with their own stroke.
    pub work_stroke: f64,

    #[cfg_attr(feature = "serde-derive", serde(default))]
    pub end_condition: EndCondition,

    pub material: Material,
}
