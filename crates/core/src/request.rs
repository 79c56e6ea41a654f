use thiserror::Error;

use crate::BaseTemplate;

/// What the pack must achieve.
///
/// Stiffness is in N/mm, load in N and stroke in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde-derive",
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Target {
    /// Total pack stiffness `k_req`.
    Stiffness { k_req: f64, tolerance_pct: f64 },

    /// Total pack load `p_req` reached after compressing by `stroke`.
    LoadAtStroke {
        p_req: f64,
        stroke: f64,
        tolerance_pct: f64,
    },
}

impl Target {
    /// Returns the acceptance tolerance in percent.
    #[must_use]
    pub fn tolerance_pct(&self) -> f64 {
        match self {
            Self::Stiffness { tolerance_pct, .. } | Self::LoadAtStroke { tolerance_pct, .. } => {
                *tolerance_pct
            }
        }
    }

    /// Returns the stroke candidates are evaluated at.
    ///
    /// A load-at-stroke target brings its own stroke; a stiffness target uses
    /// the template's working stroke.
    #[must_use]
    pub fn work_stroke(&self, template: &BaseTemplate) -> f64 {
        match self {
            Self::Stiffness { .. } => template.work_stroke,
            Self::LoadAtStroke { stroke, .. } => *stroke,
        }
    }
}

/// Geometric limits of the space the pack is installed in, in mm.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Envelope {
    /// Housing bore; no spring may reach past this diameter.
    pub max_od: Option<f64>,

    /// Shaft diameter; no spring may reach inside this diameter.
    pub min_id: Option<f64>,

    /// Upper bound on the solid height of one spring.
    pub max_solid_height: Option<f64>,
}

/// Engineering limits and the extent of the discretized search space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Constraints {
    pub min_safety_factor: f64,

    /// Spring index bounds `[c_min, c_max]`, walked in steps of 0.5.
    pub index_range: [f64; 2],

    /// Springs per pack `[n_min, n_max]`, walked in steps of 1.
    pub pack_count_range: [u32; 2],

    /// Active coil bounds `[na_min, na_max]`, walked in steps of 0.5.
    pub active_coils_range: [f64; 2],

    /// Replaces the built-in wire catalog when set.
    pub wire_series: Option<Vec<f64>>,

    pub max_candidates: usize,

    /// Drops `WARN` verdicts as well as `FAIL`.
    pub require_audit_pass: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            min_safety_factor: 1.1,
            index_range: [4.0, 12.0],
            pack_count_range: [4, 20],
            active_coils_range: [3.0, 20.0],
            wire_series: None,
            max_candidates: 60,
            require_audit_pass: true,
        }
    }
}

/// Input to one search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationRequest {
    pub base_template: BaseTemplate,

    pub target: Target,

    #[cfg_attr(feature = "serde-derive", serde(default))]
    pub envelope: Envelope,

    #[cfg_attr(feature = "serde-derive", serde(default))]
    pub constraints: Constraints,
}

/// Reasons a request cannot be searched.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum RequestError {
    #[error("{0} must be finite and positive")]
    NotPositive(&'static str),

    #[error("{0} must be finite and non-negative")]
    Negative(&'static str),

    #[error("{name} range [{min}, {max}] must be finite, positive and ordered")]
    Range {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("pack count range [{min}, {max}] must start at 2 or more and be ordered")]
    PackCount { min: u32, max: u32 },

    #[error("wire series entry {0} must be finite and positive")]
    WireSeries(f64),

    #[error("max_candidates must be at least 1")]
    MaxCandidates,
}

impl OptimizationRequest {
    /// Creates a request with an open envelope and default constraints.
    #[must_use]
    pub fn new(base_template: BaseTemplate, target: Target) -> Self {
        Self {
            base_template,
            target,
            envelope: Envelope::default(),
            constraints: Constraints::default(),
        }
    }

    /// Replaces the envelope.
    #[must_use]
    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }

    /// Replaces the constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Returns the stroke candidates are evaluated at.
    #[must_use]
    pub fn work_stroke(&self) -> f64 {
        self.target.work_stroke(&self.base_template)
    }

    /// Checks that the request describes a searchable space.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), RequestError> {
        let template = &self.base_template;
        positive("base_template.wire_diameter", template.wire_diameter)?;
        positive("base_template.free_length", template.free_length)?;
        non_negative("base_template.work_stroke", template.work_stroke)?;

        match self.target {
            Target::Stiffness {
                k_req,
                tolerance_pct,
            } => {
                positive("target.k_req", k_req)?;
                non_negative("target.tolerance_pct", tolerance_pct)?;
            }
            Target::LoadAtStroke {
                p_req,
                stroke,
                tolerance_pct,
            } => {
                positive("target.p_req", p_req)?;
                positive("target.stroke", stroke)?;
                non_negative("target.tolerance_pct", tolerance_pct)?;
            }
        }

        let Envelope {
            max_od,
            min_id,
            max_solid_height,
        } = self.envelope;
        if let Some(v) = max_od {
            positive("envelope.max_od", v)?;
        }
        if let Some(v) = min_id {
            non_negative("envelope.min_id", v)?;
        }
        if let Some(v) = max_solid_height {
            positive("envelope.max_solid_height", v)?;
        }

        let c = &self.constraints;
        non_negative("constraints.min_safety_factor", c.min_safety_factor)?;
        range("index", c.index_range)?;
        range("active coils", c.active_coils_range)?;

        let [n_min, n_max] = c.pack_count_range;
        if n_min < 2 || n_min > n_max {
            return Err(RequestError::PackCount {
                min: n_min,
                max: n_max,
            });
        }

        if let Some(series) = &c.wire_series {
            if let Some(&bad) = series.iter().find(|d| !d.is_finite() || **d <= 0.0) {
                return Err(RequestError::WireSeries(bad));
            }
        }

        if c.max_candidates == 0 {
            return Err(RequestError::MaxCandidates);
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), RequestError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RequestError::NotPositive(name))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), RequestError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RequestError::Negative(name))
    }
}

fn range(name: &'static str, [min, max]: [f64; 2]) -> Result<(), RequestError> {
    if min.is_finite() && max.is_finite() && min > 0.0 && min <= max {
        Ok(())
    } else {
        Err(RequestError::Range { name, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Material;

    fn template() -> BaseTemplate {
        BaseTemplate {
            wire_diameter: 3.0,
            free_length: 60.0,
            work_stroke: 5.0,
            end_condition: crate::EndCondition::ClosedGround,
            material: Material::music_wire(),
        }
    }

    fn stiffness(k_req: f64) -> Target {
        Target::Stiffness {
            k_req,
            tolerance_pct: 10.0,
        }
    }

    #[test]
    fn defaults_match_documented_values() {
        let c = Constraints::default();
        assert_eq!(c.min_safety_factor, 1.1);
        assert_eq!(c.index_range, [4.0, 12.0]);
        assert_eq!(c.pack_count_range, [4, 20]);
        assert_eq!(c.active_coils_range, [3.0, 20.0]);
        assert_eq!(c.max_candidates, 60);
        assert!(c.require_audit_pass);
        assert!(c.wire_series.is_none());
    }

    #[test]
    fn valid_request_passes() {
        let request = OptimizationRequest::new(template(), stiffness(50.0));
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_target() {
        let request = OptimizationRequest::new(template(), stiffness(0.0));
        assert_eq!(
            request.validate(),
            Err(RequestError::NotPositive("target.k_req"))
        );
    }

    #[test]
    fn rejects_inverted_index_range() {
        let request =
            OptimizationRequest::new(template(), stiffness(50.0)).with_constraints(Constraints {
                index_range: [12.0, 4.0],
                ..Constraints::default()
            });
        assert!(matches!(
            request.validate(),
            Err(RequestError::Range { name: "index", .. })
        ));
    }

    #[test]
    fn rejects_single_spring_pack() {
        let request =
            OptimizationRequest::new(template(), stiffness(50.0)).with_constraints(Constraints {
                pack_count_range: [1, 8],
                ..Constraints::default()
            });
        assert_eq!(
            request.validate(),
            Err(RequestError::PackCount { min: 1, max: 8 })
        );
    }

    #[test]
    fn rejects_bad_wire_series_entry() {
        let request =
            OptimizationRequest::new(template(), stiffness(50.0)).with_constraints(Constraints {
                wire_series: Some(vec![1.0, f64::NAN]),
                ..Constraints::default()
            });
        assert!(matches!(
            request.validate(),
            Err(RequestError::WireSeries(v)) if v.is_nan()
        ));
    }

    #[test]
    fn bare_shaft_is_allowed() {
        let envelope = |min_id| Envelope {
            min_id: Some(min_id),
            ..Envelope::default()
        };
        let request = OptimizationRequest::new(template(), stiffness(50.0));

        let request = request.with_envelope(envelope(0.0));
        assert_eq!(request.validate(), Ok(()));

        let request = request.with_envelope(envelope(-1.0));
        assert_eq!(
            request.validate(),
            Err(RequestError::Negative("envelope.min_id"))
        );
    }

    #[test]
    fn rejects_zero_max_candidates() {
        let request =
            OptimizationRequest::new(template(), stiffness(50.0)).with_constraints(Constraints {
                max_candidates: 0,
                ..Constraints::default()
            });
        assert_eq!(request.validate(), Err(RequestError::MaxCandidates));
    }

    #[test]
    fn load_target_brings_its_own_stroke() {
        let target = Target::LoadAtStroke {
            p_req: 400.0,
            stroke: 8.0,
            tolerance_pct: 5.0,
        };
        assert_eq!(target.work_stroke(&template()), 8.0);
        assert_eq!(stiffness(50.0).work_stroke(&template()), 5.0);
    }
}
