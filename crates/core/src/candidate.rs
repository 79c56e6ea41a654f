use std::f64::consts::PI;

use crate::{AuditResult, EndCondition, Material, PhysicalResult};

/// One point of the discretized design space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamTuple {
    /// Wire diameter `d` in mm.
    pub wire_diameter: f64,

    /// Active coils `Na`.
    pub active_coils: f64,

    /// Springs in the pack `N`.
    pub pack_count: u32,

    /// Spring index `C = Dm / d`.
    pub spring_index: f64,
}

/// Scale used to quantize tuple values into [`TupleKey`].
const KEY_SCALE: f64 = 1e6;

/// Hashable identity of a [`ParamTuple`].
///
/// Values are quantized to 1e-6 so structurally identical tuples compare
/// equal even if they were produced by different arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TupleKey {
    wire_diameter: i64,
    active_coils: i64,
    pack_count: u32,
    spring_index: i64,
}

impl ParamTuple {
    /// Returns the de-duplication key for this tuple.
    #[must_use]
    pub fn key(&self) -> TupleKey {
        TupleKey {
            wire_diameter: quantize(self.wire_diameter),
            active_coils: quantize(self.active_coils),
            pack_count: self.pack_count,
            spring_index: quantize(self.spring_index),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn quantize(value: f64) -> i64 {
    (value * KEY_SCALE).round() as i64
}

/// Fully derived geometry of one spring-pack candidate.
///
/// Lengths are in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateInput {
    pub tuple: ParamTuple,

    /// Mean coil diameter `Dm = C·d`.
    pub mean_diameter: f64,

    /// Active plus two closed end coils.
    pub total_coils: f64,

    /// Radius of the circle the spring centres sit on.
    pub bolt_circle_radius: f64,

    pub ring_od: f64,
    pub ring_id: f64,

    pub free_length: f64,

    /// Stroke the evaluators load the pack to.
    pub work_stroke: f64,

    pub end_condition: EndCondition,
    pub material: Material,
}

impl CandidateInput {
    #[must_use]
    pub fn wire_diameter(&self) -> f64 {
        self.tuple.wire_diameter
    }

    #[must_use]
    pub fn active_coils(&self) -> f64 {
        self.tuple.active_coils
    }

    #[must_use]
    pub fn pack_count(&self) -> u32 {
        self.tuple.pack_count
    }

    #[must_use]
    pub fn spring_index(&self) -> f64 {
        self.tuple.spring_index
    }

    /// Outer diameter of a single spring, `Dm + d`.
    #[must_use]
    pub fn spring_od(&self) -> f64 {
        self.mean_diameter + self.tuple.wire_diameter
    }

    /// Gap between neighbouring springs on the bolt circle.
    ///
    /// Computed from the chord between adjacent centres, `2·Rbc·sin(π/N)`.
    #[must_use]
    pub fn spring_gap(&self) -> f64 {
        let n = f64::from(self.tuple.pack_count);
        2.0 * self.bolt_circle_radius * (PI / n).sin() - self.spring_od()
    }
}

/// Qualitative design character used to diversify the shortlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Bucket {
    Lightweight,
    Balanced,
    HighMargin,
}

impl Bucket {
    /// Buckets in the order the selector fills them.
    pub const ALL: [Bucket; 3] = [Bucket::Lightweight, Bucket::Balanced, Bucket::HighMargin];
}

/// Ranking data attached to an accepted candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// Relative miss on the target, in percent.
    pub target_error_pct: f64,

    /// Relative material volume, `N·d²·Dm·max(Na, 1)`. Only meaningful
    /// when compared with other candidates.
    pub mass_proxy: f64,

    pub safety_factor: f64,

    /// Lower is better.
    pub composite: f64,

    pub bucket: Bucket,

    /// Advisory text for people; not meant to be parsed.
    pub why_bullets: Vec<String>,
}

/// A feasible, audited and scored design.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub input: CandidateInput,
    pub physical: PhysicalResult,
    pub audit: AuditResult,
    pub score: Score,
}

impl Candidate {
    #[must_use]
    pub fn key(&self) -> TupleKey {
        self.input.tuple.key()
    }

    #[must_use]
    pub fn bucket(&self) -> Bucket {
        self.score.bucket
    }

    #[must_use]
    pub fn composite(&self) -> f64 {
        self.score.composite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn input(pack_count: u32, bolt_circle_radius: f64) -> CandidateInput {
        let tuple = ParamTuple {
            wire_diameter: 2.0,
            active_coils: 6.0,
            pack_count,
            spring_index: 8.0,
        };
        CandidateInput {
            tuple,
            mean_diameter: 16.0,
            total_coils: 8.0,
            bolt_circle_radius,
            ring_od: 0.0,
            ring_id: 0.0,
            free_length: 40.0,
            work_stroke: 4.0,
            end_condition: EndCondition::ClosedGround,
            material: Material::music_wire(),
        }
    }

    #[test]
    fn spring_gap_follows_chord_geometry() {
        // Six springs: adjacent centres are exactly one radius apart.
        let input = input(6, 30.0);
        assert_relative_eq!(input.spring_od(), 18.0);
        assert_relative_eq!(input.spring_gap(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn key_ignores_float_noise() {
        let a = ParamTuple {
            wire_diameter: 0.1 + 0.2,
            active_coils: 3.5,
            pack_count: 4,
            spring_index: 6.0,
        };
        let b = ParamTuple {
            wire_diameter: 0.3,
            ..a
        };
        assert_ne!(a.wire_diameter, b.wire_diameter);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn key_distinguishes_pack_count() {
        let a = input(6, 30.0).tuple;
        let b = ParamTuple { pack_count: 7, ..a };
        assert_ne!(a.key(), b.key());
    }
}
