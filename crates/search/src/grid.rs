//! The discretized design space.

use coilpack_core::{Constraints, ParamTuple};

/// Step between active-coil values.
pub const ACTIVE_COIL_STEP: f64 = 0.5;

/// Step between spring-index values.
pub const SPRING_INDEX_STEP: f64 = 0.5;

/// Slack for the last step of an axis, so `[3, 20]` ends at 20 despite
/// rounding in `min + i·step`.
const AXIS_SLACK: f64 = 1e-9;

/// Cartesian product of the four search axes.
///
/// Tuples are produced in a fixed nesting order: wire diameter, then active
/// coils, then pack count, then spring index (innermost). Only the wire
/// series is stored; the other axes are generated while iterating, so a
/// bounded walk over a huge range costs no more than its budget.
///
/// The ranges are expected to be non-empty, as checked by
/// [`OptimizationRequest::validate`](coilpack_core::OptimizationRequest::validate).
/// An empty inner axis under a huge outer one would spin without yielding.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    wire_diameters: Vec<f64>,
    coil_range: [f64; 2],
    pack_range: [u32; 2],
    index_range: [f64; 2],
}

impl Grid {
    /// Builds the grid from a wire series and the request constraints.
    #[must_use]
    pub fn new(wire_diameters: Vec<f64>, constraints: &Constraints) -> Self {
        Self {
            wire_diameters,
            coil_range: constraints.active_coils_range,
            pack_range: constraints.pack_count_range,
            index_range: constraints.index_range,
        }
    }

    /// Iterates the tuples in nesting order.
    pub fn tuples(&self) -> impl Iterator<Item = ParamTuple> + '_ {
        let coil_range = self.coil_range;
        let [n_min, n_max] = self.pack_range;
        let index_range = self.index_range;

        self.wire_diameters.iter().flat_map(move |&wire_diameter| {
            axis(coil_range, ACTIVE_COIL_STEP).flat_map(move |active_coils| {
                (n_min..=n_max).flat_map(move |pack_count| {
                    axis(index_range, SPRING_INDEX_STEP).map(move |spring_index| ParamTuple {
                        wire_diameter,
                        active_coils,
                        pack_count,
                        spring_index,
                    })
                })
            })
        })
    }
}

/// Values `min, min + step, …` up to and including `max`, generated lazily.
#[allow(clippy::cast_precision_loss)]
fn axis([min, max]: [f64; 2], step: f64) -> impl Iterator<Item = f64> {
    (0_u64..)
        .map(move |i| min + i as f64 * step)
        .take_while(move |&v| v <= max + AXIS_SLACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_axes_have_expected_sizes() {
        let c = Constraints::default();
        assert_eq!(axis(c.active_coils_range, ACTIVE_COIL_STEP).count(), 35);
        assert_eq!(axis(c.index_range, SPRING_INDEX_STEP).count(), 17);

        let grid = Grid::new(vec![1.0, 2.0], &c);
        assert_eq!(grid.tuples().count(), 2 * 35 * 17 * 17);
    }

    #[test]
    fn axis_includes_both_ends() {
        let values = |range| axis(range, 0.5).collect::<Vec<_>>();
        assert_eq!(values([3.0, 4.5]), vec![3.0, 3.5, 4.0, 4.5]);
        assert_eq!(values([4.0, 4.0]), vec![4.0]);
        assert_eq!(values([4.0, 4.7]), vec![4.0, 4.5]);
        assert!(values([5.0, 4.0]).is_empty());
        assert!(values([f64::NAN, 4.0]).is_empty());
    }

    #[test]
    fn spring_index_varies_fastest() {
        let constraints = Constraints {
            index_range: [4.0, 4.5],
            pack_count_range: [4, 5],
            active_coils_range: [3.0, 3.5],
            ..Constraints::default()
        };
        let grid = Grid::new(vec![1.0, 2.0], &constraints);
        let order: Vec<_> = grid
            .tuples()
            .map(|t| (t.wire_diameter, t.active_coils, t.pack_count, t.spring_index))
            .collect();

        assert_eq!(order.len(), 16);
        assert_eq!(order[0], (1.0, 3.0, 4, 4.0));
        assert_eq!(order[1], (1.0, 3.0, 4, 4.5));
        assert_eq!(order[2], (1.0, 3.0, 5, 4.0));
        assert_eq!(order[4], (1.0, 3.5, 4, 4.0));
        assert_eq!(order[8], (2.0, 3.0, 4, 4.0));
        assert_eq!(order[15], (2.0, 3.5, 5, 4.5));
    }

    #[test]
    fn huge_ranges_are_walked_lazily() {
        let constraints = Constraints {
            index_range: [4.0, 1e300],
            pack_count_range: [2, u32::MAX],
            active_coils_range: [3.0, 1e300],
            ..Constraints::default()
        };
        let grid = Grid::new(vec![1.0], &constraints);
        let first: Vec<_> = grid.tuples().take(3).map(|t| t.spring_index).collect();

        assert_eq!(first, vec![4.0, 4.5, 5.0]);
    }

    #[test]
    fn empty_wire_series_gives_empty_grid() {
        let grid = Grid::new(Vec::new(), &Constraints::default());
        assert_eq!(grid.tuples().count(), 0);
    }
}
