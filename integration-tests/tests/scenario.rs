use std::collections::HashSet;

use approx::assert_relative_eq;
use coilpack_core::{AuditStatus, Bucket, Envelope, ParamTuple};
use coilpack_observers::Tally;
use coilpack_physics::{HelicalPack, StressAudit};
use coilpack_search::{Config, Rejection, Solution, Status, search, search_unobserved};
use integration_tests::stiffness_request;

fn run_stiffness() -> (Solution, Tally) {
    let mut tally = Tally::new();
    let solution = search(
        &stiffness_request(),
        &HelicalPack,
        &StressAudit::default(),
        &Config::default(),
        &mut tally,
    )
    .expect("request is valid");
    (solution, tally)
}

#[test]
fn stiffness_target_hits_the_tuple_budget() {
    let (solution, tally) = run_stiffness();

    // 14 catalog wires around 3 mm give far more than 12000 tuples.
    assert_eq!(solution.status, Status::TupleCap);
    assert_eq!(solution.examined, 12_000);
    assert_eq!(tally.examined(), 12_000);
    assert_eq!(tally.accepted_total(), solution.pool_size);
    assert_eq!(tally.failed(), 0);
    assert_eq!(tally.rejected(Rejection::Infeasible), 0);
}

#[test]
fn stiffness_target_shortlist_is_close_and_safe() {
    let (solution, _) = run_stiffness();

    assert_eq!(solution.candidates.len(), 60);
    for candidate in &solution.candidates {
        assert!(candidate.score.target_error_pct < 20.0);
        assert_eq!(candidate.audit.status, AuditStatus::Pass);
        assert!(candidate.audit.safety_factor >= 1.1);
        assert!(candidate.input.spring_gap() >= 0.5 - 1e-9);
        assert_eq!(candidate.score.why_bullets.len(), 4);
    }

    let keys: HashSet<_> = solution.candidates.iter().map(|c| c.key()).collect();
    assert_eq!(keys.len(), solution.candidates.len());
}

#[test]
fn stiffness_target_fills_every_bucket() {
    let (solution, tally) = run_stiffness();

    assert!(tally.accepted(Bucket::HighMargin) > 0);
    for bucket in Bucket::ALL {
        assert!(tally.accepted(bucket) >= 20, "{bucket:?} pool too small");
        let selected = solution
            .candidates
            .iter()
            .filter(|c| c.bucket() == bucket)
            .count();
        assert_eq!(selected, 20, "{bucket:?}");
    }

    // Buckets are filled in order, each block ranked by composite score.
    for (block, bucket) in solution.candidates.chunks(20).zip(Bucket::ALL) {
        assert!(block.iter().all(|c| c.bucket() == bucket));
        assert!(block.windows(2).all(|w| w[0].composite() <= w[1].composite()));
    }
}

#[test]
fn stiffness_target_best_lightweight_design() {
    let (solution, _) = run_stiffness();
    let best = &solution.candidates[0];

    assert_eq!(best.bucket(), Bucket::Lightweight);
    assert_eq!(
        best.input.tuple,
        ParamTuple {
            wire_diameter: 1.5,
            active_coils: 5.5,
            pack_count: 4,
            spring_index: 6.0,
        }
    );
    assert_relative_eq!(best.physical.pack_stiffness, 50.0, max_relative = 0.002);
    assert_relative_eq!(best.input.mean_diameter, 9.0);
    assert_relative_eq!(best.input.total_coils, 7.5);
}

#[test]
fn repeated_runs_are_identical() {
    let request = stiffness_request();
    let config = Config::default();
    let audit = StressAudit::default();

    let first = search_unobserved(&request, &HelicalPack, &audit, &config).unwrap();
    let second = search_unobserved(&request, &HelicalPack, &audit, &config).unwrap();

    assert_eq!(first.candidates, second.candidates);
    assert_eq!(first.examined, second.examined);
    assert_eq!(first.pool_size, second.pool_size);
}

#[test]
fn narrow_housing_rules_out_wide_packs() {
    // Spring OD 25 mm (d = 2.5, C = 9) cannot fit eight around a 40 mm bore.
    let mut request = stiffness_request();
    request.base_template.wire_diameter = 2.5;
    request.envelope = Envelope {
        max_od: Some(40.0),
        ..Envelope::default()
    };
    request.constraints.wire_series = Some(vec![2.5]);
    request.constraints.index_range = [9.0, 9.0];
    request.constraints.pack_count_range = [8, 8];

    let mut tally = Tally::new();
    let solution = search(
        &request,
        &HelicalPack,
        &StressAudit::default(),
        &Config::default(),
        &mut tally,
    )
    .unwrap();

    assert_eq!(solution.status, Status::Exhausted);
    assert_eq!(solution.examined, 35);
    assert_eq!(tally.rejected(Rejection::Infeasible), 35);
    assert!(solution.candidates.is_empty());
}

#[test]
fn tighter_budget_examines_a_prefix() {
    let request = stiffness_request();
    let audit = StressAudit::default();
    let config = Config::default().with_max_tuples(500).unwrap();

    let solution = search_unobserved(&request, &HelicalPack, &audit, &config).unwrap();

    assert_eq!(solution.status, Status::TupleCap);
    assert_eq!(solution.examined, 500);
    assert!(
        solution
            .candidates
            .iter()
            .all(|c| c.input.wire_diameter() == 1.4)
    );
}
