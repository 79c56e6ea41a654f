//! Diversity-aware top-K selection.

use std::collections::HashSet;

use coilpack_core::{Bucket, Candidate, TupleKey};

/// Selects at most `max_candidates` from the pool, keeping every bucket
/// represented.
///
/// The pool is sorted by composite score (stable, so ties keep pool order).
/// Each bucket, in [`Bucket::ALL`] order, first receives its best
/// `max_candidates / 3` members. Remaining slots are then filled from the
/// global ranking. Candidates whose tuples were already selected are skipped
/// in both passes.
#[must_use]
pub fn select_diverse(mut pool: Vec<Candidate>, max_candidates: usize) -> Vec<Candidate> {
    pool.sort_by(|a, b| a.composite().total_cmp(&b.composite()));

    let per_bucket = max_candidates / Bucket::ALL.len();
    let mut seen: HashSet<TupleKey> = HashSet::with_capacity(max_candidates);
    let mut order: Vec<usize> = Vec::with_capacity(max_candidates);

    for bucket in Bucket::ALL {
        let mut taken = 0;
        for (i, candidate) in pool.iter().enumerate() {
            if taken == per_bucket {
                break;
            }
            if candidate.bucket() == bucket && seen.insert(candidate.key()) {
                order.push(i);
                taken += 1;
            }
        }
    }

    for (i, candidate) in pool.iter().enumerate() {
        if order.len() >= max_candidates {
            break;
        }
        if seen.insert(candidate.key()) {
            order.push(i);
        }
    }

    let mut slots: Vec<Option<Candidate>> = pool.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|i| slots.get_mut(i).and_then(Option::take))
        .collect()
}
