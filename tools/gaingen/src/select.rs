//! Nearest-candidate selection
//!
//! Key is (distance to target, -rf_score). The scan keeps the best-so-far and
//! only replaces it on a strictly smaller key, so among exact ties the
//! candidate met first in enumeration order wins.

use core::cmp::Ordering;

use tracing::debug;

use crate::candidate::Candidate;

fn distance(candidate: &Candidate, target: f64) -> f64 {
    (candidate.total_attenuation as f64 - target).abs()
}

fn compare(a: &Candidate, b: &Candidate, target: f64) -> Ordering {
    distance(a, target)
        .total_cmp(&distance(b, target))
        .then_with(|| b.rf_score.cmp(&a.rf_score))
}

pub fn nearest(candidates: &[Candidate], target: f64) -> Option<&Candidate> {
    let mut best: Option<&Candidate> = None;

    for candidate in candidates {
        match best {
            Some(current) if compare(candidate, current, target) != Ordering::Less => {}
            _ => best = Some(candidate),
        }
    }

    best
}

/// One pick per target, in target order.
pub fn select_all<'a>(candidates: &'a [Candidate], targets: &[f64]) -> Vec<&'a Candidate> {
    targets
        .iter()
        .filter_map(|&target| {
            let best = nearest(candidates, target)?;
            debug!(
                target_db = target,
                atten = best.total_attenuation,
                reg = %best.register_value,
                rf_score = best.rf_score,
                "selected"
            );
            Some(best)
        })
        .collect()
}
