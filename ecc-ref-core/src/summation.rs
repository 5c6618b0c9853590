use crate::arithmetic::{add_reference, AffinePoint};
use crate::Curve;

use log::{debug, trace};

/// Result of folding a list of points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSum<C: Curve> {
    pub point: AffinePoint<C>,
    /// Number of pairwise additions actually performed.
    pub additions: usize,
}

/// Sums `points` left to right.
///
/// The fold stops as soon as an intermediate sum is the identity, so the
/// remaining points are never added. Summing `n` points therefore performs
/// at most `n - 1` additions. An identity given as the first input does
/// not stop the fold; only a computed sum does.
pub fn sum_points<C: Curve>(points: &[AffinePoint<C>]) -> PointSum<C> {
    let (first, rest) = match points.split_first() {
        Some(split) => split,
        None => {
            return PointSum {
                point: AffinePoint::Identity,
                additions: 0,
            }
        }
    };

    let mut acc = *first;
    let mut additions = 0;
    for point in rest {
        acc = add_reference(&acc, point);
        additions += 1;
        trace!("partial sum after {} additions: {}", additions, acc);
        if acc.is_identity() {
            debug!(
                "partial sum is the identity after {} of {} additions, stopping",
                additions,
                rest.len()
            );
            break;
        }
    }

    PointSum {
        point: acc,
        additions,
    }
}
