//! Radial distance reduction.
//!
//! A quick and simple reduction method: sweeping left to right, every
//! point closer than the tolerance to the most recently retained
//! "sentinel" point is discarded. Useful for thinning dense digitizer
//! or GPS output before heavier processing.

use num_traits::Zero;

use super::PointSet;
use crate::error::ReduceError;
use crate::primitives::Distance;

/// Reduces a polyline by removing points within a tolerance radius.
///
/// Walks the sequence keeping a sentinel on the last retained point and
/// discarding every following point whose distance to the sentinel is
/// strictly less than `tolerance`. The first point always survives; the
/// final point survives unless it ends up within tolerance of the last
/// retained point.
///
/// # Arguments
///
/// * `points` - The input polyline
/// * `tolerance` - Radius under which a point is discarded. Comparison is
///   strict, so a tolerance of zero removes nothing, coincident
///   duplicates included.
///
/// # Errors
///
/// Returns [`ReduceError::InvalidTolerance`] if `tolerance` is negative.
///
/// # Example
///
/// ```
/// use reducum::reduce::radial;
/// use reducum::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 1.0), // Within 1.5 of (0, 0), removed
///     Point2::new(0.0, 2.0),
///     Point2::new(5.0, 5.0),
/// ];
///
/// let reduced = radial(&points, 1.5)?;
/// assert_eq!(reduced, vec![points[0], points[2], points[3]]);
/// # Ok::<(), reducum::ReduceError>(())
/// ```
pub fn radial<P: Distance + Clone>(
    points: &[P],
    tolerance: P::Scalar,
) -> Result<Vec<P>, ReduceError> {
    let mut set = PointSet::new(points.to_vec());
    radial_in_place(&mut set, tolerance)?;
    Ok(set.into_points())
}

/// Reduces a polyline and returns the indices of retained points.
///
/// Useful when per-point data (timestamps, elevations) lives alongside
/// the coordinates and must be subset the same way.
///
/// # Errors
///
/// Returns [`ReduceError::InvalidTolerance`] if `tolerance` is negative.
pub fn radial_indices<P: Distance + Clone>(
    points: &[P],
    tolerance: P::Scalar,
) -> Result<Vec<usize>, ReduceError> {
    let mut set = PointSet::new(points.to_vec());
    radial_in_place(&mut set, tolerance)?;
    Ok(set.into_indices())
}

/// Runs the radial distance sweep against a point set in place.
///
/// The set is compacted after every sentinel pass, so index arithmetic
/// stays dense at the cost of O(n) compaction work per sentinel step,
/// O(n²) worst case. Inputs at polyline scale keep this cheap.
///
/// # Errors
///
/// Returns [`ReduceError::InvalidTolerance`] if `tolerance` is negative;
/// the set is left untouched.
pub fn radial_in_place<P: Distance>(
    set: &mut PointSet<P>,
    tolerance: P::Scalar,
) -> Result<(), ReduceError> {
    if tolerance < P::Scalar::zero() {
        return Err(ReduceError::InvalidTolerance);
    }

    let mut sentinel = 0;
    while sentinel + 1 < set.len() {
        let mut test = sentinel + 1;
        // Marks don't shift indices, so `test` keeps addressing the next
        // untested point while the live count shrinks beneath it.
        while sentinel + 1 < set.len() && set.distance_between(sentinel, test)? < tolerance {
            set.mark_removed(test)?;
            test += 1;
        }
        set.reindex();
        sentinel += 1;
    }
    set.reindex();
    Ok(())
}
