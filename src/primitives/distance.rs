//! The distance capability required of point types.

use num_traits::Float;

/// Distance capability for point types used in reduction.
///
/// The reduction core never names a concrete point type; it only needs
/// to measure how far apart two points are. Any type implementing this
/// trait can be stored in a [`PointSet`](crate::reduce::PointSet) and
/// fed to a reduction strategy, regardless of dimension.
///
/// Implementations must be symmetric (`a.distance_to(b)` equals
/// `b.distance_to(a)`) and return zero iff the points are coincident.
pub trait Distance {
    /// Scalar type of the computed distance (`f32` or `f64`).
    type Scalar: Float;

    /// Computes the distance to another point.
    fn distance_to(&self, other: &Self) -> Self::Scalar;
}
