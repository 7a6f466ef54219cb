//! reducum - Point-set reduction algorithms
//!
//! Polylines often carry far more vertices than their shape needs. This
//! library reduces an ordered point sequence to a subsequence that still
//! approximates the original curve within a caller-supplied tolerance.

pub mod error;
pub mod primitives;
pub mod reduce;

pub use error::ReduceError;
pub use primitives::{Distance, Point2, Point3};
pub use reduce::PointSet;
