//! Distance tables between key points.
//!
//! - [`DistanceMatrix`] — dense row-major distance table
//! - [`KeyPointMatrix`] — all-pairs shortest paths among a request's key points

mod key_point_matrix;
mod matrix;

pub use key_point_matrix::KeyPointMatrix;
pub use matrix::DistanceMatrix;
