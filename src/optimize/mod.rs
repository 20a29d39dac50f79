//! Waypoint visiting-order optimization.
//!
//! - [`optimize_order`] — exact bitmask DP (Held-Karp), O(2ⁿ·n²)
//! - [`exhaustive_order`] — brute force over all permutations, O(n!·n);
//!   a reference for validating the DP, not for production use

mod exhaustive;
mod held_karp;

pub use exhaustive::{exhaustive_order, permutations, Permutations};
pub use held_karp::{optimize_order, WaypointOrder, MAX_DP_WAYPOINTS};
