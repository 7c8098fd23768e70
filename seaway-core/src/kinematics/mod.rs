//! Vessel kinematics
//!
//! Constant-velocity extrapolation of [`VesselPosition`](crate::VesselPosition)s
//! and the collision-time solver built on it. All geometry happens in a flat
//! local tangent plane centred on a reference position:
//!
//! - x: metres east of the reference
//! - y: metres north of the reference
//!
//! This is accurate enough over the few nautical miles where collision risk
//! matters; it is not a geodesic model.

mod collision;
mod motion;
mod times;

pub use collision::DEFAULT_MAX_DIMENSION_METRES;
pub use times::Times;

/// Planar (east, north) vector in metres, or metres per second for velocities
pub type Vector = nalgebra::Vector2<f64>;
