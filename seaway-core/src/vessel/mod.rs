//! Vessel state
//!
//! A [`VesselPosition`] is an immutable snapshot of one vessel at one
//! instant, assembled from already-decoded AIS values through a
//! [`VesselPositionBuilder`].

mod identifier;
mod position;
mod status;

pub use identifier::{Identifier, Mmsi};
pub use position::{
    VesselPosition, VesselPositionBuilder, EARTH_RADIUS_KM, METRES_PER_DEGREE_LATITUDE,
};
pub(crate) use position::check_coordinates;
pub use status::{NavigationalStatus, VesselClass};
