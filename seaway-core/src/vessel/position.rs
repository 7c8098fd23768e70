//! Vessel position snapshots
//!
//! Positions are built once through [`VesselPositionBuilder`], which assigns
//! a process-wide unique `message_id`, and never change afterwards.
//! Derived snapshots (see [`VesselPosition::predict`]) are new values.

use std::f64::consts::PI;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::{Identifier, NavigationalStatus, VesselClass};
use crate::error::PreconditionError;
use crate::kinematics::Vector;

/// Earth radius used for the longitude scale factor
pub const EARTH_RADIUS_KM: f64 = 6378.1;

/// Flat-earth latitude scale; ellipsoidal flattening is ignored
pub const METRES_PER_DEGREE_LATITUDE: f64 = 111321.543;

static MESSAGE_ID: AtomicU64 = AtomicU64::new(0);

fn next_message_id() -> u64 {
    MESSAGE_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// State of one vessel at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselPosition {
    pub(crate) message_id: u64,
    pub(crate) id: Identifier,
    pub(crate) lat: f64,
    pub(crate) lon: f64,
    pub(crate) length_metres: Option<u32>,
    pub(crate) width_metres: Option<u32>,
    pub(crate) cog_degrees: Option<f64>,
    pub(crate) heading_degrees: Option<f64>,
    pub(crate) speed_metres_per_second: Option<f64>,
    pub(crate) cls: VesselClass,
    pub(crate) navigational_status: NavigationalStatus,
    /// Epoch milliseconds
    pub(crate) time: i64,
    pub(crate) ship_type: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) position_ais_nmea: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) ship_static_ais_nmea: Option<String>,
}

impl VesselPosition {
    pub fn builder() -> VesselPositionBuilder {
        VesselPositionBuilder::default()
    }

    pub fn message_id(&self) -> u64 {
        self.message_id
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn length_metres(&self) -> Option<u32> {
        self.length_metres
    }

    pub fn width_metres(&self) -> Option<u32> {
        self.width_metres
    }

    /// Larger of length and width; absent unless both are known
    pub fn max_dimension_metres(&self) -> Option<u32> {
        self.length_metres
            .zip(self.width_metres)
            .map(|(length, width)| length.max(width))
    }

    pub fn cog_degrees(&self) -> Option<f64> {
        self.cog_degrees
    }

    pub fn heading_degrees(&self) -> Option<f64> {
        self.heading_degrees
    }

    pub fn speed_metres_per_second(&self) -> Option<f64> {
        self.speed_metres_per_second
    }

    pub fn cls(&self) -> VesselClass {
        self.cls
    }

    pub fn navigational_status(&self) -> NavigationalStatus {
        self.navigational_status
    }

    /// Epoch milliseconds
    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn ship_type(&self) -> Option<u8> {
        self.ship_type
    }

    pub fn position_ais_nmea(&self) -> Option<&str> {
        self.position_ais_nmea.as_deref()
    }

    pub fn ship_static_ais_nmea(&self) -> Option<&str> {
        self.ship_static_ais_nmea.as_deref()
    }

    /// Metres per degree of longitude at this position's latitude
    pub fn metres_per_degree_longitude(&self) -> f64 {
        PI / 180.0 * EARTH_RADIUS_KM * 1000.0 * self.lat.to_radians().cos()
    }

    pub fn metres_per_degree_latitude(&self) -> f64 {
        METRES_PER_DEGREE_LATITUDE
    }

    /// Planar (east, north) offset in metres of this position from
    /// `relative_to`, in the tangent plane centred on `relative_to`
    pub fn position(&self, relative_to: &VesselPosition) -> Vector {
        let mut dlon = self.lon - relative_to.lon;
        if dlon > 180.0 {
            dlon -= 360.0;
        } else if dlon < -180.0 {
            dlon += 360.0;
        }
        let x = dlon * relative_to.metres_per_degree_longitude();
        let y = (self.lat - relative_to.lat) * relative_to.metres_per_degree_latitude();
        Vector::new(x, y)
    }
}

/// Field-by-field assembly of a [`VesselPosition`]
///
/// Nothing is checked until [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct VesselPositionBuilder {
    id: Option<Identifier>,
    lat: Option<f64>,
    lon: Option<f64>,
    length_metres: Option<u32>,
    width_metres: Option<u32>,
    cog_degrees: Option<f64>,
    heading_degrees: Option<f64>,
    speed_metres_per_second: Option<f64>,
    cls: Option<VesselClass>,
    navigational_status: Option<NavigationalStatus>,
    time: Option<i64>,
    ship_type: Option<u8>,
    position_ais_nmea: Option<String>,
    ship_static_ais_nmea: Option<String>,
}

impl VesselPositionBuilder {
    pub fn id(mut self, id: impl Into<Identifier>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn lat(mut self, lat: f64) -> Self {
        self.lat = Some(lat);
        self
    }

    pub fn lon(mut self, lon: f64) -> Self {
        self.lon = Some(lon);
        self
    }

    pub fn length_metres(mut self, length: Option<u32>) -> Self {
        self.length_metres = length;
        self
    }

    pub fn width_metres(mut self, width: Option<u32>) -> Self {
        self.width_metres = width;
        self
    }

    pub fn cog_degrees(mut self, cog: Option<f64>) -> Self {
        self.cog_degrees = cog;
        self
    }

    pub fn heading_degrees(mut self, heading: Option<f64>) -> Self {
        self.heading_degrees = heading;
        self
    }

    pub fn speed_metres_per_second(mut self, speed: Option<f64>) -> Self {
        self.speed_metres_per_second = speed;
        self
    }

    pub fn cls(mut self, cls: VesselClass) -> Self {
        self.cls = Some(cls);
        self
    }

    pub fn navigational_status(mut self, status: NavigationalStatus) -> Self {
        self.navigational_status = Some(status);
        self
    }

    /// Epoch milliseconds
    pub fn time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn ship_type(mut self, ship_type: Option<u8>) -> Self {
        self.ship_type = ship_type;
        self
    }

    pub fn position_ais_nmea(mut self, nmea: Option<String>) -> Self {
        self.position_ais_nmea = nmea;
        self
    }

    pub fn ship_static_ais_nmea(mut self, nmea: Option<String>) -> Self {
        self.ship_static_ais_nmea = nmea;
        self
    }

    /// Validate and freeze the position, drawing a fresh message id.
    ///
    /// Fails if identity, position, class, navigational status or time
    /// was never set, if lat/lon are outside [-90, 90] / [-180, 180], or
    /// if speed, course or heading is NaN or infinite.
    pub fn build(self) -> Result<VesselPosition, PreconditionError> {
        let id = self.id.ok_or(PreconditionError::MissingField("id"))?;
        let lat = self.lat.ok_or(PreconditionError::MissingField("lat"))?;
        let lon = self.lon.ok_or(PreconditionError::MissingField("lon"))?;
        let cls = self.cls.ok_or(PreconditionError::MissingField("cls"))?;
        let navigational_status = self
            .navigational_status
            .ok_or(PreconditionError::MissingField("navigational_status"))?;
        let time = self.time.ok_or(PreconditionError::MissingField("time"))?;

        check_coordinates(lat, lon)?;
        check_finite("speed_metres_per_second", self.speed_metres_per_second)?;
        check_finite("cog_degrees", self.cog_degrees)?;
        check_finite("heading_degrees", self.heading_degrees)?;

        Ok(VesselPosition {
            message_id: next_message_id(),
            id,
            lat,
            lon,
            length_metres: self.length_metres,
            width_metres: self.width_metres,
            cog_degrees: self.cog_degrees,
            heading_degrees: self.heading_degrees,
            speed_metres_per_second: self.speed_metres_per_second,
            cls,
            navigational_status,
            time,
            ship_type: self.ship_type,
            position_ais_nmea: self.position_ais_nmea,
            ship_static_ais_nmea: self.ship_static_ais_nmea,
        })
    }
}

/// Latitude in [-90, 90] and longitude in [-180, 180]
pub(crate) fn check_coordinates(lat: f64, lon: f64) -> Result<(), PreconditionError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(PreconditionError::LatitudeOutOfRange(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(PreconditionError::LongitudeOutOfRange(lon));
    }
    Ok(())
}

fn check_finite(field: &'static str, value: Option<f64>) -> Result<(), PreconditionError> {
    match value {
        Some(v) if !v.is_finite() => Err(PreconditionError::NonFinite(field, v)),
        _ => Ok(()),
    }
}
