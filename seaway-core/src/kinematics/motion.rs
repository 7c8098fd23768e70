use super::Vector;
use crate::vessel::{check_coordinates, VesselPosition};

impl VesselPosition {
    /// Velocity over ground as (east, north) metres per second
    pub fn velocity(&self) -> Option<Vector> {
        let speed = self.speed_metres_per_second?;
        let course = self.cog_degrees?.to_radians();
        Some(Vector::new(speed * course.sin(), speed * course.cos()))
    }

    /// Extrapolate this position to `time` (epoch milliseconds) at constant
    /// speed and course.
    ///
    /// Absent when speed or course is unknown, for anchored or moored
    /// vessels, and when the track passes over a pole. Longitude wraps
    /// across the antimeridian. The result keeps this position's identity
    /// and message id.
    pub fn predict(&self, time: i64) -> Option<VesselPosition> {
        let speed = self.speed_metres_per_second?;
        let course = self.cog_degrees?.to_radians();
        if self.navigational_status.is_stationary() {
            return None;
        }

        let seconds = time.checked_sub(self.time)? as f64 / 1000.0;
        let lat = self.lat - speed / self.metres_per_degree_latitude() * seconds * course.cos();
        let lon = self.lon + speed / self.metres_per_degree_longitude() * seconds * course.sin();
        let lon = if (-180.0..=180.0).contains(&lon) {
            lon
        } else {
            (lon + 180.0).rem_euclid(360.0) - 180.0
        };
        if let Err(e) = check_coordinates(lat, lon) {
            log::trace!("{}: no prediction at {}: {}", self.id, time, e);
            return None;
        }

        Some(VesselPosition {
            lat,
            lon,
            time,
            ..self.clone()
        })
    }
}
