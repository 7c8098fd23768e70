//! Collision-time solver
//!
//! Each vessel is surrounded by a circular safety envelope of radius half
//! its largest dimension. With both vessels moving at constant velocity,
//! the separation of their centres at time offset `α` (seconds) is
//! `|Δp + Δv·α|`, and the envelopes touch when that equals the combined
//! radius `r`:
//!
//! ```text
//! (Δv·Δv)·α² + 2(Δv·Δp)·α + (Δp·Δp − r²) = 0
//! ```

use super::{Times, Vector};
use crate::error::{InsufficientData, Side};
use crate::vessel::VesselPosition;

/// Size assumed for a vessel whose length or width is unknown
pub const DEFAULT_MAX_DIMENSION_METRES: f64 = 30.0;

fn envelope_radius(position: &VesselPosition) -> f64 {
    position
        .max_dimension_metres()
        .map(f64::from)
        .unwrap_or(DEFAULT_MAX_DIMENSION_METRES)
        / 2.0
}

impl VesselPosition {
    /// Times at which the safety envelopes of this vessel and `other` meet.
    ///
    /// `other` is first moved to this position's time so both are compared
    /// at the same instant. Returns:
    ///
    /// - `Err` when either vessel lacks the speed and course needed to
    ///   assess the pair, or `other` is anchored or moored
    /// - `Ok(None)` when the envelopes never meet, or meet so far off that
    ///   the time cannot be represented
    /// - `Ok(Some(Times::One(t)))` when they already overlap (`t` is this
    ///   position's time) or touch exactly once
    /// - `Ok(Some(Times::Two(..)))` with the two crossing times otherwise
    ///
    /// All times are epoch milliseconds and may lie in the past.
    pub fn intersection_times(
        &self,
        other: &VesselPosition,
    ) -> Result<Option<Times>, InsufficientData> {
        let velocity = self
            .velocity()
            .ok_or(InsufficientData::NoVelocity(Side::This))?;
        let other_velocity = other
            .velocity()
            .ok_or(InsufficientData::NoVelocity(Side::Other))?;
        let predicted = other
            .predict(self.time)
            .ok_or(InsufficientData::NoPrediction(Side::Other))?;

        let delta_v: Vector = velocity - other_velocity;
        let delta_p: Vector = self.position(self) - predicted.position(self);
        let r = envelope_radius(&predicted) + envelope_radius(self);

        let separation_squared = delta_p.dot(&delta_p);
        if separation_squared <= r * r {
            return Ok(Some(Times::One(predicted.time)));
        }

        let a = delta_v.dot(&delta_v);
        let b = 2.0 * delta_v.dot(&delta_p);
        let c = separation_squared - r * r;

        if a == 0.0 {
            return Ok(None);
        }
        let discriminant = b * b - 4.0 * a * c;
        if !a.is_finite() || !discriminant.is_finite() {
            log::debug!("{} / {}: non-finite coefficients", self.id, other.id);
            return Ok(None);
        }
        let times = if discriminant < 0.0 {
            None
        } else if discriminant == 0.0 {
            self.offset(-b / (2.0 * a)).map(Times::One)
        } else {
            let root = discriminant.sqrt();
            match (
                self.offset((-b + root) / (2.0 * a)),
                self.offset((-b - root) / (2.0 * a)),
            ) {
                (Some(first), Some(second)) => Some(Times::Two(first, second)),
                _ => None,
            }
        };
        log::trace!(
            "{} / {}: a={:.3} b={:.3} c={:.3} -> {:?}",
            self.id,
            other.id,
            a,
            b,
            c,
            times
        );
        Ok(times)
    }

    /// Absolute time `seconds` after this position's time, absent when it
    /// does not fit in epoch milliseconds
    fn offset(&self, seconds: f64) -> Option<i64> {
        let millis = (seconds * 1000.0).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return None;
        }
        self.time.checked_add(millis as i64)
    }
}
