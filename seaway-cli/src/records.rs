//! Decoded vessel positions read from CSV
//!
//! The six-bit payload decoder lives upstream; this reads what it produced:
//!
//! ```text
//! mmsi,time,lat,lon,sog_knots,cog,heading,length,width,class,nav_status,ship_type
//! 305484000,1498176263000,56.134323,11.474578,6.8,268.1,264,129,24,A,0,70
//! ```
//!
//! Empty cells are absent values. AIS "not available" markers (course 360,
//! heading 511, speed 102.3 knots) are treated as absent too.

use std::io::Read;

use anyhow::Context;
use serde::Deserialize;
use seaway_core::{Mmsi, NavigationalStatus, PreconditionError, VesselClass, VesselPosition};

pub const KNOTS_TO_METRES_PER_SECOND: f64 = 1852.0 / 3600.0;

const SPEED_NOT_AVAILABLE_KNOTS: f64 = 102.3;
const COURSE_NOT_AVAILABLE: f64 = 360.0;
const HEADING_NOT_AVAILABLE: f64 = 511.0;

#[derive(Debug, Clone, Deserialize)]
pub struct PositionRecord {
    pub mmsi: u32,
    /// Epoch milliseconds
    pub time: i64,
    pub lat: f64,
    pub lon: f64,
    pub sog_knots: Option<f64>,
    pub cog: Option<f64>,
    pub heading: Option<f64>,
    pub length: Option<u32>,
    pub width: Option<u32>,
    pub class: VesselClass,
    pub nav_status: Option<u8>,
    pub ship_type: Option<u8>,
}

impl PositionRecord {
    pub fn into_position(self) -> Result<VesselPosition, PreconditionError> {
        let speed = self
            .sog_knots
            .filter(|&knots| knots < SPEED_NOT_AVAILABLE_KNOTS)
            .map(|knots| knots * KNOTS_TO_METRES_PER_SECOND);
        let status = self
            .nav_status
            .map(NavigationalStatus::from_code)
            .unwrap_or_default();

        VesselPosition::builder()
            .id(Mmsi(self.mmsi))
            .time(self.time)
            .lat(self.lat)
            .lon(self.lon)
            .speed_metres_per_second(speed)
            .cog_degrees(self.cog.filter(|&cog| cog < COURSE_NOT_AVAILABLE))
            .heading_degrees(self.heading.filter(|&h| h < HEADING_NOT_AVAILABLE))
            .length_metres(self.length)
            .width_metres(self.width)
            .cls(self.class)
            .navigational_status(status)
            .ship_type(self.ship_type)
            .build()
    }
}

/// Read all rows of a position CSV.
///
/// Rows that cannot be deserialized abort the read; rows that deserialize
/// but describe an impossible position are logged, skipped and counted.
pub fn read_positions<R: Read>(reader: R) -> anyhow::Result<(Vec<VesselPosition>, usize)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut positions = Vec::new();
    let mut skipped = 0;
    for (row, result) in rdr.deserialize::<PositionRecord>().enumerate() {
        let record = result.with_context(|| format!("row {}", row + 1))?;
        let mmsi = record.mmsi;
        match record.into_position() {
            Ok(position) => positions.push(position),
            Err(e) => {
                log::warn!("row {} (mmsi {}): {}", row + 1, mmsi, e);
                skipped += 1;
            }
        }
    }
    Ok((positions, skipped))
}
