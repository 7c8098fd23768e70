//! Pairwise collision-risk assessment

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use seaway_core::{Identifier, Times, VesselPosition};

/// Two vessels whose safety envelopes meet within the horizon
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    pub this: Identifier,
    pub other: Identifier,
    /// Reference time of `this`, epoch milliseconds
    pub reference_time: i64,
    pub times: Times,
}

impl Encounter {
    /// Seconds from the reference time until the envelopes first meet,
    /// zero if they already overlap
    pub fn seconds_until(&self) -> f64 {
        self.times.earliest().saturating_sub(self.reference_time).max(0) as f64 / 1000.0
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub vessels: usize,
    pub pairs: usize,
    /// Pairs where neither vessel could be used as the reference
    pub insufficient: usize,
    pub encounters: Vec<Encounter>,
}

impl fmt::Display for RiskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.encounters {
            let at = DateTime::<Utc>::from_timestamp_millis(e.times.earliest())
                .map(|t| t.to_rfc3339())
                .unwrap_or_default();
            writeln!(
                f,
                "{} / {}: envelopes meet in {:.0}s at {}",
                e.this,
                e.other,
                e.seconds_until(),
                at
            )?;
        }
        write!(
            f,
            "{} vessels, {} pairs, {} encounters, {} pairs with insufficient data",
            self.vessels,
            self.pairs,
            self.encounters.len(),
            self.insufficient
        )
    }
}

/// Assess every unordered pair of distinct vessels in `positions`.
///
/// Each pair is solved with the first vessel as the reference; if that
/// vessel lacks the data to be one, the pair is retried the other way
/// round. Encounters entirely in the past, or starting later than
/// `horizon_seconds` after the reference time, are dropped.
pub fn assess(positions: &[VesselPosition], horizon_seconds: u64) -> RiskReport {
    let horizon_millis = i64::try_from(horizon_seconds)
        .unwrap_or(i64::MAX)
        .saturating_mul(1000);
    let mut report = RiskReport {
        vessels: positions.len(),
        ..Default::default()
    };

    for (i, a) in positions.iter().enumerate() {
        for b in &positions[i + 1..] {
            if a.id() == b.id() {
                continue;
            }
            report.pairs += 1;

            let (this, other, times) = match a.intersection_times(b) {
                Ok(times) => (a, b, times),
                Err(first) => match b.intersection_times(a) {
                    Ok(times) => (b, a, times),
                    Err(second) => {
                        log::debug!("{} / {}: {}; {}", a.id(), b.id(), first, second);
                        report.insufficient += 1;
                        continue;
                    }
                },
            };
            let Some(times) = times else {
                continue;
            };

            let reference_time = this.time();
            if times.latest() < reference_time
                || times.earliest() > reference_time.saturating_add(horizon_millis)
            {
                log::trace!("{} / {}: {:?} outside horizon", this.id(), other.id(), times);
                continue;
            }
            report.encounters.push(Encounter {
                this: this.id().clone(),
                other: other.id().clone(),
                reference_time,
                times,
            });
        }
    }

    report
        .encounters
        .sort_by(|x, y| x.seconds_until().total_cmp(&y.seconds_until()));
    log::info!(
        "{} pairs assessed, {} encounters",
        report.pairs,
        report.encounters.len()
    );
    report
}
