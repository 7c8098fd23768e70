use serde::Serialize;

/// When two vessels' safety envelopes meet
///
/// Values are epoch milliseconds. A single time means the vessels are
/// already inside each other's envelope, or just touch it. A pair holds
/// the two envelope crossings in no particular order; when both are in
/// the future they are the entry and exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<i64>")]
pub enum Times {
    One(i64),
    Two(i64, i64),
}

impl Times {
    pub fn earliest(&self) -> i64 {
        match *self {
            Times::One(t) => t,
            Times::Two(a, b) => a.min(b),
        }
    }

    pub fn latest(&self) -> i64 {
        match *self {
            Times::One(t) => t,
            Times::Two(a, b) => a.max(b),
        }
    }

    pub fn to_vec(&self) -> Vec<i64> {
        match *self {
            Times::One(t) => vec![t],
            Times::Two(a, b) => vec![a, b],
        }
    }
}

impl From<Times> for Vec<i64> {
    fn from(times: Times) -> Self {
        times.to_vec()
    }
}
