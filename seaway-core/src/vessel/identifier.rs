use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maritime Mobile Service Identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mmsi(pub u32);

impl fmt::Display for Mmsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

impl FromStr for Mmsi {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Mmsi)
    }
}

impl From<u32> for Mmsi {
    fn from(value: u32) -> Self {
        Mmsi(value)
    }
}

/// Identity of a vessel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Identifier {
    Mmsi(Mmsi),
    /// Any other stable key, e.g. a callsign
    Name(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Mmsi(mmsi) => write!(f, "{}", mmsi),
            Identifier::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<Mmsi> for Identifier {
    fn from(mmsi: Mmsi) -> Self {
        Identifier::Mmsi(mmsi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mmsi_display() {
        assert_eq!(Mmsi(2194005).to_string(), "002194005");
        assert_eq!(Identifier::from(Mmsi(305484000)).to_string(), "305484000");
        assert_eq!(Identifier::Name("V2EN3".into()).to_string(), "V2EN3");
    }

    #[test]
    fn test_mmsi_parse() {
        assert_eq!(" 305484000".parse::<Mmsi>().unwrap(), Mmsi(305484000));
        assert!("abc".parse::<Mmsi>().is_err());
    }

    #[test]
    fn test_identifier_equality() {
        assert_eq!(Identifier::from(Mmsi(1)), Identifier::Mmsi(Mmsi(1)));
        assert_ne!(Identifier::from(Mmsi(1)), Identifier::Name("1".into()));
    }
}
