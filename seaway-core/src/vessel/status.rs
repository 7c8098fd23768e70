//! Vessel class and navigational status

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// AIS transponder class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum VesselClass {
    A,
    B,
}

/// Navigational status as reported in AIS position reports
///
/// Discriminants are the AIS wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum NavigationalStatus {
    UnderWayUsingEngine = 0,
    AtAnchor = 1,
    NotUnderCommand = 2,
    RestrictedManoeuvrability = 3,
    ConstrainedByDraught = 4,
    Moored = 5,
    Aground = 6,
    EngagedInFishing = 7,
    UnderWaySailing = 8,
    ReservedHsc = 9,
    ReservedWig = 10,
    PowerDrivenTowingAstern = 11,
    PowerDrivenPushingAhead = 12,
    Reserved = 13,
    AisSartActive = 14,
    Unknown = 15,
}

impl Default for NavigationalStatus {
    fn default() -> Self {
        NavigationalStatus::Unknown
    }
}

impl NavigationalStatus {
    /// Map an AIS status code; anything outside 0-15 is `Unknown`
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => NavigationalStatus::UnderWayUsingEngine,
            1 => NavigationalStatus::AtAnchor,
            2 => NavigationalStatus::NotUnderCommand,
            3 => NavigationalStatus::RestrictedManoeuvrability,
            4 => NavigationalStatus::ConstrainedByDraught,
            5 => NavigationalStatus::Moored,
            6 => NavigationalStatus::Aground,
            7 => NavigationalStatus::EngagedInFishing,
            8 => NavigationalStatus::UnderWaySailing,
            9 => NavigationalStatus::ReservedHsc,
            10 => NavigationalStatus::ReservedWig,
            11 => NavigationalStatus::PowerDrivenTowingAstern,
            12 => NavigationalStatus::PowerDrivenPushingAhead,
            13 => NavigationalStatus::Reserved,
            14 => NavigationalStatus::AisSartActive,
            _ => NavigationalStatus::Unknown,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Anchored and moored vessels are never extrapolated
    pub fn is_stationary(self) -> bool {
        matches!(self, NavigationalStatus::AtAnchor | NavigationalStatus::Moored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_codes_round_trip() {
        for code in 0..=15u8 {
            assert_eq!(NavigationalStatus::from_code(code).code(), code);
        }
        assert_eq!(NavigationalStatus::from_code(200), NavigationalStatus::Unknown);
    }

    #[test]
    fn test_stationary() {
        assert!(NavigationalStatus::AtAnchor.is_stationary());
        assert!(NavigationalStatus::Moored.is_stationary());
        assert!(!NavigationalStatus::Aground.is_stationary());
        assert!(!NavigationalStatus::UnderWayUsingEngine.is_stationary());
    }

    #[test]
    fn test_names() {
        assert_eq!(NavigationalStatus::AtAnchor.to_string(), "AT_ANCHOR");
        assert_eq!(
            NavigationalStatus::from_str("MOORED").unwrap(),
            NavigationalStatus::Moored
        );
        assert_eq!(VesselClass::from_str("B").unwrap(), VesselClass::B);
        assert_eq!(
            serde_json::to_string(&NavigationalStatus::UnderWaySailing).unwrap(),
            "\"UNDER_WAY_SAILING\""
        );
    }
}
