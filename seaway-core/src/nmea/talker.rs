//! Talker identification
//!
//! The two characters after the leading `$`/`!` of a sentence name the kind
//! of station that produced it. Recognition goes through a [`TalkerTable`]
//! so that new or receiver-specific codes can be mapped without touching
//! the [`Talker`] enum.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Station type that emitted a sentence
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Talker {
    /// NMEA 4.0 base AIS station
    BaseStation,
    /// NMEA 4.0 dependent AIS base station
    DependentBaseStation,
    /// Mobile AIS station
    MobileStation,
    /// NMEA 4.0 aid to navigation AIS station
    AidToNavigation,
    /// NMEA 4.0 AIS receiving station
    ReceivingStation,
    /// NMEA 4.0 limited base station
    LimitedBaseStation,
    /// NMEA 4.0 AIS transmitting station
    TransmittingStation,
    /// NMEA 4.0 repeater AIS station
    RepeaterStation,
    /// Physical shore AIS station
    ShoreStation,
    /// Code not in the table
    Unknown,
}

impl Talker {
    /// Standard two-letter code, `None` for [`Talker::Unknown`]
    pub fn code(self) -> Option<&'static str> {
        match self {
            Talker::BaseStation => Some("AB"),
            Talker::DependentBaseStation => Some("AD"),
            Talker::MobileStation => Some("AI"),
            Talker::AidToNavigation => Some("AN"),
            Talker::ReceivingStation => Some("AR"),
            Talker::LimitedBaseStation => Some("AS"),
            Talker::TransmittingStation => Some("AT"),
            Talker::RepeaterStation => Some("AX"),
            Talker::ShoreStation => Some("SA"),
            Talker::Unknown => None,
        }
    }
}

static DEFAULT_TABLE: Lazy<TalkerTable> = Lazy::new(TalkerTable::default);

/// Lookup table from two-letter code to [`Talker`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TalkerTable {
    codes: HashMap<String, Talker>,
}

impl Default for TalkerTable {
    /// Table with every standard code
    fn default() -> Self {
        let codes = Talker::iter()
            .filter_map(|talker| talker.code().map(|code| (code.to_string(), talker)))
            .collect();
        TalkerTable { codes }
    }
}

impl TalkerTable {
    /// Shared table with the standard codes
    pub fn standard() -> &'static TalkerTable {
        &DEFAULT_TABLE
    }

    /// Table with no codes at all; everything resolves to `Unknown`
    pub fn empty() -> Self {
        TalkerTable {
            codes: HashMap::new(),
        }
    }

    /// Map `code` to `talker`, replacing any earlier mapping
    pub fn insert(&mut self, code: impl Into<String>, talker: Talker) -> Option<Talker> {
        self.codes.insert(code.into(), talker)
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, code: impl Into<String>, talker: Talker) -> Self {
        self.insert(code, talker);
        self
    }

    /// Add every mapping of `other`, overriding codes present in both
    pub fn extend(&mut self, other: TalkerTable) {
        self.codes.extend(other.codes);
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Look up an exact two-letter code
    pub fn lookup(&self, code: &str) -> Talker {
        self.codes.get(code).copied().unwrap_or(Talker::Unknown)
    }

    /// Resolve the talker of a format token such as `!AIVDM`.
    ///
    /// Uses the two characters after the leading delimiter; tokens too short
    /// to hold a code resolve to [`Talker::Unknown`].
    pub fn resolve(&self, format: &str) -> Talker {
        match format.get(1..3) {
            Some(code) => self.lookup(code),
            None => Talker::Unknown,
        }
    }

    /// Load a table from a JSON object such as `{"BS": "BaseStation"}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
