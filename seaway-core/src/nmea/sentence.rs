//! Sentence parsing
//!
//! Validates and tokenizes the comma-delimited body of an NMEA sentence:
//!
//! ```text
//! !AIVDM,1,1,,B,13b2AH8000bkvNajJ=1ov2C>25`4,0*0F
//! ^----^ ^ ^ ^ ^ ^-------------------------^ ^ ^^
//! format | | | |          payload           | checksum
//!   fragment count / index / sequence id / channel / fill bits
//! ```

use serde::Serialize;

use super::checksum;
use super::talker::{Talker, TalkerTable};
use crate::error::ParseError;

/// Minimum number of comma-separated fields, format token included
pub const MIN_FIELDS: usize = 7;

/// A validated NMEA sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    /// All comma-separated tokens; the first is the format token
    items: Vec<String>,
    /// Declared checksum, exactly as written
    checksum: String,
    talker: Talker,
}

impl Sentence {
    /// Parse using the standard talker table
    pub fn parse(line: &str) -> Result<Sentence, ParseError> {
        Self::parse_with(line, TalkerTable::standard())
    }

    /// Parse, resolving the talker through `talkers`
    pub fn parse_with(line: &str, talkers: &TalkerTable) -> Result<Sentence, ParseError> {
        let line = line.trim_end();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }
        if !line.starts_with(['$', '!']) {
            return Err(ParseError::MissingDelimiter);
        }

        let star = line.rfind('*').ok_or(ParseError::MissingChecksum)?;
        let declared = &line[star + 1..];
        let declared_value = checksum::parse(declared)
            .ok_or_else(|| ParseError::InvalidChecksum(declared.to_string()))?;

        let items: Vec<String> = line[..star].split(',').map(str::to_string).collect();
        if items.len() < MIN_FIELDS {
            return Err(ParseError::TooFewFields {
                expected: MIN_FIELDS,
                found: items.len(),
            });
        }

        // Everything between the delimiter and '*'
        let computed = checksum::compute(&line[1..star]);
        if computed != declared_value {
            return Err(ParseError::ChecksumMismatch {
                declared: declared.to_string(),
                computed: format!("{:02X}", computed),
            });
        }

        let talker = talkers.resolve(&items[0]);
        Ok(Sentence {
            items,
            checksum: declared.to_string(),
            talker,
        })
    }

    /// Format token including its delimiter, e.g. `!AIVDM`
    pub fn format(&self) -> &str {
        &self.items[0]
    }

    /// All tokens, format token first
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Token at `index`, where index 0 is the format token
    pub fn field(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn talker(&self) -> Talker {
        self.talker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let s = Sentence::parse("$BSVDM,2,2,5,B,00000000008,2*33").unwrap();
        assert_eq!(s.format(), "$BSVDM");
        assert_eq!(s.items().len(), 7);
        assert_eq!(s.field(4), Some("B"));
        assert_eq!(s.field(7), None);
        assert_eq!(s.checksum(), "33");
        assert_eq!(s.talker(), Talker::Unknown);
    }

    #[test]
    fn test_lowercase_checksum_and_line_ending() {
        let s = Sentence::parse("!AIVDM,1,1,,B,13b2AH8000bkvNajJ=1ov2C>25`4,0*0f\r\n").unwrap();
        assert_eq!(s.checksum(), "0f");
        assert_eq!(s.talker(), Talker::MobileStation);
        assert_eq!(s.field(3), Some(""));
    }

    #[test]
    fn test_empty() {
        assert_eq!(Sentence::parse(""), Err(ParseError::Empty));
        assert_eq!(Sentence::parse("\r\n"), Err(ParseError::Empty));
    }

    #[test]
    fn test_missing_delimiter() {
        assert_eq!(
            Sentence::parse("BSVDM,2,2,5,B,00000000008,2*33"),
            Err(ParseError::MissingDelimiter)
        );
    }

    #[test]
    fn test_missing_checksum() {
        assert_eq!(
            Sentence::parse("$BSVDM,2,2,5,B,00000000008,2"),
            Err(ParseError::MissingChecksum)
        );
    }

    #[test]
    fn test_invalid_checksum() {
        assert_eq!(
            Sentence::parse("$BSVDM,2,2,5,B,00000000008,2*3"),
            Err(ParseError::InvalidChecksum("3".to_string()))
        );
        assert_eq!(
            Sentence::parse("$BSVDM,2,2,5,B,00000000008,2*3G"),
            Err(ParseError::InvalidChecksum("3G".to_string()))
        );
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(
            Sentence::parse("$BSVDM,2,2*4E"),
            Err(ParseError::TooFewFields {
                expected: 7,
                found: 3
            })
        );
    }

    #[test]
    fn test_checksum_mismatch() {
        assert_eq!(
            Sentence::parse("$BSVDM,2,2,5,B,00000000008,2*34"),
            Err(ParseError::ChecksumMismatch {
                declared: "34".to_string(),
                computed: "33".to_string()
            })
        );
    }

    #[test]
    fn test_custom_talker_table() {
        let table = TalkerTable::default().with("BS", Talker::BaseStation);
        let s = Sentence::parse_with("$BSVDM,2,2,5,B,00000000008,2*33", &table).unwrap();
        assert_eq!(s.talker(), Talker::BaseStation);
    }
}
