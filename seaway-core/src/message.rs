//! AIS messages
//!
//! [`AisMessage`] joins the optional tag block and the sentence of one line
//! and exposes the AIS-specific fields of the sentence by name. The
//! six-bit payload itself is left undecoded.

use serde::Serialize;

use crate::error::ParseError;
use crate::nmea::{Sentence, TagBlock, Talker, TalkerTable};

const FRAGMENT_COUNT: usize = 1;
const FRAGMENT_INDEX: usize = 2;
const SEQUENTIAL_MESSAGE_ID: usize = 3;
const CHANNEL: usize = 4;
const PAYLOAD: usize = 5;
const FILL_BITS: usize = 6;

/// One parsed line: optional tag block plus sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AisMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_block: Option<TagBlock>,
    sentence: Sentence,
    fragment_count: u32,
    fragment_index: u32,
}

/// A value paired with the tag-block time it was received at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timestamped<T> {
    /// Epoch milliseconds
    pub time: i64,
    pub message: T,
}

impl AisMessage {
    /// Parse a raw line using the standard talker table
    pub fn parse(line: &str) -> Result<AisMessage, ParseError> {
        Self::parse_with(line, TalkerTable::standard())
    }

    /// Parse a raw line, resolving the talker through `talkers`
    pub fn parse_with(line: &str, talkers: &TalkerTable) -> Result<AisMessage, ParseError> {
        let (tag_block, rest) = TagBlock::split(line)?;
        let sentence = Sentence::parse_with(rest, talkers)?;
        let fragment_count = parse_field(&sentence, FRAGMENT_COUNT)?;
        let fragment_index = parse_field(&sentence, FRAGMENT_INDEX)?;
        Ok(AisMessage {
            tag_block,
            sentence,
            fragment_count,
            fragment_index,
        })
    }

    fn item(&self, index: usize) -> &str {
        self.sentence.field(index).unwrap_or_default()
    }

    pub fn tag_block(&self) -> Option<&TagBlock> {
        self.tag_block.as_ref()
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    /// Radio channel, `A` or `B`
    pub fn channel(&self) -> &str {
        self.item(CHANNEL)
    }

    pub fn format(&self) -> &str {
        self.sentence.format()
    }

    pub fn fragment_count(&self) -> u32 {
        self.fragment_count
    }

    pub fn fragment_index(&self) -> u32 {
        self.fragment_index
    }

    /// Sequence id linking fragments; empty for single-sentence messages
    pub fn sequential_message_id(&self) -> &str {
        self.item(SEQUENTIAL_MESSAGE_ID)
    }

    /// Armoured six-bit payload
    pub fn payload(&self) -> &str {
        self.item(PAYLOAD)
    }

    pub fn fill_bits(&self) -> &str {
        self.item(FILL_BITS)
    }

    pub fn checksum(&self) -> &str {
        self.sentence.checksum()
    }

    pub fn talker(&self) -> Talker {
        self.sentence.talker()
    }

    /// Reception time in epoch milliseconds, if the line had a tag block
    /// with a `c` key
    pub fn time(&self) -> Option<i64> {
        self.tag_block.as_ref().and_then(|block| block.time)
    }

    /// This message paired with its reception time, if it has one
    pub fn timestamped(&self) -> Option<Timestamped<&AisMessage>> {
        self.time().map(|time| Timestamped {
            time,
            message: self,
        })
    }
}

fn parse_field(sentence: &Sentence, index: usize) -> Result<u32, ParseError> {
    let value = sentence.field(index).unwrap_or_default();
    value.parse().map_err(|_| ParseError::InvalidField {
        index,
        value: value.to_string(),
    })
}
