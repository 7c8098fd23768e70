//! NMEA 0183 line parsing
//!
//! A received AIS line has the shape
//!
//! ```text
//! [\key:value[,key:value...]*hh\]$FMT,field1,field2,...,fieldN*hh
//! ```
//!
//! The optional leading segment is the tag block ([`TagBlock`]); the rest is
//! the sentence proper ([`Sentence`]). Both parsers are pure functions over
//! `&str` and never panic on malformed input.

pub mod checksum;
mod sentence;
mod tag_block;
mod talker;

pub use sentence::{Sentence, MIN_FIELDS};
pub use tag_block::{FragmentGroup, TagBlock, TAG_BLOCK_DELIMITER};
pub use talker::{Talker, TalkerTable};
