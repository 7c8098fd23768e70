//! Tag block parsing
//!
//! Receivers may prefix a sentence with a backslash-delimited tag block
//! carrying metadata about the reception:
//!
//! ```text
//! \g:1-2-1234,s:r3669961,c:1120959341*51\$BSVDM,2,2,5,B,00000000008,2*33
//! ```
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `c` | Unix time of reception in seconds |
//! | `g` | Fragment group: `count-index-id` |
//! | `s` | Source station identifier |
//!
//! The tag block's own `*hh` checksum is stripped but not verified; many
//! receivers in the field write garbage there.

use serde::Serialize;

use crate::error::ParseError;

/// Opening and closing delimiter of a tag block
pub const TAG_BLOCK_DELIMITER: char = '\\';

/// Fragment group descriptor from the `g` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentGroup {
    /// Total number of sentences in the group
    pub count: u32,
    /// Position of this sentence in the group (1-based)
    pub index: u32,
    /// Identifier shared by every sentence of the group
    pub id: u32,
}

/// Parsed tag block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagBlock {
    /// Reception time in epoch milliseconds (`c` key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    /// Fragment group (`g` key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<FragmentGroup>,

    /// Source station (`s` key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl TagBlock {
    /// Split a raw line into its tag block (if any) and the sentence that
    /// follows it.
    ///
    /// A line that does not start with `\` has no tag block and is returned
    /// whole as the remainder. Inside the block a doubled `\\` is an escaped
    /// backslash, not the closing delimiter.
    pub fn split(line: &str) -> Result<(Option<TagBlock>, &str), ParseError> {
        let Some(rest) = line.strip_prefix(TAG_BLOCK_DELIMITER) else {
            return Ok((None, line));
        };
        let end = closing_delimiter(rest).ok_or(ParseError::UnterminatedTagBlock)?;
        let block = Self::parse(&rest[..end])?;
        Ok((Some(block), &rest[end + 1..]))
    }

    /// Parse the content between the two delimiters, checksum included
    pub fn parse(content: &str) -> Result<TagBlock, ParseError> {
        let content = match content.find('*') {
            Some(star) => &content[..star],
            None => content,
        };

        let mut block = TagBlock::default();
        for token in content.split(',').filter(|t| !t.is_empty()) {
            let Some((key, value)) = token.split_once(':') else {
                log::trace!("tag block: ignoring token without key {:?}", token);
                continue;
            };
            match key {
                "c" => block.time = Some(parse_time(value)?),
                "g" => block.group = parse_group(value),
                "s" => block.source = Some(value.to_string()),
                _ => log::trace!("tag block: ignoring key {:?}", key),
            }
        }
        Ok(block)
    }
}

/// Byte offset of the first unescaped delimiter in `content`
fn closing_delimiter(content: &str) -> Option<usize> {
    let bytes = content.as_bytes();
    let delimiter = TAG_BLOCK_DELIMITER as u8;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == delimiter {
            if bytes.get(i + 1) != Some(&delimiter) {
                return Some(i);
            }
            i += 1;
        }
        i += 1;
    }
    None
}

fn parse_time(value: &str) -> Result<i64, ParseError> {
    value
        .parse::<i64>()
        .ok()
        .and_then(|seconds| seconds.checked_mul(1000))
        .ok_or_else(|| ParseError::InvalidTimestamp(value.to_string()))
}

fn parse_group(value: &str) -> Option<FragmentGroup> {
    let parts: Vec<&str> = value.split('-').collect();
    let group = match parts.as_slice() {
        [count, index, id] => match (count.parse(), index.parse(), id.parse()) {
            (Ok(count), Ok(index), Ok(id)) => Some(FragmentGroup { count, index, id }),
            _ => None,
        },
        _ => None,
    };
    if group.is_none() {
        log::debug!("tag block: ignoring unparseable group {:?}", value);
    }
    group
}
