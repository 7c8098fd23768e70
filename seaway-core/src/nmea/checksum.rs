//! NMEA checksum helpers
//!
//! The checksum is the XOR of every byte between the leading `$`/`!` and
//! the `*` delimiter, written as two hex digits.

/// XOR all bytes of `body`
pub fn compute(body: &str) -> u8 {
    body.bytes().fold(0, |acc, b| acc ^ b)
}

/// Checksum of `body` as two uppercase hex digits
pub fn format(body: &str) -> String {
    format!("{:02X}", compute(body))
}

/// Parse a declared checksum. Exactly two hex digits, either case.
pub fn parse(declared: &str) -> Option<u8> {
    if declared.len() != 2 || !declared.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(declared, 16).ok()
}

/// Build a complete sentence line from a delimiter and body
///
/// # Example
/// ```
/// use seaway_core::nmea::checksum::with_checksum;
/// assert_eq!(with_checksum('$', "BSVDM,2,2,5,B,00000000008,2"), "$BSVDM,2,2,5,B,00000000008,2*33");
/// ```
pub fn with_checksum(delimiter: char, body: &str) -> String {
    format!("{}{}*{}", delimiter, body, format(body))
}
