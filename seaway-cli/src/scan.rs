//! Line-by-line ingestion report

use std::collections::BTreeMap;
use std::fmt;
use std::io::BufRead;

use chrono::{DateTime, Utc};
use serde::Serialize;
use seaway_core::{AisMessage, TalkerTable};

/// Summary of one scanned input
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Non-blank lines read
    pub lines: usize,
    pub parsed: usize,
    /// Rejected lines by failure kind
    pub rejected: BTreeMap<&'static str, usize>,
    /// Parsed messages by talker
    pub talkers: BTreeMap<String, usize>,
    /// Parsed messages carrying a tag-block time
    pub timestamped: usize,
    /// Epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<i64>,
}

impl ScanReport {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }

    fn record(&mut self, message: &AisMessage) {
        self.parsed += 1;
        *self.talkers.entry(message.talker().to_string()).or_default() += 1;
        if let Some(time) = message.time() {
            self.timestamped += 1;
            self.earliest = Some(self.earliest.map_or(time, |t| t.min(time)));
            self.latest = Some(self.latest.map_or(time, |t| t.max(time)));
        }
    }
}

fn format_time(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "-".to_string())
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lines:       {}", self.lines)?;
        writeln!(f, "parsed:      {}", self.parsed)?;
        writeln!(f, "rejected:    {}", self.rejected_total())?;
        for (kind, count) in &self.rejected {
            writeln!(f, "  {:<24}{}", kind, count)?;
        }
        for (talker, count) in &self.talkers {
            writeln!(f, "talker {:<24}{}", talker, count)?;
        }
        writeln!(f, "timestamped: {}", self.timestamped)?;
        writeln!(f, "earliest:    {}", format_time(self.earliest))?;
        write!(f, "latest:      {}", format_time(self.latest))
    }
}

/// Parse every line of `reader`, calling `on_message` for each accepted one.
///
/// Blank lines are skipped. Rejected lines are counted and logged at debug
/// level; only I/O errors abort the scan.
pub fn scan<R: BufRead>(
    reader: R,
    talkers: &TalkerTable,
    mut on_message: impl FnMut(&AisMessage),
) -> std::io::Result<ScanReport> {
    let mut report = ScanReport::default();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        report.lines += 1;

        match AisMessage::parse_with(&line, talkers) {
            Ok(message) => {
                report.record(&message);
                on_message(&message);
            }
            Err(e) => {
                log::debug!("line {}: {}: {:?}", number + 1, e, line);
                *report.rejected.entry(e.kind()).or_default() += 1;
            }
        }
    }

    log::info!(
        "scanned {} lines: {} parsed, {} rejected",
        report.lines,
        report.parsed,
        report.rejected_total()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LOG: &str = "\
\\g:1-2-1234,s:r3669961,c:1120959341*51\\$BSVDM,2,2,5,B,00000000008,2*33
\\c:1357563697*00\\!AIVDM,1,1,,B,13b2AH8000bkvNajJ=1ov2C>25`4,0*0F

$BSVDM,2,2,5,B,00000000008,2*34
$BSVDM,2,2*4E
!AIVDM,1,1,,B,13b2AH8000bkvNajJ=1ov2C>25`4,0*0F
$GPGGA,024654.00,3351.0141,S,15117.2167,E,1,06,1.06,00105,M,021,M,,*77
";

    #[test]
    fn test_scan() {
        let mut seen = Vec::new();
        let report = scan(Cursor::new(LOG), TalkerTable::standard(), |m| {
            seen.push(m.format().to_string())
        })
        .unwrap();

        assert_eq!(report.lines, 6);
        assert_eq!(report.parsed, 3);
        assert_eq!(report.rejected_total(), 3);
        assert_eq!(report.rejected.get("checksum_mismatch"), Some(&1));
        assert_eq!(report.rejected.get("too_few_fields"), Some(&1));
        assert_eq!(report.rejected.get("invalid_field"), Some(&1));
        assert_eq!(report.talkers.get("MobileStation"), Some(&2));
        assert_eq!(report.talkers.get("Unknown"), Some(&1));
        assert_eq!(report.timestamped, 2);
        assert_eq!(report.earliest, Some(1_120_959_341_000));
        assert_eq!(report.latest, Some(1_357_563_697_000));
        assert_eq!(seen, vec!["$BSVDM", "!AIVDM", "!AIVDM"]);
    }

    #[test]
    fn test_report_display() {
        let report = scan(Cursor::new(LOG), TalkerTable::standard(), |_| {}).unwrap();
        let text = report.to_string();
        assert!(text.contains("parsed:      3"));
        assert!(text.contains("earliest:    2005-07-10T01:35:41+00:00"));
    }

    #[test]
    fn test_empty_input() {
        let report = scan(Cursor::new(""), TalkerTable::standard(), |_| {}).unwrap();
        assert_eq!(report.lines, 0);
        assert!(report.to_string().contains("earliest:    -"));
    }
}
