//! Event log line parser.
//!
//! Each line holds five whitespace-separated fields:
//!
//! ```text
//! YYYY/MM/DD HH:MM:SS.ffffff TYPE CODE VALUE
//! ```
//!
//! The date and time form a local wall-clock timestamp which is converted to
//! epoch milliseconds; the remaining fields are hexadecimal.
//!
//! # Example
//!
//! ```
//! use mtreplay::evlog::{RawEvent, EV_ABS, ABS_MT_POSITION_X};
//!
//! let event = RawEvent::parse_line("2024/01/01 00:00:00.000000 0003 0035 00000064")?;
//! assert_eq!(event.event_type, EV_ABS);
//! assert_eq!(event.code, ABS_MT_POSITION_X);
//! assert_eq!(event.value, 100);
//! # Ok::<(), mtreplay::evlog::LogError>(())
//! ```

use chrono::{Local, NaiveDateTime, TimeZone};

use super::error::LogError;
use super::types::RawEvent;

/// `strptime`-style layout of the first two fields.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.f";

/// Number of whitespace-separated fields on every line.
const FIELD_COUNT: usize = 5;

impl RawEvent {
    /// Parse one log line.
    ///
    /// # Errors
    ///
    /// Returns `LogError::MalformedRecord` (with line 0) if:
    /// - The line does not split into exactly five fields
    /// - The date/time fields do not match [`TIMESTAMP_FORMAT`]
    /// - Type, code or value are not hexadecimal numbers of the right width
    pub fn parse_line(line: &str) -> Result<Self, LogError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != FIELD_COUNT {
            return Err(LogError::malformed(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        let timestamp = parse_timestamp(fields[0], fields[1])?;
        let event_type = parse_hex_u16(fields[2], "type")?;
        let code = parse_hex_u16(fields[3], "code")?;
        let value = u32::from_str_radix(fields[4], 16)
            .map_err(|e| LogError::malformed(format!("invalid value {:?}: {}", fields[4], e)))?;

        Ok(RawEvent {
            timestamp,
            event_type,
            code,
            value,
        })
    }
}

/// Convert the date and time fields to epoch milliseconds in local time.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant; times that
/// do not exist locally (DST gap) are read as UTC.
pub fn parse_timestamp(date: &str, time: &str) -> Result<i64, LogError> {
    let text = format!("{} {}", date, time);
    let naive = NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT)
        .map_err(|e| LogError::malformed(format!("invalid timestamp {:?}: {}", text, e)))?;

    let millis = match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.timestamp_millis(),
        None => naive.and_utc().timestamp_millis(),
    };
    Ok(millis)
}

fn parse_hex_u16(field: &str, what: &str) -> Result<u16, LogError> {
    u16::from_str_radix(field, 16)
        .map_err(|e| LogError::malformed(format!("invalid {} {:?}: {}", what, field, e)))
}
