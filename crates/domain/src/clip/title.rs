//! Clip title parsing and display.
//!
//! Titles are capture timestamps. The backend names clips after the base64
//! encoding of an ISO-8601 extended local timestamp, so a title may be either
//! the timestamp itself or its base64 form.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%a %b %d %Y %H:%M:%S";

/// A parsed clip title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipTitle {
    /// Timestamp carrying an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// Timestamp in camera-local time without offset.
    Local(NaiveDateTime),
    /// Not a recognisable timestamp.
    Invalid,
}

impl ClipTitle {
    /// Parse a raw title, falling back to base64-decoding it first.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        parse_timestamp(raw)
            .or_else(|| decode_clip_id(raw).and_then(|decoded| parse_timestamp(&decoded)))
            .unwrap_or(Self::Invalid)
    }
}

impl fmt::Display for ClipTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zoned(ts) => write!(f, "{} GMT{}", ts.format(DISPLAY_FORMAT), ts.format("%z")),
            Self::Local(ts) => write!(f, "{}", ts.format(DISPLAY_FORMAT)),
            Self::Invalid => f.write_str("Invalid Date"),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<ClipTitle> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ClipTitle::Zoned(ts));
    }
    for format in LOCAL_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ClipTitle::Local(ts));
        }
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(ClipTitle::Local)
}

fn decode_clip_id(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let bytes = STANDARD
        .decode(raw)
        .or_else(|_| STANDARD_NO_PAD.decode(raw))
        .ok()?;
    String::from_utf8(bytes).ok()
}
