//! Canonical date text: `YYYY-MM-DDTHH:MM:SS.mmmZ`.

use chrono::{Datelike, Timelike};

use crate::types::Timestamp;

/// Format a timestamp in canonical UTC form. Milliseconds are always present;
/// sub-millisecond precision is truncated.
///
/// Each field is zero-padded on its own. Years past 9999 are written in full.
pub fn format_timestamp(ts: &Timestamp) -> String {
  // Leap-second instants report 1000+ ms; clamp into the field.
  let millis = ts.timestamp_subsec_millis().min(999);
  format!(
    "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
    ts.year(),
    ts.month(),
    ts.day(),
    ts.hour(),
    ts.minute(),
    ts.second(),
    millis
  )
}
