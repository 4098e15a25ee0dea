//! Date string grammar: match the fixed pattern and build a UTC instant.

use std::sync::LazyLock;

use chrono::{Duration, NaiveDate};
use regex::Regex;

use crate::error::FormatError;
use crate::types::{DateFields, Timestamp};

/// `yyyy-MM-ddTHH:mm:ss[.sss]Z`, anchored at both ends, ASCII digits only.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{3}))?Z$",
  )
  .unwrap()
});

/// Match `input` against the grammar and extract its integer fields.
///
/// The millisecond group defaults to 0 when absent.
pub fn match_fields(input: &str) -> Result<DateFields, FormatError> {
  let caps = DATE_PATTERN
    .captures(input)
    .ok_or_else(|| FormatError::illegal(input))?;

  let group = |i: usize| -> Result<u32, FormatError> {
    match caps.get(i) {
      Some(m) => m
        .as_str()
        .parse::<u32>()
        .map_err(|e| FormatError::field(input, e)),
      None => Ok(0),
    }
  };

  Ok(DateFields {
    year: group(1)?,
    month: group(2)?,
    day: group(3)?,
    hour: group(4)?,
    minute: group(5)?,
    second: group(6)?,
    millisecond: group(7)?,
  })
}

/// Build a UTC instant from captured fields.
///
/// Lenient mode rolls overflowing fields into the next unit the way a lenient
/// calendar does (month 13 is January of the following year, day 0 is the
/// last day of the previous month). Strict mode requires every field to be in
/// range.
pub fn build(fields: &DateFields, strict: bool, input: &str) -> Result<Timestamp, FormatError> {
  let built = if strict {
    build_strict(fields)
  } else {
    build_lenient(fields)
  };
  built.ok_or_else(|| FormatError::out_of_range(input))
}

fn build_strict(f: &DateFields) -> Option<Timestamp> {
  let year = i32::try_from(f.year).ok()?;
  let date = NaiveDate::from_ymd_opt(year, f.month, f.day)?;
  let dt = date.and_hms_milli_opt(f.hour, f.minute, f.second, f.millisecond)?;
  Some(dt.and_utc())
}

fn build_lenient(f: &DateFields) -> Option<Timestamp> {
  // Month is one-origin in the text; normalize through a zero-origin month count.
  let months = i64::from(f.year) * 12 + i64::from(f.month) - 1;
  let year = i32::try_from(months.div_euclid(12)).ok()?;
  let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;

  let start = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
  let offset = Duration::days(i64::from(f.day) - 1)
    + Duration::hours(i64::from(f.hour))
    + Duration::minutes(i64::from(f.minute))
    + Duration::seconds(i64::from(f.second))
    + Duration::milliseconds(i64::from(f.millisecond));

  Some(start.checked_add_signed(offset)?.and_utc())
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Datelike, TimeZone, Timelike, Utc};

  fn fields(input: &str) -> DateFields {
    match_fields(input).unwrap()
  }

  #[test]
  fn captures_all_groups() {
    let f = fields("2013-05-01T10:20:30.456Z");
    assert_eq!(
      f,
      DateFields {
        year: 2013,
        month: 5,
        day: 1,
        hour: 10,
        minute: 20,
        second: 30,
        millisecond: 456,
      }
    );
  }

  #[test]
  fn millisecond_defaults_to_zero() {
    assert_eq!(fields("2013-05-01T10:20:30Z").millisecond, 0);
  }

  #[test]
  fn rejects_partial_matches() {
    for s in [
      "2013-05-01T10:20:30",
      "2013-05-01 10:20:30Z",
      "x2013-05-01T10:20:30Z",
      "2013-05-01T10:20:30Zx",
      "2013-05-01T10:20:30.45Z",
      "2013-05-01T10:20:30.4567Z",
      "2013-05-01T10:20:30,456Z",
      "13-05-01T10:20:30Z",
      "2013-5-01T10:20:30Z",
      "2013-05-01T10:20:30+00:00",
      "",
    ] {
      assert!(
        matches!(match_fields(s), Err(FormatError::IllegalFormat { .. })),
        "should reject {:?}",
        s
      );
    }
  }

  #[test]
  fn rejects_non_ascii_digits() {
    // Arabic-Indic digits are Unicode `\d` but not part of the grammar.
    let s = "\u{0662}\u{0660}\u{0661}\u{0663}-05-01T10:20:30Z";
    assert!(matches!(match_fields(s), Err(FormatError::IllegalFormat { .. })));
  }

  #[test]
  fn month_text_is_one_origin() {
    let ts = build(&fields("2013-01-01T00:00:00.000Z"), false, "").unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2013, 1, 1, 0, 0, 0).unwrap());
  }

  #[test]
  fn lenient_rolls_month_over() {
    let ts = build(&fields("2013-13-01T00:00:00Z"), false, "").unwrap();
    assert_eq!((ts.year(), ts.month(), ts.day()), (2014, 1, 1));
  }

  #[test]
  fn lenient_rolls_day_and_hour_over() {
    let ts = build(&fields("2013-01-32T24:00:00Z"), false, "").unwrap();
    assert_eq!((ts.month(), ts.day(), ts.hour()), (2, 2, 0));
  }

  #[test]
  fn lenient_zero_month_and_day_step_back() {
    let ts = build(&fields("2013-00-00T00:00:00Z"), false, "").unwrap();
    assert_eq!((ts.year(), ts.month(), ts.day()), (2012, 11, 30));
  }

  #[test]
  fn strict_rejects_out_of_range() {
    for s in [
      "2013-13-01T00:00:00Z",
      "2013-02-29T00:00:00Z",
      "2013-01-01T24:00:00Z",
      "2013-01-01T00:60:00Z",
      "2013-01-01T00:00:60Z",
    ] {
      let err = build(&fields(s), true, s).unwrap_err();
      assert!(matches!(err, FormatError::OutOfRange { .. }), "{:?}", s);
    }
  }

  #[test]
  fn strict_accepts_leap_day() {
    let ts = build(&fields("2012-02-29T23:59:59.999Z"), true, "").unwrap();
    assert_eq!((ts.month(), ts.day()), (2, 29));
    assert_eq!(ts.timestamp_subsec_millis(), 999);
  }
}
