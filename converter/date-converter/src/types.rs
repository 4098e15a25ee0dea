//! Core types for the date converter (token model + intermediate date fields).

use chrono::{DateTime, Utc};
use std::fmt;

/// An absolute instant, always interpreted and emitted as UTC.
pub type Timestamp = DateTime<Utc>;

// ---------------------------------------------------------------------------
// Token classification (what the pull reader surfaces)
// ---------------------------------------------------------------------------

/// The current JSON value as classified by the token reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
  Null,
  Bool,
  Number,
  String(&'a str),
  Array,
  Object,
}

impl Token<'_> {
  /// Classification name without the payload.
  pub fn kind(&self) -> TokenKind {
    match self {
      Token::Null => TokenKind::Null,
      Token::Bool => TokenKind::Bool,
      Token::Number => TokenKind::Number,
      Token::String(_) => TokenKind::String,
      Token::Array => TokenKind::Array,
      Token::Object => TokenKind::Object,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  Null,
  Bool,
  Number,
  String,
  Array,
  Object,
}

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      TokenKind::Null => "null",
      TokenKind::Bool => "boolean",
      TokenKind::Number => "number",
      TokenKind::String => "string",
      TokenKind::Array => "array",
      TokenKind::Object => "object",
    };
    f.write_str(s)
  }
}

// ---------------------------------------------------------------------------
// Captured date fields
// ---------------------------------------------------------------------------

/// Integer groups captured from a date string, before calendar construction.
///
/// `month` is one-origin as written in the text ("01" = January).
/// No range checks are applied here; the grammar only guarantees digit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFields {
  pub year: u32,
  pub month: u32,
  pub day: u32,
  pub hour: u32,
  pub minute: u32,
  pub second: u32,
  pub millisecond: u32,
}
