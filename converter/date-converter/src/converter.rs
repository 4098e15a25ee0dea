//! Token converter trait and the date string converter.

use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::FormatError;
use crate::format;
use crate::grammar;
use crate::token::{JsonSink, Listener, TokenReader};
use crate::types::{Timestamp, Token};

/// A pluggable converter between one JSON value and a typed value.
pub trait TokenConverter<T> {
  /// Decode the reader's current value. `Ok(None)` means JSON `null`.
  ///
  /// When a listener is supplied it is notified exactly once with the decoded
  /// value, after the value is determined. It is not notified on error.
  fn decode<R>(
    &self,
    reader: &R,
    listener: Option<&mut dyn Listener<T>>,
  ) -> Result<Option<T>, FormatError>
  where
    R: TokenReader + ?Sized;

  /// Encode `value` (or `null` when absent) into the sink.
  fn encode<S>(&self, sink: &mut S, value: Option<&T>) -> Result<(), S::Error>
  where
    S: JsonSink + ?Sized;
}

static SHARED: DateConverter = DateConverter {
  config: Config {
    strict_fields: false,
  },
};

/// Converts between `yyyy-MM-ddTHH:mm:ss[.sss]Z` strings and UTC timestamps.
///
/// Holds only immutable configuration; one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateConverter {
  config: Config,
}

impl DateConverter {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Process-wide default instance.
  pub fn shared() -> &'static DateConverter {
    &SHARED
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Parse a date string. The whole string must match the grammar.
  pub fn parse_str(&self, input: &str) -> Result<Timestamp, FormatError> {
    let fields = grammar::match_fields(input)?;
    grammar::build(&fields, self.config.strict_fields, input)
  }

  /// Canonical text for a timestamp (milliseconds always present).
  pub fn format(&self, ts: &Timestamp) -> String {
    format::format_timestamp(ts)
  }

  /// Encode into a JSON value: a string, or `null` when absent.
  pub fn to_value(&self, value: Option<&Timestamp>) -> Value {
    let mut out = Value::Null;
    match self.encode(&mut out, value) {
      Ok(()) => out,
      Err(never) => match never {},
    }
  }

  fn decode_token(&self, token: Token<'_>) -> Result<Option<Timestamp>, FormatError> {
    match token {
      Token::Null => Ok(None),
      Token::String(s) => self.parse_str(s).map(Some),
      other => Err(FormatError::unexpected(other.kind())),
    }
  }
}

impl TokenConverter<Timestamp> for DateConverter {
  fn decode<R>(
    &self,
    reader: &R,
    listener: Option<&mut dyn Listener<Timestamp>>,
  ) -> Result<Option<Timestamp>, FormatError>
  where
    R: TokenReader + ?Sized,
  {
    let value = self.decode_token(reader.current()).map_err(|e| {
      debug!(error = %e, "rejected date token");
      e
    })?;

    if let Some(listener) = listener {
      listener.on_add(value.as_ref());
    }

    Ok(value)
  }

  fn encode<S>(&self, sink: &mut S, value: Option<&Timestamp>) -> Result<(), S::Error>
  where
    S: JsonSink + ?Sized,
  {
    match value {
      None => sink.put_null(),
      Some(ts) => sink.put_str(&format::format_timestamp(ts)),
    }
  }
}
