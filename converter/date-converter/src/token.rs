//! Collaborator seams: token reader, value listener, and JSON output sink.

use std::convert::Infallible;
use std::io;

use serde_json::Value;

use crate::types::Token;

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// A pull reader positioned on one JSON value.
pub trait TokenReader {
  /// Classification of the current value (with the raw text for strings).
  fn current(&self) -> Token<'_>;
}

impl TokenReader for Value {
  fn current(&self) -> Token<'_> {
    match self {
      Value::Null => Token::Null,
      Value::Bool(_) => Token::Bool,
      Value::Number(_) => Token::Number,
      Value::String(s) => Token::String(s),
      Value::Array(_) => Token::Array,
      Value::Object(_) => Token::Object,
    }
  }
}

impl TokenReader for Token<'_> {
  fn current(&self) -> Token<'_> {
    *self
  }
}

// ---------------------------------------------------------------------------
// Listener
// ---------------------------------------------------------------------------

/// Receives each decoded value so a parent structure can incorporate it.
pub trait Listener<T> {
  fn on_add(&mut self, value: Option<&T>);
}

impl<T, F> Listener<T> for F
where
  F: FnMut(Option<&T>),
{
  fn on_add(&mut self, value: Option<&T>) {
    self(value)
  }
}

// ---------------------------------------------------------------------------
// Sink
// ---------------------------------------------------------------------------

/// Output for one encoded JSON value.
pub trait JsonSink {
  type Error;

  fn put_null(&mut self) -> Result<(), Self::Error>;
  fn put_str(&mut self, s: &str) -> Result<(), Self::Error>;
}

/// Writes encoded values as JSON text (strings escaped and quoted).
#[derive(Debug)]
pub struct JsonWriter<W> {
  inner: W,
}

impl<W: io::Write> JsonWriter<W> {
  pub fn new(inner: W) -> Self {
    Self { inner }
  }

  pub fn into_inner(self) -> W {
    self.inner
  }
}

impl<W: io::Write> JsonSink for JsonWriter<W> {
  type Error = serde_json::Error;

  fn put_null(&mut self) -> Result<(), Self::Error> {
    serde_json::to_writer(&mut self.inner, &Value::Null)
  }

  fn put_str(&mut self, s: &str) -> Result<(), Self::Error> {
    serde_json::to_writer(&mut self.inner, s)
  }
}

/// Stores the encoded value in place.
impl JsonSink for Value {
  type Error = Infallible;

  fn put_null(&mut self) -> Result<(), Self::Error> {
    *self = Value::Null;
    Ok(())
  }

  fn put_str(&mut self, s: &str) -> Result<(), Self::Error> {
    *self = Value::String(s.to_string());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn value_reader_classifies_tokens() {
    assert_eq!(json!(null).current(), Token::Null);
    assert_eq!(json!(true).current(), Token::Bool);
    assert_eq!(json!(1.5).current(), Token::Number);
    assert_eq!(json!("abc").current(), Token::String("abc"));
    assert_eq!(json!([1]).current(), Token::Array);
    assert_eq!(json!({"a": 1}).current(), Token::Object);
  }

  #[test]
  fn writer_quotes_strings() {
    let mut w = JsonWriter::new(Vec::new());
    w.put_str("a\"b").unwrap();
    w.put_null().unwrap();
    assert_eq!(String::from_utf8(w.into_inner()).unwrap(), r#""a\"b"null"#);
  }
}
