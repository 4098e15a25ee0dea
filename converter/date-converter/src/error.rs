//! Structured error type for date token conversion.

use std::num::ParseIntError;

use thiserror::Error;

use crate::types::TokenKind;

/// Raised when a token cannot be interpreted as a date value.
#[derive(Debug, Error)]
pub enum FormatError {
  #[error("illegal format for date: expected null or string, found {found}")]
  UnexpectedToken { found: TokenKind },

  #[error("illegal date format: {input:?}")]
  IllegalFormat { input: String },

  #[error("illegal date format: {input:?}: {source}")]
  Field {
    input: String,
    #[source]
    source: ParseIntError,
  },

  #[error("illegal date format: {input:?}: fields out of range")]
  OutOfRange { input: String },
}

impl FormatError {
  pub fn unexpected(found: TokenKind) -> Self {
    Self::UnexpectedToken { found }
  }

  pub fn illegal(input: &str) -> Self {
    Self::IllegalFormat {
      input: input.to_string(),
    }
  }

  pub fn field(input: &str, source: ParseIntError) -> Self {
    Self::Field {
      input: input.to_string(),
      source,
    }
  }

  pub fn out_of_range(input: &str) -> Self {
    Self::OutOfRange {
      input: input.to_string(),
    }
  }
}
