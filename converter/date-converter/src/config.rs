//! Converter configuration with lenient defaults.

/// Decode behavior for the date converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
  /// Reject calendar fields outside their natural range (month 13, hour 24, ...)
  /// instead of rolling them over into the next unit.
  pub strict_fields: bool,
}

impl Config {
  pub fn strict() -> Self {
    Self {
      strict_fields: true,
    }
  }
}
