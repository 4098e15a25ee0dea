//! date-check: normalize JSON date tokens to canonical UTC strings
//!
//! Usage:
//!   date-check            # read JSON lines from stdin, one date token per line
//!   date-check --strict   # reject out-of-range calendar fields instead of rolling over
//!
//! Each input line is a JSON value (`null` or a date string). Output lines are either:
//! - `{"value": "2013-05-01T10:20:30.000Z"}` / `{"value": null}` on success
//! - `{"error": true, "message": "..."}` when the line cannot be decoded
//!
//! Set RUST_LOG=debug to see rejected tokens on stderr.

use date_converter::{Config, DateConverter, TokenConverter};
use serde::Serialize;
use serde_json::Value;
use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct DateOutput {
  value: Value,
}

#[derive(Debug, Serialize)]
struct ErrorOutput {
  error: bool,
  message: String,
}

impl ErrorOutput {
  fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let mut config = Config::default();
  for arg in env::args().skip(1) {
    match arg.as_str() {
      "--strict" => config.strict_fields = true,
      _ => {
        eprintln!("Usage: date-check [--strict] < dates.jsonl");
        process::exit(2);
      }
    }
  }
  let converter = DateConverter::new(config);

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let mut lines = 0usize;
  let mut rejected = 0usize;

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "date-check: read error: {}", e);
        process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }
    lines += 1;

    match process_line(&converter, trimmed) {
      Ok(record) => emit(&mut out, &record),
      Err(err) => {
        rejected += 1;
        emit(&mut out, &err);
      }
    }
  }

  let _ = out.flush();
  tracing::debug!(lines, rejected, "done");
}

/// Decode one JSON line and re-encode it in canonical form.
fn process_line(converter: &DateConverter, line: &str) -> Result<DateOutput, ErrorOutput> {
  let token: Value =
    serde_json::from_str(line).map_err(|e| ErrorOutput::new(format!("json parse: {}", e)))?;
  let ts = converter
    .decode(&token, None)
    .map_err(|e| ErrorOutput::new(e.to_string()))?;
  Ok(DateOutput {
    value: converter.to_value(ts.as_ref()),
  })
}

fn emit<W: Write, T: Serialize>(out: &mut W, record: &T) {
  let _ = serde_json::to_writer(&mut *out, record);
  let _ = writeln!(out);
}
