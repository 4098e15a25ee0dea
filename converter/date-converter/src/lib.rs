//! JSON date token converter: ECMA-262 `Date.prototype.toJSON` strings <-> UTC timestamps.
//!
//! Decodes a null token or a `yyyy-MM-ddTHH:mm:ss[.sss]Z` string into a
//! `chrono::DateTime<Utc>`, and encodes timestamps back with milliseconds
//! always present. Plugs into a pull-style JSON framework through the
//! `TokenReader`, `Listener` and `JsonSink` seams.
//!
//! No I/O, no shared mutable state; pure computation.

pub mod config;
pub mod converter;
pub mod error;
pub mod format;
pub mod grammar;
pub mod serde_date;
pub mod token;
pub mod types;

pub use config::Config;
pub use converter::{DateConverter, TokenConverter};
pub use error::FormatError;
pub use token::{JsonSink, JsonWriter, Listener, TokenReader};
pub use types::{Timestamp, Token, TokenKind};
