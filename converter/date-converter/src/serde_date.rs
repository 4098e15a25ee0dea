//! serde adapters for the date wire format.
//! Use with `#[serde(with = "date_converter::serde_date")]` on a `Timestamp`
//! field, or `serde_date::option` on an `Option<Timestamp>` field.

use serde::{de, Deserialize, Deserializer, Serializer};

use crate::converter::DateConverter;
use crate::types::Timestamp;

/// Serialize a timestamp in canonical form.
pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  serializer.serialize_str(&DateConverter::shared().format(ts))
}

/// Deserialize a timestamp from a date string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
  D: Deserializer<'de>,
{
  let s = String::deserialize(deserializer)?;
  DateConverter::shared().parse_str(&s).map_err(de::Error::custom)
}

/// Nullable variant: JSON `null` maps to `None`.
pub mod option {
  use super::*;

  pub fn serialize<S>(ts: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match ts {
      Some(ts) => super::serialize(ts, serializer),
      None => serializer.serialize_none(),
    }
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
  where
    D: Deserializer<'de>,
  {
    match Option::<String>::deserialize(deserializer)? {
      Some(s) => DateConverter::shared()
        .parse_str(&s)
        .map(Some)
        .map_err(de::Error::custom),
      None => Ok(None),
    }
  }
}
