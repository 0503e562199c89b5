//! Decoding helpers between Graph API JSON and the domain types.
//!
//! The Graph API wraps every list in a `{"data": [...]}` envelope, sometimes
//! with a sibling `count`, and adds enum values over time. The helpers here
//! absorb those conventions so that the model structs can describe their
//! wire shape with plain serde attributes.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, de::DeserializeOwned, de::Error as _};
use serde_json::Value;
use tracing::debug;

use crate::{Error, Result};

// ─── Envelope ────────────────────────────────────────────────────────────────

/// The contents of a `{"data": [...], "count": N}` list response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
  pub items: Vec<Value>,
  /// The sibling `count` key, when the server sent one.
  pub count: Option<u64>,
}

impl Envelope {
  /// Strip the list envelope from a raw response.
  ///
  /// A missing or `null` `data` key yields no items. Only a `data` value that
  /// is present but not an array is an error.
  pub fn open(response: Value) -> Result<Self> {
    let Value::Object(mut map) = response else {
      return Ok(Self::default());
    };

    let count = map.get("count").and_then(Value::as_u64);
    let items = match map.remove("data") {
      None | Some(Value::Null) => Vec::new(),
      Some(Value::Array(items)) => items,
      Some(other) => {
        return Err(Error::malformed(format!(
          "expected `data` to be an array, found {}",
          json_kind(&other)
        )));
      }
    };

    Ok(Self { items, count })
  }

  /// Decode every item as `T`, preserving server order.
  pub fn decode_items<T: DeserializeOwned>(self) -> Result<Vec<T>> {
    self
      .items
      .into_iter()
      .map(|item| Ok(serde_json::from_value(item)?))
      .collect()
  }
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

// ─── Enums with fallback ─────────────────────────────────────────────────────

/// A closed enum decoded from an API string that never fails: unrecognised
/// values resolve to [`ApiEnum::FALLBACK`].
///
/// Matching is ASCII-case-insensitive (via `strum`); implementors opt into
/// `-` to `_` normalisation with [`ApiEnum::NORMALIZE_DASHES`].
pub trait ApiEnum: FromStr + Copy {
  const FALLBACK: Self;
  const NORMALIZE_DASHES: bool = false;

  fn from_api_str(raw: &str) -> Self {
    let parsed = if Self::NORMALIZE_DASHES {
      raw.replace('-', "_").parse()
    } else {
      raw.parse()
    };
    parsed.unwrap_or_else(|_| {
      debug!(
        value = raw,
        kind = std::any::type_name::<Self>(),
        "unrecognised enum value, using fallback"
      );
      Self::FALLBACK
    })
  }
}

/// `deserialize_with` helper for [`ApiEnum`] fields. `null` maps to the
/// fallback; pair with `#[serde(default)]` for absent keys.
pub fn api_enum<'de, D, E>(d: D) -> Result<E, D::Error>
where
  D: Deserializer<'de>,
  E: ApiEnum,
{
  let raw = Option::<String>::deserialize(d)?;
  Ok(raw.map_or(E::FALLBACK, |s| E::from_api_str(&s)))
}

// ─── Timestamps ──────────────────────────────────────────────────────────────

/// Parse a Graph API timestamp.
///
/// Accepts RFC 3339, the Graph form without a colon in the offset
/// (`2011-08-22T20:30:15+0000`), and a bare date (read as midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(raw)
    .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
    .map(|dt| dt.with_timezone(&Utc))
    .ok()
    .or_else(|| {
      NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
    })
}

/// `deserialize_with` helper for optional timestamps.
pub fn timestamp<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<String>::deserialize(d)? {
    None => Ok(None),
    Some(raw) => parse_timestamp(&raw)
      .map(Some)
      .ok_or_else(|| D::Error::custom(format!("unparseable timestamp: {raw:?}"))),
  }
}

// ─── Nested envelopes ────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DataOnly<T> {
  data: Option<Vec<T>>,
}

/// A list as the API sends it (`{"data": [...]}`) or as this crate
/// serialises it (a bare array).
#[derive(Deserialize)]
#[serde(untagged)]
enum ListShape<T> {
  Bare(Vec<T>),
  Envelope(DataOnly<T>),
}

/// `deserialize_with` helper for a nested `{"data": [...]}` list such as
/// `to` or `tags`. Absent, `null`, or data-less values decode as empty; a
/// bare array is accepted too.
pub fn data_list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Ok(match Option::<ListShape<T>>::deserialize(d)? {
    None => Vec::new(),
    Some(ListShape::Bare(items)) => items,
    Some(ListShape::Envelope(envelope)) => envelope.data.unwrap_or_default(),
  })
}

#[derive(Deserialize)]
struct CountOnly {
  #[serde(default)]
  count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountShape {
  Bare(u64),
  Nested(CountOnly),
}

/// `deserialize_with` helper for `{"count": N}` objects such as `shares`.
/// A bare number is accepted too.
pub fn nested_count<'de, D>(d: D) -> Result<u64, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Option::<CountShape>::deserialize(d)? {
    None => 0,
    Some(CountShape::Bare(count)) => count,
    Some(CountShape::Nested(nested)) => nested.count,
  })
}

#[derive(Deserialize)]
struct PictureData {
  url: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PictureShape {
  Url(String),
  Nested { data: Option<PictureData> },
}

/// `deserialize_with` helper for `picture`, which is either a URL or
/// `{"data": {"url": ...}}` depending on the API version.
pub fn picture_url<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Option::<PictureShape>::deserialize(d)? {
    None => None,
    Some(PictureShape::Url(url)) => Some(url),
    Some(PictureShape::Nested { data }) => data.and_then(|d| d.url),
  })
}

/// Read an object id that may arrive as a string or a bare number.
pub fn id_string(value: &Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};
  use serde_json::json;
  use strum::EnumString;

  use super::*;

  #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
  #[strum(serialize_all = "snake_case", ascii_case_insensitive)]
  enum Colour {
    Red,
    DeepBlue,
    Unknown,
  }

  impl ApiEnum for Colour {
    const FALLBACK: Self = Self::Unknown;
    const NORMALIZE_DASHES: bool = true;
  }

  #[test]
  fn envelope_empty_data_is_empty() {
    let env = Envelope::open(json!({ "data": [] })).unwrap();
    assert!(env.items.is_empty());
    assert_eq!(env.count, None);
  }

  #[test]
  fn envelope_missing_data_is_empty() {
    let env = Envelope::open(json!({ "paging": { "next": "x" } })).unwrap();
    assert!(env.items.is_empty());
  }

  #[test]
  fn envelope_keeps_count_and_order() {
    let env =
      Envelope::open(json!({ "data": [{ "id": "b" }, { "id": "a" }], "count": 7 }))
        .unwrap();
    assert_eq!(env.count, Some(7));
    assert_eq!(env.items[0]["id"], "b");
    assert_eq!(env.items[1]["id"], "a");
  }

  #[test]
  fn envelope_non_array_data_is_malformed() {
    let err = Envelope::open(json!({ "data": { "id": "1" } })).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse(_)));
  }

  #[test]
  fn enum_matches_case_insensitively() {
    assert_eq!(Colour::from_api_str("RED"), Colour::Red);
    assert_eq!(Colour::from_api_str("Deep_Blue"), Colour::DeepBlue);
  }

  #[test]
  fn enum_normalises_dashes() {
    assert_eq!(Colour::from_api_str("deep-blue"), Colour::DeepBlue);
  }

  #[test]
  fn enum_unknown_value_falls_back() {
    assert_eq!(Colour::from_api_str("ultraviolet"), Colour::Unknown);
    assert_eq!(Colour::from_api_str(""), Colour::Unknown);
  }

  #[test]
  fn graph_timestamp_without_colon() {
    let ts = parse_timestamp("2011-08-22T20:30:15+0000").unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2011, 8, 22, 20, 30, 15).unwrap());
  }

  #[test]
  fn rfc3339_timestamp_with_offset() {
    let ts = parse_timestamp("2011-08-22T22:30:15+02:00").unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2011, 8, 22, 20, 30, 15).unwrap());
  }

  #[test]
  fn date_only_timestamp_is_midnight_utc() {
    let ts = parse_timestamp("2012-05-04").unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2012, 5, 4, 0, 0, 0).unwrap());
  }

  #[test]
  fn garbage_timestamp_is_none() {
    assert!(parse_timestamp("yesterday").is_none());
  }

  #[derive(Debug, Deserialize)]
  struct Counted {
    #[serde(default, deserialize_with = "data_list")]
    tags:    Vec<String>,
    #[serde(default, deserialize_with = "nested_count")]
    shares:  u64,
    #[serde(default, deserialize_with = "picture_url")]
    picture: Option<String>,
  }

  #[test]
  fn nested_shapes_from_the_api() {
    let c: Counted = serde_json::from_value(json!({
      "tags":    { "data": ["a", "b"] },
      "shares":  { "count": 3 },
      "picture": { "data": { "url": "https://img/p.jpg", "is_silhouette": false } },
    }))
    .unwrap();
    assert_eq!(c.tags, ["a", "b"]);
    assert_eq!(c.shares, 3);
    assert_eq!(c.picture.as_deref(), Some("https://img/p.jpg"));
  }

  #[test]
  fn bare_shapes_are_accepted() {
    let c: Counted = serde_json::from_value(json!({
      "tags":    ["a"],
      "shares":  7,
      "picture": "https://img/p.jpg",
    }))
    .unwrap();
    assert_eq!(c.tags, ["a"]);
    assert_eq!(c.shares, 7);
    assert_eq!(c.picture.as_deref(), Some("https://img/p.jpg"));
  }

  #[test]
  fn null_and_empty_shapes() {
    let c: Counted = serde_json::from_value(json!({
      "tags":    null,
      "shares":  {},
      "picture": null,
    }))
    .unwrap();
    assert!(c.tags.is_empty());
    assert_eq!(c.shares, 0);
    assert!(c.picture.is_none());

    let c: Counted = serde_json::from_value(json!({})).unwrap();
    assert!(c.tags.is_empty());
  }

  #[test]
  fn id_string_accepts_numbers() {
    assert_eq!(id_string(&json!("42")).as_deref(), Some("42"));
    assert_eq!(id_string(&json!(42)).as_deref(), Some("42"));
    assert_eq!(id_string(&json!(true)), None);
  }
}
