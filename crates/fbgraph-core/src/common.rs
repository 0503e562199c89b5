//! Small shared records: references, counted lists, tags and comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::decode;

// ─── Reference ───────────────────────────────────────────────────────────────

/// A lightweight pointer to any Graph object (user, page, application).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
  pub id:   String,
  #[serde(default)]
  pub name: Option<String>,
}

impl Reference {
  pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
    Self { id: id.into(), name }
  }
}

// ─── ListAndCount ────────────────────────────────────────────────────────────

/// A partial list plus the total number of elements, decoded from
/// `{"data": [...], "count": N}`.
///
/// The server-declared `count` is trusted when present (it is usually larger
/// than the page of items returned). Otherwise `summary.total_count` is used,
/// and failing that the number of decoded items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListAndCount<T> {
  #[serde(rename = "data")]
  pub items: Vec<T>,
  pub count: u64,
}

impl<T> ListAndCount<T> {
  pub fn new(items: Vec<T>, count: u64) -> Self { Self { items, count } }

  pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

impl<T> Default for ListAndCount<T> {
  fn default() -> Self { Self { items: Vec::new(), count: 0 } }
}

#[derive(Deserialize)]
struct Summary {
  total_count: Option<u64>,
}

#[derive(Deserialize)]
struct RawListAndCount<T> {
  data:    Option<Vec<T>>,
  count:   Option<u64>,
  summary: Option<Summary>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ListAndCount<T> {
  fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    let Some(raw) = Option::<RawListAndCount<T>>::deserialize(d)? else {
      return Ok(Self::default());
    };
    let items = raw.data.unwrap_or_default();
    let count = raw
      .count
      .or_else(|| raw.summary.and_then(|s| s.total_count))
      .unwrap_or(items.len() as u64);
    Ok(Self { items, count })
  }
}

// ─── Tag ─────────────────────────────────────────────────────────────────────

/// A person tagged in a photo, video or post. `x` and `y` are percentages
/// from the top-left corner of the media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
  #[serde(default)]
  pub id:           Option<String>,
  #[serde(default)]
  pub name:         Option<String>,
  #[serde(default)]
  pub x:            Option<f64>,
  #[serde(default)]
  pub y:            Option<f64>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub created_time: Option<DateTime<Utc>>,
}

// ─── Comment ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
  pub id:           String,
  #[serde(default)]
  pub from:         Option<Reference>,
  #[serde(default)]
  pub message:      Option<String>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub created_time: Option<DateTime<Utc>>,
  #[serde(default)]
  pub likes:        ListAndCount<Reference>,
  #[serde(default)]
  pub like_count:   Option<u64>,
}
