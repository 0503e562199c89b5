//! Pages, places, accounts and checkins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  common::{Comment, ListAndCount, Reference},
  decode,
};

/// The physical location attached to a page or place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
  #[serde(default)]
  pub street:    Option<String>,
  #[serde(default)]
  pub city:      Option<String>,
  #[serde(default)]
  pub state:     Option<String>,
  #[serde(default)]
  pub country:   Option<String>,
  #[serde(default)]
  pub zip:       Option<String>,
  #[serde(default)]
  pub latitude:  Option<f64>,
  #[serde(default)]
  pub longitude: Option<f64>,
}

/// A page; also the shape of a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
  pub id:                  String,
  #[serde(default)]
  pub name:                Option<String>,
  #[serde(default)]
  pub category:            Option<String>,
  #[serde(default)]
  pub link:                Option<String>,
  #[serde(default, deserialize_with = "decode::picture_url")]
  pub picture:             Option<String>,
  #[serde(default)]
  pub description:         Option<String>,
  #[serde(default)]
  pub about:               Option<String>,
  #[serde(default)]
  pub website:             Option<String>,
  #[serde(default)]
  pub phone:               Option<String>,
  #[serde(default)]
  pub likes:               Option<u64>,
  #[serde(default)]
  pub checkins:            Option<u64>,
  #[serde(default)]
  pub talking_about_count: Option<u64>,
  #[serde(default)]
  pub location:            Option<Location>,
}

/// A page or application the user administers, with its page access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
  pub id:           String,
  #[serde(default)]
  pub name:         Option<String>,
  #[serde(default)]
  pub category:     Option<String>,
  #[serde(default)]
  pub access_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkin {
  pub id:           String,
  #[serde(default)]
  pub place:        Option<Page>,
  #[serde(default)]
  pub from:         Option<Reference>,
  #[serde(default)]
  pub application:  Option<Reference>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub created_time: Option<DateTime<Utc>>,
  #[serde(default)]
  pub message:      Option<String>,
  #[serde(default)]
  pub comments:     ListAndCount<Comment>,
  #[serde(default)]
  pub likes:        ListAndCount<Reference>,
  #[serde(default, deserialize_with = "decode::data_list")]
  pub tags:         Vec<Reference>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn checkin_with_place_and_tags() {
    let c: Checkin = serde_json::from_value(json!({
      "id":    "c1",
      "from":  { "id": "9", "name": "A" },
      "place": {
        "id":       "p1",
        "name":     "Cafe",
        "location": { "city": "Lyon", "latitude": 45.76, "longitude": 4.83 },
      },
      "tags":  { "data": [{ "id": "8", "name": "B" }] },
      "comments": { "data": [] },
    }))
    .unwrap();
    let place = c.place.unwrap();
    assert_eq!(place.location.unwrap().city.as_deref(), Some("Lyon"));
    assert_eq!(c.tags, vec![Reference::new("8", Some("B".into()))]);
    assert!(c.comments.is_empty());
    assert!(c.likes.is_empty());
  }

  #[test]
  fn page_picture_in_either_shape() {
    let nested: Page = serde_json::from_value(json!({
      "id":      "p1",
      "picture": { "data": { "url": "https://img/p1.jpg" } },
    }))
    .unwrap();
    assert_eq!(nested.picture.as_deref(), Some("https://img/p1.jpg"));

    let flat: Page = serde_json::from_value(json!({
      "id":      "p1",
      "picture": "https://img/p1.jpg",
    }))
    .unwrap();
    assert_eq!(flat, nested);
  }
}
