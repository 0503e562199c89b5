//! Groups and group membership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::{
  common::Reference,
  decode::{self, ApiEnum},
};

/// Group visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GroupPrivacy {
  Open,
  Secret,
  Closed,
  #[default]
  Unknown,
}

impl ApiEnum for GroupPrivacy {
  const FALLBACK: Self = Self::Unknown;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
  pub id:           String,
  #[serde(default)]
  pub owner:        Option<Reference>,
  #[serde(default)]
  pub name:         Option<String>,
  #[serde(default, deserialize_with = "decode::api_enum")]
  pub privacy:      GroupPrivacy,
  #[serde(default)]
  pub icon:         Option<String>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub updated_time: Option<DateTime<Utc>>,
  #[serde(default)]
  pub email:        Option<String>,
  #[serde(default)]
  pub description:  Option<String>,
}

/// A member as listed on a group's `members` connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMemberReference {
  pub id:            String,
  #[serde(default)]
  pub name:          Option<String>,
  #[serde(default)]
  pub administrator: bool,
}

/// A group the user belongs to, as listed on the user's `groups` connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembership {
  pub id:             String,
  #[serde(default)]
  pub name:           Option<String>,
  #[serde(default)]
  pub version:        Option<u32>,
  #[serde(default)]
  pub bookmark_order: Option<u32>,
  #[serde(default)]
  pub administrator:  bool,
  #[serde(default)]
  pub unread:         Option<u32>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn group_privacy_is_case_insensitive() {
    let g: Group = serde_json::from_value(json!({
      "id":      "g1",
      "owner":   { "id": "9", "name": "A" },
      "privacy": "CLOSED",
    }))
    .unwrap();
    assert_eq!(g.privacy, GroupPrivacy::Closed);
  }

  #[test]
  fn unknown_group_privacy_falls_back() {
    let g: Group =
      serde_json::from_value(json!({ "id": "g1", "privacy": "CUSTOM_PRIVACY_9000" }))
        .unwrap();
    assert_eq!(g.privacy, GroupPrivacy::Unknown);
  }

  #[test]
  fn missing_privacy_is_unknown() {
    let g: Group = serde_json::from_value(json!({ "id": "g1" })).unwrap();
    assert_eq!(g.privacy, GroupPrivacy::Unknown);
    assert!(g.owner.is_none());
  }
}
