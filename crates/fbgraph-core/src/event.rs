//! Events and invitees.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::{
  common::Reference,
  decode::{self, ApiEnum},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EventPrivacy {
  Open,
  Secret,
  Closed,
  #[default]
  Unknown,
}

impl ApiEnum for EventPrivacy {
  const FALLBACK: Self = Self::Unknown;
}

/// An invitee's response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RsvpStatus {
  Attending,
  Maybe,
  Declined,
  NotReplied,
  #[default]
  Unknown,
}

impl ApiEnum for RsvpStatus {
  const FALLBACK: Self = Self::Unknown;
  const NORMALIZE_DASHES: bool = true;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
  pub id:           String,
  #[serde(default)]
  pub name:         Option<String>,
  #[serde(default)]
  pub description:  Option<String>,
  #[serde(default)]
  pub owner:        Option<Reference>,
  #[serde(default, deserialize_with = "decode::api_enum")]
  pub privacy:      EventPrivacy,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub start_time:   Option<DateTime<Utc>>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub end_time:     Option<DateTime<Utc>>,
  #[serde(default)]
  pub location:     Option<String>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub updated_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInvitee {
  pub id:          String,
  #[serde(default)]
  pub name:        Option<String>,
  #[serde(default, deserialize_with = "decode::api_enum")]
  pub rsvp_status: RsvpStatus,
}
