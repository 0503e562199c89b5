//! Feed posts: a closed sum type over the Graph API's post variants.
//!
//! A feed mixes several kinds of entry distinguished only by their `type`
//! field. Decoding is two-step: [`PostType::discriminate`] picks a tag from
//! the raw JSON (or a caller override), then [`Post::decode`] runs the decode
//! routine for that tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use strum::{EnumString, IntoStaticStr};

use crate::{
  Result,
  common::{Comment, ListAndCount, Reference, Tag},
  decode::{self, ApiEnum},
  page::Page,
};

// ─── Discriminator ───────────────────────────────────────────────────────────

/// The variant tag of a post.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PostType {
  Checkin,
  Link,
  Note,
  Photo,
  Status,
  Video,
  Post,
  Swf,
  Music,
}

impl ApiEnum for PostType {
  const FALLBACK: Self = Self::Post;
}

impl PostType {
  pub fn as_str(self) -> &'static str { self.into() }

  /// Choose the variant for one raw feed entry.
  ///
  /// An explicit `override_type` wins. Otherwise the entry's `type` field is
  /// used when it names a known variant; an absent, non-string or unknown
  /// `type` selects [`PostType::Post`].
  pub fn discriminate(raw: &Value, override_type: Option<Self>) -> Self {
    if let Some(tag) = override_type {
      return tag;
    }
    raw
      .get("type")
      .and_then(Value::as_str)
      .map_or(Self::FALLBACK, Self::from_api_str)
  }
}

// ─── Shared fields ───────────────────────────────────────────────────────────

/// Fields common to every post variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostBase {
  pub id:           String,
  #[serde(default)]
  pub from:         Option<Reference>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub created_time: Option<DateTime<Utc>>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub updated_time: Option<DateTime<Utc>>,
  #[serde(default, deserialize_with = "decode::data_list")]
  pub to:           Vec<Reference>,
  #[serde(default)]
  pub message:      Option<String>,
  #[serde(default)]
  pub caption:      Option<String>,
  #[serde(default)]
  pub picture:      Option<String>,
  #[serde(default)]
  pub link:         Option<String>,
  #[serde(default)]
  pub subject:      Option<String>,
  #[serde(default)]
  pub name:         Option<String>,
  #[serde(default)]
  pub description:  Option<String>,
  #[serde(default)]
  pub icon:         Option<String>,
  #[serde(default)]
  pub story:        Option<String>,
  #[serde(default)]
  pub status_type:  Option<String>,
  #[serde(default)]
  pub application:  Option<Reference>,
  #[serde(rename = "shares", default, deserialize_with = "decode::nested_count")]
  pub shares_count: u64,
  #[serde(default)]
  pub likes:        ListAndCount<Reference>,
  #[serde(default)]
  pub comments:     ListAndCount<Comment>,
}

// ─── Variants ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPost {
  #[serde(flatten)]
  pub base: PostBase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkPost {
  #[serde(flatten)]
  pub base: PostBase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotePost {
  #[serde(flatten)]
  pub base: PostBase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoPost {
  #[serde(flatten)]
  pub base:     PostBase,
  #[serde(rename = "object_id", default)]
  pub photo_id: Option<String>,
  #[serde(default, deserialize_with = "decode::data_list")]
  pub tags:     Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPost {
  #[serde(flatten)]
  pub base:     PostBase,
  #[serde(default)]
  pub source:   Option<String>,
  #[serde(rename = "object_id", default)]
  pub video_id: Option<String>,
  #[serde(default, deserialize_with = "decode::data_list")]
  pub tags:     Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinPost {
  #[serde(flatten)]
  pub base:  PostBase,
  #[serde(default)]
  pub place: Option<Page>,
  #[serde(default, deserialize_with = "decode::data_list")]
  pub tags:  Vec<Tag>,
}

impl CheckinPost {
  /// The checkin object id: the part of the post id after `<owner>_`.
  pub fn checkin_id(&self) -> &str {
    self
      .base
      .id
      .split_once('_')
      .map_or(self.base.id.as_str(), |(_, rest)| rest)
  }
}

/// A Flash post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwfPost {
  #[serde(flatten)]
  pub base:   PostBase,
  #[serde(default)]
  pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicPost {
  #[serde(flatten)]
  pub base:   PostBase,
  #[serde(default)]
  pub source: Option<String>,
}

// ─── Post ────────────────────────────────────────────────────────────────────

/// One feed entry.
///
/// `Deserialize` discriminates on the `type` field; use [`Post::decode`] to
/// force a variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Post {
  Checkin(CheckinPost),
  Link(LinkPost),
  Note(NotePost),
  Photo(PhotoPost),
  Status(StatusPost),
  Video(VideoPost),
  Swf(SwfPost),
  Music(MusicPost),
  /// An entry with a missing or unrecognised `type`.
  #[serde(rename = "post")]
  Generic(PostBase),
}

impl Post {
  /// Decode `raw` as the variant named by `tag`.
  pub fn decode(tag: PostType, raw: Value) -> Result<Self> {
    Ok(match tag {
      PostType::Checkin => Self::Checkin(serde_json::from_value(raw)?),
      PostType::Link => Self::Link(serde_json::from_value(raw)?),
      PostType::Note => Self::Note(serde_json::from_value(raw)?),
      PostType::Photo => Self::Photo(serde_json::from_value(raw)?),
      PostType::Status => Self::Status(serde_json::from_value(raw)?),
      PostType::Video => Self::Video(serde_json::from_value(raw)?),
      PostType::Swf => Self::Swf(serde_json::from_value(raw)?),
      PostType::Music => Self::Music(serde_json::from_value(raw)?),
      PostType::Post => Self::Generic(serde_json::from_value(raw)?),
    })
  }

  pub fn post_type(&self) -> PostType {
    match self {
      Self::Checkin(_) => PostType::Checkin,
      Self::Link(_) => PostType::Link,
      Self::Note(_) => PostType::Note,
      Self::Photo(_) => PostType::Photo,
      Self::Status(_) => PostType::Status,
      Self::Video(_) => PostType::Video,
      Self::Swf(_) => PostType::Swf,
      Self::Music(_) => PostType::Music,
      Self::Generic(_) => PostType::Post,
    }
  }

  pub fn base(&self) -> &PostBase {
    match self {
      Self::Checkin(p) => &p.base,
      Self::Link(p) => &p.base,
      Self::Note(p) => &p.base,
      Self::Photo(p) => &p.base,
      Self::Status(p) => &p.base,
      Self::Video(p) => &p.base,
      Self::Swf(p) => &p.base,
      Self::Music(p) => &p.base,
      Self::Generic(base) => base,
    }
  }

  pub fn id(&self) -> &str { &self.base().id }

  /// Tags carried by photo, video and checkin posts; empty otherwise.
  pub fn tags(&self) -> &[Tag] {
    match self {
      Self::Photo(p) => &p.tags,
      Self::Video(p) => &p.tags,
      Self::Checkin(p) => &p.tags,
      _ => &[],
    }
  }
}

impl<'de> Deserialize<'de> for Post {
  fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    let raw = Value::deserialize(d)?;
    let tag = PostType::discriminate(&raw, None);
    Self::decode(tag, raw).map_err(D::Error::custom)
  }
}
