//! Photos, videos and albums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::{
  Error,
  common::{Reference, Tag},
  decode::{self, ApiEnum},
};

// ─── Image ───────────────────────────────────────────────────────────────────

/// One rendition of a photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
  pub source: String,
  #[serde(default)]
  pub width:  u32,
  #[serde(default)]
  pub height: u32,
}

/// The named renditions of a photo, assembled by position.
///
/// The API does not label the entries of `images`; it orders them largest
/// first. Five entries means the first is an oversized rendition; four means
/// there is none. Any other length of four or more uses the first four. This
/// is order-dependent and not guaranteed by any published contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSet {
  pub oversized: Option<Image>,
  pub source:    Option<Image>,
  pub album:     Option<Image>,
  pub small:     Option<Image>,
  pub tiny:      Option<Image>,
}

impl ImageSet {
  pub fn from_positional(images: Vec<Image>) -> crate::Result<Self> {
    match images.len() {
      0 => return Ok(Self::default()),
      1..=3 => {
        return Err(Error::malformed(format!(
          "expected at least 4 images, found {}",
          images.len()
        )));
      }
      _ => {}
    }

    let has_oversized = images.len() == 5;
    let mut iter = images.into_iter();
    let oversized = if has_oversized { iter.next() } else { None };

    Ok(Self {
      oversized,
      source: iter.next(),
      album: iter.next(),
      small: iter.next(),
      tiny: iter.next(),
    })
  }
}

// ─── Photo ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPhoto")]
pub struct Photo {
  pub id:              String,
  pub name:            Option<String>,
  pub from:            Option<Reference>,
  pub link:            Option<String>,
  pub icon:            Option<String>,
  pub position:        Option<u32>,
  pub created_time:    Option<DateTime<Utc>>,
  pub updated_time:    Option<DateTime<Utc>>,
  pub tags:            Vec<Tag>,
  pub oversized_image: Option<Image>,
  pub source_image:    Option<Image>,
  pub album_image:     Option<Image>,
  pub small_image:     Option<Image>,
  pub tiny_image:      Option<Image>,
}

/// Wire shape of a photo, before positional image assembly.
#[derive(Deserialize)]
struct RawPhoto {
  id:              String,
  #[serde(default)]
  name:            Option<String>,
  #[serde(default)]
  from:            Option<Reference>,
  #[serde(default)]
  link:            Option<String>,
  #[serde(default)]
  icon:            Option<String>,
  #[serde(default)]
  position:        Option<u32>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  created_time:    Option<DateTime<Utc>>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  updated_time:    Option<DateTime<Utc>>,
  #[serde(default, deserialize_with = "decode::data_list")]
  tags:            Vec<Tag>,
  #[serde(default)]
  images:          Option<Vec<Image>>,
  // Named renditions, as written by `Serialize`.
  #[serde(default)]
  oversized_image: Option<Image>,
  #[serde(default)]
  source_image:    Option<Image>,
  #[serde(default)]
  album_image:     Option<Image>,
  #[serde(default)]
  small_image:     Option<Image>,
  #[serde(default)]
  tiny_image:      Option<Image>,
}

impl TryFrom<RawPhoto> for Photo {
  type Error = Error;

  fn try_from(raw: RawPhoto) -> Result<Self, Self::Error> {
    let images = match raw.images {
      Some(images) if !images.is_empty() => ImageSet::from_positional(images)?,
      _ => ImageSet {
        oversized: raw.oversized_image,
        source:    raw.source_image,
        album:     raw.album_image,
        small:     raw.small_image,
        tiny:      raw.tiny_image,
      },
    };
    Ok(Self {
      id:              raw.id,
      name:            raw.name,
      from:            raw.from,
      link:            raw.link,
      icon:            raw.icon,
      position:        raw.position,
      created_time:    raw.created_time,
      updated_time:    raw.updated_time,
      tags:            raw.tags,
      oversized_image: images.oversized,
      source_image:    images.source,
      album_image:     images.album,
      small_image:     images.small,
      tiny_image:      images.tiny,
    })
  }
}

// ─── Video ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
  pub id:           String,
  #[serde(default)]
  pub from:         Option<Reference>,
  #[serde(default)]
  pub picture:      Option<String>,
  #[serde(default)]
  pub embed_html:   Option<String>,
  #[serde(default)]
  pub icon:         Option<String>,
  #[serde(default)]
  pub source:       Option<String>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub created_time: Option<DateTime<Utc>>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub updated_time: Option<DateTime<Utc>>,
  #[serde(default)]
  pub name:         Option<String>,
  #[serde(default)]
  pub description:  Option<String>,
  #[serde(default, deserialize_with = "decode::data_list")]
  pub tags:         Vec<Tag>,
}

// ─── Album ───────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AlbumType {
  App,
  Cover,
  Profile,
  Mobile,
  Wall,
  Normal,
  Album,
  #[default]
  Unknown,
}

impl ApiEnum for AlbumType {
  const FALLBACK: Self = Self::Unknown;
}

/// Who can see an album. Unrecognised values (friend lists, new audience
/// settings) collapse to [`AlbumPrivacy::Custom`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AlbumPrivacy {
  Everyone,
  FriendsOfFriends,
  Friends,
  #[default]
  Custom,
}

impl ApiEnum for AlbumPrivacy {
  const FALLBACK: Self = Self::Custom;
  const NORMALIZE_DASHES: bool = true;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
  pub id:             String,
  #[serde(default)]
  pub from:           Option<Reference>,
  #[serde(default)]
  pub name:           Option<String>,
  #[serde(rename = "type", default, deserialize_with = "decode::api_enum")]
  pub album_type:     AlbumType,
  #[serde(default)]
  pub link:           Option<String>,
  #[serde(default)]
  pub count:          u64,
  #[serde(default, deserialize_with = "decode::api_enum")]
  pub privacy:        AlbumPrivacy,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub created_time:   Option<DateTime<Utc>>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub updated_time:   Option<DateTime<Utc>>,
  #[serde(default)]
  pub location:       Option<String>,
  #[serde(default)]
  pub description:    Option<String>,
  #[serde(rename = "cover_photo", default)]
  pub cover_photo_id: Option<String>,
}

#[cfg(test)]
mod tests {
  use serde_json::{Value, json};

  use super::*;

  fn image(n: u32) -> Value {
    json!({ "source": format!("https://img/{n}.jpg"), "width": n, "height": n })
  }

  fn photo_with(images: Vec<Value>) -> Value {
    json!({
      "id":     "p1",
      "from":   { "id": "9", "name": "A" },
      "images": images,
    })
  }

  // Positional assembly depends on the server ordering renditions largest
  // first; these tests pin the current behaviour rather than an API contract.

  #[test]
  fn four_images_have_no_oversized() {
    let photo: Photo = serde_json::from_value(photo_with(vec![
      image(720),
      image(180),
      image(130),
      image(75),
    ]))
    .unwrap();
    assert!(photo.oversized_image.is_none());
    assert_eq!(photo.source_image.unwrap().width, 720);
    assert_eq!(photo.album_image.unwrap().width, 180);
    assert_eq!(photo.small_image.unwrap().width, 130);
    assert_eq!(photo.tiny_image.unwrap().width, 75);
  }

  #[test]
  fn five_images_shift_by_one() {
    let photo: Photo = serde_json::from_value(photo_with(vec![
      image(2048),
      image(720),
      image(180),
      image(130),
      image(75),
    ]))
    .unwrap();
    assert_eq!(photo.oversized_image.unwrap().width, 2048);
    assert_eq!(photo.source_image.unwrap().width, 720);
    assert_eq!(photo.tiny_image.unwrap().width, 75);
  }

  #[test]
  fn too_few_images_is_an_error() {
    let result =
      serde_json::from_value::<Photo>(photo_with(vec![image(720), image(75)]));
    assert!(result.is_err());
  }

  #[test]
  fn photo_without_tags_or_images() {
    let photo: Photo = serde_json::from_value(json!({ "id": "p1" })).unwrap();
    assert!(photo.tags.is_empty());
    assert!(photo.source_image.is_none());
  }

  #[test]
  fn null_images_are_empty() {
    let photo: Photo =
      serde_json::from_value(json!({ "id": "p1", "images": null })).unwrap();
    assert!(photo.source_image.is_none());
    assert!(photo.tiny_image.is_none());
  }

  #[test]
  fn serialised_photo_reads_back() {
    let photo: Photo = serde_json::from_value(json!({
      "id":           "p1",
      "created_time": "2011-08-22T20:30:15+0000",
      "tags":         { "data": [{ "id": "9", "name": "A", "x": 12.5, "y": 40.0 }] },
      "images":       [image(2048), image(720), image(180), image(130), image(75)],
    }))
    .unwrap();
    let value = serde_json::to_value(&photo).unwrap();
    let back: Photo = serde_json::from_value(value).unwrap();
    assert_eq!(back, photo);
  }

  #[test]
  fn photo_tags_are_unwrapped() {
    let photo: Photo = serde_json::from_value(json!({
      "id":   "p1",
      "tags": { "data": [{ "id": "9", "name": "A", "x": 12.5, "y": 40.0 }] },
    }))
    .unwrap();
    assert_eq!(photo.tags.len(), 1);
    assert_eq!(photo.tags[0].x, Some(12.5));
  }

  #[test]
  fn album_privacy_normalises_dashes() {
    let album: Album = serde_json::from_value(json!({
      "id":      "a1",
      "privacy": "friends-of-friends",
      "type":    "profile",
    }))
    .unwrap();
    assert_eq!(album.privacy, AlbumPrivacy::FriendsOfFriends);
    assert_eq!(album.album_type, AlbumType::Profile);
  }

  #[test]
  fn album_unknown_values_fall_back() {
    let album: Album = serde_json::from_value(json!({
      "id":      "a1",
      "privacy": "CUSTOM_PRIVACY_9000",
      "type":    "hologram",
    }))
    .unwrap();
    assert_eq!(album.privacy, AlbumPrivacy::Custom);
    assert_eq!(album.album_type, AlbumType::Unknown);
  }
}
