//! User profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{common::Reference, decode};

/// A job listed on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
  #[serde(default)]
  pub employer:   Option<Reference>,
  #[serde(default)]
  pub position:   Option<Reference>,
  /// `YYYY-MM` as sent by the API; `0000-00` means unspecified.
  #[serde(default)]
  pub start_date: Option<String>,
  #[serde(default)]
  pub end_date:   Option<String>,
}

/// A school listed on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
  #[serde(default)]
  pub school:        Option<Reference>,
  #[serde(default)]
  pub year:          Option<Reference>,
  #[serde(default)]
  pub concentration: Vec<Reference>,
  #[serde(rename = "type", default)]
  pub kind:          Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacebookProfile {
  pub id:                  String,
  #[serde(default)]
  pub username:            Option<String>,
  #[serde(default)]
  pub name:                Option<String>,
  #[serde(default)]
  pub first_name:          Option<String>,
  #[serde(default)]
  pub middle_name:         Option<String>,
  #[serde(default)]
  pub last_name:           Option<String>,
  #[serde(default)]
  pub gender:              Option<String>,
  /// Locale string such as `en_US`.
  #[serde(default)]
  pub locale:              Option<String>,
  #[serde(default)]
  pub email:               Option<String>,
  #[serde(default)]
  pub link:                Option<String>,
  #[serde(default)]
  pub third_party_id:      Option<String>,
  #[serde(default)]
  pub timezone:            Option<f64>,
  #[serde(default, deserialize_with = "decode::timestamp")]
  pub updated_time:        Option<DateTime<Utc>>,
  #[serde(default)]
  pub verified:            Option<bool>,
  #[serde(default)]
  pub about:               Option<String>,
  #[serde(default)]
  pub bio:                 Option<String>,
  /// `MM/DD/YYYY`, `MM/DD` or `YYYY` depending on what the user shares.
  #[serde(default)]
  pub birthday:            Option<String>,
  #[serde(default)]
  pub location:            Option<Reference>,
  #[serde(default)]
  pub hometown:            Option<Reference>,
  #[serde(default)]
  pub interested_in:       Vec<String>,
  #[serde(default)]
  pub inspirational_people: Vec<Reference>,
  #[serde(default)]
  pub languages:           Vec<Reference>,
  #[serde(default)]
  pub sports:              Vec<Reference>,
  #[serde(default)]
  pub favorite_teams:      Vec<Reference>,
  #[serde(default)]
  pub favorite_athletes:   Vec<Reference>,
  #[serde(default)]
  pub religion:            Option<String>,
  #[serde(default)]
  pub political:           Option<String>,
  #[serde(default)]
  pub quotes:              Option<String>,
  #[serde(default)]
  pub relationship_status: Option<String>,
  #[serde(default)]
  pub significant_other:   Option<Reference>,
  #[serde(default)]
  pub website:             Option<String>,
  #[serde(default)]
  pub work:                Vec<WorkEntry>,
  #[serde(default)]
  pub education:           Vec<EducationEntry>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn sparse_profile_decodes() {
    let p: FacebookProfile = serde_json::from_value(json!({
      "id":         "9",
      "name":       "Ada Lovelace",
      "first_name": "Ada",
      "locale":     "en_GB",
      "unexpected": { "nested": true },
    }))
    .unwrap();
    assert_eq!(p.first_name.as_deref(), Some("Ada"));
    assert!(p.work.is_empty());
    assert!(p.languages.is_empty());
  }

  #[test]
  fn profile_with_work_and_education() {
    let p: FacebookProfile = serde_json::from_value(json!({
      "id":        "9",
      "timezone":  -5.5,
      "work":      [{ "employer": { "id": "1", "name": "Acme" }, "start_date": "2010-01" }],
      "education": [{
        "school":        { "id": "2", "name": "Uni" },
        "type":          "College",
        "concentration": [{ "id": "3", "name": "Maths" }],
      }],
      "languages": [{ "id": "4", "name": "English" }],
    }))
    .unwrap();
    assert_eq!(p.work[0].employer.as_ref().unwrap().id, "1");
    assert_eq!(p.education[0].kind.as_deref(), Some("College"));
    assert_eq!(p.languages.len(), 1);
    assert_eq!(p.timezone, Some(-5.5));
  }
}
