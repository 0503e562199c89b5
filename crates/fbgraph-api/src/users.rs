//! User profiles, permissions and user search.

use fbgraph_core::{
  Result,
  common::Reference,
  profile::FacebookProfile,
  transport::Transport,
};
use serde_json::Value;

use crate::{GraphApi, Query};

impl<T: Transport> GraphApi<T> {
  /// `GET /{user_id}`; pass `"me"` for the current user.
  pub async fn get_user_profile(&self, user_id: &str) -> Result<FacebookProfile> {
    self.fetch_object(user_id, &Query::default()).await
  }

  /// The permissions granted to the current access token.
  ///
  /// Understands both response shapes: one object per permission
  /// (`{"permission": "email", "status": "granted"}`, declined entries
  /// skipped) and the older single object keyed by permission name.
  pub async fn get_user_permissions(&self) -> Result<Vec<String>> {
    let envelope = self
      .fetch_envelope("me", "permissions", &Query::default())
      .await?;

    let mut permissions = Vec::new();
    for item in &envelope.items {
      let Value::Object(entry) = item else { continue };
      match entry.get("permission").and_then(Value::as_str) {
        Some(name) => {
          if entry.get("status").and_then(Value::as_str) != Some("declined") {
            permissions.push(name.to_string());
          }
        }
        None => permissions.extend(entry.keys().cloned()),
      }
    }
    Ok(permissions)
  }

  /// `GET /search?type=user&q=...`
  pub async fn search_users(&self, q: &str) -> Result<Vec<Reference>> {
    let query = Query::search(q).with_type("user");
    self.fetch_connections("search", "", &query).await
  }
}
