//! Feed operations: reading, publishing and searching posts.

use fbgraph_core::{
  Result,
  post::{Post, PostType},
  transport::{Form, Transport},
};
use serde::{Deserialize, Serialize};

use crate::{GraphApi, Paging, Query, form};

/// A link to share, with optional preview overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacebookLink {
  pub link:        String,
  pub name:        Option<String>,
  pub caption:     Option<String>,
  pub description: Option<String>,
}

impl FacebookLink {
  pub fn new(link: impl Into<String>) -> Self {
    Self { link: link.into(), ..Self::default() }
  }

  /// Form fields for a link post; unset preview fields are omitted.
  pub(crate) fn to_form(&self, message: &str) -> Form {
    let mut fields = form([("link", self.link.as_str()), ("message", message)]);
    for (key, value) in [
      ("name", &self.name),
      ("caption", &self.caption),
      ("description", &self.description),
    ] {
      if let Some(v) = value {
        fields.push((key.to_string(), v.clone()));
      }
    }
    fields
  }
}

impl<T: Transport> GraphApi<T> {
  // ── Reads ─────────────────────────────────────────────────────────────────

  /// `GET /{owner_id}/feed`: everything posted to the owner's wall.
  pub async fn get_feed(&self, owner_id: &str, paging: Paging) -> Result<Vec<Post>> {
    self.fetch_posts(owner_id, "feed", &Query::paged(paging), None).await
  }

  /// `GET /me/home`: the current user's news feed.
  pub async fn get_home_feed(&self, paging: Paging) -> Result<Vec<Post>> {
    self.fetch_posts("me", "home", &Query::paged(paging), None).await
  }

  /// `GET /{owner_id}/posts`: posts authored by the owner.
  pub async fn get_posts(&self, owner_id: &str, paging: Paging) -> Result<Vec<Post>> {
    self.fetch_posts(owner_id, "posts", &Query::paged(paging), None).await
  }

  /// `GET /{entry_id}`
  pub async fn get_post(&self, entry_id: &str) -> Result<Post> {
    self.fetch_object(entry_id, &Query::default()).await
  }

  /// `GET /{user_id}/statuses`; every element is a [`Post::Status`].
  pub async fn get_statuses(&self, user_id: &str, paging: Paging) -> Result<Vec<Post>> {
    self
      .fetch_posts(user_id, "statuses", &Query::paged(paging), Some(PostType::Status))
      .await
  }

  /// `GET /{owner_id}/links`; every element is a [`Post::Link`].
  pub async fn get_links(&self, owner_id: &str, paging: Paging) -> Result<Vec<Post>> {
    self
      .fetch_posts(owner_id, "links", &Query::paged(paging), Some(PostType::Link))
      .await
  }

  /// `GET /{owner_id}/notes`; every element is a [`Post::Note`].
  pub async fn get_notes(&self, owner_id: &str, paging: Paging) -> Result<Vec<Post>> {
    self
      .fetch_posts(owner_id, "notes", &Query::paged(paging), Some(PostType::Note))
      .await
  }

  // ── Publishing ────────────────────────────────────────────────────────────

  /// Post a status message to the current user's feed; returns the post id.
  pub async fn update_status(&self, message: &str) -> Result<String> {
    self.post_message("me", message).await
  }

  /// Post a message to `owner_id`'s feed; returns the post id.
  pub async fn post_message(&self, owner_id: &str, message: &str) -> Result<String> {
    self.publish(owner_id, "feed", form([("message", message)])).await
  }

  /// Share a link on `owner_id`'s feed; returns the post id.
  pub async fn post_link(
    &self,
    owner_id: &str,
    message: &str,
    link: &FacebookLink,
  ) -> Result<String> {
    self.publish(owner_id, "feed", link.to_form(message)).await
  }

  pub async fn delete_post(&self, id: &str) -> Result<()> { self.delete(id).await }

  // ── Search ────────────────────────────────────────────────────────────────

  /// `GET /search?type=post&q=...`
  pub async fn search_public_feed(&self, q: &str, paging: Paging) -> Result<Vec<Post>> {
    let query = Query::search(q).with_type("post").with_paging(paging);
    self.fetch_posts("search", "", &query, None).await
  }

  /// `GET /me/home?q=...`
  pub async fn search_home_feed(&self, q: &str, paging: Paging) -> Result<Vec<Post>> {
    let query = Query::search(q).with_paging(paging);
    self.fetch_posts("me", "home", &query, None).await
  }

  /// `GET /{user_id}/feed?q=...`
  pub async fn search_user_feed(
    &self,
    user_id: &str,
    q: &str,
    paging: Paging,
  ) -> Result<Vec<Post>> {
    let query = Query::search(q).with_paging(paging);
    self.fetch_posts(user_id, "feed", &query, None).await
  }
}
