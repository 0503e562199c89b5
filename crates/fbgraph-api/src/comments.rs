//! Comments and likes on any commentable object.

use fbgraph_core::{
  Result,
  common::{Comment, Reference},
  transport::Transport,
};

use crate::{GraphApi, Paging, Query, form};

impl<T: Transport> GraphApi<T> {
  /// `GET /{object_id}/comments`
  pub async fn get_comments(&self, object_id: &str, paging: Paging) -> Result<Vec<Comment>> {
    self
      .fetch_connections(object_id, "comments", &Query::paged(paging))
      .await
  }

  /// `GET /{comment_id}`
  pub async fn get_comment(&self, comment_id: &str) -> Result<Comment> {
    self.fetch_object(comment_id, &Query::default()).await
  }

  /// Comment on `object_id`; returns the new comment's id.
  pub async fn add_comment(&self, object_id: &str, message: &str) -> Result<String> {
    self
      .publish(object_id, "comments", form([("message", message)]))
      .await
  }

  pub async fn delete_comment(&self, comment_id: &str) -> Result<()> {
    self.delete(comment_id).await
  }

  /// `GET /{object_id}/likes`
  pub async fn get_likes(&self, object_id: &str) -> Result<Vec<Reference>> {
    self
      .fetch_connections(object_id, "likes", &Query::default())
      .await
  }
}
