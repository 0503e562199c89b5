//! Albums, photos and videos.

use fbgraph_core::{
  Result,
  media::{Album, Photo, Video},
  transport::Transport,
};

use crate::{GraphApi, Paging, Query, form};

impl<T: Transport> GraphApi<T> {
  /// `GET /{owner_id}/albums`
  pub async fn get_albums(&self, owner_id: &str, paging: Paging) -> Result<Vec<Album>> {
    self
      .fetch_connections(owner_id, "albums", &Query::paged(paging))
      .await
  }

  pub async fn get_album(&self, album_id: &str) -> Result<Album> {
    self.fetch_object(album_id, &Query::default()).await
  }

  /// Create an album for the current user; returns the album id.
  pub async fn create_album(&self, name: &str, description: &str) -> Result<String> {
    self
      .publish("me", "albums", form([("name", name), ("message", description)]))
      .await
  }

  /// `GET /{object_id}/photos`: photos in an album, or photos of a user.
  pub async fn get_photos(&self, object_id: &str, paging: Paging) -> Result<Vec<Photo>> {
    self
      .fetch_connections(object_id, "photos", &Query::paged(paging))
      .await
  }

  pub async fn get_photo(&self, photo_id: &str) -> Result<Photo> {
    self.fetch_object(photo_id, &Query::default()).await
  }

  /// `GET /{user_id}/videos`
  pub async fn get_videos(&self, user_id: &str, paging: Paging) -> Result<Vec<Video>> {
    self
      .fetch_connections(user_id, "videos", &Query::paged(paging))
      .await
  }

  pub async fn get_video(&self, video_id: &str) -> Result<Video> {
    self.fetch_object(video_id, &Query::default()).await
  }
}
