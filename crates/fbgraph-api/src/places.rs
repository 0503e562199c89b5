//! Checkins and place search.

use fbgraph_core::{
  Result,
  page::{Checkin, Page},
  transport::Transport,
};
use serde_json::json;

use crate::{GraphApi, Paging, Query, form};

impl<T: Transport> GraphApi<T> {
  /// `GET /{object_id}/checkins`
  pub async fn get_checkins(&self, object_id: &str, paging: Paging) -> Result<Vec<Checkin>> {
    self
      .fetch_connections(object_id, "checkins", &Query::paged(paging))
      .await
  }

  pub async fn get_checkin(&self, checkin_id: &str) -> Result<Checkin> {
    self.fetch_object(checkin_id, &Query::default()).await
  }

  /// Check the current user in at `place_id`; returns the checkin id.
  ///
  /// `tags` are the ids of friends to tag.
  pub async fn checkin(
    &self,
    place_id: &str,
    latitude: f64,
    longitude: f64,
    message: Option<&str>,
    tags: &[&str],
  ) -> Result<String> {
    let coordinates = json!({ "latitude": latitude, "longitude": longitude }).to_string();
    let mut fields = form([("place", place_id), ("coordinates", coordinates.as_str())]);
    if let Some(m) = message {
      fields.push(("message".to_string(), m.to_string()));
    }
    if !tags.is_empty() {
      fields.push(("tags".to_string(), tags.join(",")));
    }
    self.publish("me", "checkins", fields).await
  }

  /// `GET /search?type=place&q=...&center=lat,long&distance=...`
  pub async fn search_places(
    &self,
    q: &str,
    latitude: f64,
    longitude: f64,
    distance: u64,
  ) -> Result<Vec<Page>> {
    let query = Query::search(q)
      .with_type("place")
      .with_param("center", format!("{latitude},{longitude}"))
      .with_param("distance", distance.to_string());
    self.fetch_connections("search", "", &query).await
  }
}
