//! Typed Facebook Graph API client.
//!
//! [`GraphApi`] turns method calls into requests against a versioned Graph
//! API base URL and decodes the responses into [`fbgraph_core`] types. It is
//! generic over any [`Transport`]; authentication, timeouts, and retries are
//! the transport's concern.
//!
//! # Example
//!
//! ```rust,ignore
//! let api = GraphApi::new(transport);
//! let feed = api.get_feed("me", Paging::default()).await?;
//! let id = api.update_status("hello").await?;
//! api.delete_post(&id).await?;
//! ```

pub mod comments;
pub mod events;
pub mod feed;
pub mod groups;
pub mod media;
pub mod pages;
pub mod places;
pub mod query;
pub mod users;

use fbgraph_core::{
  Error, Result,
  decode::{Envelope, id_string},
  post::{Post, PostType},
  transport::{Form, Transport},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

pub use query::{Paging, Query};

pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com/v2.5";

/// Typed client over a [`Transport`].
///
/// Cheap to clone when the transport is.
#[derive(Debug, Clone)]
pub struct GraphApi<T> {
  transport: T,
  base_url:  String,
}

impl<T: Transport> GraphApi<T> {
  /// A client against [`DEFAULT_BASE_URL`].
  pub fn new(transport: T) -> Self { Self::with_base_url(transport, DEFAULT_BASE_URL) }

  pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { transport, base_url }
  }

  pub fn base_url(&self) -> &str { &self.base_url }

  pub fn transport(&self) -> &T { &self.transport }

  // ── URL shaping ───────────────────────────────────────────────────────────

  /// `{base}/{object_id}` or `{base}/{object_id}/{connection}` with `params`
  /// as a percent-encoded query string. `object_id` and `connection` are
  /// each encoded as a single path segment.
  fn url(
    &self,
    object_id: &str,
    connection: &str,
    params: &[(String, String)],
  ) -> Result<String> {
    let mut url = Url::parse(&self.base_url)?;
    {
      let mut segments = url
        .path_segments_mut()
        .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
      segments.pop_if_empty().push(object_id);
      if !connection.is_empty() {
        segments.push(connection);
      }
    }
    if !params.is_empty() {
      url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url.into())
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn get(&self, url: String) -> Result<Value> {
    debug!(%url, "GET");
    self.transport.get(url).await
  }

  /// Fetch a single object and decode it as `O`.
  pub async fn fetch_object<O: DeserializeOwned>(
    &self,
    object_id: &str,
    query: &Query,
  ) -> Result<O> {
    let url = self.url(object_id, "", &query.object_params())?;
    let response = self.get(url).await?;
    Ok(serde_json::from_value(response)?)
  }

  /// Fetch a connection and return its raw envelope.
  ///
  /// `connection` may be empty to list the object itself (e.g. `search`).
  pub async fn fetch_envelope(
    &self,
    object_id: &str,
    connection: &str,
    query: &Query,
  ) -> Result<Envelope> {
    let url = self.url(object_id, connection, &query.connection_params())?;
    Envelope::open(self.get(url).await?)
  }

  /// Fetch a connection and decode every element as `O`, in server order.
  pub async fn fetch_connections<O: DeserializeOwned>(
    &self,
    object_id: &str,
    connection: &str,
    query: &Query,
  ) -> Result<Vec<O>> {
    self
      .fetch_envelope(object_id, connection, query)
      .await?
      .decode_items()
  }

  /// Fetch a connection of posts.
  ///
  /// Each element is discriminated on its `type` field unless
  /// `post_type` is given, in which case every element is decoded as that
  /// variant. Pass an override for homogeneous connections such as
  /// `statuses`, whose elements may lack a reliable `type`.
  pub async fn fetch_posts(
    &self,
    object_id: &str,
    connection: &str,
    query: &Query,
    post_type: Option<PostType>,
  ) -> Result<Vec<Post>> {
    let envelope = self.fetch_envelope(object_id, connection, query).await?;
    envelope
      .items
      .into_iter()
      .map(|raw| {
        let tag = PostType::discriminate(&raw, post_type);
        Post::decode(tag, raw)
      })
      .collect()
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn send_form(&self, object_id: &str, connection: &str, form: Form) -> Result<Value> {
    let url = self.url(object_id, connection, &[])?;
    debug!(%url, fields = form.len(), "POST");
    self.transport.post(url, form).await
  }

  /// POST `form` to `{object_id}/{connection}` and return the new object's id.
  ///
  /// Fails with [`Error::Api`] when the response carries no `id`.
  pub async fn publish(&self, object_id: &str, connection: &str, form: Form) -> Result<String> {
    let response = self.send_form(object_id, connection, form).await?;
    response
      .get("id")
      .and_then(id_string)
      .ok_or_else(|| Error::Api {
        status: None,
        body:   format!("publish response has no id: {response}"),
      })
  }

  /// POST `form` to `{object_id}/{connection}`, ignoring the response body.
  ///
  /// A successful response whose body is not JSON (some endpoints answer
  /// with plain text) is not an error.
  pub async fn post(&self, object_id: &str, connection: &str, form: Form) -> Result<()> {
    match self.send_form(object_id, connection, form).await {
      Ok(_) => Ok(()),
      Err(Error::MalformedResponse(reason)) => {
        debug!(%reason, "ignoring non-JSON response body");
        Ok(())
      }
      Err(e) => Err(e),
    }
  }

  /// Delete an object. The Graph API models deletion as a POST carrying
  /// `method=delete`.
  pub async fn delete(&self, object_id: &str) -> Result<()> {
    self.delete_connection(object_id, "").await
  }

  /// Delete a connection of an object (e.g. un-like: `{id}/likes`).
  pub async fn delete_connection(&self, object_id: &str, connection: &str) -> Result<()> {
    self.post(object_id, connection, form([("method", "delete")])).await
  }
}

/// Build a [`Form`] from string pairs.
pub fn form<const N: usize>(pairs: [(&str, &str); N]) -> Form {
  pairs
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
