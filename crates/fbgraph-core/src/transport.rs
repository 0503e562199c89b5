//! The `Transport` trait: the HTTP boundary of the client.
//!
//! The trait is implemented by HTTP backends (e.g. `fbgraph-http`). The
//! `GraphApi` client in `fbgraph-api` depends on this abstraction, not on any
//! concrete backend. URLs arrive fully formed, query string included;
//! authentication is the implementation's concern.

use std::future::Future;

use serde_json::Value;

use crate::Result;

/// A form body: ordered `(name, value)` pairs.
pub type Form = Vec<(String, String)>;

/// Abstraction over an authenticated HTTP session.
///
/// Implementations map any non-success outcome to [`crate::Error::Api`] and
/// an empty response body to [`Value::Null`].
pub trait Transport: Send + Sync {
  /// `GET url` and return the decoded JSON body.
  fn get(
    &self,
    url: String,
  ) -> impl Future<Output = Result<Value>> + Send + '_;

  /// `POST url` with a form-encoded body and return the decoded JSON body.
  fn post(
    &self,
    url: String,
    form: Form,
  ) -> impl Future<Output = Result<Value>> + Send + '_;
}
