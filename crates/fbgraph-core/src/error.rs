//! Error types for `fbgraph-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The transport reported a non-success outcome. `status` is `None` when
  /// no HTTP response was received at all.
  #[error("graph api error (status {status:?}): {body}")]
  Api {
    status: Option<u16>,
    body:   String,
  },

  /// A required field was missing or a field had the wrong shape.
  #[error("malformed response: {0}")]
  MalformedResponse(String),

  #[error("invalid url: {0}")]
  InvalidUrl(#[from] url::ParseError),
}

impl Error {
  pub fn malformed(message: impl Into<String>) -> Self {
    Self::MalformedResponse(message.into())
  }
}

impl From<serde_json::Error> for Error {
  fn from(e: serde_json::Error) -> Self { Self::MalformedResponse(e.to_string()) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
