use std::{future::Future, time::Duration};

use fbgraph_core::{
  Error, Result,
  transport::{Form, Transport},
};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`ReqwestTransport`].
#[derive(Debug, Clone, Deserialize)]
pub struct TransportConfig {
  /// OAuth access token. Requests go out unauthenticated when unset.
  #[serde(default)]
  pub access_token: Option<String>,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT_SECS }

impl Default for TransportConfig {
  fn default() -> Self {
    Self { access_token: None, timeout_secs: DEFAULT_TIMEOUT_SECS }
  }
}

/// HTTP transport over `reqwest`.
///
/// Cheap to clone; the inner [`Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
  client:       Client,
  access_token: Option<String>,
}

impl ReqwestTransport {
  pub fn new(config: TransportConfig) -> Result<Self, reqwest::Error> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()?;
    Ok(Self { client, access_token: config.access_token })
  }

  /// Wrap an already-configured client.
  pub fn with_client(client: Client, access_token: Option<String>) -> Self {
    Self { client, access_token }
  }

  fn auth(&self, request: RequestBuilder) -> RequestBuilder {
    match &self.access_token {
      Some(token) => request.bearer_auth(token),
      None => request,
    }
  }

  async fn send(&self, request: RequestBuilder) -> Result<Value> {
    let response = self.auth(request).send().await.map_err(no_response)?;
    let status = response.status();
    let body = response.text().await.map_err(no_response)?;

    if !status.is_success() {
      warn!(status = status.as_u16(), %body, "graph api returned an error");
      return Err(Error::Api { status: Some(status.as_u16()), body });
    }

    debug!(status = status.as_u16(), bytes = body.len(), "response");
    if body.trim().is_empty() {
      return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
  }
}

/// A request that produced no HTTP response (connect failure, timeout,
/// truncated body).
fn no_response(e: reqwest::Error) -> Error {
  warn!(error = %e, "request failed");
  Error::Api { status: None, body: e.to_string() }
}

impl Transport for ReqwestTransport {
  fn get(&self, url: String) -> impl Future<Output = Result<Value>> + Send + '_ {
    async move { self.send(self.client.get(url)).await }
  }

  fn post(
    &self,
    url: String,
    form: Form,
  ) -> impl Future<Output = Result<Value>> + Send + '_ {
    async move { self.send(self.client.post(url).form(&form)).await }
  }
}
