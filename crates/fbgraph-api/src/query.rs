//! Query parameters for Graph API reads.

/// Default page size, matching the Graph API's own default.
pub const DEFAULT_LIMIT: u32 = 25;

/// Offset pagination for connection reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
  pub offset: u32,
  pub limit:  u32,
}

impl Paging {
  pub fn new(offset: u32, limit: u32) -> Self { Self { offset, limit } }
}

impl Default for Paging {
  fn default() -> Self { Self { offset: 0, limit: DEFAULT_LIMIT } }
}

/// Parameters for [`crate::GraphApi::fetch_connections`] and friends.
#[derive(Debug, Clone, Default)]
pub struct Query {
  /// Connection reads fall back to [`Paging::default`] when unset. Object
  /// reads only send paging when it is set explicitly.
  pub paging:      Option<Paging>,
  /// Field selection, sent comma-joined as `fields`.
  pub fields:      Vec<String>,
  /// Free-text search, sent as `q`.
  pub search:      Option<String>,
  /// Search scope (e.g. `"post"`, `"user"`), sent as `type`.
  pub search_type: Option<String>,
  /// Any other parameters, appended in order.
  pub extra:       Vec<(String, String)>,
}

impl Query {
  pub fn paged(paging: Paging) -> Self {
    Self { paging: Some(paging), ..Self::default() }
  }

  pub fn search(q: impl Into<String>) -> Self {
    Self { search: Some(q.into()), ..Self::default() }
  }

  pub fn with_paging(mut self, paging: Paging) -> Self {
    self.paging = Some(paging);
    self
  }

  pub fn with_fields<I, S>(mut self, fields: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.fields.extend(fields.into_iter().map(Into::into));
    self
  }

  pub fn with_type(mut self, search_type: impl Into<String>) -> Self {
    self.search_type = Some(search_type.into());
    self
  }

  pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.extra.push((name.into(), value.into()));
    self
  }

  /// Parameters for a connection (list) read: paging always present.
  pub(crate) fn connection_params(&self) -> Vec<(String, String)> {
    self.params(Some(self.paging.unwrap_or_default()))
  }

  /// Parameters for a single-object read.
  pub(crate) fn object_params(&self) -> Vec<(String, String)> { self.params(self.paging) }

  fn params(&self, paging: Option<Paging>) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some(p) = paging {
      params.push(("offset".to_string(), p.offset.to_string()));
      params.push(("limit".to_string(), p.limit.to_string()));
    }
    if !self.fields.is_empty() {
      params.push(("fields".to_string(), self.fields.join(",")));
    }
    if let Some(q) = &self.search {
      params.push(("q".to_string(), q.clone()));
    }
    if let Some(t) = &self.search_type {
      params.push(("type".to_string(), t.clone()));
    }
    params.extend(self.extra.iter().cloned());
    params
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pairs(params: &[(String, String)]) -> Vec<(&str, &str)> {
    params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
  }

  #[test]
  fn connection_params_default_paging() {
    let q = Query::default();
    assert_eq!(pairs(&q.connection_params()), vec![("offset", "0"), ("limit", "25")]);
  }

  #[test]
  fn object_params_omit_paging() {
    assert!(Query::default().object_params().is_empty());
  }

  #[test]
  fn full_parameter_order() {
    let q = Query::search("rust lang")
      .with_type("post")
      .with_paging(Paging::new(50, 10))
      .with_fields(["id", "message"])
      .with_param("locale", "en_US");
    assert_eq!(
      pairs(&q.connection_params()),
      vec![
        ("offset", "50"),
        ("limit", "10"),
        ("fields", "id,message"),
        ("q", "rust lang"),
        ("type", "post"),
        ("locale", "en_US"),
      ]
    );
  }
}
