//! Pages and the accounts the user administers.

use fbgraph_core::{
  Result,
  page::{Account, Page},
  transport::Transport,
};

use crate::{GraphApi, Query, feed::FacebookLink, form};

impl<T: Transport> GraphApi<T> {
  pub async fn get_page(&self, page_id: &str) -> Result<Page> {
    self.fetch_object(page_id, &Query::default()).await
  }

  /// `GET /me/accounts`
  pub async fn get_accounts(&self) -> Result<Vec<Account>> {
    self
      .fetch_connections("me", "accounts", &Query::default())
      .await
  }

  /// Whether the current user administers `page_id`.
  pub async fn is_page_admin(&self, page_id: &str) -> Result<bool> {
    let accounts = self.get_accounts().await?;
    Ok(accounts.iter().any(|a| a.id == page_id))
  }

  /// Post a message to a page's feed; returns the post id.
  pub async fn post_to_page(&self, page_id: &str, message: &str) -> Result<String> {
    self.publish(page_id, "feed", form([("message", message)])).await
  }

  /// Share a link on a page's feed; returns the post id.
  pub async fn post_link_to_page(
    &self,
    page_id: &str,
    message: &str,
    link: &FacebookLink,
  ) -> Result<String> {
    self.publish(page_id, "feed", link.to_form(message)).await
  }
}
