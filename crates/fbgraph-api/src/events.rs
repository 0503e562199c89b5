//! Events and invitations.

use fbgraph_core::{
  Result,
  event::{Event, EventInvitee},
  transport::Transport,
};

use crate::{GraphApi, Paging, Query};

impl<T: Transport> GraphApi<T> {
  pub async fn get_event(&self, event_id: &str) -> Result<Event> {
    self.fetch_object(event_id, &Query::default()).await
  }

  /// `GET /{owner_id}/events`
  pub async fn get_events(&self, owner_id: &str, paging: Paging) -> Result<Vec<Event>> {
    self
      .fetch_connections(owner_id, "events", &Query::paged(paging))
      .await
  }

  /// `GET /{event_id}/invited`, with each invitee's RSVP status.
  pub async fn get_invited(&self, event_id: &str) -> Result<Vec<EventInvitee>> {
    self
      .fetch_connections(event_id, "invited", &Query::default())
      .await
  }
}
