//! Groups and their members.

use fbgraph_core::{
  Result,
  group::{Group, GroupMemberReference, GroupMembership},
  profile::FacebookProfile,
  transport::Transport,
};

use crate::{GraphApi, Paging, Query};

/// Profile fields requested for [`GraphApi::get_member_profiles`].
const MEMBER_PROFILE_FIELDS: [&str; 10] = [
  "id",
  "username",
  "name",
  "first_name",
  "last_name",
  "gender",
  "locale",
  "link",
  "updated_time",
  "verified",
];

impl<T: Transport> GraphApi<T> {
  pub async fn get_group(&self, group_id: &str) -> Result<Group> {
    self.fetch_object(group_id, &Query::default()).await
  }

  /// `GET /{group_id}/members`
  pub async fn get_members(&self, group_id: &str) -> Result<Vec<GroupMemberReference>> {
    self
      .fetch_connections(group_id, "members", &Query::default())
      .await
  }

  /// `GET /{group_id}/members?fields=...`, decoded as full profiles.
  pub async fn get_member_profiles(&self, group_id: &str) -> Result<Vec<FacebookProfile>> {
    let query = Query::default().with_fields(MEMBER_PROFILE_FIELDS);
    self.fetch_connections(group_id, "members", &query).await
  }

  /// `GET /{user_id}/groups`
  pub async fn get_memberships(&self, user_id: &str) -> Result<Vec<GroupMembership>> {
    self
      .fetch_connections(user_id, "groups", &Query::default())
      .await
  }

  /// `GET /search?type=group&q=...`
  pub async fn search_groups(&self, q: &str, paging: Paging) -> Result<Vec<Group>> {
    let query = Query::search(q).with_type("group").with_paging(paging);
    self.fetch_connections("search", "", &query).await
  }
}
