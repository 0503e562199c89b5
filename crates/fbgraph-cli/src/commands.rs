//! Subcommands and their dispatch onto [`GraphApi`].

use anyhow::Context as _;
use clap::{Args, Subcommand};
use fbgraph_api::{GraphApi, Paging, feed::FacebookLink};
use fbgraph_core::transport::Transport;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
  /// Index of the first item to return.
  #[arg(long, default_value_t = 0)]
  offset: u32,

  /// Maximum number of items to return.
  #[arg(long, default_value_t = fbgraph_api::query::DEFAULT_LIMIT)]
  limit: u32,
}

impl From<PageArgs> for Paging {
  fn from(args: PageArgs) -> Self { Paging::new(args.offset, args.limit) }
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// List posts on an object's wall.
  Feed {
    #[arg(default_value = "me")]
    id:     String,
    #[command(flatten)]
    paging: PageArgs,
  },

  /// List the current user's news feed.
  Home {
    #[command(flatten)]
    paging: PageArgs,
  },

  /// List a user's status updates.
  Statuses {
    #[arg(default_value = "me")]
    id:     String,
    #[command(flatten)]
    paging: PageArgs,
  },

  /// Fetch a single post.
  Post { id: String },

  /// Fetch a user profile.
  Profile {
    #[arg(default_value = "me")]
    id: String,
  },

  /// List the permissions granted to the access token.
  Permissions,

  /// List comments on an object.
  Comments {
    id:     String,
    #[command(flatten)]
    paging: PageArgs,
  },

  /// Post a message to a feed.
  Publish {
    message: String,
    /// Feed owner.
    #[arg(long, default_value = "me")]
    to:      String,
  },

  /// Share a link on a feed.
  Link {
    url:     String,
    #[arg(long, default_value = "")]
    message: String,
    #[arg(long, default_value = "me")]
    to:      String,
  },

  /// Comment on an object.
  Comment { id: String, message: String },

  /// Delete an object.
  Delete { id: String },

  /// Search public posts.
  Search {
    query:  String,
    #[command(flatten)]
    paging: PageArgs,
  },
}

fn to_json<S: Serialize>(value: &S) -> anyhow::Result<Value> {
  serde_json::to_value(value).context("failed to encode output")
}

impl Command {
  /// Run the command, returning what should be printed.
  pub async fn run<T: Transport>(self, api: &GraphApi<T>) -> anyhow::Result<Value> {
    match self {
      Self::Feed { id, paging } => to_json(&api.get_feed(&id, paging.into()).await?),
      Self::Home { paging } => to_json(&api.get_home_feed(paging.into()).await?),
      Self::Statuses { id, paging } => {
        to_json(&api.get_statuses(&id, paging.into()).await?)
      }
      Self::Post { id } => to_json(&api.get_post(&id).await?),
      Self::Profile { id } => to_json(&api.get_user_profile(&id).await?),
      Self::Permissions => to_json(&api.get_user_permissions().await?),
      Self::Comments { id, paging } => {
        to_json(&api.get_comments(&id, paging.into()).await?)
      }
      Self::Publish { message, to } => {
        let id = api.post_message(&to, &message).await?;
        Ok(json!({ "id": id }))
      }
      Self::Link { url, message, to } => {
        let id = api.post_link(&to, &message, &FacebookLink::new(url)).await?;
        Ok(json!({ "id": id }))
      }
      Self::Comment { id, message } => {
        let id = api.add_comment(&id, &message).await?;
        Ok(json!({ "id": id }))
      }
      Self::Delete { id } => {
        api.delete(&id).await?;
        Ok(json!({ "deleted": id }))
      }
      Self::Search { query, paging } => {
        to_json(&api.search_public_feed(&query, paging.into()).await?)
      }
    }
  }
}
