//! In-memory feed lists for a `DeSo` node client.
//!
//! A [`Session`] owns one [`Feed`] per [`CategoryKind`]. Callers drive it with
//! [`Command`]s, execute the [`Effect`]s it returns, and hand fetched pages
//! back as [`Event`]s. [`App`] does that loop on a tokio runtime against any
//! [`PostSource`], such as the node [`Client`].

use {
  anyhow::Context,
  hot_feed_request::HotFeedRequest,
  hot_feed_response::HotFeedResponse,
  pending_page::PendingPage,
  posts_request::PostsRequest,
  posts_response::PostsResponse,
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  std::{collections::HashSet, env, future::Future, str::FromStr},
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, error, info, warn},
  utils::{deserialize_empty_string_as_none, deserialize_null_default, truncate},
};

pub use {
  app::App,
  category::{Category, CategoryKind, MergePolicy, PinnedFilter},
  change::{Change, ChangeKind},
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  config::Config,
  effect::Effect,
  error::Error,
  event::Event,
  feed::Feed,
  feed_list::{FeedList, Removal},
  load_state::LoadState,
  page_request::PageRequest,
  post::Post,
  session::Session,
  source::{ErrorReporter, LogReporter, PostSource},
};

mod app;
mod category;
mod change;
mod client;
mod command;
mod command_dispatch;
mod config;
mod effect;
mod error;
mod event;
mod feed;
mod feed_list;
mod hot_feed_request;
mod hot_feed_response;
mod load_state;
mod page_request;
mod pending_page;
mod post;
mod posts_request;
mod posts_response;
mod session;
mod source;
mod utils;

pub const DEFAULT_PAGE_SIZE: usize = 50;

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
