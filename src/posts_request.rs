use super::*;

/// Body of `get-posts-stateless`, used by the following and global feeds.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PostsRequest {
  add_global_feed_bool: bool,
  fetch_subcomments: bool,
  #[serde(rename = "GetPostsByDESO")]
  get_posts_by_deso: bool,
  get_posts_for_follow_feed: bool,
  get_posts_for_global_whitelist: bool,
  media_required: bool,
  num_to_fetch: usize,
  order_by: &'static str,
  post_content: String,
  post_hash_hex: String,
  #[serde(rename = "PostsByDESOMinutesLookback")]
  posts_by_deso_minutes_lookback: u64,
  reader_public_key_base58_check: String,
  start_tstamp_secs: Option<u64>,
}

impl PostsRequest {
  pub(crate) fn new(
    request: &PageRequest,
    start_tstamp_secs: Option<u64>,
  ) -> Self {
    let following = request.category == CategoryKind::Following;

    Self {
      add_global_feed_bool: false,
      fetch_subcomments: false,
      get_posts_by_deso: false,
      get_posts_for_follow_feed: following,
      get_posts_for_global_whitelist: false,
      media_required: false,
      num_to_fetch: request.page_size,
      order_by: if following { "newest" } else { "" },
      post_content: String::new(),
      post_hash_hex: request.cursor.clone().unwrap_or_default(),
      posts_by_deso_minutes_lookback: 0,
      reader_public_key_base58_check: request
        .reader
        .clone()
        .unwrap_or_default(),
      start_tstamp_secs,
    }
  }
}
