use super::*;

/// HTTP client for a `DeSo` node's feed endpoints.
#[derive(Clone)]
pub struct Client {
  client: reqwest::Client,
  config: Config,
}

impl Client {
  const HOT_FEED_PATH: &str = "/api/v0/get-hot-feed";

  const POSTS_STATELESS_PATH: &str = "/api/v0/get-posts-stateless";

  pub(crate) async fn fetch_hot_feed(
    &self,
    request: &PageRequest,
  ) -> Result<Vec<Post>> {
    let url = format!("{}{}", self.config.node_api, Self::HOT_FEED_PATH);

    Ok(
      self
        .client
        .post(&url)
        .json(&HotFeedRequest::from(request))
        .send()
        .await
        .with_context(|| format!("failed to reach {url}"))?
        .error_for_status()?
        .json::<HotFeedResponse>()
        .await
        .context("failed to parse hot feed response")?
        .hot_feed_page,
    )
  }

  pub(crate) async fn fetch_posts_stateless(
    &self,
    request: &PageRequest,
  ) -> Result<Vec<Post>> {
    let url =
      format!("{}{}", self.config.node_api, Self::POSTS_STATELESS_PATH);

    Ok(
      self
        .client
        .post(&url)
        .json(&PostsRequest::new(request, self.config.start_tstamp_secs))
        .send()
        .await
        .with_context(|| format!("failed to reach {url}"))?
        .error_for_status()?
        .json::<PostsResponse>()
        .await
        .context("failed to parse posts response")?
        .posts_found,
    )
  }

  pub fn new(config: Config) -> Self {
    Self {
      client: reqwest::Client::new(),
      config,
    }
  }
}

impl PostSource for Client {
  async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Post>> {
    debug!(
      category = request.category.label(),
      cursor = request.cursor.as_deref().unwrap_or_default(),
      seen = request.seen.len(),
      "fetching page"
    );

    if request.category.pages_by_exclusion() {
      self.fetch_hot_feed(&request).await
    } else {
      self.fetch_posts_stateless(&request).await
    }
  }
}
