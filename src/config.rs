use super::*;

/// Runtime settings, read from `FEED_*` environment variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
  pub node_api: String,
  pub page_size: usize,
  pub reader_public_key: Option<String>,
  pub start_tstamp_secs: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      node_api: Self::DEFAULT_NODE_API.to_string(),
      page_size: DEFAULT_PAGE_SIZE,
      reader_public_key: None,
      start_tstamp_secs: None,
    }
  }
}

impl Config {
  const DEFAULT_NODE_API: &str = "https://node.deso.org";

  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let value = |key: &str| {
      lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    };

    let page_size = match value("FEED_PAGE_SIZE") {
      Some(page_size) => page_size
        .parse::<usize>()
        .with_context(|| format!("invalid FEED_PAGE_SIZE `{page_size}`"))?,
      None => DEFAULT_PAGE_SIZE,
    };

    anyhow::ensure!(page_size > 0, "FEED_PAGE_SIZE must be at least 1");

    let start_tstamp_secs = value("FEED_START_TSTAMP_SECS")
      .map(|secs| {
        secs.parse::<u64>().with_context(|| {
          format!("invalid FEED_START_TSTAMP_SECS `{secs}`")
        })
      })
      .transpose()?;

    Ok(Self {
      node_api: value("FEED_NODE_API")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| Self::DEFAULT_NODE_API.to_string()),
      page_size,
      reader_public_key: value("FEED_READER_PUBLIC_KEY"),
      start_tstamp_secs,
    })
  }
}
