use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct HotFeedResponse {
  #[serde(
    default,
    deserialize_with = "deserialize_null_default",
    rename = "HotFeedPage"
  )]
  pub(crate) hot_feed_page: Vec<Post>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_or_null_page_is_empty() {
    for json in [r"{}", r#"{"HotFeedPage": null}"#] {
      let response = serde_json::from_str::<HotFeedResponse>(json).unwrap();
      assert!(response.hot_feed_page.is_empty());
    }
  }
}
