use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct PostsResponse {
  #[serde(
    default,
    deserialize_with = "deserialize_null_default",
    rename = "PostsFound"
  )]
  pub(crate) posts_found: Vec<Post>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn null_posts_found_is_empty() {
    let response =
      serde_json::from_str::<PostsResponse>(r#"{"PostsFound": null}"#)
        .unwrap();

    assert!(response.posts_found.is_empty());
  }

  #[test]
  fn parses_posts() {
    let response = serde_json::from_str::<PostsResponse>(
      r#"{"PostsFound": [{"PostHashHex": "a", "Body": "gm", "IsPinned": true}]}"#,
    )
    .unwrap();

    assert_eq!(response.posts_found.len(), 1);
    assert_eq!(response.posts_found[0].hash, "a");
    assert!(response.posts_found[0].is_pinned);
  }
}
