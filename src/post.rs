use super::*;

/// A post entry as returned by the node API.
///
/// Only the fields the feed model touches are kept; everything else in the
/// response is ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Post {
  #[serde(default)]
  pub body: String,
  #[serde(default)]
  pub comment_count: u64,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub comments: Vec<Post>,
  #[serde(rename = "PostHashHex")]
  pub hash: String,
  #[serde(default)]
  pub is_pinned: bool,
  #[serde(
    rename = "ParentStakeID",
    default,
    deserialize_with = "deserialize_empty_string_as_none"
  )]
  pub parent_hash: Option<String>,
  #[serde(rename = "PosterPublicKeyBase58Check", default)]
  pub poster_public_key: String,
  #[serde(default)]
  pub timestamp_nanos: u64,
}

impl Post {
  /// Case-insensitive check for `#tag` in the body.
  pub fn mentions_tag(&self, tag: &str) -> bool {
    let tag = tag.trim_start_matches('#');

    if tag.is_empty() {
      return false;
    }

    self
      .body
      .to_lowercase()
      .contains(&format!("#{}", tag.to_lowercase()))
  }

  pub fn preview(&self, max_chars: usize) -> String {
    truncate(
      &self.body.split_whitespace().collect::<Vec<_>>().join(" "),
      max_chars,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_node_post_entry() {
    let post = serde_json::from_str::<Post>(
      r#"{
        "PostHashHex": "abc",
        "ParentStakeID": "",
        "Body": "gm #DeSo",
        "CommentCount": 3,
        "IsPinned": true,
        "Comments": null,
        "PosterPublicKeyBase58Check": "BC1YL",
        "TimestampNanos": 1700000000000000000,
        "LikeCount": 12
      }"#,
    )
    .unwrap();

    assert_eq!(post.hash, "abc");
    assert_eq!(post.parent_hash, None);
    assert_eq!(post.comment_count, 3);
    assert!(post.is_pinned);
    assert!(post.comments.is_empty());
  }

  #[test]
  fn deserializes_comment_with_parent() {
    let post = serde_json::from_str::<Post>(
      r#"{"PostHashHex": "c1", "ParentStakeID": "p1"}"#,
    )
    .unwrap();

    assert_eq!(post.parent_hash.as_deref(), Some("p1"));
    assert_eq!(post.comment_count, 0);
  }

  #[test]
  fn mentions_tag_ignores_case_and_leading_hash() {
    let post = Post {
      body: "Shipping on #DeSo today".to_string(),
      ..Post::default()
    };

    assert!(post.mentions_tag("deso"));
    assert!(post.mentions_tag("#DESO"));
    assert!(!post.mentions_tag("bitcoin"));
    assert!(!post.mentions_tag(""));
  }

  #[test]
  fn preview_collapses_whitespace_and_truncates() {
    let post = Post {
      body: "hello\n\n  brave   new world".to_string(),
      ..Post::default()
    };

    assert_eq!(post.preview(80), "hello brave new world");
    assert_eq!(post.preview(5), "hello...");
  }
}
