use super::*;

/// Body of `get-hot-feed`, used by the hot and tag feeds.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct HotFeedRequest {
  reader_public_key_base58_check: String,
  response_limit: usize,
  seen_posts: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  tag: Option<String>,
}

impl From<&PageRequest> for HotFeedRequest {
  fn from(request: &PageRequest) -> Self {
    Self {
      reader_public_key_base58_check: request
        .reader
        .clone()
        .unwrap_or_default(),
      response_limit: request.page_size,
      seen_posts: request.seen.clone(),
      tag: request
        .tag
        .as_ref()
        .map(|tag| format!("#{}", tag.to_lowercase())),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  #[test]
  fn hot_request_omits_tag() {
    let request = PageRequest {
      category: CategoryKind::Hot,
      cursor: Some("b".to_string()),
      page_size: 20,
      reader: None,
      seen: vec!["a".to_string(), "b".to_string()],
      tag: None,
    };

    assert_eq!(
      serde_json::to_value(HotFeedRequest::from(&request)).unwrap(),
      json!({
        "ReaderPublicKeyBase58Check": "",
        "ResponseLimit": 20,
        "SeenPosts": ["a", "b"],
      })
    );
  }

  #[test]
  fn tag_is_lowercased_and_prefixed() {
    let request = PageRequest {
      category: CategoryKind::Tag,
      cursor: None,
      page_size: 20,
      reader: Some("BC1reader".to_string()),
      seen: Vec::new(),
      tag: Some("Rust".to_string()),
    };

    let body = serde_json::to_value(HotFeedRequest::from(&request)).unwrap();

    assert_eq!(body["Tag"], "#rust");
    assert_eq!(body["ReaderPublicKeyBase58Check"], "BC1reader");
  }
}
