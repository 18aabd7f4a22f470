use super::*;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CategoryKind {
  Following,
  Global,
  Hot,
  Tag,
}

/// How a fetched page is merged into a feed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MergePolicy {
  /// Pages are always appended. A reload empties the feed when it is issued.
  AppendOnly,
  /// The feed stays visible during a reload and is replaced by the response.
  ReplaceOnReload,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PinnedFilter {
  DropAll,
  /// Drop a pinned post at the head of the page if the reader dismissed it.
  DropDismissedHead,
  /// Drop pinned posts that do not mention the active tag.
  DropUnlessTagged,
  Keep,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Category {
  pub kind: CategoryKind,
  pub label: &'static str,
  pub merge: MergePolicy,
  pub pinned: PinnedFilter,
}

impl Category {
  pub fn all() -> &'static [Category] {
    &[
      Category {
        kind: CategoryKind::Following,
        label: "Following",
        merge: MergePolicy::ReplaceOnReload,
        pinned: PinnedFilter::Keep,
      },
      Category {
        kind: CategoryKind::Hot,
        label: "Hot",
        merge: MergePolicy::AppendOnly,
        pinned: PinnedFilter::DropDismissedHead,
      },
      Category {
        kind: CategoryKind::Global,
        label: "New",
        merge: MergePolicy::ReplaceOnReload,
        pinned: PinnedFilter::DropAll,
      },
      Category {
        kind: CategoryKind::Tag,
        label: "Tag",
        merge: MergePolicy::AppendOnly,
        pinned: PinnedFilter::DropUnlessTagged,
      },
    ]
  }
}

impl CategoryKind {
  pub fn category(self) -> Category {
    Category::all()[self.index()]
  }

  pub(crate) fn index(self) -> usize {
    match self {
      Self::Following => 0,
      Self::Hot => 1,
      Self::Global => 2,
      Self::Tag => 3,
    }
  }

  pub fn label(self) -> &'static str {
    self.category().label
  }

  /// Hot and tag pages are requested by excluding already seen posts rather
  /// than by a cursor.
  pub fn pages_by_exclusion(self) -> bool {
    matches!(self, Self::Hot | Self::Tag)
  }
}

impl FromStr for CategoryKind {
  type Err = Error;

  fn from_str(label: &str) -> Result<Self, Self::Err> {
    let normalized = label.trim().to_lowercase();

    match normalized.as_str() {
      "following" => Ok(Self::Following),
      "new" | "global" => Ok(Self::Global),
      "hot" | "hot 🔥" => Ok(Self::Hot),
      "tag" => Ok(Self::Tag),
      _ => Err(Error::UnknownCategory(label.to_string())),
    }
  }
}

impl PinnedFilter {
  pub fn apply(
    self,
    mut batch: Vec<Post>,
    tag: Option<&str>,
    dismissed: Option<&str>,
  ) -> Vec<Post> {
    match self {
      Self::DropAll => batch.retain(|post| !post.is_pinned),
      Self::DropDismissedHead => {
        if let Some(dismissed) = dismissed
          && batch
            .first()
            .is_some_and(|head| head.is_pinned && head.hash == dismissed)
        {
          batch.remove(0);
        }
      }
      Self::DropUnlessTagged => batch.retain(|post| {
        !post.is_pinned || tag.is_some_and(|tag| post.mentions_tag(tag))
      }),
      Self::Keep => {}
    }

    batch
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn post(hash: &str, is_pinned: bool, body: &str) -> Post {
    Post {
      body: body.to_string(),
      hash: hash.to_string(),
      is_pinned,
      ..Post::default()
    }
  }

  fn hashes(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|post| post.hash.as_str()).collect()
  }

  #[test]
  fn category_lookup_matches_kind() {
    for category in Category::all() {
      assert_eq!(category.kind.category(), *category);
    }

    assert_eq!(CategoryKind::Global.label(), "New");
  }

  #[test]
  fn drop_all_removes_every_pinned_post() {
    let batch = vec![
      post("1", true, ""),
      post("2", false, ""),
      post("3", true, ""),
    ];

    let kept = PinnedFilter::DropAll.apply(batch, None, None);

    assert_eq!(hashes(&kept), ["2"]);
  }

  #[test]
  fn drop_dismissed_head_only_drops_matching_pinned_head() {
    let batch = vec![post("pin", true, ""), post("2", false, "")];

    let kept =
      PinnedFilter::DropDismissedHead.apply(batch.clone(), None, Some("pin"));
    assert_eq!(hashes(&kept), ["2"]);

    let kept =
      PinnedFilter::DropDismissedHead.apply(batch.clone(), None, Some("other"));
    assert_eq!(hashes(&kept), ["pin", "2"]);

    let kept = PinnedFilter::DropDismissedHead.apply(batch, None, None);
    assert_eq!(hashes(&kept), ["pin", "2"]);
  }

  #[test]
  fn drop_unless_tagged_keeps_pinned_posts_mentioning_the_tag() {
    let batch = vec![
      post("1", true, "welcome to #rust"),
      post("2", true, "announcement"),
      post("3", false, "no tag here"),
    ];

    let kept = PinnedFilter::DropUnlessTagged.apply(batch, Some("Rust"), None);

    assert_eq!(hashes(&kept), ["1", "3"]);
  }

  #[test]
  fn parses_labels_case_insensitively() {
    assert_eq!("hot".parse::<CategoryKind>(), Ok(CategoryKind::Hot));
    assert_eq!("Hot 🔥".parse::<CategoryKind>(), Ok(CategoryKind::Hot));
    assert_eq!("New".parse::<CategoryKind>(), Ok(CategoryKind::Global));
    assert_eq!(
      "FOLLOWING".parse::<CategoryKind>(),
      Ok(CategoryKind::Following)
    );
    assert_eq!(
      "showcase".parse::<CategoryKind>(),
      Err(Error::UnknownCategory("showcase".to_string()))
    );
  }
}
