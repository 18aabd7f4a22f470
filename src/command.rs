use super::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
  /// Hide a pinned hot-feed post for the rest of the session.
  DismissPinned(String),
  /// The reader followed or unfollowed somebody.
  FollowsChanged,
  /// Load the first page of every empty feed.
  Initialize,
  InsertComment {
    category: CategoryKind,
    comment: Post,
  },
  LoadMore(CategoryKind),
  Prepend {
    category: CategoryKind,
    post: Post,
  },
  ReaderChanged(Option<String>),
  Reload(CategoryKind),
  RemovePost {
    category: CategoryKind,
    hash: String,
  },
  SetTag(String),
  SwitchCategory(CategoryKind),
}
