use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChangeKind {
  Appended {
    count: usize,
  },
  Cleared,
  CommentInserted {
    index: usize,
    parent_index: usize,
  },
  LoadState(LoadState),
  Prepended,
  Removed {
    index: usize,
    parent_index: Option<usize>,
  },
  Replaced {
    len: usize,
  },
}

/// Sent to subscribers after every mutation of a feed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Change {
  pub category: CategoryKind,
  pub kind: ChangeKind,
}
