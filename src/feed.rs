use super::*;

/// One category's loaded posts and pagination bookkeeping.
#[derive(Debug)]
pub struct Feed {
  pub(crate) category: Category,
  pub(crate) has_more: bool,
  pub(crate) list: FeedList,
  pub(crate) load_state: LoadState,
  pub(crate) pending: Option<PendingPage>,
}

impl Feed {
  /// Whether the last page came back full. A full final page still reports
  /// `true`; the next request then returns nothing.
  pub fn has_more(&self) -> bool {
    self.has_more
  }

  pub fn is_loading(&self) -> bool {
    self.load_state.is_loading()
  }

  pub fn list(&self) -> &FeedList {
    &self.list
  }

  pub fn load_state(&self) -> LoadState {
    self.load_state
  }

  pub(crate) fn new(category: Category) -> Self {
    Self {
      category,
      has_more: true,
      list: FeedList::default(),
      load_state: LoadState::Idle,
      pending: None,
    }
  }

  pub(crate) fn pending_request_id(&self) -> Option<u64> {
    self.pending.map(|pending| pending.request_id)
  }
}
