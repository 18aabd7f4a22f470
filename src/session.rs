use super::*;

/// Every feed of one reader's session.
///
/// The session never performs I/O. Commands that need data push
/// [`Effect::FetchPage`] carrying a fresh request id; the answer comes back
/// through [`Session::handle_event`] and is applied only if that id is still
/// the feed's outstanding request.
pub struct Session {
  active: CategoryKind,
  dismissed_pinned: Option<String>,
  feeds: Vec<Feed>,
  next_request_id: u64,
  page_size: usize,
  pending_effects: Vec<Effect>,
  reader: Option<String>,
  subscribers: Vec<UnboundedSender<Change>>,
  tag: Option<String>,
}

impl Session {
  pub fn active(&self) -> CategoryKind {
    self.active
  }

  fn clear(&mut self, kind: CategoryKind) {
    let feed = self.feed_mut(kind);

    if feed.list.is_empty() {
      return;
    }

    feed.list.clear();

    self.notify(kind, ChangeKind::Cleared);
  }

  /// Forgets the tag along with its feed and any page still in flight.
  fn deactivate_tag(&mut self) {
    self.tag = None;

    let feed = self.feed_mut(CategoryKind::Tag);

    if let Some(pending) = feed.pending.take() {
      debug!(
        request_id = pending.request_id,
        "dropping outstanding tag feed request"
      );

      feed.load_state = LoadState::Idle;

      self.notify(CategoryKind::Tag, ChangeKind::LoadState(LoadState::Idle));
    }

    self.clear(CategoryKind::Tag);
  }

  fn dismiss_pinned(&mut self, hash: String) {
    let loaded = self
      .feed(CategoryKind::Hot)
      .list
      .get(0)
      .is_some_and(|head| head.is_pinned && head.hash == hash);

    if loaded && let Ok(removal) = self.remove_post(CategoryKind::Hot, &hash)
    {
      debug!(index = removal.index, "removed dismissed pinned post");
    }

    self.dismissed_pinned = Some(hash);
  }

  pub fn dismissed_pinned(&self) -> Option<&str> {
    self.dismissed_pinned.as_deref()
  }

  pub fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch, Error> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    match command {
      Command::DismissPinned(hash) => self.dismiss_pinned(hash),
      Command::FollowsChanged => {
        self.reload_from_scratch(CategoryKind::Following);
      }
      Command::Initialize => self.initialize(),
      Command::InsertComment { category, comment } => {
        self.insert_comment(category, comment)?;
      }
      Command::LoadMore(kind) => self.start_load(kind, false),
      Command::Prepend { category, post } => self.prepend_post(category, post),
      Command::ReaderChanged(reader) => self.set_reader(reader),
      Command::Reload(kind) => self.start_load(kind, true),
      Command::RemovePost { category, hash } => {
        self.remove_post(category, &hash)?;
      }
      Command::SetTag(tag) => self.set_tag(&tag),
      Command::SwitchCategory(kind) => self.switch_category(kind),
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
    })
  }

  pub fn feed(&self, kind: CategoryKind) -> &Feed {
    &self.feeds[kind.index()]
  }

  fn feed_mut(&mut self, kind: CategoryKind) -> &mut Feed {
    &mut self.feeds[kind.index()]
  }

  pub fn from_config(config: &Config) -> Self {
    Self::new(config.page_size, config.reader_public_key.clone())
  }

  /// Applies a fetched page and returns the effects it produced.
  pub fn handle_event(&mut self, event: Event) -> Vec<Effect> {
    match event {
      Event::Page {
        category,
        request_id,
        result,
      } => self.handle_page(category, request_id, result),
    }

    std::mem::take(&mut self.pending_effects)
  }

  fn handle_page(
    &mut self,
    kind: CategoryKind,
    request_id: u64,
    result: Result<Vec<Post>>,
  ) {
    let feed = self.feed_mut(kind);

    if feed.pending_request_id() != Some(request_id) {
      debug!(
        category = kind.label(),
        request_id, "discarding stale page response"
      );
      return;
    }

    let Some(pending) = feed.pending.take() else {
      return;
    };

    feed.load_state = LoadState::Idle;

    match result {
      Ok(batch) => {
        let change = self.merge_page(kind, pending, batch);
        self.notify(kind, change);
      }
      Err(error) => {
        warn!(category = kind.label(), "could not load posts: {error:#}");

        self.pending_effects.push(Effect::ReportError {
          message: format!("Error loading posts: {error:#}"),
        });
      }
    }

    self.notify(kind, ChangeKind::LoadState(LoadState::Idle));
  }

  fn initialize(&mut self) {
    for category in Category::all() {
      let feed = self.feed(category.kind);

      if feed.list.is_empty() && !feed.is_loading() {
        self.start_load(category.kind, true);
      }
    }
  }

  pub fn insert_comment(
    &mut self,
    kind: CategoryKind,
    comment: Post,
  ) -> Result<usize, Error> {
    let index = self
      .feed_mut(kind)
      .list
      .insert_comment_after_parent(comment)?;

    self.notify(
      kind,
      ChangeKind::CommentInserted {
        index,
        parent_index: index - 1,
      },
    );

    Ok(index)
  }

  fn merge_page(
    &mut self,
    kind: CategoryKind,
    pending: PendingPage,
    batch: Vec<Post>,
  ) -> ChangeKind {
    let received = batch.len();

    let (page_size, tag, dismissed) = (
      self.page_size,
      self.tag.clone(),
      self.dismissed_pinned.clone(),
    );

    let feed = self.feed_mut(kind);

    feed.has_more = received >= page_size;

    let batch =
      feed
        .category
        .pinned
        .apply(batch, tag.as_deref(), dismissed.as_deref());

    let change = if pending.first_page
      && feed.category.merge == MergePolicy::ReplaceOnReload
    {
      ChangeKind::Replaced {
        len: feed.list.replace(batch),
      }
    } else {
      ChangeKind::Appended {
        count: feed.list.append(batch),
      }
    };

    debug!(
      category = kind.label(),
      received,
      len = feed.list.len(),
      has_more = feed.has_more,
      "merged page"
    );

    change
  }

  pub fn new(page_size: usize, reader: Option<String>) -> Self {
    Self {
      active: CategoryKind::Hot,
      dismissed_pinned: None,
      feeds: Category::all().iter().copied().map(Feed::new).collect(),
      next_request_id: 0,
      page_size: page_size.max(1),
      pending_effects: Vec::new(),
      reader,
      subscribers: Vec::new(),
      tag: None,
    }
  }

  fn next_request_id(&mut self) -> u64 {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    request_id
  }

  fn notify(&mut self, category: CategoryKind, kind: ChangeKind) {
    let change = Change { category, kind };

    self
      .subscribers
      .retain(|subscriber| subscriber.send(change.clone()).is_ok());
  }

  pub fn page_size(&self) -> usize {
    self.page_size
  }

  /// Shows a freshly created post at the top of a feed.
  pub fn prepend_post(&mut self, kind: CategoryKind, post: Post) {
    self.feed_mut(kind).list.prepend(post);
    self.notify(kind, ChangeKind::Prepended);
  }

  pub fn reader(&self) -> Option<&str> {
    self.reader.as_deref()
  }

  fn reload_all(&mut self) {
    for category in Category::all() {
      self.reload_from_scratch(category.kind);
    }
  }

  fn reload_from_scratch(&mut self, kind: CategoryKind) {
    self.clear(kind);
    self.start_load(kind, true);
  }

  pub fn remove_post(
    &mut self,
    kind: CategoryKind,
    hash: &str,
  ) -> Result<Removal, Error> {
    let removal = self.feed_mut(kind).list.remove_by_hash(hash)?;

    self.notify(
      kind,
      ChangeKind::Removed {
        index: removal.index,
        parent_index: removal.parent_index,
      },
    );

    Ok(removal)
  }

  fn set_reader(&mut self, reader: Option<String>) {
    if self.reader == reader {
      return;
    }

    info!("reader changed, reloading every feed");

    self.reader = reader;

    self.reload_all();
  }

  fn set_tag(&mut self, tag: &str) {
    let tag = tag.trim().trim_start_matches('#').trim();

    if tag.is_empty() {
      self.deactivate_tag();
      self.active = CategoryKind::Hot;
      return;
    }

    self.tag = Some(tag.to_string());
    self.active = CategoryKind::Tag;

    self.start_load(CategoryKind::Tag, true);
  }

  fn start_load(&mut self, kind: CategoryKind, reload: bool) {
    if kind == CategoryKind::Tag && self.tag.is_none() {
      debug!("no tag selected, skipping tag feed load");
      return;
    }

    let feed = self.feed(kind);

    if !reload && !feed.list.is_empty() && !feed.has_more {
      debug!(category = kind.label(), "feed exhausted, skipping load");
      return;
    }

    if let Some(previous) = feed.pending_request_id() {
      debug!(
        category = kind.label(),
        previous, "superseding outstanding request"
      );
    }

    if reload && feed.category.merge == MergePolicy::AppendOnly {
      self.clear(kind);
    }

    let request_id = self.next_request_id();

    let (page_size, reader, tag) =
      (self.page_size, self.reader.clone(), self.tag.clone());

    let feed = self.feed_mut(kind);

    let first_page = reload || feed.list.is_empty();

    let request = PageRequest {
      category: kind,
      cursor: if first_page {
        None
      } else {
        feed.list.cursor().map(str::to_string)
      },
      page_size,
      reader,
      seen: if kind.pages_by_exclusion() && !first_page {
        feed.list.hashes()
      } else {
        Vec::new()
      },
      tag: tag.filter(|_| kind == CategoryKind::Tag),
    };

    let load_state = if first_page {
      feed.has_more = true;
      LoadState::LoadingFirstPage
    } else {
      LoadState::LoadingMore
    };

    feed.pending = Some(PendingPage {
      first_page,
      request_id,
    });

    feed.load_state = load_state;

    self.notify(kind, ChangeKind::LoadState(load_state));

    self
      .pending_effects
      .push(Effect::FetchPage { request, request_id });
  }

  /// Receives a [`Change`] for every mutation from now on.
  pub fn subscribe(&mut self) -> UnboundedReceiver<Change> {
    let (sender, receiver) = mpsc::unbounded_channel();
    self.subscribers.push(sender);
    receiver
  }

  fn switch_category(&mut self, kind: CategoryKind) {
    if kind != CategoryKind::Tag {
      self.deactivate_tag();
    }

    self.active = if kind == CategoryKind::Tag && self.tag.is_none() {
      CategoryKind::Hot
    } else {
      kind
    };
  }

  pub fn tag(&self) -> Option<&str> {
    self.tag.as_deref()
  }
}
