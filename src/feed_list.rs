use super::*;

/// The posts loaded for one feed category, in display order.
///
/// Hashes are unique within the list, except that [`FeedList::prepend`] and
/// [`FeedList::insert_comment_after_parent`] place their post unconditionally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedList {
  posts: Vec<Post>,
}

/// A post taken out of a [`FeedList`] by [`FeedList::remove_by_hash`].
#[derive(Clone, Debug, PartialEq)]
pub struct Removal {
  /// Index the post occupied before removal.
  pub index: usize,
  /// Index of the adjusted parent, after removal.
  pub parent_index: Option<usize>,
  pub post: Post,
}

impl FeedList {
  /// Appends the posts of `batch` whose hashes are not loaded yet and returns
  /// how many were added.
  pub fn append(&mut self, batch: Vec<Post>) -> usize {
    let mut seen = self
      .posts
      .iter()
      .map(|post| post.hash.clone())
      .collect::<HashSet<_>>();

    let before = self.posts.len();

    self.posts.extend(Self::unique(batch, &mut seen));

    self.posts.len() - before
  }

  pub fn clear(&mut self) {
    self.posts.clear();
  }

  /// Hash of the last loaded post, the exclusive lower bound of the next page.
  pub fn cursor(&self) -> Option<&str> {
    self.posts.last().map(|post| post.hash.as_str())
  }

  pub fn find_parent_index(&self, post: &Post) -> Option<usize> {
    let parent_hash = post.parent_hash.as_deref()?;

    self.position(parent_hash)
  }

  pub fn get(&self, index: usize) -> Option<&Post> {
    self.posts.get(index)
  }

  pub fn hashes(&self) -> Vec<String> {
    self.posts.iter().map(|post| post.hash.clone()).collect()
  }

  /// Places `comment` directly below its parent and records it as the
  /// parent's newest comment. Returns the index of the inserted comment.
  ///
  /// Replies to comments land below their direct parent only; they are not
  /// regrouped under the root post.
  pub fn insert_comment_after_parent(
    &mut self,
    comment: Post,
  ) -> Result<usize, Error> {
    let Some(parent_index) = self.find_parent_index(&comment) else {
      warn!(
        hash = %comment.hash,
        parent_hash = ?comment.parent_hash,
        "parent of new comment not found in feed list"
      );

      return Err(Error::ParentNotFound {
        hash: comment.hash,
        parent_hash: comment.parent_hash,
      });
    };

    let index = parent_index + 1;

    if let Some(parent) = self.posts.get_mut(parent_index) {
      parent.comment_count = parent.comment_count.saturating_add(1);
      parent.comments.insert(0, comment.clone());
    }

    self.posts.insert(index, comment);

    Ok(index)
  }

  pub fn is_empty(&self) -> bool {
    self.posts.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Post> {
    self.posts.iter()
  }

  pub fn len(&self) -> usize {
    self.posts.len()
  }

  pub fn new(posts: Vec<Post>) -> Self {
    let mut list = Self::default();
    list.replace(posts);
    list
  }

  pub fn position(&self, hash: &str) -> Option<usize> {
    self.posts.iter().position(|post| post.hash == hash)
  }

  pub fn prepend(&mut self, post: Post) {
    self.posts.insert(0, post);
  }

  /// Removes the post with `hash`.
  ///
  /// When its parent is loaded in the same list, the parent's comment count
  /// drops by one plus the removed post's own comment count. Grandparents are
  /// left alone.
  pub fn remove_by_hash(&mut self, hash: &str) -> Result<Removal, Error> {
    let Some(index) = self.position(hash) else {
      warn!(hash, "post not found in feed list, skipping removal");

      return Err(Error::PostNotFound {
        hash: hash.to_string(),
      });
    };

    let post = self.posts.remove(index);

    let parent_index = self.find_parent_index(&post);

    if let Some(parent) = parent_index.and_then(|i| self.posts.get_mut(i)) {
      let decrement = post.comment_count.saturating_add(1);

      parent.comment_count = parent.comment_count.saturating_sub(decrement);
    }

    Ok(Removal {
      index,
      parent_index,
      post,
    })
  }

  /// Replaces every loaded post with `batch` and returns the new length.
  pub fn replace(&mut self, batch: Vec<Post>) -> usize {
    self.posts = Self::unique(batch, &mut HashSet::new());
    self.posts.len()
  }

  fn unique(batch: Vec<Post>, seen: &mut HashSet<String>) -> Vec<Post> {
    let total = batch.len();

    let unique = batch
      .into_iter()
      .filter(|post| seen.insert(post.hash.clone()))
      .collect::<Vec<_>>();

    if unique.len() < total {
      debug!(
        dropped = total - unique.len(),
        "dropped posts already present in feed list"
      );
    }

    unique
  }
}

impl<'a> IntoIterator for &'a FeedList {
  type IntoIter = std::slice::Iter<'a, Post>;
  type Item = &'a Post;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
