use super::*;

#[derive(Debug)]
pub enum Event {
  Page {
    category: CategoryKind,
    request_id: u64,
    result: Result<Vec<Post>>,
  },
}
