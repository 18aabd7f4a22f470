#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
  #[error("parent of post {hash} not found in feed")]
  ParentNotFound {
    hash: String,
    parent_hash: Option<String>,
  },

  #[error("post {hash} not found in feed")]
  PostNotFound { hash: String },

  #[error("unknown feed category: {0}")]
  UnknownCategory(String),
}
