use super::*;

/// What the data-fetch collaborator is asked for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageRequest {
  pub category: CategoryKind,
  /// Hash of the last loaded post; `None` for a first page.
  pub cursor: Option<String>,
  pub page_size: usize,
  pub reader: Option<String>,
  /// Hashes already shown, for categories that page by exclusion.
  pub seen: Vec<String>,
  pub tag: Option<String>,
}
