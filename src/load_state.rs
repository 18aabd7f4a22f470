#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoadState {
  #[default]
  Idle,
  LoadingFirstPage,
  LoadingMore,
}

impl LoadState {
  pub fn is_loading(self) -> bool {
    !matches!(self, Self::Idle)
  }
}
