#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PendingPage {
  pub(crate) first_page: bool,
  pub(crate) request_id: u64,
}
