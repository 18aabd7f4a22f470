use super::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
  FetchPage {
    request: PageRequest,
    request_id: u64,
  },
  ReportError {
    message: String,
  },
}
