use super::*;

/// Anything that can answer a [`PageRequest`].
pub trait PostSource: Clone + Send + Sync + 'static {
  fn fetch_page(
    &self,
    request: PageRequest,
  ) -> impl Future<Output = Result<Vec<Post>>> + Send;
}

/// Receives the user-facing message of a failed load.
pub trait ErrorReporter {
  fn report_error(&self, message: &str);
}

/// Reports errors to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
  fn report_error(&self, message: &str) {
    error!("{message}");
  }
}
