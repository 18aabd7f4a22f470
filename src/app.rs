use super::*;

/// Runs a [`Session`]'s effects on the current tokio runtime.
///
/// Fetches are spawned onto the runtime and their results are fed back into
/// the session as [`Event`]s, in the order they complete.
pub struct App<S, R = LogReporter> {
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  in_flight: usize,
  reporter: R,
  session: Session,
  source: S,
}

impl<S: PostSource, R: ErrorReporter> App<S, R> {
  pub fn dispatch(&mut self, command: Command) -> Result<(), Error> {
    let CommandDispatch { effects } = self.session.dispatch_command(command)?;

    self.execute_effects(effects);

    Ok(())
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchPage {
        request,
        request_id,
      } => {
        let (source, sender) = (self.source.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        let category = request.category;

        self.in_flight += 1;

        let fetch =
          handle.spawn(async move { source.fetch_page(request).await });

        handle.spawn(async move {
          let result = match fetch.await {
            Ok(result) => result,
            Err(error) => {
              Err(anyhow::Error::new(error).context("page fetch task failed"))
            }
          };

          let _ = sender.send(Event::Page {
            category,
            request_id,
            result,
          });
        });
      }
      Effect::ReportError { message } => self.reporter.report_error(&message),
    }
  }

  fn execute_effects(&mut self, effects: Vec<Effect>) {
    for effect in effects {
      self.execute_effect(effect);
    }
  }

  fn handle_event(&mut self, event: Event) {
    self.in_flight = self.in_flight.saturating_sub(1);

    let effects = self.session.handle_event(event);

    self.execute_effects(effects);
  }

  pub fn is_idle(&self) -> bool {
    self.in_flight == 0
  }

  /// Must be called from within a tokio runtime.
  pub fn new(source: S, reporter: R, session: Session) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      event_rx,
      event_tx,
      handle: Handle::current(),
      in_flight: 0,
      reporter,
      session,
      source,
    }
  }

  /// Applies every page that has already arrived without waiting.
  pub fn process_pending_events(&mut self) {
    while let Ok(event) = self.event_rx.try_recv() {
      self.handle_event(event);
    }
  }

  /// Waits until every spawned fetch has been applied or discarded.
  pub async fn run_until_idle(&mut self) {
    while self.in_flight > 0 {
      let Some(event) = self.event_rx.recv().await else {
        break;
      };

      self.handle_event(event);
    }
  }

  pub fn session(&self) -> &Session {
    &self.session
  }

  pub fn session_mut(&mut self) -> &mut Session {
    &mut self.session
  }
}
