use {
  anyhow::Context,
  crossterm::style::Stylize,
  feed::{
    App, CategoryKind, Client, Command, Config, LogReporter, Result, Session,
  },
  std::{
    backtrace::BacktraceStatus,
    env,
    io::{self, IsTerminal},
    process,
  },
  tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt},
};

const PREVIEW_CHARS: usize = 80;

const USAGE: &str = "usage: feed [following|hot|new|tag <tag>]";

fn initialize_tracing() {
  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,feed=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();
}

async fn run() -> Result {
  let mut args = env::args().skip(1);

  let category = args
    .next()
    .map(|label| label.parse::<CategoryKind>())
    .transpose()
    .context(USAGE)?
    .unwrap_or(CategoryKind::Hot);

  let config = Config::from_env().context("could not load configuration")?;

  let session = Session::from_config(&config);

  let mut app = App::new(Client::new(config), LogReporter, session);

  if category == CategoryKind::Tag {
    let tag = args.next().context(USAGE)?;
    app.dispatch(Command::SetTag(tag))?;
  } else {
    app.dispatch(Command::SwitchCategory(category))?;
    app.dispatch(Command::Reload(category))?;
  }

  app.run_until_idle().await;

  let feed = app.session().feed(app.session().active());

  for post in feed.list() {
    println!(
      "{}  {:>4}  {}",
      post.hash,
      post.comment_count,
      post.preview(PREVIEW_CHARS)
    );
  }

  Ok(())
}

#[tokio::main]
async fn main() {
  initialize_tracing();

  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
