use clap::Parser;
use env_template_sync::prompt::TerminalPrompt;
use env_template_sync::sync::{EnvSync, EnvSyncError, EnvSyncOptions, SyncMode, SyncOutcome};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
  name = "env-template-sync",
  about = "Keep your env template in step with your local env file, without leaking values",
  version,
  author
)]
struct Cli {
  /// Path to the source .env file holding real values
  #[arg(short, long)]
  source: Option<PathBuf>,

  /// Path to the template file to update
  #[arg(short, long, default_value = ".env.example")]
  template: PathBuf,

  /// Ask before updating the template, or update it straight away
  #[arg(short, long, value_enum, default_value_t = SyncMode::Interactive)]
  mode: SyncMode,

  /// Skip the confirmation prompt in interactive mode
  #[arg(short, long)]
  yes: bool,

  /// Copy the comment block above each missing key into the template
  #[arg(
    short,
    long,
    default_value_t = true,
    action = clap::ArgAction::Set,
    num_args = 0..=1,
    default_missing_value = "true"
  )]
  comments: bool,

  /// Verbose output (-v for verbose, -vv for very verbose)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn setup_tracing(verbose: u8) {
  use tracing_subscriber::fmt;
  use tracing_subscriber::prelude::*;

  let log_level = match verbose {
    1 => "debug",
    2 => "trace",
    _ => "info",
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(tracing_subscriber::EnvFilter::new(
      std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
    ))
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  setup_tracing(cli.verbose);

  let template_display = cli.template.display().to_string();
  let source_display = cli
    .source
    .as_deref()
    .unwrap_or(Path::new(".env"))
    .display()
    .to_string();

  let options = EnvSyncOptions {
    source_file: cli.source,
    template_file: cli.template,
    mode: cli.mode,
    assume_yes: cli.yes,
    preserve_comments: cli.comments,
  };

  let result = EnvSync::sync_with_options(options, &mut TerminalPrompt::stdio());

  match &result {
    Ok(SyncOutcome::InSync) => {
      println!("{} is in sync with {}", template_display, source_display);
    }
    Ok(SyncOutcome::Updated { added }) => {
      println!(
        "Added {} key(s) to {}: {}",
        added.len(),
        template_display,
        added.join(", ")
      );
    }
    Ok(SyncOutcome::Declined { .. }) => {
      eprintln!("{} left unchanged", template_display);
    }
    Err(err) => {
      eprintln!("error: {}", err);
    }
  }

  ExitCode::from(exit_status(&result))
}

/// Process status for a finished run: 0 when the template ends up in sync.
fn exit_status(result: &Result<SyncOutcome, EnvSyncError>) -> u8 {
  match result {
    Ok(outcome) if outcome.is_success() => 0,
    _ => 1,
  }
}
