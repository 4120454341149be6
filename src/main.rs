use clap::error::ErrorKind;
use clap::Parser;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use ytfeed::channel::CHANNELS_FILE;
use ytfeed::feed::FetchError;
use ytfeed::render::OutputMode;
use ytfeed::{run, AppError, RunOptions};

#[derive(Parser, Debug)]
#[command(
    name = "ytfeed",
    version,
    about = "Print a YouTube channel's recent uploads from its public feed"
)]
struct Args {
    /// Channel ID (UC...) or @handle listed in the channels file.
    /// Only the first token is used; the rest are ignored.
    #[arg(value_name = "CHANNEL", allow_hyphen_values = true)]
    channel: Vec<String>,

    /// Print the full feed as JSON instead of title/date lines
    #[arg(long)]
    json: bool,

    /// Handle directory, relative to the working directory
    #[arg(long, value_name = "FILE", default_value = CHANNELS_FILE)]
    channels_file: PathBuf,
}

impl Args {
    fn into_options(self) -> RunOptions {
        let json = self.json || self.channel.iter().any(|t| t == "--json");
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::List
        };
        let channels_file = match std::env::current_dir() {
            Ok(cwd) => cwd.join(&self.channels_file),
            Err(e) => {
                tracing::warn!(error = %e, "Cannot read working directory, using relative path");
                self.channels_file
            }
        };
        let reference = channel_reference(&self.channel).unwrap_or_default();
        RunOptions::new(reference, mode, channels_file)
    }
}

/// First token that is not the `--json` flag.
fn channel_reference(tokens: &[String]) -> Option<String> {
    tokens.iter().find(|t| *t != "--json").cloned()
}

async fn try_main(options: RunOptions) -> Result<(), AppError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("ytfeed/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(FetchError::from)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&client, &options, &mut out).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the rendered feed
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        // Everything else is a usage problem: exit 1, not clap's 2
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };
    let options = args.into_options();

    match try_main(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Exiting with failure");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
