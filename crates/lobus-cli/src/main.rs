//! Lobus terminal entry point.

use std::error::Error;

use lobus_cli::repository::MemoryPlayerRepository;
use lobus_cli::session::{Session, SessionEnd};
use lobus_core::channel::LinesChannel;
use lobus_core::clock::SystemClock;
use lobus_core::present::WriterPresenter;
use lobus_intro::config::IntroConfig;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr; stdout belongs to the participant.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting lobus");

    let config = IntroConfig::from_env()?;
    let account = std::env::var("LOBUS_ACCOUNT").unwrap_or_else(|_| "guest".to_string());

    let motd = match &config.motd_path {
        Some(path) => match tokio::fs::read_to_string(path).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read MOTD");
                None
            }
        },
        None => None,
    };

    let repo = MemoryPlayerRepository::new();
    let session = Session {
        config: &config,
        clock: &SystemClock,
        repo: &repo,
        account,
    };

    let mut channel = LinesChannel::new(BufReader::new(tokio::io::stdin()));
    let mut present = WriterPresenter::new(std::io::stdout());

    match session
        .run(motd.as_deref(), &mut channel, &mut present)
        .await?
    {
        // The command loop belongs to the host game; hand over the selection.
        SessionEnd::Play(player) => println!("{}", serde_json::to_string_pretty(&player)?),
        SessionEnd::Quit => tracing::info!("participant quit"),
        SessionEnd::AccountDeleted => tracing::info!("account deleted"),
    }

    Ok(())
}
