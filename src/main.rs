use anyhow::{Context, Result};
use clap::Parser;
use portfolio_server::config::Config;
use portfolio_server::contact::mailer_from_config;
use portfolio_server::server::{self, AppState};
use tracing::info;

/// Localized portfolio/CV web server
#[derive(Parser, Debug)]
#[command(name = "portfolio-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_server=info".parse()?),
        )
        .init();

    // Load configuration from environment, then let -p/--port override it
    let mut config = Config::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }

    info!(
        "Serving content from {} ({} skills, GitHub token {})",
        config.site_dir.display(),
        config.skills.len(),
        if config.github_token.is_some() { "set" } else { "not set" }
    );

    let mailer = mailer_from_config(config.smtp.as_ref()).context("Invalid SMTP configuration")?;
    let state = AppState::new(&config, mailer);

    server::serve(&config, state).await
}
