use clap::Parser;
use std::path::PathBuf;
use telegram_notify::{ForwardError, config, input};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "telegram-notify",
    about = "Forward a webhook event envelope to a Telegram chat"
)]
struct Cli {
    /// Read the envelope from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Optional .env file with NOTIFICATIONS_TELEGRAM_* settings (defaults to ./.env)
    #[arg(long)]
    env_file: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let raw = input::read_envelope(cli.input.as_deref()).await?;
    let response = telegram_notify::handle(&raw, config::env_lookup).await?;

    let json = serde_json::to_string(&response)?;
    println!("{json}");

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    // Before the runtime spawns any threads: this may write to the environment.
    config::load_dotenv(cli.env_file.as_deref());

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run(cli)) {
        // Forwarding failures are already logged inside the invocation span.
        if e.downcast_ref::<ForwardError>().is_none() {
            tracing::error!("{e:#}");
        }
        std::process::exit(1);
    }
}
