// Health check CLI entry point

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use video_hosting_health::checks;
use video_hosting_health::config::AppConfig;

/// Video Hosting connection health check CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout is reserved for the check report
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let _cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("❌ Configuration error:");
            println!("{}", e);
            std::process::exit(1);
        }
    };

    if checks::run_health_check(&config).await.is_err() {
        std::process::exit(1);
    }
}
