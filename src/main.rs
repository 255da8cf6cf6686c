use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use comment_zapper::config::DEFAULT_CONFIG_PATH;
use comment_zapper::{CommentService, ContentFilterService, PageSnapshot, ZapperConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Hide comments from blocked identities, authors and keywords.
#[derive(Debug, Parser)]
#[command(name = "comment-zapper", version)]
struct Cli {
    /// Page snapshot (JSON) to filter
    page: PathBuf,

    /// Settings file with the blocklist
    #[arg(short, long, env = "ZAPPER_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Show every blocked comment, keeping its notice
    #[arg(long)]
    reveal: bool,

    /// Raise log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8, configured_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::try_new(configured_level).unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Settings decide the log level, so logging starts once they are read
    let config = ZapperConfig::load_or_default(&cli.config).await;
    let level = config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());
    setup_logging(cli.verbose, &level);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if cli.config.exists() {
        info!("Loaded configuration from {}", cli.config.display());
    } else {
        warn!(
            "Configuration file {} not found, using defaults",
            cli.config.display()
        );
    }

    let filter = ContentFilterService::from_config(&config.filter);
    if filter.is_empty() {
        warn!("Blocklist is empty, no comment will be hidden");
    }

    let snapshot = match PageSnapshot::load(&cli.page).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to read page {}: {}", cli.page.display(), e);
            return Err(e.into());
        }
    };

    let mut comments = CommentService::new(filter);
    comments.load_snapshot(&snapshot);
    if cli.reveal {
        let revealed = comments.reveal_all();
        info!("Revealed {} blocked comments", revealed);
    }

    let report = comments.report(snapshot.url.clone());
    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
