use anyhow::{Context, Result};
use checkout_summary::{
    Config, LoggingDispatcher, SummaryScreen, init_logger_with_file, load_snapshot, read_snapshot,
    screen::render_text,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Fixed-width summary
    Text,
    /// Breakdown figures as JSON
    Json,
    /// Full summary view as JSON
    View,
}

#[derive(Parser, Debug)]
#[command(about = "Render the checkout order summary for a snapshot", long_about = None)]
struct Options {
    /// Snapshot file (`{ "items": [...], "promo": 10 }`); stdin when omitted
    #[arg(value_name = "SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Expand the item details section
    #[arg(long)]
    details: bool,

    /// Expand the promo code section
    #[arg(long)]
    promo: bool,

    /// Submit a promo code after rendering
    #[arg(long, value_name = "CODE")]
    promo_code: Option<String>,

    /// Text output width
    #[arg(long, default_value_t = 40)]
    width: usize,

    /// Currency symbol (overrides CURRENCY_SYMBOL)
    #[arg(long)]
    currency: Option<String>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let opts = Options::parse();

    let mut config = Config::from_env();
    if let Some(symbol) = opts.currency.clone() {
        config.currency_symbol = symbol;
    }

    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    let snapshot = match &opts.snapshot {
        Some(path) => load_snapshot(path, &config)
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?,
        None => read_snapshot(std::io::stdin().lock(), &config)
            .context("Failed to read snapshot from stdin")?,
    };

    let mut screen = SummaryScreen::new(LoggingDispatcher, config.currency_symbol.clone());
    if opts.details {
        screen.toggle_details();
    }
    if opts.promo {
        screen.toggle_promo();
    }

    let view = screen.render(&snapshot);
    tracing::info!(
        items = snapshot.items.len(),
        total = %view.breakdown.total,
        "Rendered order summary"
    );

    match opts.format {
        OutputFormat::Text => print!("{}", render_text(&view, opts.width)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view.breakdown)?),
        OutputFormat::View => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    if let Some(code) = &opts.promo_code {
        screen.submit_promo(code)?;
    }

    Ok(())
}
