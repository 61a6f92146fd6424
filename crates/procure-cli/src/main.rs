//! `procure` — pick the products to stock for an upcoming sale.
//!
//! # Usage
//!
//! ```text
//! procure Order.csv Product.csv sale.csv
//! procure Order.csv Product.csv sale.json --format json --order-threshold 5
//! ```

use std::path::PathBuf;

use clap::Parser;
use procure_cli::{Overrides, execute, load_settings};
use procure_csv::{CsvSource, FileSink, OutputFormat};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Select products to stock for an upcoming sale")]
struct Cli {
  /// Order history CSV for the lookback window.
  orders: PathBuf,

  /// Product catalog CSV.
  products: PathBuf,

  /// Where to write the sale list.
  output: PathBuf,

  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "procure.toml")]
  config: PathBuf,

  /// Orders a product needs, strictly more than, to make its category hot.
  #[arg(long)]
  order_threshold: Option<u64>,

  /// Stock a product needs, strictly more than, to count as overstocked.
  #[arg(long)]
  overstock_threshold: Option<u64>,

  /// Output format: csv or json.
  #[arg(long, value_name = "FORMAT")]
  format: Option<OutputFormat>,

  /// Omit the header row from CSV output.
  #[arg(long)]
  no_header: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = load_settings(&cli.config, &Overrides {
    order_threshold:     cli.order_threshold,
    overstock_threshold: cli.overstock_threshold,
    output_format:       cli.format,
    no_header:           cli.no_header,
  })?;
  tracing::debug!(?settings, "resolved settings");

  let source = CsvSource::new(&cli.orders, &cli.products)
    .with_date_format(settings.date_format.clone());
  let sink = FileSink::new(&cli.output, settings.output_format)
    .with_header(settings.output_header);

  let selection = execute(&source, &sink, settings.thresholds())?;
  tracing::info!(
    "Wrote {} products to {}",
    selection.sale_list.len(),
    cli.output.display()
  );

  Ok(())
}
