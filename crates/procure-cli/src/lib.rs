//! Run orchestration for the `procure` binary.
//!
//! Resolves [`Settings`] from defaults, an optional TOML file, `PROCURE_*`
//! environment variables and command-line overrides, then drives one
//! ingest → select → write pass.

use std::path::Path;

use anyhow::Context as _;
use procure_core::{
  Selection, Thresholds, select_for_sale,
  source::{RelationSource, SaleListSink},
  threshold::{DEFAULT_ORDER_THRESHOLD, DEFAULT_OVERSTOCK_THRESHOLD},
};
use procure_csv::{DEFAULT_DATE_FORMAT, OutputFormat};
use serde::Deserialize;
use tracing::info;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime settings, deserialised from the layered configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  pub order_threshold:     u64,
  pub overstock_threshold: u64,
  /// chrono format for `DateOfOrder`.
  pub date_format:         String,
  pub output_format:       OutputFormat,
  pub output_header:       bool,
}

impl Settings {
  pub fn thresholds(&self) -> Thresholds {
    Thresholds::new(self.order_threshold, self.overstock_threshold)
  }
}

/// Values given on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub order_threshold:     Option<u64>,
  pub overstock_threshold: Option<u64>,
  pub output_format:       Option<OutputFormat>,
  pub no_header:           bool,
}

/// Resolve settings. `config_path` may point at a file that does not exist.
pub fn load_settings(
  config_path: &Path,
  overrides: &Overrides,
) -> anyhow::Result<Settings> {
  let mut builder = config::Config::builder()
    .set_default("order_threshold", DEFAULT_ORDER_THRESHOLD)?
    .set_default("overstock_threshold", DEFAULT_OVERSTOCK_THRESHOLD)?
    .set_default("date_format", DEFAULT_DATE_FORMAT)?
    .set_default("output_format", OutputFormat::default().to_string())?
    .set_default("output_header", true)?
    .add_source(config::File::from(config_path).required(false))
    .add_source(config::Environment::with_prefix("PROCURE").try_parsing(true))
    .set_override_option("order_threshold", overrides.order_threshold)?
    .set_override_option("overstock_threshold", overrides.overstock_threshold)?
    .set_override_option(
      "output_format",
      overrides.output_format.map(|f| f.to_string()),
    )?;
  if overrides.no_header {
    builder = builder.set_override("output_header", false)?;
  }

  builder
    .build()
    .with_context(|| format!("failed to read config file {}", config_path.display()))?
    .try_deserialize()
    .context("failed to deserialise Settings")
}

// ─── Run ──────────────────────────────────────────────────────────────────────

/// Load both relations, run the pipeline, and hand the sale list to `sink`.
///
/// Nothing is written unless every earlier step succeeded.
pub fn execute<S, K>(
  source: &S,
  sink: &K,
  thresholds: Thresholds,
) -> anyhow::Result<Selection>
where
  S: RelationSource,
  K: SaleListSink,
{
  let catalog = source
    .load_catalog()
    .context("failed to load product catalog")?;
  let orders = source.load_orders().context("failed to load order history")?;
  info!(orders = orders.len(), products = catalog.len(), "inputs loaded");

  let selection = select_for_sale(&orders, &catalog, thresholds);
  info!(
    hot_categories = selection.hot_categories().len(),
    trending = selection.trending.len(),
    overstock = selection.overstock.len(),
    on_sale = selection.sale_list.len(),
    "selection complete"
  );

  sink
    .write(&selection.sale_list)
    .context("failed to write sale list")?;
  Ok(selection)
}
