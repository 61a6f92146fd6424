//! The ingestion and output seams around the pipeline.
//!
//! Implemented by codec crates (e.g. `procure-csv`). The binary depends on
//! these traits, not on a concrete file format.

use crate::{Catalog, Order, SaleList};

/// Produces the two input relations.
///
/// Implementations own schema validation: anything they return is treated as
/// well-formed by the pipeline.
pub trait RelationSource {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load the order history for the lookback window.
  fn load_orders(&self) -> Result<Vec<Order>, Self::Error>;

  /// Load the product catalog. Called once per run.
  fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}

/// Receives the finished sale list.
pub trait SaleListSink {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist `list` in full. Must not leave partial output on failure.
  fn write(&self, list: &SaleList) -> Result<(), Self::Error>;
}
