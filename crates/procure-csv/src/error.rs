//! Error types for the procure-csv codec.

use std::path::PathBuf;

use procure_core::ProductId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to open {}: {source}", path.display())]
  Open {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("failed to write {}: {source}", path.display())]
  Persist {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("{}: {source}", path.display())]
  InFile {
    path:   PathBuf,
    source: Box<Error>,
  },

  #[error("line {line}: {source}")]
  Record { line: u64, source: csv::Error },

  #[error("line {line}: invalid DateOfOrder {value:?}")]
  InvalidDate { line: u64, value: String },

  #[error("line {line}: order {order_id} has zero units")]
  ZeroUnits { line: u64, order_id: String },

  #[error("line {line}: product {product_id} already defined on line {first_line}")]
  DuplicateProduct {
    line:       u64,
    first_line: u64,
    product_id: ProductId,
  },

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("core error: {0}")]
  Core(#[from] procure_core::Error),
}

impl Error {
  /// Attach the file the error came from.
  pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
    Self::InFile {
      path:   path.into(),
      source: Box::new(self),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
