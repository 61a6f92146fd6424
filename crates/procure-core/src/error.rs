//! Error types for `procure-core`.

use thiserror::Error;

use crate::catalog::ProductId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("duplicate product id in catalog: {0}")]
  DuplicateProduct(ProductId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
