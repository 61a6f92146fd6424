//! Overstock selection. Independent of order history.

use crate::{Catalog, SaleItem};

/// Every product whose stock is strictly greater than `overstock_threshold`.
pub fn select_overstock(
  catalog: &Catalog,
  overstock_threshold: u64,
) -> Vec<SaleItem> {
  catalog
    .iter()
    .filter(|product| product.stock > overstock_threshold)
    .map(SaleItem::from)
    .collect()
}
