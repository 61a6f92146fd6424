//! Category expansion with backorder exclusion.

use std::collections::HashSet;

use crate::{Catalog, CategoryId, HotCategoryTrigger, SaleItem};

/// Inner-join the catalog to `triggers` on category id, projecting the
/// product side, and drop products with zero stock.
///
/// Triggers are collapsed to their distinct categories first, so each
/// eligible product is emitted once however many products made its category
/// hot.
pub fn expand_categories(
  catalog: &Catalog,
  triggers: &[HotCategoryTrigger],
) -> Vec<SaleItem> {
  let hot: HashSet<CategoryId> = triggers.iter().map(|t| t.category_id).collect();

  catalog
    .iter()
    .filter(|product| hot.contains(&product.category_id))
    .filter(|product| !product.is_backordered())
    .map(SaleItem::from)
    .collect()
}
