//! Trend selection: which categories are hot, and which product made them so.

use tracing::debug;

use crate::{Catalog, HotCategoryTrigger, ProductCount};

/// Inner-join `counts` to the catalog on product id and keep the rows whose
/// order count is strictly greater than `order_threshold`.
///
/// Counts for products missing from the catalog are dropped. A category is
/// reported once per qualifying product.
pub fn select_hot_categories(
  catalog: &Catalog,
  counts: &[ProductCount],
  order_threshold: u64,
) -> Vec<HotCategoryTrigger> {
  let mut unmatched = 0usize;
  let triggers: Vec<HotCategoryTrigger> = counts
    .iter()
    .filter_map(|count| match catalog.get(count.product_id) {
      Some(product) => Some((product, count)),
      None => {
        unmatched += 1;
        None
      }
    })
    .filter(|(_, count)| count.counts > order_threshold)
    .map(|(product, count)| HotCategoryTrigger {
      category_id: product.category_id,
      product_id:  product.product_id,
      counts:      count.counts,
    })
    .collect();

  if unmatched > 0 {
    debug!(unmatched, "dropped order counts for products not in the catalog");
  }
  triggers
}
