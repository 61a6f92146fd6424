//! Order aggregation: orders per product.

use std::collections::BTreeMap;

use crate::{Order, ProductCount, ProductId};

/// Group orders by product and count the rows in each group.
///
/// Products never ordered do not appear. The result is in ascending
/// product-id order, but callers must not rely on that.
pub fn count_orders(orders: &[Order]) -> Vec<ProductCount> {
  let mut counts: BTreeMap<ProductId, u64> = BTreeMap::new();
  for order in orders {
    *counts.entry(order.product_id).or_default() += 1;
  }
  counts
    .into_iter()
    .map(|(product_id, counts)| ProductCount { product_id, counts })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_helpers::orders_for;

  #[test]
  fn empty_orders_yield_no_counts() {
    assert!(count_orders(&[]).is_empty());
  }

  #[test]
  fn counts_rows_not_units() {
    let mut orders = orders_for(1208, 4);
    orders[0].units = 12;
    orders.extend(orders_for(1204, 7));
    orders.extend(orders_for(1212, 1));

    let counts = count_orders(&orders);
    assert_eq!(counts, vec![
      ProductCount { product_id: ProductId(1204), counts: 7 },
      ProductCount { product_id: ProductId(1208), counts: 4 },
      ProductCount { product_id: ProductId(1212), counts: 1 },
    ]);
  }
}
