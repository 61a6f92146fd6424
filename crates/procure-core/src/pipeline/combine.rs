//! Union of trending and overstock products, deduplicated by product id.

use std::collections::BTreeMap;

use crate::{ProductId, SaleItem, SaleList};

/// Union `trending` and `overstock` into the final [`SaleList`].
pub fn combine(trending: Vec<SaleItem>, overstock: Vec<SaleItem>) -> SaleList {
  trending.into_iter().chain(overstock).collect()
}

/// Keyed by product id; the first name seen for an id wins.
impl FromIterator<SaleItem> for SaleList {
  fn from_iter<I: IntoIterator<Item = SaleItem>>(iter: I) -> Self {
    let mut by_id: BTreeMap<ProductId, String> = BTreeMap::new();
    for item in iter {
      by_id.entry(item.product_id).or_insert(item.product_name);
    }
    let items = by_id
      .into_iter()
      .map(|(product_id, product_name)| SaleItem { product_id, product_name })
      .collect();
    SaleList { items }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn item(id: u64, name: &str) -> SaleItem {
    SaleItem {
      product_id:   ProductId(id),
      product_name: name.to_string(),
    }
  }

  #[test]
  fn overlap_appears_once() {
    let list = combine(
      vec![item(1204, "Alexa"), item(1204, "Alexa"), item(1222, "Apple Phone")],
      vec![item(1204, "Alexa"), item(1209, "BedSheet")],
    );
    let ids: Vec<_> = list.product_ids().map(|id| id.0).collect();
    assert_eq!(ids, vec![1204, 1209, 1222]);
  }

  #[test]
  fn first_seen_name_is_kept() {
    let list = combine(vec![item(7, "first")], vec![item(7, "second")]);
    assert_eq!(list.items(), &[item(7, "first")]);
  }

  #[test]
  fn empty_inputs_give_empty_list() {
    assert!(combine(Vec::new(), Vec::new()).is_empty());
  }

  #[test]
  fn contains_uses_product_id() {
    let list = combine(vec![item(3, "c"), item(1, "a")], vec![item(2, "b")]);
    assert!(list.contains(ProductId(1)));
    assert!(list.contains(ProductId(3)));
    assert!(!list.contains(ProductId(4)));
  }
}
