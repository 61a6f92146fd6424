//! Derived relations produced by the pipeline stages.

use serde::Serialize;

use crate::catalog::{CategoryId, Product, ProductId};

// ─── Intermediate relations ──────────────────────────────────────────────────

/// Number of orders placed for a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCount {
  pub product_id: ProductId,
  pub counts:     u64,
}

/// A category marked hot, with the product whose order count triggered it.
///
/// `product_id` and `counts` are provenance only. A category shows up once
/// per triggering product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotCategoryTrigger {
  pub category_id: CategoryId,
  pub product_id:  ProductId,
  pub counts:      u64,
}

/// The `{ProductId, ProductName}` projection shared by the trending,
/// overstock, and sale-list relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleItem {
  pub product_id:   ProductId,
  pub product_name: String,
}

impl From<&Product> for SaleItem {
  fn from(product: &Product) -> Self {
    Self {
      product_id:   product.product_id,
      product_name: product.product_name.clone(),
    }
  }
}

// ─── Terminal relation ───────────────────────────────────────────────────────

/// The final list of products to stock for the sale.
///
/// Holds each product id at most once, in ascending id order. Built by
/// collecting [`SaleItem`]s; see [`crate::pipeline::combine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SaleList {
  pub(crate) items: Vec<SaleItem>,
}

impl SaleList {
  pub fn items(&self) -> &[SaleItem] { &self.items }

  pub fn iter(&self) -> std::slice::Iter<'_, SaleItem> { self.items.iter() }

  pub fn len(&self) -> usize { self.items.len() }

  pub fn is_empty(&self) -> bool { self.items.is_empty() }

  pub fn contains(&self, id: ProductId) -> bool {
    self
      .items
      .binary_search_by_key(&id, |item| item.product_id)
      .is_ok()
  }

  pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
    self.items.iter().map(|item| item.product_id)
  }

  pub fn into_items(self) -> Vec<SaleItem> { self.items }
}

impl<'a> IntoIterator for &'a SaleList {
  type IntoIter = std::slice::Iter<'a, SaleItem>;
  type Item = &'a SaleItem;

  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
