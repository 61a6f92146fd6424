//! Product records and the shared, read-only catalog built from them.
//!
//! The catalog is ingested once per run and handed by reference to every
//! stage that needs product data. Nothing mutates it after construction.

use std::{collections::HashMap, fmt};

use serde::Serialize;

use crate::{Error, Result};

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

/// Identifier of the category a product is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

// ─── Product ─────────────────────────────────────────────────────────────────

/// One row of the product catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
  pub product_id:   ProductId,
  pub product_name: String,
  pub category_id:  CategoryId,
  /// Units currently on hand. Zero means the product is on backorder.
  pub stock:        u64,
}

impl Product {
  pub fn is_backordered(&self) -> bool { self.stock == 0 }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// The product relation, indexed by [`ProductId`] for joins.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  products: Vec<Product>,
  by_id:    HashMap<ProductId, usize>,
}

impl Catalog {
  /// Build a catalog, rejecting a product id that appears more than once.
  pub fn new(products: Vec<Product>) -> Result<Self> {
    let mut by_id = HashMap::with_capacity(products.len());
    for (index, product) in products.iter().enumerate() {
      if by_id.insert(product.product_id, index).is_some() {
        return Err(Error::DuplicateProduct(product.product_id));
      }
    }
    Ok(Self { products, by_id })
  }

  /// Look up a product by id. `None` is a referential gap, not an error.
  pub fn get(&self, id: ProductId) -> Option<&Product> {
    self.by_id.get(&id).map(|&index| &self.products[index])
  }

  pub fn products(&self) -> &[Product] { &self.products }

  pub fn iter(&self) -> std::slice::Iter<'_, Product> { self.products.iter() }

  pub fn len(&self) -> usize { self.products.len() }

  pub fn is_empty(&self) -> bool { self.products.is_empty() }
}

impl<'a> IntoIterator for &'a Catalog {
  type IntoIter = std::slice::Iter<'a, Product>;
  type Item = &'a Product;

  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
