//! The five-stage selection pipeline.
//!
//! Pipeline:
//!   orders
//!     └─ count_orders()            → Vec<ProductCount>
//!          └─ select_hot_categories() → Vec<HotCategoryTrigger>
//!               └─ expand_categories()  → trending Vec<SaleItem>
//!   catalog
//!     └─ select_overstock()        → overstock Vec<SaleItem>
//!   trending ∪ overstock
//!     └─ combine()                 → SaleList
//!
//! Every stage is a pure function over immutable inputs and is fully
//! materialised before the next one runs.

mod aggregate;
mod combine;
mod expand;
mod overstock;
mod trend;

use std::collections::BTreeSet;

use tracing::debug;

pub use aggregate::count_orders;
pub use combine::combine;
pub use expand::expand_categories;
pub use overstock::select_overstock;
pub use trend::select_hot_categories;

use crate::{
  Catalog, CategoryId, HotCategoryTrigger, Order, ProductCount, SaleItem,
  SaleList, Thresholds,
};

/// Every relation produced by one run of the pipeline.
#[derive(Debug, Clone)]
pub struct Selection {
  pub counts:    Vec<ProductCount>,
  pub triggers:  Vec<HotCategoryTrigger>,
  /// In-stock products of hot categories, once each.
  pub trending:  Vec<SaleItem>,
  pub overstock: Vec<SaleItem>,
  pub sale_list: SaleList,
}

impl Selection {
  /// Distinct hot categories, without provenance.
  pub fn hot_categories(&self) -> BTreeSet<CategoryId> {
    self.triggers.iter().map(|t| t.category_id).collect()
  }
}

/// Run every stage against `orders` and the shared `catalog`.
pub fn select_for_sale(
  orders: &[Order],
  catalog: &Catalog,
  thresholds: Thresholds,
) -> Selection {
  let counts = count_orders(orders);
  debug!(orders = orders.len(), products = counts.len(), "aggregated orders");

  let triggers = select_hot_categories(catalog, &counts, thresholds.order);
  debug!(
    triggers = triggers.len(),
    threshold = thresholds.order,
    "selected hot categories"
  );

  let trending = expand_categories(catalog, &triggers);
  debug!(rows = trending.len(), "expanded hot categories");

  let overstock = select_overstock(catalog, thresholds.overstock);
  debug!(
    rows = overstock.len(),
    threshold = thresholds.overstock,
    "selected overstock"
  );

  let sale_list = combine(trending.clone(), overstock.clone());
  debug!(rows = sale_list.len(), "combined sale list");

  Selection { counts, triggers, trending, overstock, sale_list }
}
