//! Core relations and the sale-selection pipeline for Procure.
//!
//! This crate is free of file and CLI dependencies. It takes already-typed
//! order and product relations and decides which products belong in the
//! upcoming sale: every in-stock product of a trending category, plus every
//! overstocked product.

pub mod catalog;
pub mod error;
pub mod order;
pub mod pipeline;
pub mod relation;
pub mod source;
pub mod threshold;

pub use catalog::{Catalog, CategoryId, Product, ProductId};
pub use error::{Error, Result};
pub use order::Order;
pub use pipeline::{Selection, select_for_sale};
pub use relation::{HotCategoryTrigger, ProductCount, SaleItem, SaleList};
pub use threshold::Thresholds;


// ─── Shared test helpers ──────────────────────────────────────────────────────
