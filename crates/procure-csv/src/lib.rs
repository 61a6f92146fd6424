//! Delimited-file codec for Procure.
//!
//! Reads the order and product CSV files into [`procure_core`] relations and
//! writes the finished [`SaleList`](procure_core::SaleList) back out as CSV
//! or JSON. Pure synchronous file I/O; the selection logic lives in the core.
//!
//! # Quick start
//!
//! ```no_run
//! use procure_core::{Thresholds, select_for_sale, source::RelationSource};
//! use procure_csv::CsvSource;
//!
//! let source = CsvSource::new("Order.csv", "Product.csv");
//! let catalog = source.load_catalog().unwrap();
//! let orders = source.load_orders().unwrap();
//! let selection = select_for_sale(&orders, &catalog, Thresholds::default());
//! println!("{} products on sale", selection.sale_list.len());
//! ```

pub mod error;
mod file;
mod read;
mod write;

pub use error::{Error, Result};
pub use file::{CsvSource, FileSink};
pub use read::{DEFAULT_DATE_FORMAT, read_catalog, read_orders, read_products};
pub use write::{OutputFormat, write_csv, write_json, write_sale_list};
