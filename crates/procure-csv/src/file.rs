//! File-backed [`RelationSource`] and [`SaleListSink`].

use std::{
  ffi::OsString,
  fs::{self, File},
  io::{BufWriter, Write},
  path::{Path, PathBuf},
};

use procure_core::{
  Catalog, Order, SaleList,
  source::{RelationSource, SaleListSink},
};
use tracing::debug;

use crate::{
  error::{Error, Result},
  read::{DEFAULT_DATE_FORMAT, read_catalog, read_orders},
  write::{OutputFormat, write_sale_list},
};

fn open(path: &Path) -> Result<File> {
  File::open(path).map_err(|source| Error::Open {
    path: path.to_path_buf(),
    source,
  })
}

// ─── Source ──────────────────────────────────────────────────────────────────

/// Reads orders and products from two CSV files.
#[derive(Debug, Clone)]
pub struct CsvSource {
  orders_path:   PathBuf,
  products_path: PathBuf,
  date_format:   String,
}

impl CsvSource {
  pub fn new(
    orders_path: impl Into<PathBuf>,
    products_path: impl Into<PathBuf>,
  ) -> Self {
    Self {
      orders_path:   orders_path.into(),
      products_path: products_path.into(),
      date_format:   DEFAULT_DATE_FORMAT.to_string(),
    }
  }

  /// Override the chrono format used for `DateOfOrder`.
  pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
    self.date_format = date_format.into();
    self
  }
}

impl RelationSource for CsvSource {
  type Error = Error;

  fn load_orders(&self) -> Result<Vec<Order>> {
    let path = &self.orders_path;
    let orders = read_orders(open(path)?, &self.date_format)
      .map_err(|e| e.in_file(path))?;
    debug!(path = %path.display(), rows = orders.len(), "read orders");
    Ok(orders)
  }

  fn load_catalog(&self) -> Result<Catalog> {
    let path = &self.products_path;
    let catalog = read_catalog(open(path)?).map_err(|e| e.in_file(path))?;
    debug!(path = %path.display(), rows = catalog.len(), "read products");
    Ok(catalog)
  }
}

// ─── Sink ────────────────────────────────────────────────────────────────────

/// Writes the sale list to a single file.
///
/// Output is staged next to the destination and renamed into place once
/// fully written, so a failed run never leaves a truncated file behind.
#[derive(Debug, Clone)]
pub struct FileSink {
  path:   PathBuf,
  format: OutputFormat,
  header: bool,
}

impl FileSink {
  pub fn new(path: impl Into<PathBuf>, format: OutputFormat) -> Self {
    Self {
      path: path.into(),
      format,
      header: true,
    }
  }

  /// Whether CSV output starts with a `ProductId,ProductName` row.
  pub fn with_header(mut self, header: bool) -> Self {
    self.header = header;
    self
  }

  fn staging_path(&self) -> PathBuf {
    let mut name = self
      .path
      .file_name()
      .map(OsString::from)
      .unwrap_or_else(|| OsString::from("sale-list"));
    name.push(".partial");
    self.path.with_file_name(name)
  }

  fn write_staged(&self, staging: &Path, list: &SaleList) -> Result<()> {
    let file = File::create(staging).map_err(|source| Error::Persist {
      path: staging.to_path_buf(),
      source,
    })?;
    let mut writer = BufWriter::new(file);
    write_sale_list(&mut writer, list, self.format, self.header)?;
    writer.flush()?;
    Ok(())
  }
}

impl SaleListSink for FileSink {
  type Error = Error;

  fn write(&self, list: &SaleList) -> Result<()> {
    let staging = self.staging_path();
    if let Err(e) = self.write_staged(&staging, list) {
      fs::remove_file(&staging).ok();
      return Err(e.in_file(&self.path));
    }
    if let Err(source) = fs::rename(&staging, &self.path) {
      fs::remove_file(&staging).ok();
      return Err(Error::Persist {
        path: self.path.clone(),
        source,
      });
    }
    debug!(path = %self.path.display(), rows = list.len(), format = %self.format, "wrote sale list");
    Ok(())
  }
}
