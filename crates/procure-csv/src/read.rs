//! CSV readers for the order and product relations.
//!
//! Both files carry a header row. Columns are matched by header name, so
//! column order does not matter; surrounding whitespace is trimmed.
//!
//! Expected headers:
//!   orders:   OrderId, ProductId, DateOfOrder, Units, OrderOwner, DeliveryAddress
//!   products: ProductId, ProductName, CategoryId, Stock

use std::{
  collections::{HashMap, hash_map::Entry},
  io::Read,
};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use procure_core::{Catalog, CategoryId, Order, Product, ProductId};
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Day-month-year without zero padding, e.g. `1-12-2018`.
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Raw rows ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OrderRecord {
  order_id:         String,
  product_id:       u64,
  date_of_order:    String,
  units:            u32,
  order_owner:      String,
  delivery_address: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ProductRecord {
  product_id:   u64,
  product_name: String,
  category_id:  u64,
  stock:        u64,
}

impl OrderRecord {
  fn into_order(self, line: u64, date_format: &str) -> Result<Order> {
    let date_of_order = parse_order_date(&self.date_of_order, date_format)
      .ok_or_else(|| Error::InvalidDate {
        line,
        value: self.date_of_order.clone(),
      })?;
    if self.units == 0 {
      return Err(Error::ZeroUnits { line, order_id: self.order_id });
    }
    Ok(Order {
      order_id: self.order_id,
      product_id: ProductId(self.product_id),
      date_of_order,
      units: self.units,
      order_owner: self.order_owner,
      delivery_address: self.delivery_address,
    })
  }
}

impl From<ProductRecord> for Product {
  fn from(raw: ProductRecord) -> Self {
    Self {
      product_id:   ProductId(raw.product_id),
      product_name: raw.product_name,
      category_id:  CategoryId(raw.category_id),
      stock:        raw.stock,
    }
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Parse with the configured format, falling back to ISO 8601.
fn parse_order_date(value: &str, format: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(value, format)
    .or_else(|_| NaiveDate::parse_from_str(value, ISO_DATE_FORMAT))
    .ok()
}

/// Deserialize every record, pairing each with its 1-based line number.
fn records<R, T>(reader: R) -> Result<Vec<(u64, T)>>
where
  R: Read,
  T: DeserializeOwned,
{
  let mut csv_reader = ReaderBuilder::new()
    .has_headers(true)
    .trim(Trim::All)
    .from_reader(reader);
  let headers = csv_reader.headers()?.clone();

  let mut rows = Vec::new();
  for result in csv_reader.records() {
    let record: StringRecord = result?;
    let line = record.position().map_or(0, |p| p.line());
    let row = record
      .deserialize(Some(&headers))
      .map_err(|source| Error::Record { line, source })?;
    rows.push((line, row));
  }
  Ok(rows)
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Read the order history.
///
/// `date_format` is a chrono format string for `DateOfOrder`; ISO dates are
/// always accepted as well. Rows with zero units are rejected.
pub fn read_orders<R: Read>(reader: R, date_format: &str) -> Result<Vec<Order>> {
  records::<_, OrderRecord>(reader)?
    .into_iter()
    .map(|(line, raw)| raw.into_order(line, date_format))
    .collect()
}

/// Read the product file as plain rows.
pub fn read_products<R: Read>(reader: R) -> Result<Vec<Product>> {
  Ok(
    records::<_, ProductRecord>(reader)?
      .into_iter()
      .map(|(_, raw)| Product::from(raw))
      .collect(),
  )
}

/// Read the product file into a [`Catalog`].
///
/// A repeated `ProductId` is rejected with the line of the repeat and of the
/// first definition.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog> {
  let rows = records::<_, ProductRecord>(reader)?;
  let mut first_seen: HashMap<ProductId, u64> = HashMap::with_capacity(rows.len());
  let mut products = Vec::with_capacity(rows.len());
  for (line, raw) in rows {
    let product = Product::from(raw);
    match first_seen.entry(product.product_id) {
      Entry::Occupied(first) => {
        return Err(Error::DuplicateProduct {
          line,
          first_line: *first.get(),
          product_id: product.product_id,
        });
      }
      Entry::Vacant(slot) => {
        slot.insert(line);
      }
    }
    products.push(product);
  }
  Ok(Catalog::new(products)?)
}

#[cfg(test)]
mod tests {
  use super::*;

  const ORDERS_CSV: &str = "\
OrderId,ProductId,DateOfOrder,Units,OrderOwner,DeliveryAddress
O1231,1201,1-12-2018,1,Rahul Sharma,23-4b saket nagar Indore
O1232,1204,1-12-2018,1,Rohan Kumar,magarpatta Pune
O1233,1220,2018-12-02,2,Kirti Gupta,\"Sector 16, Noida Delhi\"
";

  const PRODUCTS_CSV: &str = "\
ProductId,ProductName,CategoryId,Stock
1201,DELL Laptop,1,10
1204,Alexa,2,7
1220, Pencil Box ,5,0
";

  #[test]
  fn reads_orders_with_both_date_styles() {
    let orders = read_orders(ORDERS_CSV.as_bytes(), DEFAULT_DATE_FORMAT).unwrap();
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].order_id, "O1231");
    assert_eq!(orders[0].product_id, ProductId(1201));
    assert_eq!(
      orders[0].date_of_order,
      NaiveDate::from_ymd_opt(2018, 12, 1).unwrap()
    );
    assert_eq!(
      orders[2].date_of_order,
      NaiveDate::from_ymd_opt(2018, 12, 2).unwrap()
    );
    assert_eq!(orders[2].units, 2);
    assert_eq!(orders[2].delivery_address, "Sector 16, Noida Delhi");
  }

  #[test]
  fn reads_products_and_trims_fields() {
    let products = read_products(PRODUCTS_CSV.as_bytes()).unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[2].product_name, "Pencil Box");
    assert_eq!(products[2].category_id, CategoryId(5));
    assert!(products[2].is_backordered());
  }

  #[test]
  fn columns_are_matched_by_header() {
    let input = "Stock,CategoryId,ProductName,ProductId\n4,2,Alexa,1204\n";
    let products = read_products(input.as_bytes()).unwrap();
    assert_eq!(products[0].product_id, ProductId(1204));
    assert_eq!(products[0].stock, 4);
  }

  #[test]
  fn negative_stock_is_rejected_with_line() {
    let input = "ProductId,ProductName,CategoryId,Stock\n1,a,1,3\n2,b,1,-1\n";
    let err = read_products(input.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Record { line: 3, .. }), "got {err:?}");
  }

  #[test]
  fn missing_column_is_rejected() {
    let input = "ProductId,ProductName,Stock\n1,a,3\n";
    assert!(matches!(
      read_products(input.as_bytes()),
      Err(Error::Record { line: 2, .. })
    ));
  }

  #[test]
  fn bad_date_is_rejected() {
    let input = "OrderId,ProductId,DateOfOrder,Units,OrderOwner,DeliveryAddress\n\
                 O1,1,yesterday,1,a,b\n";
    let err = read_orders(input.as_bytes(), DEFAULT_DATE_FORMAT).unwrap_err();
    assert!(
      matches!(err, Error::InvalidDate { line: 2, ref value } if value == "yesterday")
    );
  }

  #[test]
  fn zero_units_are_rejected() {
    let input = "OrderId,ProductId,DateOfOrder,Units,OrderOwner,DeliveryAddress\n\
                 O9,1,1-12-2018,0,a,b\n";
    let err = read_orders(input.as_bytes(), DEFAULT_DATE_FORMAT).unwrap_err();
    assert!(matches!(err, Error::ZeroUnits { line: 2, ref order_id } if order_id == "O9"));
  }

  #[test]
  fn custom_date_format() {
    let input = "OrderId,ProductId,DateOfOrder,Units,OrderOwner,DeliveryAddress\n\
                 O1,1,12/01/2018,1,a,b\n";
    let orders = read_orders(input.as_bytes(), "%m/%d/%Y").unwrap();
    assert_eq!(
      orders[0].date_of_order,
      NaiveDate::from_ymd_opt(2018, 12, 1).unwrap()
    );
  }

  #[test]
  fn duplicate_product_ids_fail_the_catalog() {
    let input = "ProductId,ProductName,CategoryId,Stock\n1,a,1,3\n2,b,1,4\n1,c,1,5\n";
    let err = read_catalog(input.as_bytes()).unwrap_err();
    assert!(
      matches!(
        err,
        Error::DuplicateProduct { line: 4, first_line: 2, product_id: ProductId(1) }
      ),
      "got {err:?}"
    );
    assert_eq!(err.to_string(), "line 4: product 1 already defined on line 2");
  }

  #[test]
  fn header_only_files_are_empty() {
    let orders = read_orders(
      "OrderId,ProductId,DateOfOrder,Units,OrderOwner,DeliveryAddress\n".as_bytes(),
      DEFAULT_DATE_FORMAT,
    )
    .unwrap();
    assert!(orders.is_empty());
    assert!(read_catalog("ProductId,ProductName,CategoryId,Stock\n".as_bytes())
      .unwrap()
      .is_empty());
  }
}
