//! Historical order records.
//!
//! The lookback window (nominally three months) is a property of how the
//! order file was produced; nothing here filters by date.

use chrono::NaiveDate;

use crate::catalog::ProductId;

/// One sale event from the order history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
  pub order_id:         String,
  pub product_id:       ProductId,
  pub date_of_order:    NaiveDate,
  /// Always positive; enforced at ingestion.
  pub units:            u32,
  pub order_owner:      String,
  pub delivery_address: String,
}
