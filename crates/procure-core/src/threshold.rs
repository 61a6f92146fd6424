//! Business-policy thresholds for the selection pipeline.

pub const DEFAULT_ORDER_THRESHOLD: u64 = 3;
pub const DEFAULT_OVERSTOCK_THRESHOLD: u64 = 5;

/// Both comparisons are strict: a value equal to the threshold never
/// qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
  /// A product ordered more than this many times makes its category hot.
  pub order:     u64,
  /// A product with more than this many units in stock is overstocked.
  pub overstock: u64,
}

impl Thresholds {
  pub fn new(order: u64, overstock: u64) -> Self { Self { order, overstock } }
}

impl Default for Thresholds {
  fn default() -> Self {
    Self {
      order:     DEFAULT_ORDER_THRESHOLD,
      overstock: DEFAULT_OVERSTOCK_THRESHOLD,
    }
  }
}
