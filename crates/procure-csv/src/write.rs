//! Sale-list serializers.

use std::io::Write;

use csv::WriterBuilder;
use procure_core::SaleList;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::Result;

/// File format of the written sale list.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
  /// `ProductId,ProductName` rows.
  #[default]
  Csv,
  /// A JSON array of `{ "product_id", "product_name" }` objects.
  Json,
}

impl TryFrom<String> for OutputFormat {
  type Error = strum::ParseError;

  fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

const HEADER: [&str; 2] = ["ProductId", "ProductName"];

/// Write `list` as CSV, optionally preceded by a header row.
///
/// The header is written even when the list is empty.
pub fn write_csv<W: Write>(writer: W, list: &SaleList, header: bool) -> Result<()> {
  let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
  if header {
    csv_writer.write_record(HEADER)?;
  }
  for item in list {
    csv_writer.write_record([
      item.product_id.to_string().as_str(),
      item.product_name.as_str(),
    ])?;
  }
  csv_writer.flush()?;
  Ok(())
}

/// Write `list` as a pretty-printed JSON array followed by a newline.
pub fn write_json<W: Write>(mut writer: W, list: &SaleList) -> Result<()> {
  serde_json::to_writer_pretty(&mut writer, list)?;
  writeln!(writer)?;
  writer.flush()?;
  Ok(())
}

pub fn write_sale_list<W: Write>(
  writer: W,
  list: &SaleList,
  format: OutputFormat,
  header: bool,
) -> Result<()> {
  match format {
    OutputFormat::Csv => write_csv(writer, list, header),
    OutputFormat::Json => write_json(writer, list),
  }
}
