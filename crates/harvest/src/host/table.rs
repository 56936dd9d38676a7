//! Host tabular result: ordered named columns with a shared row count.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{HarvestError, Result};

use super::column::Column;
use super::value::Value;

/// An immutable host-native table. Produced once per retrieval call and
/// handed to the caller; construction verifies that every column carries
/// the declared number of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    nrow: usize,
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, rejecting ragged column lengths.
    pub fn new(columns: Vec<Column>, nrow: usize) -> Result<Self> {
        for column in &columns {
            if column.len() != nrow {
                return Err(HarvestError::ShapeMismatch {
                    column: column.name.clone(),
                    expected: nrow,
                    actual: column.len(),
                });
            }
        }
        Ok(Self { nrow, columns })
    }

    /// Number of rows.
    pub fn nrow(&self) -> usize {
        self.nrow
    }

    /// Number of columns.
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Column names in order.
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get a single cell by row and column index.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.columns.get(col).and_then(|c| c.values.get(row))
    }

    /// Write the table as delimited text. Missing cells become empty
    /// fields.
    pub fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);

        wtr.write_record(self.names())?;
        for row in 0..self.nrow {
            let record: Vec<String> = self
                .columns
                .iter()
                .map(|c| c.values[row].render())
                .collect();
            wtr.write_record(&record)?;
        }
        wtr.flush().map_err(|e| HarvestError::Io {
            path: "<writer>".into(),
            source: e,
        })?;
        Ok(())
    }

    /// Write the table as CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        self.write_delimited(writer, b',')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DataType;

    fn sample_table() -> Table {
        Table::new(
            vec![
                Column::new(
                    "comment",
                    DataType::Text,
                    vec![
                        Value::Text("great".to_string()),
                        Value::Missing,
                        Value::Text("NA".to_string()),
                    ],
                ),
                Column::new(
                    "score",
                    DataType::Real,
                    vec![Value::Real(4.5), Value::Missing, Value::Real(10.0)],
                ),
            ],
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_shape_accessors() {
        let table = sample_table();
        assert_eq!(table.nrow(), 3);
        assert_eq!(table.ncol(), 2);
        assert_eq!(table.names(), vec!["comment", "score"]);
        assert_eq!(table.get(0, 1), Some(&Value::Real(4.5)));
        assert_eq!(table.get(1, 0), Some(&Value::Missing));
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let err = Table::new(
            vec![Column::new("a", DataType::Integer, vec![Value::Int(1)])],
            2,
        )
        .unwrap_err();

        match err {
            HarvestError::ShapeMismatch {
                column,
                expected,
                actual,
            } => {
                assert_eq!(column, "a");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_write_csv() {
        let table = sample_table();
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "comment,score\ngreat,4.5\n,\nNA,10\n");
    }
}
