//! Foreign tabular result as produced by a bridge evaluation.

use serde::{Deserialize, Serialize};

use super::value::{RCell, RType};

/// One column of a foreign frame: a declared type plus the raw cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RColumn {
    /// Column name.
    pub name: String,
    /// The vector type the foreign runtime reports for the column.
    #[serde(rename = "type")]
    pub declared: RType,
    /// Factor level labels; 1-based factor codes index into this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<String>>,
    /// Cell representations, one per row.
    pub cells: Vec<RCell>,
}

impl RColumn {
    /// Create a column with no factor levels.
    pub fn new(name: impl Into<String>, declared: RType, cells: Vec<RCell>) -> Self {
        Self {
            name: name.into(),
            declared,
            levels: None,
            cells,
        }
    }

    /// Attach factor level labels.
    pub fn with_levels(mut self, levels: Vec<String>) -> Self {
        self.levels = Some(levels);
        self
    }
}

/// A tabular result from the foreign runtime, prior to marshaling.
///
/// Produced once per bridge evaluation and treated as immutable input to
/// the marshaler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RFrame {
    /// Row count every column is expected to share.
    pub nrow: usize,
    /// Columns in their original order.
    pub columns: Vec<RColumn>,
}

impl RFrame {
    /// Create an empty frame with a declared row count.
    pub fn new(nrow: usize) -> Self {
        Self {
            nrow,
            columns: Vec::new(),
        }
    }

    /// Append a column (builder style, for tests and mocks).
    pub fn with_column(mut self, column: RColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Number of columns.
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&RColumn> {
        self.columns.iter().find(|c| c.name == name)
    }
}
