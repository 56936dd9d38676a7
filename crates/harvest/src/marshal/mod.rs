//! Foreign-to-host value marshaling.
//!
//! A single-pass, stateless transform from an [`RFrame`] to a host
//! [`Table`]. Shape is preserved exactly (column names, order, row
//! count); every cell the foreign runtime flags as missing becomes the
//! host's canonical [`Value::Missing`]; every other cell converts to the
//! column's resolved type with no loss of precision. There is no partial
//! success: the result is either a complete table or an error naming the
//! offending column and row.

mod convert;
mod resolve;

use crate::error::{HarvestError, Result};
use crate::foreign::RFrame;
use crate::host::{Column, Table};

/// Convert a foreign tabular result into a host-native table.
pub fn marshal(frame: &RFrame) -> Result<Table> {
    let mut columns = Vec::with_capacity(frame.columns.len());

    for column in &frame.columns {
        if column.cells.len() != frame.nrow {
            return Err(HarvestError::ShapeMismatch {
                column: column.name.clone(),
                expected: frame.nrow,
                actual: column.cells.len(),
            });
        }

        let dtype = resolve::resolve_column(column)?;

        let mut values = Vec::with_capacity(column.cells.len());
        for (row, cell) in column.cells.iter().enumerate() {
            values.push(convert::convert_cell(cell, dtype, column, row)?);
        }

        columns.push(Column::new(column.name.clone(), dtype, values));
    }

    Table::new(columns, frame.nrow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foreign::{na, RCell, RColumn, RType};
    use crate::host::{DataType, Value};

    #[test]
    fn test_real_column_with_missing_numeric() {
        let frame = RFrame::new(3).with_column(RColumn::new(
            "score",
            RType::Real,
            vec![
                RCell::Real(4.5),
                RCell::Real(na::na_real()),
                RCell::Real(10.0),
            ],
        ));

        let table = marshal(&frame).unwrap();
        let col = table.column("score").unwrap();
        assert_eq!(col.dtype, DataType::Real);
        assert_eq!(
            col.values,
            vec![Value::Real(4.5), Value::Missing, Value::Real(10.0)]
        );
    }

    #[test]
    fn test_literal_na_text_survives() {
        let frame = RFrame::new(3).with_column(RColumn::new(
            "comment",
            RType::Character,
            vec![
                RCell::Character(Some("great".to_string())),
                RCell::Character(None),
                RCell::Character(Some("NA".to_string())),
            ],
        ));

        let table = marshal(&frame).unwrap();
        let col = table.column("comment").unwrap();
        assert_eq!(
            col.values,
            vec![
                Value::Text("great".to_string()),
                Value::Missing,
                Value::Text("NA".to_string()),
            ]
        );
    }

    #[test]
    fn test_mixed_integer_real_column() {
        let frame = RFrame::new(3).with_column(RColumn::new(
            "measure",
            RType::Integer,
            vec![
                RCell::Integer(7),
                RCell::Real(2.5),
                RCell::Integer(na::NA_INTEGER),
            ],
        ));

        let table = marshal(&frame).unwrap();
        let col = table.column("measure").unwrap();
        assert_eq!(col.dtype, DataType::Real);
        assert_eq!(
            col.values,
            vec![Value::Real(7.0), Value::Real(2.5), Value::Missing]
        );
    }

    #[test]
    fn test_shape_is_preserved() {
        let frame = RFrame::new(2)
            .with_column(RColumn::new(
                "b",
                RType::Logical,
                vec![RCell::Logical(1), RCell::Logical(na::NA_LOGICAL)],
            ))
            .with_column(RColumn::new(
                "a",
                RType::Integer,
                vec![RCell::Integer(1), RCell::Integer(2)],
            ));

        let table = marshal(&frame).unwrap();
        assert_eq!(table.nrow(), 2);
        // Column order is input order, not alphabetical.
        assert_eq!(table.names(), vec!["b", "a"]);
    }

    #[test]
    fn test_ragged_frame_is_shape_mismatch() {
        let frame = RFrame::new(3).with_column(RColumn::new(
            "short",
            RType::Integer,
            vec![RCell::Integer(1)],
        ));

        match marshal(&frame).unwrap_err() {
            HarvestError::ShapeMismatch {
                column,
                expected,
                actual,
            } => {
                assert_eq!(column, "short");
                assert_eq!(expected, 3);
                assert_eq!(actual, 1);
            }
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_opaque_object_in_date_column() {
        let frame = RFrame::new(4).with_column(RColumn::new(
            "date",
            RType::Date,
            vec![
                RCell::Date(0.0),
                RCell::Date(1.0),
                RCell::Date(2.0),
                RCell::Opaque("POSIXlt".to_string()),
            ],
        ));

        match marshal(&frame).unwrap_err() {
            HarvestError::UnsupportedType { column, row, .. } => {
                assert_eq!(column, "date");
                assert_eq!(row, 3);
            }
            other => panic!("expected unsupported type, got {:?}", other),
        }
    }

    #[test]
    fn test_factor_column_marshals_labels() {
        let frame = RFrame::new(3).with_column(
            RColumn::new(
                "status",
                RType::Factor,
                vec![
                    RCell::Factor(2),
                    RCell::Factor(na::NA_INTEGER),
                    RCell::Factor(1),
                ],
            )
            .with_levels(vec!["completed".to_string(), "partial".to_string()]),
        );

        let table = marshal(&frame).unwrap();
        let col = table.column("status").unwrap();
        assert_eq!(col.dtype, DataType::Categorical);
        assert_eq!(
            col.values,
            vec![
                Value::Text("partial".to_string()),
                Value::Missing,
                Value::Text("completed".to_string()),
            ]
        );
    }

    #[test]
    fn test_logical_column() {
        let frame = RFrame::new(3).with_column(RColumn::new(
            "agreed",
            RType::Logical,
            vec![
                RCell::Logical(1),
                RCell::Logical(0),
                RCell::Logical(na::NA_LOGICAL),
            ],
        ));

        let table = marshal(&frame).unwrap();
        let col = table.column("agreed").unwrap();
        assert_eq!(col.dtype, DataType::Boolean);
        assert_eq!(
            col.values,
            vec![Value::Bool(true), Value::Bool(false), Value::Missing]
        );
    }

    #[test]
    fn test_empty_frame() {
        let table = marshal(&RFrame::new(0)).unwrap();
        assert_eq!(table.nrow(), 0);
        assert_eq!(table.ncol(), 0);
    }

    #[test]
    fn test_no_sentinel_leaks_into_output() {
        let frame = RFrame::new(2)
            .with_column(RColumn::new(
                "n",
                RType::Integer,
                vec![RCell::Integer(na::NA_INTEGER), RCell::Integer(5)],
            ))
            .with_column(RColumn::new(
                "s",
                RType::Character,
                vec![RCell::Character(None), RCell::Character(Some("ok".into()))],
            ));

        let table = marshal(&frame).unwrap();
        for col in table.columns() {
            for value in col.iter() {
                match value {
                    Value::Int(v) => assert_ne!(*v, i64::from(i32::MIN)),
                    Value::Text(s) => assert_ne!(s, "NA"),
                    _ => {}
                }
            }
        }
        assert_eq!(table.column("n").unwrap().missing_count(), 1);
        assert_eq!(table.column("s").unwrap().missing_count(), 1);
    }
}
