//! Column type resolution.
//!
//! A well-formed foreign column has every cell matching its declared
//! type, but parsed survey exports are allowed to be ragged (e.g. a
//! numeric column where some cells arrived as integers). Resolution
//! starts from the declared type and widens over every non-missing cell,
//! so the result is the most general type that losslessly represents all
//! of them.

use crate::error::{HarvestError, Result};
use crate::foreign::{RCell, RColumn, RType};
use crate::host::DataType;

/// Host type corresponding to a declared foreign type.
pub(crate) fn declared_host_type(rtype: RType) -> DataType {
    match rtype {
        RType::Logical => DataType::Boolean,
        RType::Integer => DataType::Integer,
        RType::Real => DataType::Real,
        RType::Character => DataType::Text,
        RType::Factor => DataType::Categorical,
        RType::Date => DataType::Date,
    }
}

/// Host type a single cell's representation belongs to.
fn cell_host_type(cell: &RCell) -> Option<DataType> {
    cell.rtype().map(declared_host_type)
}

/// Resolve the host type for one column.
///
/// Missing cells are skipped: a sentinel is representable in any column
/// type and must not influence widening. An all-missing column keeps its
/// declared type.
pub(crate) fn resolve_column(column: &RColumn) -> Result<DataType> {
    let mut resolved = declared_host_type(column.declared);

    for (row, cell) in column.cells.iter().enumerate() {
        if cell.is_missing() {
            continue;
        }
        let observed = match cell_host_type(cell) {
            Some(t) => t,
            None => {
                let class = match cell {
                    RCell::Opaque(class) => class.as_str(),
                    _ => "unknown",
                };
                return Err(HarvestError::UnsupportedType {
                    column: column.name.clone(),
                    row,
                    detail: format!("R object of class '{}' has no host mapping", class),
                });
            }
        };
        resolved = resolved.join(observed).ok_or_else(|| HarvestError::UnsupportedType {
            column: column.name.clone(),
            row,
            detail: format!(
                "cell of type {:?} cannot be represented in a {:?} column",
                observed, resolved
            ),
        })?;
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foreign::na;

    #[test]
    fn test_uniform_column_keeps_declared_type() {
        let col = RColumn::new(
            "age",
            RType::Integer,
            vec![RCell::Integer(25), RCell::Integer(30)],
        );
        assert_eq!(resolve_column(&col).unwrap(), DataType::Integer);
    }

    #[test]
    fn test_mixed_integer_real_resolves_to_real() {
        let col = RColumn::new(
            "score",
            RType::Integer,
            vec![RCell::Integer(7), RCell::Real(4.5)],
        );
        assert_eq!(resolve_column(&col).unwrap(), DataType::Real);
    }

    #[test]
    fn test_missing_cells_do_not_widen() {
        let col = RColumn::new(
            "score",
            RType::Integer,
            vec![RCell::Integer(7), RCell::Real(na::na_real())],
        );
        // The NA real is a sentinel, not a real value.
        assert_eq!(resolve_column(&col).unwrap(), DataType::Integer);
    }

    #[test]
    fn test_all_missing_column_keeps_declared_type() {
        let col = RColumn::new(
            "when",
            RType::Date,
            vec![RCell::Date(na::na_real()), RCell::Date(na::na_real())],
        );
        assert_eq!(resolve_column(&col).unwrap(), DataType::Date);
    }

    #[test]
    fn test_opaque_cell_is_unsupported_with_position() {
        let col = RColumn::new(
            "date",
            RType::Date,
            vec![
                RCell::Date(0.0),
                RCell::Date(1.0),
                RCell::Date(2.0),
                RCell::Opaque("POSIXlt".to_string()),
            ],
        );
        match resolve_column(&col).unwrap_err() {
            HarvestError::UnsupportedType { column, row, .. } => {
                assert_eq!(column, "date");
                assert_eq!(row, 3);
            }
            other => panic!("expected unsupported type, got {:?}", other),
        }
    }

    #[test]
    fn test_unjoinable_types_are_unsupported() {
        let col = RColumn::new(
            "mixed",
            RType::Real,
            vec![RCell::Real(1.0), RCell::Character(Some("x".to_string()))],
        );
        assert!(matches!(
            resolve_column(&col),
            Err(HarvestError::UnsupportedType { row: 1, .. })
        ));
    }
}
