//! Per-cell conversion into host values.

use chrono::NaiveDate;

use crate::error::{HarvestError, Result};
use crate::foreign::{na, RCell, RColumn};
use crate::host::{DataType, Value};

/// Days from 0001-01-01 (CE) to the Unix epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Convert one cell to the column's resolved host type.
///
/// The missingness check runs first and uses the representation's own
/// predicate, so a sentinel converts to `Missing` whatever type the
/// column resolved to. Non-missing cells convert exactly: integers
/// widened to real are exact f64 values, text is copied unchanged.
pub(crate) fn convert_cell(
    cell: &RCell,
    target: DataType,
    column: &RColumn,
    row: usize,
) -> Result<Value> {
    // Factor codes are checked before the generic predicate: R encodes
    // factor NA as the integer NA, and a code of 0 or below is neither a
    // valid level nor NA.
    if let RCell::Factor(code) = cell {
        if na::is_na_integer(*code) {
            return Ok(Value::Missing);
        }
        if *code <= 0 {
            return Err(HarvestError::AmbiguousMissingness {
                column: column.name.clone(),
                row,
                detail: format!("factor code {} is neither a valid level nor NA", code),
            });
        }
    }

    if cell.is_missing() {
        return Ok(Value::Missing);
    }

    match (cell, target) {
        (RCell::Logical(v), DataType::Boolean) => Ok(Value::Bool(*v != 0)),
        (RCell::Logical(v), DataType::Integer) => Ok(Value::Int(i64::from(*v != 0))),
        (RCell::Logical(v), DataType::Real) => Ok(Value::Real(f64::from(*v != 0))),

        (RCell::Integer(v), DataType::Integer) => Ok(Value::Int(i64::from(*v))),
        (RCell::Integer(v), DataType::Real) => Ok(Value::Real(f64::from(*v))),

        (RCell::Real(v), DataType::Real) => Ok(Value::Real(*v)),

        (RCell::Character(Some(s)), DataType::Text) => Ok(Value::Text(s.clone())),

        (RCell::Factor(code), DataType::Categorical | DataType::Text) => {
            factor_label(*code, column, row)
        }

        (RCell::Date(days), DataType::Date) => date_from_days(*days, column, row),

        (other, target) => Err(HarvestError::UnsupportedType {
            column: column.name.clone(),
            row,
            detail: format!(
                "cell {:?} does not fit resolved column type {:?}",
                other, target
            ),
        }),
    }
}

/// Look up a 1-based factor code in the column's level labels.
fn factor_label(code: i32, column: &RColumn, row: usize) -> Result<Value> {
    let levels = column.levels.as_deref().ok_or_else(|| {
        HarvestError::UnsupportedType {
            column: column.name.clone(),
            row,
            detail: "factor column carries no level labels".to_string(),
        }
    })?;

    levels
        .get((code - 1) as usize)
        .map(|label| Value::Text(label.clone()))
        .ok_or_else(|| HarvestError::UnsupportedType {
            column: column.name.clone(),
            row,
            detail: format!("factor code {} out of range ({} levels)", code, levels.len()),
        })
}

/// Convert an R Date (days since 1970-01-01) to a calendar date.
fn date_from_days(days: f64, column: &RColumn, row: usize) -> Result<Value> {
    if days.fract() != 0.0 {
        return Err(HarvestError::UnsupportedType {
            column: column.name.clone(),
            row,
            detail: format!("non-integral Date value {}", days),
        });
    }

    let days_from_ce = days as i64 + UNIX_EPOCH_DAYS_FROM_CE;
    i32::try_from(days_from_ce)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .map(Value::Date)
        .ok_or_else(|| HarvestError::UnsupportedType {
            column: column.name.clone(),
            row,
            detail: format!("Date value {} is out of the representable range", days),
        })
}
