//! Survey descriptors and title filtering.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{HarvestError, Result};
use crate::host::{Table, Value};

/// One survey from the account listing.
///
/// `id` and `title` are extracted; every other listing column is passed
/// through verbatim in `extra`, in its original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyDescriptor {
    /// Unique survey id.
    pub id: i64,
    /// Survey title.
    pub title: String,
    /// Remaining listing columns, untransformed.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, Value>,
}

/// Extract descriptors from a marshaled survey listing.
///
/// The SurveyMonkey listing names its id column `survey_id`; `id` is
/// accepted as a fallback. Ids arrive as doubles from R (R has no 64-bit
/// integer vector), so integral reals are accepted too.
pub(crate) fn descriptors_from_table(table: &Table) -> Result<Vec<SurveyDescriptor>> {
    let id_col = table
        .column("survey_id")
        .or_else(|| table.column("id"))
        .ok_or_else(|| {
            HarvestError::SurveyListing("no 'survey_id' or 'id' column".to_string())
        })?;
    let title_col = table
        .column("title")
        .ok_or_else(|| HarvestError::SurveyListing("no 'title' column".to_string()))?;

    let mut descriptors = Vec::with_capacity(table.nrow());
    for row in 0..table.nrow() {
        let id = survey_id(&id_col.values[row]).ok_or_else(|| {
            HarvestError::SurveyListing(format!(
                "row {}: id cell {:?} is not a usable survey id",
                row, id_col.values[row]
            ))
        })?;

        let title = match &title_col.values[row] {
            Value::Text(s) => s.clone(),
            other => {
                return Err(HarvestError::SurveyListing(format!(
                    "row {}: title cell {:?} is not text",
                    row, other
                )))
            }
        };

        let mut extra = IndexMap::new();
        for column in table.columns() {
            if std::ptr::eq(column, id_col) || std::ptr::eq(column, title_col) {
                continue;
            }
            extra.insert(column.name.clone(), column.values[row].clone());
        }

        descriptors.push(SurveyDescriptor { id, title, extra });
    }

    Ok(descriptors)
}

/// Interpret a listing cell as a survey id.
fn survey_id(value: &Value) -> Option<i64> {
    match value {
        Value::Int(v) => Some(*v),
        Value::Real(v) if v.is_finite() && v.fract() == 0.0 => Some(*v as i64),
        Value::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Filter descriptors whose title matches `pattern` (a regex, matching
/// anywhere in the title).
pub fn filter_by_title(
    surveys: &[SurveyDescriptor],
    pattern: &str,
) -> Result<Vec<SurveyDescriptor>> {
    let re = Regex::new(pattern)?;
    Ok(surveys
        .iter()
        .filter(|s| re.is_match(&s.title))
        .cloned()
        .collect())
}
