//! Foreign (R) cell and type model.

use serde::{Deserialize, Serialize};

use super::na;

/// Declared R vector type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RType {
    Logical,
    Integer,
    Real,
    Character,
    Factor,
    Date,
}

/// One cell as received from the R side.
///
/// Each variant carries R's own representation, sentinel encodings
/// included: `NA_integer_`/`NA` logical arrive as `i32::MIN`, `NA_real_`
/// arrives as the reserved NaN, `NA_character_` arrives as `None`. The
/// wire format renders missing doubles and strings as JSON `null`; the
/// serde layer restores the in-memory sentinel on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v", rename_all = "snake_case")]
pub enum RCell {
    /// Logical stored as an int; `NA_LOGICAL` marks missing.
    Logical(i32),
    /// Integer; `NA_INTEGER` marks missing.
    Integer(i32),
    /// Double; `NA_real_` (or any NaN, per `is.na`) marks missing.
    Real(#[serde(with = "real_repr")] f64),
    /// Character; `None` is `NA_character_`, never the string "NA".
    Character(Option<String>),
    /// 1-based factor level code; `NA_INTEGER` marks missing.
    Factor(i32),
    /// Days since 1970-01-01; `NA_real_` marks missing.
    Date(#[serde(with = "real_repr")] f64),
    /// An R object the wire format cannot carry; holds the class name.
    Opaque(String),
}

impl RCell {
    /// Apply the foreign runtime's missingness predicate for this cell's
    /// representation.
    pub fn is_missing(&self) -> bool {
        match self {
            RCell::Logical(v) => na::is_na_logical(*v),
            RCell::Integer(v) | RCell::Factor(v) => na::is_na_integer(*v),
            RCell::Real(v) | RCell::Date(v) => na::is_na_real(*v),
            RCell::Character(v) => v.is_none(),
            RCell::Opaque(_) => false,
        }
    }

    /// The R type this cell's representation belongs to. `None` for
    /// opaque objects, which have no mapping at all.
    pub fn rtype(&self) -> Option<RType> {
        match self {
            RCell::Logical(_) => Some(RType::Logical),
            RCell::Integer(_) => Some(RType::Integer),
            RCell::Real(_) => Some(RType::Real),
            RCell::Character(_) => Some(RType::Character),
            RCell::Factor(_) => Some(RType::Factor),
            RCell::Date(_) => Some(RType::Date),
            RCell::Opaque(_) => None,
        }
    }
}

/// Wire representation for doubles: missing goes out as `null` (JSON has
/// no NaN) and comes back in as `NA_real_`.
mod real_repr {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::na;

    pub fn serialize<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if na::is_na_real(*v) {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*v)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(na::na_real))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_missing() {
        assert!(RCell::Logical(na::NA_LOGICAL).is_missing());
        assert!(RCell::Integer(na::NA_INTEGER).is_missing());
        assert!(RCell::Real(na::na_real()).is_missing());
        assert!(RCell::Character(None).is_missing());
        assert!(RCell::Factor(na::NA_INTEGER).is_missing());
        assert!(RCell::Date(na::na_real()).is_missing());
    }

    #[test]
    fn test_values_are_not_missing() {
        assert!(!RCell::Logical(1).is_missing());
        assert!(!RCell::Integer(0).is_missing());
        assert!(!RCell::Real(0.0).is_missing());
        assert!(!RCell::Factor(1).is_missing());
        assert!(!RCell::Date(0.0).is_missing());
        assert!(!RCell::Opaque("lm".to_string()).is_missing());
    }

    #[test]
    fn test_literal_na_string_is_a_value() {
        // The text "NA" is data, not a sentinel.
        assert!(!RCell::Character(Some("NA".to_string())).is_missing());
    }

    #[test]
    fn test_real_na_round_trips_as_null() {
        let json = serde_json::to_string(&RCell::Real(na::na_real())).unwrap();
        assert_eq!(json, r#"{"t":"real","v":null}"#);

        let back: RCell = serde_json::from_str(&json).unwrap();
        assert!(back.is_missing());
        match back {
            RCell::Real(v) => assert!(na::is_na_real_strict(v)),
            other => panic!("expected real cell, got {:?}", other),
        }
    }

    #[test]
    fn test_character_na_round_trips_as_null() {
        let json = serde_json::to_string(&RCell::Character(None)).unwrap();
        assert_eq!(json, r#"{"t":"character","v":null}"#);

        let back: RCell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RCell::Character(None));
    }

    #[test]
    fn test_integer_na_round_trips_as_int_min() {
        let json = serde_json::to_string(&RCell::Integer(na::NA_INTEGER)).unwrap();
        assert_eq!(json, r#"{"t":"integer","v":-2147483648}"#);

        let back: RCell = serde_json::from_str(&json).unwrap();
        assert!(back.is_missing());
    }

    #[test]
    fn test_value_round_trip_preserves_payload() {
        for cell in [
            RCell::Logical(1),
            RCell::Integer(42),
            RCell::Real(4.5),
            RCell::Character(Some("great".to_string())),
            RCell::Factor(3),
            RCell::Date(19_724.0),
            RCell::Opaque("surveymonkey_obj".to_string()),
        ] {
            let json = serde_json::to_string(&cell).unwrap();
            let back: RCell = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cell);
        }
    }
}
