//! Host column types and the widening lattice used for ragged columns.

use serde::{Deserialize, Serialize};

/// Data type of a host column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Text/string values.
    Text,
    /// Whole numbers.
    Integer,
    /// Floating-point numbers.
    Real,
    /// Boolean values.
    Boolean,
    /// Calendar dates (no time component).
    Date,
    /// Discrete labeled categories; cell values are the labels.
    Categorical,
}

impl DataType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(self) -> bool {
        matches!(self, DataType::Integer | DataType::Real)
    }

    /// The most general type that losslessly represents values of both
    /// types, or `None` if no such type exists.
    ///
    /// The lattice is deliberately small: Boolean widens through Integer
    /// to Real, Categorical widens to Text, and Date unifies only with
    /// itself. Anything else is a structural mismatch the caller must
    /// surface, not paper over.
    pub fn join(self, other: DataType) -> Option<DataType> {
        use DataType::*;

        if self == other {
            return Some(self);
        }
        match (self, other) {
            (Boolean, Integer) | (Integer, Boolean) => Some(Integer),
            (Boolean, Real) | (Real, Boolean) => Some(Real),
            (Integer, Real) | (Real, Integer) => Some(Real),
            (Categorical, Text) | (Text, Categorical) => Some(Text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_is_reflexive() {
        for t in [
            DataType::Text,
            DataType::Integer,
            DataType::Real,
            DataType::Boolean,
            DataType::Date,
            DataType::Categorical,
        ] {
            assert_eq!(t.join(t), Some(t));
        }
    }

    #[test]
    fn test_numeric_chain() {
        assert_eq!(DataType::Integer.join(DataType::Real), Some(DataType::Real));
        assert_eq!(DataType::Real.join(DataType::Integer), Some(DataType::Real));
        assert_eq!(
            DataType::Boolean.join(DataType::Integer),
            Some(DataType::Integer)
        );
        assert_eq!(DataType::Boolean.join(DataType::Real), Some(DataType::Real));
    }

    #[test]
    fn test_categorical_widens_to_text() {
        assert_eq!(
            DataType::Categorical.join(DataType::Text),
            Some(DataType::Text)
        );
    }

    #[test]
    fn test_incompatible_pairs_have_no_join() {
        assert_eq!(DataType::Date.join(DataType::Real), None);
        assert_eq!(DataType::Date.join(DataType::Text), None);
        assert_eq!(DataType::Text.join(DataType::Integer), None);
        assert_eq!(DataType::Boolean.join(DataType::Text), None);
    }
}
