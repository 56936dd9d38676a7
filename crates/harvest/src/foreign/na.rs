//! R missing-value sentinels and per-type missingness predicates.
//!
//! R encodes "no value" differently for every vector type: integers and
//! logicals reserve `INT_MIN`, doubles reserve a particular NaN payload,
//! character vectors use a distinct sentinel object, and factors carry the
//! integer NA as a level code. Missingness must be decided against these
//! encodings, never by comparing a cell to the literal string "NA".

/// R's `NA_integer_`.
pub const NA_INTEGER: i32 = i32::MIN;

/// R's `NA` for logical vectors. Logicals are stored as 32-bit ints.
pub const NA_LOGICAL: i32 = i32::MIN;

/// Bit pattern of `NA_real_`: a quiet NaN whose mantissa carries the
/// payload 1954 (0x7A2).
pub const NA_REAL_BITS: u64 = 0x7FF0_0000_0000_07A2;

/// The `NA_real_` value itself.
pub fn na_real() -> f64 {
    f64::from_bits(NA_REAL_BITS)
}

/// Missingness predicate for integer cells.
pub fn is_na_integer(v: i32) -> bool {
    v == NA_INTEGER
}

/// Missingness predicate for logical cells.
pub fn is_na_logical(v: i32) -> bool {
    v == NA_LOGICAL
}

/// Missingness predicate for double cells.
///
/// Matches R's `is.na()`, which is true for `NA_real_` and for ordinary
/// NaN alike.
pub fn is_na_real(v: f64) -> bool {
    v.is_nan()
}

/// True only for the distinguished `NA_real_` bit pattern, not for plain
/// NaN. Used when re-emitting a frame so a true NA stays a true NA.
pub fn is_na_real_strict(v: f64) -> bool {
    v.to_bits() == NA_REAL_BITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_na_real_is_nan() {
        assert!(na_real().is_nan());
        assert!(is_na_real(na_real()));
        assert!(is_na_real_strict(na_real()));
    }

    #[test]
    fn test_plain_nan_is_not_strict_na() {
        let nan = f64::NAN;
        assert!(is_na_real(nan));
        assert!(!is_na_real_strict(nan));
    }

    #[test]
    fn test_ordinary_values_are_not_na() {
        assert!(!is_na_real(0.0));
        assert!(!is_na_real(f64::INFINITY));
        assert!(!is_na_integer(0));
        assert!(!is_na_integer(i32::MAX));
        assert!(!is_na_logical(1));
    }

    #[test]
    fn test_int_min_is_na() {
        assert!(is_na_integer(i32::MIN));
        assert!(is_na_logical(i32::MIN));
    }
}
