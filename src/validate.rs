//! Input validation shared by constructors and mutators.
//!
//! Every fallible entry point funnels through these checks before touching
//! any state, so a failed check never leaves an entity partially updated.

use crate::{GeometryError, Result};

/// Check that a coordinate count matches the required dimension.
///
/// # Errors
///
/// Returns [`GeometryError::DimensionMismatch`] if `actual != expected`.
///
/// # Example
///
/// ```
/// use geo_primitives::validate::check_dimension;
///
/// assert!(check_dimension(3, 3).is_ok());
/// assert!(check_dimension(3, 2).is_err());
/// ```
pub const fn check_dimension(expected: usize, actual: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(GeometryError::dimension_mismatch(expected, actual))
    }
}

/// Check that a value lies within an inclusive range.
///
/// # Errors
///
/// Returns [`GeometryError::ParameterOutOfRange`] unless `min <= value <= max`.
///
/// # Example
///
/// ```
/// use geo_primitives::validate::check_range;
///
/// assert!(check_range(0.0, 1.0, 0.5).is_ok());
/// assert!(check_range(0.0, 1.0, 1.0).is_ok());
/// assert!(check_range(0.0, 1.0, 1.5).is_err());
/// ```
pub fn check_range(min: f64, max: f64, value: f64) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(GeometryError::out_of_range(value, min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_match_passes() {
        assert!(check_dimension(2, 2).is_ok());
        assert!(check_dimension(3, 3).is_ok());
    }

    #[test]
    fn dimension_mismatch_reports_both_counts() {
        let err = check_dimension(3, 5);
        assert_eq!(err, Err(GeometryError::dimension_mismatch(3, 5)));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(check_range(0.0, 1.0, 0.0).is_ok());
        assert!(check_range(0.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn range_violation_is_reported() {
        let err = check_range(0.0, 1.0, -0.1);
        assert!(err.is_err());
        let err = check_range(0.0, 1.0, f64::NAN);
        assert!(err.is_err());
    }
}
