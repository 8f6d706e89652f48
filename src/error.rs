//! Error types for geometric operations.

use thiserror::Error;

/// Errors that can occur when constructing or manipulating geometric entities.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// An operand's coordinate count does not match the required dimension.
    #[error("dimension mismatch: expected {expected} coordinates, got {actual}")]
    DimensionMismatch {
        /// Required number of coordinates.
        expected: usize,
        /// Actual number of coordinates provided.
        actual: usize,
    },

    /// Unrecognized construction-mode selector.
    #[error("unknown construction mode: {0:?}")]
    InvalidMode(String),

    /// Parameter is outside its valid range.
    #[error("parameter {value} is outside valid range [{min}, {max}]")]
    ParameterOutOfRange {
        /// The offending parameter value.
        value: f64,
        /// Lower bound of the valid range (inclusive).
        min: f64,
        /// Upper bound of the valid range (inclusive).
        max: f64,
    },

    /// Two edges were expected to share an endpoint but do not.
    #[error("edges share no endpoint: smallest endpoint gap is {gap}")]
    NoSharedVertex {
        /// Distance between the closest pair of endpoints.
        gap: f64,
    },

    /// A defining vector has zero length or zero area.
    #[error("degenerate geometry: {reason}")]
    Degenerate {
        /// Description of the degeneracy.
        reason: String,
    },
}

impl GeometryError {
    /// Create a dimension mismatch error.
    #[must_use]
    pub const fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an invalid mode error.
    #[must_use]
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidMode(mode.into())
    }

    /// Create a parameter out of range error.
    #[must_use]
    pub const fn out_of_range(value: f64, min: f64, max: f64) -> Self {
        Self::ParameterOutOfRange { value, min, max }
    }

    /// Create a no shared vertex error.
    #[must_use]
    pub const fn no_shared_vertex(gap: f64) -> Self {
        Self::NoSharedVertex { gap }
    }

    /// Create a degenerate geometry error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }

    /// Check if this is a dimension mismatch error.
    #[must_use]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }

    /// Check if this is an invalid mode error.
    #[must_use]
    pub fn is_invalid_mode(&self) -> bool {
        matches!(self, Self::InvalidMode(_))
    }

    /// Check if this is a parameter out of range error.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::ParameterOutOfRange { .. })
    }

    /// Check if this is a no shared vertex error.
    #[must_use]
    pub fn is_no_shared_vertex(&self) -> bool {
        matches!(self, Self::NoSharedVertex { .. })
    }

    /// Check if this is a degenerate geometry error.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::dimension_mismatch(3, 2);
        assert!(err.to_string().contains("expected 3"));
        assert!(err.to_string().contains("got 2"));

        let err = GeometryError::invalid_mode("diagonal");
        assert!(err.to_string().contains("diagonal"));

        let err = GeometryError::out_of_range(1.5, 0.0, 1.0);
        assert!(err.to_string().contains("1.5"));

        let err = GeometryError::degenerate("zero-length direction");
        assert!(err.to_string().contains("zero-length direction"));
    }

    #[test]
    fn test_error_predicates() {
        let err = GeometryError::dimension_mismatch(3, 4);
        assert!(err.is_dimension_mismatch());
        assert!(!err.is_invalid_mode());

        let err = GeometryError::invalid_mode("nope");
        assert!(err.is_invalid_mode());
        assert!(!err.is_out_of_range());

        let err = GeometryError::out_of_range(2.0, 0.0, 1.0);
        assert!(err.is_out_of_range());

        let err = GeometryError::no_shared_vertex(0.5);
        assert!(err.is_no_shared_vertex());
        assert!(!err.is_degenerate());

        let err = GeometryError::degenerate("parallel");
        assert!(err.is_degenerate());
    }
}
