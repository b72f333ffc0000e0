use thiserror::Error;

/// Error type returned by [`Ldlt`](crate::ldlt::Ldlt) and
/// [`LdltN`](crate::ldlt::LdltN) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LdltError {
    /// Input dimensions are incompatible with the size of the factorization.
    /// Vector arguments are reported as `(len, 1)`.
    #[error("Dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Operation requires a decomposed matrix, but `compute` has not
    /// yet succeeded.
    #[error("Matrix has not been decomposed")]
    NotDecomposed,
    /// A pivot failed the strict pivot check.  Only produced when
    /// [`check_pivots`](crate::ldlt::LdltSettings::check_pivots) is enabled.
    #[error("Matrix factorization produced a degenerate pivot at index {index}")]
    ZeroPivot { index: usize },
}

/// Error type returned by settings validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}
