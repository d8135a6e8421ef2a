//! Error types for search sessions.

/// Errors surfaced by the search session and its navigator.
///
/// None of these are fatal: the UI turns each one into a status line and
/// leaves the current state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Navigation or projection requested before any search was started.
    #[error("No search initialized")]
    EmptyTrace,

    /// Search requested before an array was generated or supplied.
    #[error("Please generate an array first")]
    NoArray,

    /// Target outside the configured value range.
    #[error("Invalid target {value}: expected a value between {min} and {max}")]
    InvalidTarget { value: i64, min: i64, max: i64 },

    /// Array size outside the allowed range.
    #[error("Invalid array size {size}: expected a size between {min} and {max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    /// User-supplied array is not in ascending order.
    #[error("Array is not sorted: element {index} is smaller than its predecessor")]
    Unsorted { index: usize },
}
