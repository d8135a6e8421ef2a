//! Sorted integer arrays bound to a search.

use serde::Serialize;

use super::error::SessionError;

/// An ascending sequence of integers.
///
/// Once built the values never change; a new search over different data needs
/// a new `SortedArray`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortedArray(Vec<i64>);

impl SortedArray {
    /// Wrap already-sorted values, rejecting any descent.
    pub fn new(values: Vec<i64>) -> Result<Self, SessionError> {
        if let Some(pos) = values.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(SessionError::Unsorted { index: pos + 1 });
        }
        Ok(Self(values))
    }

    /// Sort arbitrary values into a `SortedArray`.
    pub fn from_unsorted(mut values: Vec<i64>) -> Self {
        values.sort_unstable();
        Self(values)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    pub fn max(&self) -> Option<i64> {
        self.0.last().copied()
    }
}

impl AsRef<[i64]> for SortedArray {
    fn as_ref(&self) -> &[i64] {
        &self.0
    }
}

impl std::fmt::Display for SortedArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_sorted_with_duplicates() {
        let array = SortedArray::new(vec![1, 3, 3, 7]).unwrap();
        assert_eq!(array.len(), 4);
        assert!(array.contains(3));
        assert!(!array.contains(4));
    }

    #[test]
    fn test_new_rejects_descent() {
        let err = SortedArray::new(vec![1, 5, 4, 9]).unwrap_err();
        assert_eq!(err, SessionError::Unsorted { index: 2 });
    }

    #[test]
    fn test_from_unsorted_sorts() {
        let array = SortedArray::from_unsorted(vec![9, 2, 5]);
        assert_eq!(array.as_slice(), &[2, 5, 9]);
        assert_eq!(array.max(), Some(9));
    }

    #[test]
    fn test_display() {
        let array = SortedArray::from_unsorted(vec![3, 1, 2]);
        assert_eq!(array.to_string(), "[1, 2, 3]");
        assert_eq!(SortedArray::default().to_string(), "[]");
    }
}
