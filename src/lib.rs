//! Threshold filtering over in-memory slices.
//!
//! Compares every element of a slice against a single threshold with one of
//! four ordering predicates and returns either the matching values (in input
//! order) or their zero-based indices (ascending).
//!
//! ```
//! use forge_threshold::{filter_lt, filter_gte_index};
//!
//! let data = [10, 2, 100, 3, 1, 3];
//! assert_eq!(filter_lt(&data, &4).unwrap(), vec![2, 3, 1, 3]);
//! assert_eq!(filter_gte_index(&data, &3).unwrap(), vec![0, 2, 3, 5]);
//! ```
//!
//! The eight named functions are thin wrappers over [`filter`], which takes
//! the [`ComparisonKind`] and [`OutputMode`] explicitly. [`par_filter`] runs
//! the same scan split across the rayon pool.

pub mod config;
pub mod parallel;
pub mod predicate;
pub mod scan;

pub use config::ScanConfig;
pub use parallel::par_filter;
pub use predicate::{ComparisonKind, OutputMode};
pub use scan::{count_matches, filter, filter_with_indices, Selection};

/// Crate version, for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- FilterError ---

/// Errors that can occur during a threshold scan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Unrecognized comparison kind or output mode.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Element at `index` has no ordering relative to the threshold.
    #[error("type mismatch: element at index {index} is not comparable to the threshold")]
    TypeMismatch { index: usize },
}

impl FilterError {
    /// Shift a chunk-local element index to its position in the full input.
    pub(crate) fn offset(self, base: usize) -> Self {
        match self {
            FilterError::TypeMismatch { index } => FilterError::TypeMismatch {
                index: index + base,
            },
            other => other,
        }
    }
}

// --- Named entry points ---

fn values<T: PartialOrd + Clone>(
    data: &[T],
    threshold: &T,
    kind: ComparisonKind,
) -> Result<Vec<T>, FilterError> {
    filter(data, threshold, kind, OutputMode::Values)?.into_values()
}

fn indices<T: PartialOrd + Clone>(
    data: &[T],
    threshold: &T,
    kind: ComparisonKind,
) -> Result<Vec<usize>, FilterError> {
    filter(data, threshold, kind, OutputMode::Indices)?.into_indices()
}

/// Values strictly less than `threshold`.
pub fn filter_lt<T: PartialOrd + Clone>(data: &[T], threshold: &T) -> Result<Vec<T>, FilterError> {
    values(data, threshold, ComparisonKind::Lt)
}

/// Values less than or equal to `threshold`.
pub fn filter_lte<T: PartialOrd + Clone>(data: &[T], threshold: &T) -> Result<Vec<T>, FilterError> {
    values(data, threshold, ComparisonKind::Le)
}

/// Values strictly greater than `threshold`.
pub fn filter_gt<T: PartialOrd + Clone>(data: &[T], threshold: &T) -> Result<Vec<T>, FilterError> {
    values(data, threshold, ComparisonKind::Gt)
}

/// Values greater than or equal to `threshold`.
pub fn filter_gte<T: PartialOrd + Clone>(data: &[T], threshold: &T) -> Result<Vec<T>, FilterError> {
    values(data, threshold, ComparisonKind::Ge)
}

/// Indices of elements strictly less than `threshold`.
pub fn filter_lt_index<T: PartialOrd + Clone>(
    data: &[T],
    threshold: &T,
) -> Result<Vec<usize>, FilterError> {
    indices(data, threshold, ComparisonKind::Lt)
}

/// Indices of elements less than or equal to `threshold`.
pub fn filter_lte_index<T: PartialOrd + Clone>(
    data: &[T],
    threshold: &T,
) -> Result<Vec<usize>, FilterError> {
    indices(data, threshold, ComparisonKind::Le)
}

/// Indices of elements strictly greater than `threshold`.
pub fn filter_gt_index<T: PartialOrd + Clone>(
    data: &[T],
    threshold: &T,
) -> Result<Vec<usize>, FilterError> {
    indices(data, threshold, ComparisonKind::Gt)
}

/// Indices of elements greater than or equal to `threshold`.
pub fn filter_gte_index<T: PartialOrd + Clone>(
    data: &[T],
    threshold: &T,
) -> Result<Vec<usize>, FilterError> {
    indices(data, threshold, ComparisonKind::Ge)
}
