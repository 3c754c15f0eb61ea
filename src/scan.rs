//! The single-pass threshold scan.
//!
//! Every public entry point in this crate funnels into [`filter`] (or the
//! chunked variant in [`crate::parallel`]), so cross-operator invariants such
//! as `lt + ge == len` hold by construction.

use crate::predicate::{ComparisonKind, OutputMode};
use crate::FilterError;

// --- Selection<T> ---

/// Result of a threshold scan: matching values or their positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection<T> {
    /// Matching values in input order.
    Values(Vec<T>),
    /// Ascending zero-based indices of matching elements.
    Indices(Vec<usize>),
}

impl<T> Selection<T> {
    /// An empty result in the given mode.
    pub fn empty(mode: OutputMode) -> Self {
        match mode {
            OutputMode::Values => Selection::Values(Vec::new()),
            OutputMode::Indices => Selection::Indices(Vec::new()),
        }
    }

    /// Number of matching elements.
    pub fn len(&self) -> usize {
        match self {
            Selection::Values(v) => v.len(),
            Selection::Indices(i) => i.len(),
        }
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn mode(&self) -> OutputMode {
        match self {
            Selection::Values(_) => OutputMode::Values,
            Selection::Indices(_) => OutputMode::Indices,
        }
    }

    /// Matched values, or `None` in index mode.
    pub fn as_values(&self) -> Option<&[T]> {
        match self {
            Selection::Values(v) => Some(v),
            Selection::Indices(_) => None,
        }
    }

    /// Matched indices, or `None` in value mode.
    pub fn as_indices(&self) -> Option<&[usize]> {
        match self {
            Selection::Values(_) => None,
            Selection::Indices(i) => Some(i),
        }
    }

    /// Take the matched values.
    ///
    /// Fails with [`FilterError::InvalidArgument`] if this is an index result.
    pub fn into_values(self) -> Result<Vec<T>, FilterError> {
        match self {
            Selection::Values(v) => Ok(v),
            Selection::Indices(_) => Err(FilterError::InvalidArgument(
                "selection holds indices, not values".to_string(),
            )),
        }
    }

    /// Take the matched indices.
    ///
    /// Fails with [`FilterError::InvalidArgument`] if this is a value result.
    pub fn into_indices(self) -> Result<Vec<usize>, FilterError> {
        match self {
            Selection::Values(_) => Err(FilterError::InvalidArgument(
                "selection holds values, not indices".to_string(),
            )),
            Selection::Indices(i) => Ok(i),
        }
    }

    /// Shift every index by `base`. No-op for value results.
    pub(crate) fn offset(mut self, base: usize) -> Self {
        if let Selection::Indices(ref mut idx) = self {
            if base != 0 {
                idx.iter_mut().for_each(|i| *i += base);
            }
        }
        self
    }

    /// Append `other` (which must follow `self` in input order).
    pub(crate) fn append(&mut self, other: Selection<T>) {
        match (self, other) {
            (Selection::Values(a), Selection::Values(b)) => a.extend(b),
            (Selection::Indices(a), Selection::Indices(b)) => a.extend(b),
            // Both halves always come from the same mode.
            _ => unreachable!("mixed selection modes"),
        }
    }
}

// --- Core scan ---

/// Walk `data` once, calling `on_match(i, &data[i])` for each element satisfying
/// `data[i] <kind> threshold`.
///
/// Stops at the first element that cannot be ordered against the threshold.
#[inline]
fn scan<T, F>(
    data: &[T],
    threshold: &T,
    kind: ComparisonKind,
    mut on_match: F,
) -> Result<(), FilterError>
where
    T: PartialOrd,
    F: FnMut(usize, &T),
{
    for (i, val) in data.iter().enumerate() {
        match kind.evaluate(val, threshold) {
            Some(true) => on_match(i, val),
            Some(false) => {}
            None => return Err(FilterError::TypeMismatch { index: i }),
        }
    }
    Ok(())
}

/// Filter `data` against `threshold`, collecting values or indices per `mode`.
///
/// Output preserves input order. An empty input yields an empty result. If any
/// element has no ordering relative to the threshold the whole call fails with
/// [`FilterError::TypeMismatch`] carrying the first such index.
pub fn filter<T>(
    data: &[T],
    threshold: &T,
    kind: ComparisonKind,
    mode: OutputMode,
) -> Result<Selection<T>, FilterError>
where
    T: PartialOrd + Clone,
{
    match mode {
        OutputMode::Values => {
            let mut out = Vec::new();
            scan(data, threshold, kind, |_, v| out.push(v.clone()))?;
            Ok(Selection::Values(out))
        }
        OutputMode::Indices => {
            let mut out = Vec::new();
            scan(data, threshold, kind, |i, _| out.push(i))?;
            Ok(Selection::Indices(out))
        }
    }
}

/// Filter `data`, returning both matching values and their indices.
///
/// Both vectors have the same length and `values[j] == data[indices[j]]`.
pub fn filter_with_indices<T>(
    data: &[T],
    threshold: &T,
    kind: ComparisonKind,
) -> Result<(Vec<T>, Vec<usize>), FilterError>
where
    T: PartialOrd + Clone,
{
    let mut values = Vec::new();
    let mut indices = Vec::new();
    scan(data, threshold, kind, |i, v| {
        values.push(v.clone());
        indices.push(i);
    })?;
    Ok((values, indices))
}

/// Count matching elements without materializing them.
pub fn count_matches<T>(data: &[T], threshold: &T, kind: ComparisonKind) -> Result<usize, FilterError>
where
    T: PartialOrd,
{
    let mut count = 0usize;
    scan(data, threshold, kind, |_, _| count += 1)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [i64; 6] = [10, 2, 100, 3, 1, 3];

    #[test]
    fn test_filter_values_preserve_order() {
        let result = filter(&DATA, &4, ComparisonKind::Lt, OutputMode::Values).unwrap();
        assert_eq!(result, Selection::Values(vec![2, 3, 1, 3]));
    }

    #[test]
    fn test_filter_indices_ascending() {
        let result = filter(&DATA, &4, ComparisonKind::Lt, OutputMode::Indices).unwrap();
        assert_eq!(result, Selection::Indices(vec![1, 3, 4, 5]));
    }

    #[test]
    fn test_filter_empty_input() {
        let data: [i64; 0] = [];
        for kind in ComparisonKind::ALL {
            for mode in [OutputMode::Values, OutputMode::Indices] {
                let result = filter(&data, &0, kind, mode).unwrap();
                assert!(result.is_empty());
                assert_eq!(result.mode(), mode);
            }
        }
    }

    #[test]
    fn test_filter_nan_reports_first_index() {
        let data = [1.0f64, 5.0, f64::NAN, 2.0, f64::NAN];
        let err = filter(&data, &3.0, ComparisonKind::Lt, OutputMode::Values).unwrap_err();
        assert!(matches!(err, FilterError::TypeMismatch { index: 2 }));
    }

    #[test]
    fn test_filter_nan_threshold() {
        let data = [1.0f32, 2.0];
        let err = filter(&data, &f32::NAN, ComparisonKind::Ge, OutputMode::Indices).unwrap_err();
        assert!(matches!(err, FilterError::TypeMismatch { index: 0 }));

        // Nothing to compare, nothing to fail on.
        let empty: [f32; 0] = [];
        assert!(filter(&empty, &f32::NAN, ComparisonKind::Ge, OutputMode::Values)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_filter_with_indices_gather() {
        let (values, indices) = filter_with_indices(&DATA, &3, ComparisonKind::Ge).unwrap();
        assert_eq!(values, vec![10, 100, 3, 3]);
        assert_eq!(indices, vec![0, 2, 3, 5]);
        for (v, &i) in values.iter().zip(&indices) {
            assert_eq!(*v, DATA[i]);
        }
    }

    #[test]
    fn test_count_matches() {
        assert_eq!(count_matches(&DATA, &3, ComparisonKind::Le).unwrap(), 4);
        assert_eq!(count_matches(&DATA, &3, ComparisonKind::Gt).unwrap(), 2);
        assert_eq!(count_matches(&DATA, &1000, ComparisonKind::Gt).unwrap(), 0);
    }

    #[test]
    fn test_filter_strings() {
        let data = vec!["pear".to_string(), "apple".to_string(), "fig".to_string()];
        let result = filter(&data, &"grape".to_string(), ComparisonKind::Lt, OutputMode::Values)
            .unwrap()
            .into_values()
            .unwrap();
        assert_eq!(result, vec!["apple".to_string(), "fig".to_string()]);
    }

    #[test]
    fn test_selection_accessors() {
        let values: Selection<i64> = Selection::Values(vec![1, 2]);
        assert_eq!(values.as_values(), Some(&[1i64, 2][..]));
        assert!(values.as_indices().is_none());
        assert!(values.clone().into_indices().is_err());

        let indices: Selection<i64> = Selection::Indices(vec![4]);
        assert_eq!(indices.as_indices(), Some(&[4usize][..]));
        assert!(indices.clone().into_values().is_err());
        assert_eq!(indices.offset(10).into_indices().unwrap(), vec![14]);
    }
}
