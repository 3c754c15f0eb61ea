//! Partitioned threshold scan on the rayon pool.
//!
//! The input is split into contiguous chunks of [`ScanConfig::chunk_len`]
//! elements. Each chunk is scanned independently, chunk-local indices are
//! shifted by the chunk's base offset, and the per-chunk results are
//! concatenated in chunk order. The output is therefore identical to
//! [`crate::filter`].

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::predicate::{ComparisonKind, OutputMode};
use crate::scan::{filter, Selection};
use crate::FilterError;

/// Parallel version of [`crate::filter`].
///
/// Falls back to the sequential scan when `config` says the input is too
/// small to split. On error, reports the lowest incomparable index, same as
/// the sequential scan.
pub fn par_filter<T>(
    data: &[T],
    threshold: &T,
    kind: ComparisonKind,
    mode: OutputMode,
    config: &ScanConfig,
) -> Result<Selection<T>, FilterError>
where
    T: PartialOrd + Clone + Send + Sync,
{
    if !config.should_parallelize(data.len()) {
        return filter(data, threshold, kind, mode);
    }

    let chunk_len = config.effective_chunk_len();
    debug!(
        len = data.len(),
        chunk_len,
        chunks = data.len().div_ceil(chunk_len),
        %kind,
        %mode,
        "partitioned threshold scan"
    );

    let partials: Vec<Result<Selection<T>, FilterError>> = data
        .par_chunks(chunk_len)
        .enumerate()
        .map(|(chunk, slice)| {
            let base = chunk * chunk_len;
            let result = filter(slice, threshold, kind, mode)
                .map(|sel| sel.offset(base))
                .map_err(|e| e.offset(base));
            trace!(chunk, base, matched = result.as_ref().map_or(0, Selection::len), "chunk done");
            result
        })
        .collect();

    // Chunks are in input order, so the first error is the lowest index.
    let mut out = Selection::empty(mode);
    for partial in partials {
        out.append(partial?);
    }
    Ok(out)
}
