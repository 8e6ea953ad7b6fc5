mod average;
mod error;


pub use average::{AverageChunks, average_chunks, group_sizes};
pub use error::InvalidArgument;

use std::num::NonZeroUsize;
use tracing::debug;

/// True when the sequence is absent or holds no elements
pub fn is_empty<T>(seq: Option<&[T]>) -> bool {
    !has_elements(seq)
}

/// True when the sequence is present and holds at least one element
pub fn has_elements<T>(seq: Option<&[T]>) -> bool {
    seq.is_some_and(|s| !s.is_empty())
}

/// Split `seq` into `n` groups whose sizes differ by at most one.
///
/// Earlier groups receive the extra elements. Groups that would be empty
/// (when `n` exceeds the length) are dropped, so the result never contains
/// an empty group.
///
/// The returned groups are views borrowed from `seq`: the source cannot be
/// mutated while any of them is alive.
///
/// # Errors
/// [`InvalidArgument`] when `n <= 0`, or when `seq` is absent or empty,
/// checked in that order.
pub fn average_assign<T>(seq: Option<&[T]>, n: i64) -> Result<Vec<&[T]>, InvalidArgument> {
    let n = positive(n)?;
    let seq = seq.ok_or(InvalidArgument::Absent)?;
    if seq.is_empty() {
        return Err(InvalidArgument::Empty);
    }

    let groups: Vec<&[T]> = average_chunks(seq, n).collect();
    debug!(
        len = seq.len(),
        n = n.get(),
        groups = groups.len(),
        "average assign"
    );
    Ok(groups)
}

/// Split `seq` into consecutive chunks of `n` elements; the last chunk
/// holds whatever remains.
///
/// An absent or empty sequence yields no chunks. Unlike [`average_assign`],
/// absence is not an error, and an absent sequence is accepted before `n` is
/// looked at.
///
/// # Errors
/// [`InvalidArgument::NonPositive`] when `n <= 0` for a present sequence.
pub fn partition<T>(seq: Option<&[T]>, n: i64) -> Result<Vec<&[T]>, InvalidArgument> {
    let Some(seq) = seq else {
        debug!(n, "partition of absent sequence");
        return Ok(Vec::new());
    };
    let n = positive(n)?;

    let chunks: Vec<&[T]> = seq.chunks(n.get()).collect();
    debug!(
        len = seq.len(),
        n = n.get(),
        groups = chunks.len(),
        "partition"
    );
    Ok(chunks)
}

/// Counts beyond `usize::MAX` behave exactly like `usize::MAX` for both
/// splits, so they saturate instead of failing.
fn positive(n: i64) -> Result<NonZeroUsize, InvalidArgument> {
    if n <= 0 {
        return Err(InvalidArgument::NonPositive { value: n });
    }

    let n = usize::try_from(n).unwrap_or(usize::MAX);
    NonZeroUsize::new(n).ok_or(InvalidArgument::NonPositive { value: 0 })
}
