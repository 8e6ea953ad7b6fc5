use std::iter::FusedIterator;
use std::num::NonZeroUsize;

/// Iterator over `n` near-equal contiguous groups of a slice.
///
/// Created by [`average_chunks`]. Group sizes differ by at most one and the
/// larger groups come first. Zero-sized groups are never yielded, so a slice
/// shorter than `n` produces one single-element group per item.
#[derive(Debug, Clone)]
pub struct AverageChunks<'a, T> {
    rest: &'a [T],
    quotient: usize,
    /// Larger (`quotient + 1`) groups still to be yielded
    remainder: usize,
    /// Non-empty groups still to be yielded
    groups: usize,
}

/// Split `slice` into `n` groups using the quotient/remainder rule.
///
/// With `L = slice.len()`, the first `L % n` groups hold `L / n + 1` items and
/// the rest hold `L / n`. The groups borrow from `slice`.
pub fn average_chunks<T>(slice: &[T], n: NonZeroUsize) -> AverageChunks<'_, T> {
    let n = n.get();
    let quotient = slice.len() / n;
    let remainder = slice.len() % n;
    let groups = if quotient == 0 { remainder } else { n };

    AverageChunks {
        rest: slice,
        quotient,
        remainder,
        groups,
    }
}

/// Sizes of the non-empty groups [`average_chunks`] would produce for a
/// sequence of `len` items.
pub fn group_sizes(len: usize, n: NonZeroUsize) -> Vec<usize> {
    let n = n.get();
    let quotient = len / n;
    let remainder = len % n;

    (0..n)
        .map(|i| if i < remainder { quotient + 1 } else { quotient })
        .take_while(|&size| size > 0)
        .collect()
}

impl<'a, T> Iterator for AverageChunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.groups == 0 {
            return None;
        }

        let size = if self.remainder > 0 {
            self.remainder -= 1;
            self.quotient + 1
        } else {
            self.quotient
        };
        self.groups -= 1;

        let (head, tail) = self.rest.split_at(size);
        self.rest = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.groups, Some(self.groups))
    }
}

impl<T> DoubleEndedIterator for AverageChunks<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.groups == 0 {
            return None;
        }

        // Smaller groups sit at the back; once only larger ones remain, take those
        let size = if self.groups > self.remainder {
            self.quotient
        } else {
            self.remainder -= 1;
            self.quotient + 1
        };
        self.groups -= 1;

        let (head, tail) = self.rest.split_at(self.rest.len() - size);
        self.rest = head;
        Some(tail)
    }
}

impl<T> ExactSizeIterator for AverageChunks<'_, T> {}

impl<T> FusedIterator for AverageChunks<'_, T> {}
