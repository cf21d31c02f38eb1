//! Positional access: negative indices and stepped slices.

use core::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::LookupError;

/// Resolves a possibly negative position against a sequence length.
///
/// Negative positions count from the end, so `-1` is the last element.
/// Returns `None` when the position falls outside the sequence.
#[must_use]
pub fn resolve_index(len: usize, index: isize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        let index = index.unsigned_abs();
        (index < len).then_some(index)
    }
}

/// Resolves a position or reports it as out of range.
pub(crate) fn checked_index(len: usize, index: isize) -> Result<usize, LookupError> {
    resolve_index(len, index).ok_or_else(|| {
        tracing::debug!(index, len, "index out of range");
        LookupError::IndexOutOfRange { index, len }
    })
}

/// A `start:stop:step` slice.
///
/// Missing bounds default to the ends of the sequence, taking the direction
/// of the step into account; out-of-range bounds are clamped.
///
/// ```
/// use seqmodel::Slice;
///
/// let every_other = Slice::from(1..).with_step(2);
/// let positions: Vec<usize> = every_other.indices(6).unwrap().collect();
/// assert_eq!(positions, [1, 3, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slice {
    /// First position, inclusive.
    pub start: Option<isize>,
    /// Last position, exclusive.
    pub stop: Option<isize>,
    /// Distance between positions. `None` means 1.
    pub step: Option<isize>,
}

impl Slice {
    /// Creates a slice from its three optional parts.
    #[must_use]
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Sets the step.
    #[must_use]
    pub const fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolves the slice against a sequence of `len` elements.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::ZeroStep`] if the step is zero.
    pub fn indices(&self, len: usize) -> Result<SliceIndices, LookupError> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(LookupError::ZeroStep);
        }

        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self.stop.map_or(if step < 0 { lower } else { upper }, clamp);

        Ok(SliceIndices {
            next: start,
            stop,
            step,
        })
    }
}

impl From<Range<isize>> for Slice {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}

/// Positions selected by a resolved [`Slice`], produced lazily.
#[derive(Debug, Clone)]
pub struct SliceIndices {
    next: isize,
    stop: isize,
    step: isize,
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let in_bounds = if self.step > 0 {
            self.next < self.stop
        } else {
            self.next > self.stop
        };
        if !in_bounds {
            return None;
        }

        let current = self.next;
        self.next = current.saturating_add(self.step);
        Some(current.unsigned_abs())
    }
}
