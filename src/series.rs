//! A fixed series of consecutive serial numbers.

use alloc::vec::Vec;
use core::fmt;
use core::iter::Rev;
use core::ops::Index;
use core::slice::Iter;

use crate::error::LookupError;
use crate::serial::SerialNumber;
use crate::slice::{Slice, checked_index};

/// Serial numbers `1..=count`, built once and never changed.
///
/// Every call to [`iter`](Self::iter) or [`iter_reverse`](Self::iter_reverse)
/// starts a fresh traversal; the series holds no cursor of its own.
///
/// ```
/// use seqmodel::Series;
///
/// let series = Series::new(5);
/// assert_eq!(series.to_string(), "['001', '002', '003', '004', '005']");
/// assert!(series.contains(&3_i64));
/// assert!(!series.contains(&6_i64));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Series {
    numbers: Vec<SerialNumber>,
}

impl Series {
    /// Creates a series of `count` serial numbers starting at 1.
    #[must_use]
    pub fn new(count: u32) -> Self {
        let numbers: Vec<SerialNumber> = (1..=count).map(SerialNumber::from).collect();
        tracing::trace!(count, "built serial number series");
        Self { numbers }
    }

    /// Returns the number of serial numbers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns whether the series holds no serial numbers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Returns whether the series holds at least one serial number.
    #[must_use]
    pub fn is_nonempty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the serial number at `index`; negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::IndexOutOfRange`] if `index` is outside the series.
    pub fn get(&self, index: isize) -> Result<&SerialNumber, LookupError> {
        let index = checked_index(self.numbers.len(), index)?;
        Ok(&self.numbers[index])
    }

    /// Returns the serial numbers selected by `slice`, in slice order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::ZeroStep`] if the slice step is zero.
    pub fn slice(&self, slice: impl Into<Slice>) -> Result<Vec<SerialNumber>, LookupError> {
        let indices = slice.into().indices(self.numbers.len())?;
        Ok(indices.map(|index| self.numbers[index]).collect())
    }

    /// Iterates in ascending order.
    pub fn iter(&self) -> Iter<'_, SerialNumber> {
        self.numbers.iter()
    }

    /// Iterates in descending order.
    pub fn iter_reverse(&self) -> Rev<Iter<'_, SerialNumber>> {
        self.numbers.iter().rev()
    }

    /// Returns whether any serial number equals `value`.
    pub fn contains<T>(&self, value: &T) -> bool
    where
        SerialNumber: PartialEq<T>,
    {
        self.numbers.iter().any(|number| number == value)
    }
}

impl Index<usize> for Series {
    type Output = SerialNumber;

    fn index(&self, index: usize) -> &SerialNumber {
        &self.numbers[index]
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a SerialNumber;
    type IntoIter = Iter<'a, SerialNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.iter()
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, number) in self.numbers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{number}'")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Series({})", self.numbers.len())
    }
}
