//! Serial numbers: integers rendered zero-padded to three digits.

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::{FormatError, ValidationError};
use crate::format::FormatSpec;

/// An integer with a fixed three-digit rendering.
///
/// The plain `{}` rendering is zero-padded to width 3. Any width, alignment,
/// sign or `#` flag given in the format string replaces the padding and is
/// applied to the integer directly.
///
/// ```
/// use seqmodel::SerialNumber;
///
/// let serial = SerialNumber::new(7);
/// assert_eq!(serial.to_string(), "007");
/// assert_eq!(format!("{serial:>5}"), "    7");
/// assert_eq!(format!("{serial:?}"), "SerialNumber(7)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerialNumber {
    value: i64,
}

impl SerialNumber {
    /// Minimum width of the default rendering.
    pub const WIDTH: usize = 3;

    /// Creates a serial number.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the wrapped integer.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.value
    }

    /// Renders the serial number with an optional runtime format directive.
    ///
    /// Without a directive the result matches [`Display`](fmt::Display). With
    /// one, the directive is parsed as a [`FormatSpec`] and applied to the
    /// integer; an empty directive yields the bare integer.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if the directive cannot be parsed or does not
    /// apply to the value.
    ///
    /// # Example
    ///
    /// ```
    /// use seqmodel::SerialNumber;
    ///
    /// let serial = SerialNumber::new(42);
    /// assert_eq!(serial.render(None).unwrap(), "042");
    /// assert_eq!(serial.render(Some("05")).unwrap(), "00042");
    /// assert_eq!(serial.render(Some("")).unwrap(), "42");
    /// assert_eq!(serial.render(Some(".2f")).unwrap(), "42.00");
    /// assert!(serial.render(Some(".1")).is_err());
    /// ```
    pub fn render(&self, spec: Option<&str>) -> Result<String, FormatError> {
        match spec {
            None => Ok(alloc::format!("{self}")),
            Some(spec) => spec.parse::<FormatSpec>()?.format_int(self.value),
        }
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let directed = f.width().is_some()
            || f.align().is_some()
            || f.sign_plus()
            || f.sign_minus()
            || f.alternate()
            || f.sign_aware_zero_pad();
        if directed {
            fmt::Display::fmt(&self.value, f)
        } else {
            write!(f, "{:0width$}", self.value, width = Self::WIDTH)
        }
    }
}

impl fmt::Debug for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerialNumber({})", self.value)
    }
}

impl From<i32> for SerialNumber {
    fn from(value: i32) -> Self {
        Self::new(value.into())
    }
}

impl From<u32> for SerialNumber {
    fn from(value: u32) -> Self {
        Self::new(value.into())
    }
}

impl From<i64> for SerialNumber {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl TryFrom<f64> for SerialNumber {
    type Error = ValidationError;

    /// Accepts only finite floats without a fractional part that fit in an `i64`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        #[expect(
            clippy::cast_precision_loss,
            reason = "bounds are powers of two and exact in f64"
        )]
        let in_range = (i64::MIN as f64..i64::MAX as f64).contains(&value);

        #[expect(clippy::float_cmp, reason = "exact integrality check")]
        let integral = trunc(value) == value;

        if value.is_finite() && in_range && integral {
            Ok(Self::new(value as i64))
        } else {
            tracing::debug!(value, "rejected non-integer serial number");
            Err(ValidationError::NotAnInteger(alloc::format!("{value:?}")))
        }
    }
}

impl FromStr for SerialNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self::new).map_err(|_| {
            tracing::debug!(input = s, "rejected non-integer serial number");
            ValidationError::NotAnInteger(s.to_owned())
        })
    }
}

impl PartialEq<i64> for SerialNumber {
    fn eq(&self, other: &i64) -> bool {
        self.value == *other
    }
}

#[cfg(feature = "std")]
fn trunc(value: f64) -> f64 {
    value.trunc()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn trunc(value: f64) -> f64 {
    libm::trunc(value)
}
