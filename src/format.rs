//! Runtime format directives for integers.
//!
//! A directive follows the grammar
//! `[[fill]align][sign][#][0][width][grouping][.precision][type]`:
//!
//! | Part        | Values                                                  |
//! |-------------|---------------------------------------------------------|
//! | `align`     | `<` left, `>` right, `^` center, `=` pad after the sign |
//! | `sign`      | `+` always, `-` negatives only, ` ` space for positives |
//! | `#`         | radix prefix (`0b`, `0o`, `0x`, `0X`); keeps trailing zeros for `g` |
//! | `0`         | pad with zeros after the sign                           |
//! | `grouping`  | `,` or `_` thousands separator                          |
//! | `precision` | digits after the point, float types only                |
//! | `type`      | `d`/`n` decimal, `b` binary, `o` octal, `x`/`X` hex, `c` character |
//! |             | `e`/`E` exponent, `f`/`F` fixed point, `g`/`G` general, `%` percent |
//!
//! Float types render the integer converted to `f64`, with a default
//! precision of 6.

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use crate::error::FormatError;

/// Alignment within the padded width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Pad on the right.
    Left,
    /// Pad on the left.
    Right,
    /// Pad on both sides, extra fill on the right.
    Center,
    /// Pad between the sign and the digits.
    AfterSign,
}

impl Align {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            '=' => Some(Self::AfterSign),
            _ => None,
        }
    }
}

/// Sign display policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// Only negative numbers carry a sign.
    #[default]
    Negative,
    /// Always show a sign.
    Always,
    /// Positive numbers get a leading space.
    Space,
}

/// A parsed integer format directive.
///
/// ```
/// use seqmodel::FormatSpec;
///
/// let spec: FormatSpec = "*^7".parse().unwrap();
/// assert_eq!(spec.format_int(7).unwrap(), "***7***");
///
/// let spec: FormatSpec = "#010x".parse().unwrap();
/// assert_eq!(spec.format_int(0xbeef).unwrap(), "0x0000beef");
///
/// let spec: FormatSpec = "9.4f".parse().unwrap();
/// assert_eq!(spec.format_int(7).unwrap(), "   7.0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// Padding character.
    pub fill: char,
    /// Explicit alignment; numbers align right when unset.
    pub align: Option<Align>,
    /// Sign policy.
    pub sign: Sign,
    /// Whether to emit a radix prefix.
    pub alternate: bool,
    /// Minimum width in characters.
    pub width: usize,
    /// Digit group separator.
    pub grouping: Option<char>,
    /// Digits after the point for float types.
    pub precision: Option<usize>,
    /// Presentation type.
    pub ty: char,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            sign: Sign::Negative,
            alternate: false,
            width: 0,
            grouping: None,
            precision: None,
            ty: 'd',
        }
    }
}

impl FromStr for FormatSpec {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let mut spec = Self::default();
        let mut pos = 0;

        let mut explicit_fill = false;

        if let Some(align) = chars.get(1).copied().and_then(Align::from_char) {
            spec.fill = chars[0];
            explicit_fill = true;
            spec.align = Some(align);
            pos = 2;
        } else if let Some(align) = chars.first().copied().and_then(Align::from_char) {
            spec.align = Some(align);
            pos = 1;
        }

        let sign = match chars.get(pos) {
            Some('+') => Some(Sign::Always),
            Some('-') => Some(Sign::Negative),
            Some(' ') => Some(Sign::Space),
            _ => None,
        };
        if let Some(sign) = sign {
            spec.sign = sign;
            pos += 1;
        }

        if chars.get(pos) == Some(&'#') {
            spec.alternate = true;
            pos += 1;
        }

        if chars.get(pos) == Some(&'0') {
            if !explicit_fill {
                spec.fill = '0';
            }
            if spec.align.is_none() {
                spec.align = Some(Align::AfterSign);
            }
            pos += 1;
        }

        while let Some(digit) = chars.get(pos).and_then(|c| c.to_digit(10)) {
            spec.width = spec
                .width
                .checked_mul(10)
                .and_then(|width| width.checked_add(digit as usize))
                .ok_or_else(|| FormatError::InvalidSpec(s.to_owned()))?;
            pos += 1;
        }

        if let Some(&grouping @ (',' | '_')) = chars.get(pos) {
            spec.grouping = Some(grouping);
            pos += 1;
        }

        if chars.get(pos) == Some(&'.') {
            pos += 1;
            let mut precision: Option<usize> = None;
            while let Some(digit) = chars.get(pos).and_then(|c| c.to_digit(10)) {
                precision = precision
                    .unwrap_or_default()
                    .checked_mul(10)
                    .and_then(|precision| precision.checked_add(digit as usize));
                if precision.is_none() {
                    return Err(FormatError::InvalidSpec(s.to_owned()));
                }
                pos += 1;
            }
            spec.precision =
                Some(precision.ok_or_else(|| FormatError::InvalidSpec(s.to_owned()))?);
        }

        let mut explicit_ty = false;
        if let Some(&ty) = chars.get(pos) {
            if !is_integer_type(ty) && !is_float_type(ty) {
                return Err(FormatError::UnknownType(ty));
            }
            spec.ty = ty;
            explicit_ty = true;
            pos += 1;
        }

        if pos != chars.len() {
            return Err(FormatError::InvalidSpec(s.to_owned()));
        }

        if spec.precision.is_some() && (!explicit_ty || is_integer_type(spec.ty)) {
            return Err(FormatError::PrecisionNotAllowed);
        }

        let grouping_allowed = match spec.grouping {
            Some(',') => spec.ty == 'd' || is_float_type(spec.ty),
            Some(_) => !matches!(spec.ty, 'c' | 'n'),
            None => true,
        };
        if let (false, Some(grouping)) = (grouping_allowed, spec.grouping) {
            return Err(FormatError::GroupingNotAllowed {
                grouping,
                ty: spec.ty,
            });
        }

        Ok(spec)
    }
}

impl FormatSpec {
    /// Renders `value` with this directive.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::CharOutOfRange`] if the type is `c` and `value`
    /// is not a Unicode scalar value.
    pub fn format_int(&self, value: i64) -> Result<String, FormatError> {
        let magnitude = value.unsigned_abs();
        let (digits, prefix) = match self.ty {
            'b' => (self.group(alloc::format!("{magnitude:b}"), 4), "0b"),
            'o' => (self.group(alloc::format!("{magnitude:o}"), 4), "0o"),
            'x' => (self.group(alloc::format!("{magnitude:x}"), 4), "0x"),
            'X' => (self.group(alloc::format!("{magnitude:X}"), 4), "0X"),
            'c' => {
                let c = u32::try_from(value)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(FormatError::CharOutOfRange(value))?;
                return Ok(self.pad(String::new(), &c.to_string()));
            }
            ty if is_float_type(ty) => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "float presentation types round like any f64"
                )]
                let magnitude = magnitude as f64;
                (self.group(self.float_digits(magnitude), 3), "")
            }
            _ => (self.group(magnitude.to_string(), 3), ""),
        };

        let sign = match (value < 0, self.sign) {
            (true, _) => "-",
            (false, Sign::Always) => "+",
            (false, Sign::Space) => " ",
            (false, Sign::Negative) => "",
        };

        let mut head = String::from(sign);
        if self.alternate {
            head.push_str(prefix);
        }

        Ok(self.pad(head, &digits))
    }

    fn float_digits(&self, value: f64) -> String {
        let precision = self.precision.unwrap_or(6);
        match self.ty {
            'e' | 'E' => exponent(value, precision, self.ty == 'E'),
            'g' | 'G' => general(value, precision.max(1), self.ty == 'G', self.alternate),
            '%' => alloc::format!("{:.precision$}%", value * 100.0),
            _ => alloc::format!("{value:.precision$}"),
        }
    }

    /// Inserts the grouping separator into the leading run of digits.
    fn group(&self, digits: String, size: usize) -> String {
        let Some(separator) = self.grouping else {
            return digits;
        };
        let hex = matches!(self.ty, 'x' | 'X');
        let end = digits
            .find(|c: char| !(c.is_ascii_digit() || (hex && c.is_ascii_hexdigit())))
            .unwrap_or(digits.len());
        group_digits(&digits[..end], separator, size) + &digits[end..]
    }

    fn pad(&self, head: String, body: &str) -> String {
        let len = head.chars().count() + body.chars().count();
        let padding = self.width.saturating_sub(len);
        let fill = |count: usize| core::iter::repeat_n(self.fill, count).collect::<String>();

        match self.align.unwrap_or(Align::Right) {
            Align::Left => head + body + &fill(padding),
            Align::Right => fill(padding) + &head + body,
            Align::Center => {
                let left = padding / 2;
                fill(left) + &head + body + &fill(padding - left)
            }
            Align::AfterSign => head + &fill(padding) + body,
        }
    }
}

const fn is_integer_type(ty: char) -> bool {
    matches!(ty, 'd' | 'n' | 'b' | 'o' | 'x' | 'X' | 'c')
}

const fn is_float_type(ty: char) -> bool {
    matches!(ty, 'e' | 'E' | 'f' | 'F' | 'g' | 'G' | '%')
}

/// Splits `{:e}` output into mantissa and decimal exponent.
fn scientific(value: f64, precision: usize) -> (String, i32) {
    let text = alloc::format!("{value:.precision$e}");
    match text.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_owned(), exp.parse().unwrap_or_default()),
        None => (text, 0),
    }
}

/// Mantissa with `precision` digits and a signed exponent of at least two digits.
fn exponent(value: f64, precision: usize, upper: bool) -> String {
    let (mantissa, exp) = scientific(value, precision);
    let marker = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    alloc::format!("{mantissa}{marker}{sign}{:02}", exp.unsigned_abs())
}

/// Fixed or exponent notation, whichever suits the magnitude, with
/// `precision` significant digits.
fn general(value: f64, precision: usize, upper: bool, keep_zeros: bool) -> String {
    let significant = i32::try_from(precision).unwrap_or(i32::MAX);
    let (_, exp) = scientific(value, precision - 1);

    if (-4..significant).contains(&exp) {
        let decimals = usize::try_from(significant - 1 - exp).unwrap_or_default();
        let text = alloc::format!("{value:.decimals$}");
        if keep_zeros {
            text
        } else {
            strip_zeros(&text).to_owned()
        }
    } else {
        let text = exponent(value, precision - 1, upper);
        if keep_zeros {
            return text;
        }
        match text.find(['e', 'E']) {
            Some(at) => alloc::format!("{}{}", strip_zeros(&text[..at]), &text[at..]),
            None => text,
        }
    }
}

fn strip_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn group_digits(digits: &str, separator: char, size: usize) -> String {
    let count = digits.chars().count();
    let mut grouped = String::with_capacity(count + count / size);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (count - i) % size == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}
