//! A two-dimensional vector with value semantics.

use core::fmt;
use core::ops::{Add, Mul, Neg};

#[cfg(feature = "std")]
fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}

/// A 2D vector.
///
/// Every operation returns a new vector; nothing mutates in place.
///
/// ```
/// use seqmodel::Vector2;
///
/// let v = Vector2::new(2.0, 4.0).add(Vector2::new(2.0, 1.0));
/// assert_eq!(v, Vector2::new(4.0, 5.0));
/// assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
/// assert_eq!(v.to_string(), "(4.0, 5.0)");
/// assert_eq!(format!("{v:?}"), "Vector2(4.0, 5.0)");
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2 {
    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length, computed without intermediate overflow.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        hypot(self.x, self.y)
    }

    /// Returns whether either component is non-zero.
    ///
    /// This looks at the components, not the magnitude. `NaN` counts as
    /// non-zero.
    #[must_use]
    pub fn is_nonzero(self) -> bool {
        self.x != 0.0 || self.y != 0.0
    }

    /// Component-wise sum.
    #[must_use]
    #[expect(
        clippy::should_implement_trait,
        reason = "the `Add` impl below delegates here"
    )]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Multiplies both components by `scalar`.
    #[must_use]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of the two vectors in the z = 0 plane.
    ///
    /// Anti-symmetric: `a.cross(b) == -b.cross(a)`.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::add(self, other)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}
