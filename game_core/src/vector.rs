use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// 2D vector value type used for all positions and velocities.
///
/// Screen coordinates: x grows to the right, y grows downward.
/// Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// Unit vector pointing right
    pub const X: Self = Self::new(1.0, 0.0);
    /// Unit vector pointing down the screen
    pub const Y: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    pub fn divide(self, k: f64) -> Result<Self, CoreError> {
        if k == 0.0 {
            return Err(CoreError::DivisionByZero);
        }
        Ok(Self::new(self.x / k, self.y / k))
    }

    pub fn dot(self, other: Self) -> f64 {
        DVec2::from(self).dot(other.into())
    }

    pub fn magnitude(self) -> f64 {
        DVec2::from(self).length()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Unit vector in the same direction
    pub fn normalize(self) -> Result<Self, CoreError> {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            return Err(CoreError::DegenerateVector);
        }
        self.divide(mag)
    }

    pub fn set_magnitude(self, magnitude: f64) -> Result<Self, CoreError> {
        Ok(self.normalize()?.scale(magnitude))
    }

    /// Reflect across `normal`: v' = v - 2(v·n)n.
    ///
    /// `normal` need not be unit length; it is normalized before use, so a
    /// zero normal fails with `DegenerateVector`. Use [`Vector2D::reflect_unit`]
    /// when the normal is already unit length.
    pub fn reflect(self, normal: Self) -> Result<Self, CoreError> {
        Ok(self.reflect_unit(normal.normalize()?))
    }

    /// Reflect across a normal that is already unit length
    pub fn reflect_unit(self, normal: Self) -> Self {
        self - normal.scale(2.0 * self.dot(normal))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
