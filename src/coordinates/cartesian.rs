//! Rectangular coordinate triple
//!
//! `Cartesian3` is the common currency between the perturbation theories and
//! the transform pipeline: heliocentric AU for planetary results, geocentric
//! km for lunar results. The meaning (origin, frame, units) is contextual and
//! callers track it by convention.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A right-handed rectangular coordinate triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian3 {
    pub const ZERO: Cartesian3 = Cartesian3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Euclidean length of the vector.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(*self / mag)
        }
    }

    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angle between this vector and another, in radians within `[0, PI]`.
    pub fn angular_distance(&self, other: &Cartesian3) -> f64 {
        let mag_product = self.magnitude() * other.magnitude();
        if mag_product == 0.0 {
            return 0.0;
        }
        (self.dot(other) / mag_product).clamp(-1.0, 1.0).acos()
    }

    /// Converts to nalgebra for matrix work.
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Neg for Cartesian3 {
    type Output = Cartesian3;

    fn neg(self) -> Cartesian3 {
        Cartesian3::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Div<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn div(self, scalar: f64) -> Cartesian3 {
        Cartesian3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    #[test]
    fn test_magnitude_and_normalize() {
        let v = Cartesian3::new(3.0, 4.0, 0.0);
        assert_relative_eq!(v.magnitude(), 5.0);

        let unit = v.normalize().unwrap();
        assert_relative_eq!(unit.magnitude(), 1.0, max_relative = 1e-15);
        assert_relative_eq!(unit.x, 0.6);
        assert_relative_eq!(unit.y, 0.8);

        assert!(Cartesian3::ZERO.normalize().is_none());
    }

    #[test]
    fn test_cross_follows_right_hand_rule() {
        let x = Cartesian3::new(1.0, 0.0, 0.0);
        let y = Cartesian3::new(0.0, 1.0, 0.0);
        let z = x.cross(&y);
        assert_abs_diff_eq!(z.z, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(z.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(z.y, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_angular_distance() {
        let x = Cartesian3::new(1.0, 0.0, 0.0);
        let y = Cartesian3::new(0.0, 2.0, 0.0);
        assert_relative_eq!(x.angular_distance(&y), PI / 2.0, max_relative = 1e-15);
        assert_relative_eq!(
            x.angular_distance(&(x * -3.0)),
            PI,
            max_relative = 1e-15
        );
        assert_abs_diff_eq!(x.angular_distance(&x), 0.0);
    }

    #[test]
    fn test_vector3_round_trip() {
        let v = Cartesian3::new(1.0, -2.0, 3.0);
        let back = Cartesian3::from_vector3(v.to_vector3());
        assert_eq!(v, back);
    }

    #[test]
    fn test_arithmetic() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Cartesian3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Cartesian3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Cartesian3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Cartesian3::new(0.5, 1.0, 1.5));
    }
}
