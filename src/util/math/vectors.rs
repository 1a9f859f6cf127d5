use core::ops::{Add, AddAssign, Div, Mul, Sub};

use libm::sqrtf;

/// Three axis value. The unit is whatever the caller feeds in: rotation rates
/// integrate into delta angles, accelerations into delta velocities.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vector3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3D {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3D { x, y, z }
    }

    pub const fn zero() -> Self {
        Vector3D::new(0.0, 0.0, 0.0)
    }

    pub fn cross(&self, rhs: &Vector3D) -> Vector3D {
        Vector3D {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    pub fn dot(&self, rhs: &Vector3D) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn magnitude(&self) -> f32 {
        sqrtf(self.dot(self))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add<Vector3D> for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub<Vector3D> for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Vector3D) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl AddAssign<Vector3D> for Vector3D {
    fn add_assign(&mut self, rhs: Vector3D) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Mul<f32> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f32> for Vector3D {
    type Output = Vector3D;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl From<[f32; 3]> for Vector3D {
    fn from(values: [f32; 3]) -> Self {
        Vector3D::new(values[0], values[1], values[2])
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector3D::new(1.0, 0.0, 0.0);
        let y = Vector3D::new(0.0, 1.0, 0.0);

        assert_eq!(x.cross(&y), Vector3D::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_of_parallel_vectors_is_zero() {
        let a = Vector3D::new(0.3, -1.2, 2.0);
        assert_eq!(a.cross(&(a * 4.0)), Vector3D::zero());
    }

    #[test]
    fn magnitude_and_scaling() {
        let v = Vector3D::new(3.0, 4.0, 0.0);
        assert_relative_eq!(v.magnitude(), 5.0);
        assert_relative_eq!((v / 5.0).magnitude(), 1.0);
    }

    #[test]
    fn arithmetic_is_component_wise() {
        let mut acc = Vector3D::from([1.0, 2.0, 3.0]);
        acc += Vector3D::new(1.0, 1.0, 1.0);

        assert_eq!(acc, Vector3D::new(2.0, 3.0, 4.0));
        assert_eq!(acc - Vector3D::new(2.0, 3.0, 4.0), Vector3D::zero());
        assert_eq!(acc + acc, acc * 2.0);
    }

    #[test]
    fn non_finite_components_are_detected() {
        assert!(Vector3D::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vector3D::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Vector3D::new(0.0, 0.0, f32::INFINITY).is_finite());
    }
}
