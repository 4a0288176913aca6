//! 3-component vector operations.

/// A 3-component vector. Immutable by convention: every operation returns a
/// new value and never mutates its inputs.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3([f32; 3]);

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3([x, y, z])
    }

    pub fn x(&self) -> f32 {
        self.0[0]
    }

    pub fn y(&self) -> f32 {
        self.0[1]
    }

    pub fn z(&self) -> f32 {
        self.0[2]
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Right-handed cross product. Defined for all inputs; parallel vectors
    /// yield the zero vector.
    pub fn cross(&self, other: &Self) -> Self {
        Vec3([
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        ])
    }

    pub fn length(&self) -> f32 {
        (self.x() * self.x() + self.y() * self.y() + self.z() * self.z()).sqrt()
    }

    /// Divides by the Euclidean length. If the length is below 1e-5 the zero
    /// vector is returned instead, so near-degenerate inputs never produce
    /// NaN or infinity. The threshold and fallback are load-bearing; callers
    /// rely on the zero vector coming back unchanged.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length < 1e-5 {
            return Vec3([0.0, 0.0, 0.0]);
        }

        Vec3([self.x() / length, self.y() / length, self.z() / length])
    }

    pub fn subtract(&self, other: &Self) -> Self {
        Vec3([
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        ])
    }

    pub fn as_array(&self) -> &[f32; 3] {
        &self.0
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(values: [f32; 3]) -> Self {
        Vec3(values)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(vec: Vec3) -> Self {
        vec.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that normalizing twice equals normalizing once.
    #[test]
    fn test_normalize_idempotent() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        let once = v.normalize();
        let twice = once.normalize();
        for i in 0..3 {
            assert!((once.as_array()[i] - twice.as_array()[i]).abs() < 1e-6);
        }
        assert!((once.length() - 1.0).abs() < 1e-6);
    }

    /// Tests the near-zero guard: the zero vector normalizes to itself,
    /// exactly, with no NaN.
    #[test]
    fn test_normalize_zero_guard() {
        let zero = Vec3::new(0.0, 0.0, 0.0);
        assert_eq!(zero.normalize(), Vec3::new(0.0, 0.0, 0.0));

        // Just under the 1e-5 threshold also falls back to zero.
        let tiny = Vec3::new(1e-6, 0.0, 0.0);
        assert_eq!(tiny.normalize(), Vec3::new(0.0, 0.0, 0.0));
    }

    /// Tests that the cross product is orthogonal to both inputs.
    #[test]
    fn test_cross_orthogonal() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let c = a.cross(&b);
        assert!(c.dot(&a).abs() < 1e-4);
        assert!(c.dot(&b).abs() < 1e-4);
    }

    /// Tests that crossing parallel vectors yields the zero vector.
    #[test]
    fn test_cross_parallel_is_zero() {
        let a = Vec3::new(2.0, -1.0, 0.5);
        let b = Vec3::new(4.0, -2.0, 1.0);
        assert_eq!(a.cross(&b), Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_subtract() {
        let a = Vec3::new(5.0, 7.0, 9.0);
        let b = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a.subtract(&b), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_cross_right_handed() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vec3::new(0.0, 0.0, 1.0));
    }
}
