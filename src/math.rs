//! Vector and scalar helpers shared by the simulation and renderer

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};

/// Unit vector in the direction of `v`.
///
/// Zero-length input returns `Vec2::ZERO` rather than NaN.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// 2D cross product (z component of the 3D cross)
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Wrap a possibly negative or overflowing index into `0..len`.
///
/// `len` must be non-zero.
#[inline]
pub fn wrap_index(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

/// Element at `index`, wrapping around both ends of the slice.
#[inline]
pub fn get_wrapped<T>(items: &[T], index: isize) -> &T {
    &items[wrap_index(index, items.len())]
}

/// Uniform scalar in `[min, max)`
pub fn random_single<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> Result<f32> {
    if min > max {
        return Err(PhysicsError::InvalidRange { min, max });
    }
    Ok(min + rng.random::<f32>() * (max - min))
}

/// Unit vector pointing in a uniformly random direction
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.random::<f32>() * std::f32::consts::TAU;
    Vec2::new(angle.cos(), angle.sin())
}

/// Rotation + uniform scale + translation, with sin/cos premultiplied by scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub sin_scale: f32,
    pub cos_scale: f32,
}

impl Transform {
    pub fn new(position: Vec2, angle: f32, scale: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            position,
            sin_scale: sin * scale,
            cos_scale: cos * scale,
        }
    }

    /// Map a local-space point into world space
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x * self.cos_scale - p.y * self.sin_scale + self.position.x,
            p.x * self.sin_scale + p.y * self.cos_scale + self.position.y,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_normalize_zero_fallback() {
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
        let n = normalize(Vec2::new(3.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_cross_sign() {
        assert_eq!(cross(Vec2::X, Vec2::Y), 1.0);
        assert_eq!(cross(Vec2::Y, Vec2::X), -1.0);
        assert_eq!(cross(Vec2::X, Vec2::X * 2.0), 0.0);
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(5, 5), 0);
        assert_eq!(wrap_index(7, 5), 2);
        assert_eq!(wrap_index(-6, 5), 4);

        let items = [10, 20, 30];
        assert_eq!(*get_wrapped(&items, -1), 30);
        assert_eq!(*get_wrapped(&items, 3), 10);
    }

    #[test]
    fn test_random_single_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let v = random_single(&mut rng, -2.0, 3.0).unwrap();
            assert!((-2.0..3.0).contains(&v));
        }
        assert_eq!(random_single(&mut rng, 20.0, 20.0).unwrap(), 20.0);
        assert_eq!(
            random_single(&mut rng, 1.0, 0.0),
            Err(PhysicsError::InvalidRange { min: 1.0, max: 0.0 })
        );
    }

    #[test]
    fn test_random_direction_is_unit() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..50 {
            assert!((random_direction(&mut rng).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_transform_rotates_then_translates() {
        let t = Transform::new(Vec2::new(10.0, 5.0), FRAC_PI_2, 2.0);
        let p = t.apply(Vec2::new(1.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 7.0).abs() < 1e-5);

        assert_eq!(Transform::default().apply(Vec2::new(3.0, -1.0)), Vec2::new(3.0, -1.0));
    }
}
