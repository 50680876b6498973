//! Seeded random source for scene generation.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The single random source every generated parameter is drawn from.
///
/// Two sources built from the same seed produce the same sequence.
#[derive(Debug, Clone)]
pub struct SceneRng {
    inner: ChaCha8Rng,
}

impl SceneRng {
    /// Create a source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in `0.0..1.0`.
    pub fn unit(&mut self) -> f32 {
        self.inner.gen_range(0.0..1.0)
    }

    /// Uniform draw in `0.0..max`.
    pub fn up_to(&mut self, max: f32) -> f32 {
        self.unit() * max
    }

    /// Uniform draw in `-half_extent..half_extent`.
    pub fn centered(&mut self, half_extent: f32) -> f32 {
        (self.unit() - 0.5) * 2.0 * half_extent
    }

    /// Uniform point in the origin-centred box with the given half extents.
    pub fn point_in(&mut self, half_extents: Vec3) -> Vec3 {
        Vec3::new(
            self.centered(half_extents.x),
            self.centered(half_extents.y),
            self.centered(half_extents.z),
        )
    }

    /// Bernoulli draw: true when a uniform draw exceeds `threshold`.
    pub fn exceeds(&mut self, threshold: f32) -> bool {
        self.unit() > threshold
    }
}
