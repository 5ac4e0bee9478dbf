/// Seeded coherent-noise source for terrain generation
use noise::{NoiseFn, Simplex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded 2D simplex noise sampler.
///
/// Samples are taken on a fixed slice of 3D simplex noise: a single scalar
/// `z_seed`, derived from the seed, is shared by every sample drawn from one
/// `NoiseField`. One slice per generation keeps the surface coherent instead
/// of degenerating into per-cell independent noise.
pub struct NoiseField {
    simplex: Simplex,
    /// Slice coordinate in [0, 100), fixed for the lifetime of the field
    z_seed: f64,
}

impl NoiseField {
    /// Create a new noise field from a seed
    pub fn new(seed: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        Self {
            simplex: Simplex::new(seed),
            z_seed: rng.gen::<f64>() * 100.0,
        }
    }

    /// Sample noise at grid position (x, y)
    ///
    /// Returns a value roughly in [-1, 1].
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y, self.z_seed])
    }
}
