/// Height field storage and multi-octave generation
use super::noise_field::NoiseField;
use serde::{Deserialize, Serialize};

/// Square grid of terrain height samples.
///
/// Samples are 8-bit unsigned heights in row-major order
/// (`data[row * density + col]`), `density × density` cells. A field is
/// immutable once generated; variant derivation always copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightField {
    /// Grid dimension (cells per side)
    density: usize,
    /// Flattened height values, length density²
    data: Vec<u8>,
}

impl HeightField {
    /// Wrap raw row-major samples. Panics if the length is not density².
    pub fn from_raw(density: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            density * density,
            "height field length must be density²"
        );
        Self { density, data }
    }

    pub fn density(&self) -> usize {
        self.density
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Height at grid cell (col, row)
    pub fn get(&self, col: usize, row: usize) -> u8 {
        self.data[row * self.density + col]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

/// Multi-octave height map generator.
///
/// Accumulates `octave_count` octaves of simplex noise into an 8-bit field.
/// Accumulation wraps modulo 256, matching fixed-width unsigned arithmetic;
/// seam matching across the derived tile variants depends on the wraparound
/// being reproduced identically, so it is emulated explicitly rather than
/// saturated.
pub struct HeightMapGenerator {
    noise: NoiseField,
    octave_count: u32,
    quality_step: f64,
    amplitude_scale: f64,
}

impl HeightMapGenerator {
    pub fn new(seed: u32, octave_count: u32, quality_step: f64, amplitude_scale: f64) -> Self {
        Self {
            noise: NoiseField::new(seed),
            octave_count,
            quality_step,
            amplitude_scale,
        }
    }

    /// Generate a `density × density` height field.
    ///
    /// Per octave, each cell accumulates
    /// `|noise(x/quality, y/quality)| * quality * 1.75 * amplitude_scale`,
    /// truncated to an integer and added mod 256. Quality starts at 1 and
    /// multiplies by `quality_step` each octave.
    pub fn generate(&self, density: usize) -> HeightField {
        let size = density * density;
        let mut data = vec![0u8; size];
        let mut quality = 1.0_f64;

        for _ in 0..self.octave_count {
            for (i, cell) in data.iter_mut().enumerate() {
                let x = (i % density) as f64;
                let y = (i / density) as f64;

                let contribution = (self.noise.sample(x / quality, y / quality)
                    * quality
                    * 1.75)
                    .abs()
                    * self.amplitude_scale;

                // Truncate, then add mod 256 (u8 wraparound, never saturate)
                *cell = cell.wrapping_add((contribution as u64 % 256) as u8);
            }
            quality *= self.quality_step;
        }

        HeightField::from_raw(density, data)
    }
}
