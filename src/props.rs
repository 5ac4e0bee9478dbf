/// Randomized decorative prop placement on generated terrain
///
/// Props are placed after the terrain grid exists and query it read-only;
/// a placement holds no back-reference to the terrain. Mesh loading for
/// the props is the renderer's concern — this module only decides where
/// they stand.
use crate::terrain::TerrainGrid;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Horizontal spread of tree placement, in block sizes
pub const TREE_SPREAD_MULTIPLIER: f32 = 3.0;
/// Horizontal spread of yurt placement, in block sizes
pub const YURT_SPREAD_MULTIPLIER: f32 = 2.0;
/// Spacing of the 3x3 sample grid used to level a yurt's footprint
pub const YURT_SAMPLE_SPACING: f32 = 100.0;
/// Fixed vertical lift applied to a yurt after footprint averaging
pub const YURT_LIFT: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropKind {
    Tree,
    Yurt,
}

/// World-space placement of one decorative prop
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PropPlacement {
    pub kind: PropKind,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Draw a random (x, z) position within `block_size * multiplier` of the
/// origin: two independent sign draws and two independent magnitude draws.
fn random_position(rng: &mut StdRng, block_size: f32, multiplier: f32) -> (f32, f32) {
    let sx = if rng.gen::<f32>() < 0.5 { -1.0 } else { 1.0 };
    let sz = if rng.gen::<f32>() < 0.5 { -1.0 } else { 1.0 };

    let x = rng.gen::<f32>() * block_size * multiplier * sx;
    let z = rng.gen::<f32>() * block_size * multiplier * sz;

    (x, z)
}

/// Scatter trees, each snapped to the terrain height at its position.
///
/// Tree spread intentionally exceeds the lattice extent, so the clamped
/// height query is used.
pub fn scatter_trees(grid: &TerrainGrid, count: usize, rng: &mut StdRng) -> Vec<PropPlacement> {
    let mut placements = Vec::with_capacity(count);

    for _ in 0..count {
        let (x, z) = random_position(rng, grid.block_size(), TREE_SPREAD_MULTIPLIER);
        placements.push(PropPlacement {
            kind: PropKind::Tree,
            x,
            y: grid.height_at_clamped(x, z),
            z,
        });
    }

    placements
}

/// Scatter yurts, leveled on the mean height of a 3x3 sample grid.
///
/// A yurt has a wide basement; averaging nine samples 100 units apart
/// smooths out tile roughness under the footprint. The fixed lift keeps
/// the basement above ground.
pub fn scatter_yurts(grid: &TerrainGrid, count: usize, rng: &mut StdRng) -> Vec<PropPlacement> {
    let mut placements = Vec::with_capacity(count);

    for _ in 0..count {
        let (x, z) = random_position(rng, grid.block_size(), YURT_SPREAD_MULTIPLIER);
        placements.push(PropPlacement {
            kind: PropKind::Yurt,
            x,
            y: footprint_height(grid, x, z) + YURT_LIFT,
            z,
        });
    }

    placements
}

/// Mean terrain height over the 3x3 footprint sample grid
fn footprint_height(grid: &TerrainGrid, x: f32, z: f32) -> f32 {
    let mut sum = 0.0;
    for a in -1..=1 {
        for b in -1..=1 {
            sum += grid.height_at_clamped(
                x + a as f32 * YURT_SAMPLE_SPACING,
                z + b as f32 * YURT_SAMPLE_SPACING,
            );
        }
    }
    sum / 9.0
}
