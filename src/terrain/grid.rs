/// 4x4 tile lattice assembly and world-space height sampling
use super::height_field::HeightField;
use super::variants::{TileVariant, VariantSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tiles per lattice side
pub const GRID_DIM: usize = 4;

/// Fixed variant placement pattern, (row, col) from top-left.
///
/// Chosen so every horizontal and vertical neighbor pair carries identical
/// height values along the shared edge. The assignment is load-bearing;
/// the seam tests below pin it down.
pub const VARIANT_PATTERN: [[TileVariant; GRID_DIM]; GRID_DIM] = [
    [TileVariant::Normal, TileVariant::FlipZ, TileVariant::Normal, TileVariant::FlipZ],
    [TileVariant::FlipX, TileVariant::Inverted, TileVariant::FlipX, TileVariant::Inverted],
    [TileVariant::Normal, TileVariant::FlipZ, TileVariant::Normal, TileVariant::FlipZ],
    [TileVariant::FlipX, TileVariant::Inverted, TileVariant::FlipX, TileVariant::Inverted],
];

#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("height query ({x}, {z}) outside the assembled 4x4 lattice")]
    OutOfLattice { x: f32, z: f32 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("msgpack encode error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("msgpack decode error: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One placed tile of the lattice.
///
/// `origin_x`/`origin_z` is the tile's minimum corner; tile (row, col)
/// covers `[(col-2)*bs, (col-1)*bs) x [(row-2)*bs, (row-1)*bs)` so the
/// lattice is centered on the world origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilePlacement {
    pub row: usize,
    pub col: usize,
    pub variant: TileVariant,
    pub origin_x: f32,
    pub origin_z: f32,
}

/// The assembled 4x4 terrain lattice.
///
/// Owns the four canonical height fields and the 16 tile placements that
/// reference them. Written once at generation time, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainGrid {
    block_size: f32,
    variants: VariantSet,
    tiles: Vec<TilePlacement>,
}

impl TerrainGrid {
    /// Arrange the four canonical variants into the fixed 16-tile lattice
    pub fn assemble(variants: VariantSet, block_size: f32) -> Self {
        let mut tiles = Vec::with_capacity(GRID_DIM * GRID_DIM);

        for (row, pattern_row) in VARIANT_PATTERN.iter().enumerate() {
            for (col, &variant) in pattern_row.iter().enumerate() {
                tiles.push(TilePlacement {
                    row,
                    col,
                    variant,
                    origin_x: (col as f32 - 2.0) * block_size,
                    origin_z: (row as f32 - 2.0) * block_size,
                });
            }
        }

        Self {
            block_size,
            variants,
            tiles,
        }
    }

    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    pub fn density(&self) -> usize {
        self.variants.normal.density()
    }

    pub fn variants(&self) -> &VariantSet {
        &self.variants
    }

    pub fn tiles(&self) -> &[TilePlacement] {
        &self.tiles
    }

    /// Height field referenced by a placed tile
    pub fn tile_field(&self, tile: &TilePlacement) -> &HeightField {
        self.variants.field(tile.variant)
    }

    /// Sample the stored height at a world coordinate.
    ///
    /// Maps the coordinate to its owning tile, then to the nearest height
    /// field cell; a query at an exact mesh vertex position returns that
    /// vertex's stored height. Coordinates outside the lattice extent
    /// `[-2*block_size, 2*block_size)` are rejected.
    pub fn height_at(&self, x: f32, z: f32) -> Result<f32, TerrainError> {
        let half = 2.0 * self.block_size;
        if x < -half || x >= half || z < -half || z >= half {
            return Err(TerrainError::OutOfLattice { x, z });
        }
        Ok(self.sample_lattice(x, z))
    }

    /// Sample the stored height, clamping the coordinate into the lattice.
    ///
    /// Prop scatter intentionally spreads beyond the lattice extent, so
    /// placement snaps to the nearest edge height instead of failing.
    pub fn height_at_clamped(&self, x: f32, z: f32) -> f32 {
        let half = 2.0 * self.block_size;
        self.sample_lattice(x.clamp(-half, half), z.clamp(-half, half))
    }

    fn sample_lattice(&self, x: f32, z: f32) -> f32 {
        let bs = self.block_size;
        let last = GRID_DIM as i32 - 1;
        let col = ((x / bs).floor() as i32 + 2).clamp(0, last) as usize;
        let row = ((z / bs).floor() as i32 + 2).clamp(0, last) as usize;

        let tile = &self.tiles[row * GRID_DIM + col];
        let field = self.variants.field(tile.variant);
        let cells = (field.density() - 1) as f32;

        let ix = (((x - tile.origin_x) / bs * cells).round() as usize).min(field.density() - 1);
        let iz = (((z - tile.origin_z) / bs * cells).round() as usize).min(field.density() - 1);

        field.get(ix, iz) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_grid(block_size: f32) -> TerrainGrid {
        let base = HeightField::from_raw(4, (0..16u8).collect());
        TerrainGrid::assemble(VariantSet::derive(base), block_size)
    }

    #[test]
    fn test_assembles_sixteen_tiles() {
        let grid = synthetic_grid(100.0);

        assert_eq!(grid.tiles().len(), 16);
        for tile in grid.tiles() {
            assert_eq!(tile.variant, VARIANT_PATTERN[tile.row][tile.col]);
            assert_eq!(tile.origin_x, (tile.col as f32 - 2.0) * 100.0);
            assert_eq!(tile.origin_z, (tile.row as f32 - 2.0) * 100.0);
        }
    }

    #[test]
    fn test_placement_pattern_is_fixed() {
        use TileVariant::*;

        let grid = synthetic_grid(100.0);
        let variants: Vec<TileVariant> = grid.tiles().iter().map(|t| t.variant).collect();

        assert_eq!(
            variants,
            vec![
                Normal, FlipZ, Normal, FlipZ,
                FlipX, Inverted, FlipX, Inverted,
                Normal, FlipZ, Normal, FlipZ,
                FlipX, Inverted, FlipX, Inverted,
            ]
        );
    }

    /// Core correctness property: every shared edge between neighboring
    /// tiles carries identical height values, checked by index arithmetic.
    #[test]
    fn test_seam_continuity() {
        let grid = synthetic_grid(100.0);
        let d = grid.density();

        // Horizontal neighbors: right edge of (row, col) vs left edge of (row, col+1)
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM - 1 {
                let left = grid.tile_field(&grid.tiles()[row * GRID_DIM + col]);
                let right = grid.tile_field(&grid.tiles()[row * GRID_DIM + col + 1]);
                for r in 0..d {
                    assert_eq!(
                        left.get(d - 1, r),
                        right.get(0, r),
                        "horizontal seam mismatch at tile ({}, {}), row {}",
                        row,
                        col,
                        r
                    );
                }
            }
        }

        // Vertical neighbors: bottom edge of (row, col) vs top edge of (row+1, col)
        for row in 0..GRID_DIM - 1 {
            for col in 0..GRID_DIM {
                let upper = grid.tile_field(&grid.tiles()[row * GRID_DIM + col]);
                let lower = grid.tile_field(&grid.tiles()[(row + 1) * GRID_DIM + col]);
                for c in 0..d {
                    assert_eq!(
                        upper.get(c, d - 1),
                        lower.get(c, 0),
                        "vertical seam mismatch at tile ({}, {}), col {}",
                        row,
                        col,
                        c
                    );
                }
            }
        }
    }

    #[test]
    fn test_height_query_at_vertex_positions() {
        let block_size = 90.0;
        let grid = synthetic_grid(block_size);
        let d = grid.density();
        let spacing = block_size / (d - 1) as f32;

        for tile in grid.tiles() {
            let field = grid.tile_field(tile);
            for iz in 0..d {
                for ix in 0..d {
                    let x = tile.origin_x + ix as f32 * spacing;
                    let z = tile.origin_z + iz as f32 * spacing;
                    let got = grid.height_at_clamped(x, z);
                    // The far edge of a tile belongs to its neighbor; seam
                    // continuity makes both readings equal.
                    assert_eq!(
                        got,
                        field.get(ix, iz) as f32,
                        "vertex mismatch at world ({}, {})",
                        x,
                        z
                    );
                }
            }
        }
    }

    #[test]
    fn test_out_of_lattice_rejected() {
        let grid = synthetic_grid(100.0);

        assert!(grid.height_at(0.0, 0.0).is_ok());
        assert!(grid.height_at(-200.0, -200.0).is_ok());

        for (x, z) in [(200.0, 0.0), (0.0, 200.0), (-201.0, 0.0), (0.0, -200.5)] {
            let err = grid.height_at(x, z).unwrap_err();
            assert!(matches!(err, TerrainError::OutOfLattice { .. }));
        }
    }

    #[test]
    fn test_clamped_query_snaps_to_edge() {
        let grid = synthetic_grid(100.0);

        // Far outside the lattice clamps to the nearest edge sample
        assert_eq!(
            grid.height_at_clamped(1000.0, 0.0),
            grid.height_at_clamped(199.9999, 0.0)
        );
        assert_eq!(
            grid.height_at_clamped(-1000.0, -1000.0),
            grid.height_at_clamped(-200.0, -200.0)
        );
    }
}
