/// Seamless tiled terrain generation
///
/// This module builds a noise-based height field, derives three
/// seam-compatible orientation variants, and arranges the four into a 4x4
/// lattice whose neighboring tiles share identical edge heights, plus the
/// world-space height query used by prop placement.

pub mod grid;
pub mod height_field;
pub mod mesh;
pub mod noise_field;
pub mod variants;
pub mod world;

// Re-export main types for convenience
pub use grid::{TerrainError, TerrainGrid, TilePlacement, GRID_DIM, VARIANT_PATTERN};
pub use height_field::{HeightField, HeightMapGenerator};
pub use mesh::{build_tile_mesh, TileMesh};
pub use noise_field::NoiseField;
pub use variants::{derive_flip_x, derive_flip_z, derive_inverted, TileVariant, VariantSet};
pub use world::{generate_world, load_world_cache, save_world_cache, CanonicalMeshes, TerrainWorld};
