/// One-shot world generation pipeline and cache persistence
use super::grid::{TerrainError, TerrainGrid};
use super::height_field::HeightMapGenerator;
use super::mesh::{build_tile_mesh, TileMesh};
use super::variants::{TileVariant, VariantSet};
use crate::config::WorldConfig;
use crate::props::{scatter_trees, scatter_yurts, PropPlacement};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Canonical tile meshes, one per variant.
///
/// All 16 grid cells render a clone of one of these four, translated to the
/// cell's world origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalMeshes {
    pub normal: TileMesh,
    pub flip_x: TileMesh,
    pub flip_z: TileMesh,
    pub inverted: TileMesh,
}

impl CanonicalMeshes {
    fn build(variants: &VariantSet, block_size: f32) -> Self {
        Self {
            normal: build_tile_mesh(&variants.normal, block_size),
            flip_x: build_tile_mesh(&variants.flip_x, block_size),
            flip_z: build_tile_mesh(&variants.flip_z, block_size),
            inverted: build_tile_mesh(&variants.inverted, block_size),
        }
    }

    pub fn mesh(&self, variant: TileVariant) -> &TileMesh {
        match variant {
            TileVariant::Normal => &self.normal,
            TileVariant::FlipX => &self.flip_x,
            TileVariant::FlipZ => &self.flip_z,
            TileVariant::Inverted => &self.inverted,
        }
    }
}

/// A fully generated session world: the assembled terrain lattice, the four
/// canonical tile meshes, and the scattered props.
///
/// Owned by the caller; generation writes it once and every consumer reads
/// it afterwards. There is no runtime regeneration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainWorld {
    pub seed: u32,
    pub grid: TerrainGrid,
    pub meshes: CanonicalMeshes,
    pub props: Vec<PropPlacement>,
}

/// Generate a complete world from configuration and a session seed.
///
/// Runs the whole pipeline in program order: height field generation,
/// variant derivation, lattice assembly, canonical mesh construction, prop
/// scatter. The same seed reproduces the same world bit-for-bit.
pub fn generate_world(config: &WorldConfig, seed: u32) -> TerrainWorld {
    let t = &config.terrain;

    info!(
        "Generating {}x{} height field (seed {}, {} octaves)",
        t.block_density, t.block_density, seed, t.octave_count
    );
    let generator = HeightMapGenerator::new(seed, t.octave_count, t.quality_step, t.height_multiplier);
    let base = generator.generate(t.block_density);

    let variants = VariantSet::derive(base);
    let meshes = CanonicalMeshes::build(&variants, t.block_size);
    let grid = TerrainGrid::assemble(variants, t.block_size);
    info!("Assembled {} terrain tiles", grid.tiles().len());

    // Prop scatter draws from its own seed-derived stream so mesh-side
    // changes never shift placements.
    let mut rng = StdRng::seed_from_u64((seed as u64) << 16);
    let mut props = scatter_trees(&grid, config.props.tree_count, &mut rng);
    props.extend(scatter_yurts(&grid, config.props.yurt_count, &mut rng));
    info!("Placed {} props", props.len());

    TerrainWorld {
        seed,
        grid,
        meshes,
        props,
    }
}

/// Save a generated world to a cache file.
///
/// JSON when the path ends in `.json`, msgpack otherwise.
pub fn save_world_cache(path: &Path, world: &TerrainWorld) -> Result<(), TerrainError> {
    let bytes = if path.extension().is_some_and(|e| e == "json") {
        serde_json::to_vec(world)?
    } else {
        rmp_serde::to_vec(world)?
    };
    fs::write(path, bytes)?;
    info!("Saved world cache to {}", path.display());
    Ok(())
}

/// Load a world back from a cache file, sniffing JSON by its leading brace.
pub fn load_world_cache(path: &Path) -> Result<TerrainWorld, TerrainError> {
    let bytes = fs::read(path)?;
    let world = if bytes.first() == Some(&b'{') {
        serde_json::from_slice(&bytes)?
    } else {
        rmp_serde::from_slice(&bytes)?
    };
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> WorldConfig {
        let mut config = WorldConfig::default();
        config.terrain.block_density = 16;
        config.props.tree_count = 10;
        config.props.yurt_count = 3;
        config
    }

    #[test]
    fn test_world_generation_is_seed_deterministic() {
        let config = small_config();

        let a = generate_world(&config, 2024);
        let b = generate_world(&config, 2024);

        assert_eq!(a.grid.variants(), b.grid.variants());
        assert_eq!(a.props.len(), b.props.len());
        for (p, q) in a.props.iter().zip(&b.props) {
            assert_eq!((p.x, p.y, p.z), (q.x, q.y, q.z));
        }
    }

    #[test]
    fn test_world_counts() {
        let config = small_config();
        let world = generate_world(&config, 7);

        assert_eq!(world.grid.tiles().len(), 16);
        assert_eq!(world.props.len(), 13);
        assert_eq!(world.meshes.normal.vertices.len(), 16 * 16);
    }

    #[test]
    fn test_meshes_match_variant_fields() {
        let config = small_config();
        let world = generate_world(&config, 99);
        let d = world.grid.density();

        for tile in world.grid.tiles() {
            let mesh = world.meshes.mesh(tile.variant);
            let field = world.grid.tile_field(tile);
            assert_eq!(mesh.vertices[0].y, field.get(0, 0) as f32);
            assert_eq!(
                mesh.vertices[d * d - 1].y,
                field.get(d - 1, d - 1) as f32
            );
        }
    }
}
