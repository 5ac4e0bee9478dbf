use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub terrain: TerrainSettings,
    pub props: PropSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainSettings {
    /// World-space side length of one tile
    pub block_size: f32,
    /// Height samples per tile side
    pub block_density: usize,
    /// Amplitude scaling applied to every noise octave
    pub height_multiplier: f64,
    /// Number of accumulated noise octaves
    pub octave_count: u32,
    /// Per-octave frequency/amplitude step
    pub quality_step: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropSettings {
    pub tree_count: usize,
    pub yurt_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            terrain: TerrainSettings {
                block_size: 1000.0,
                block_density: 64,
                height_multiplier: 1.0,
                octave_count: 4,
                quality_step: 5.0,
            },
            props: PropSettings {
                tree_count: 50,
                yurt_count: 12,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
            },
        }
    }
}

impl WorldConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: WorldConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {}, using defaults", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.terrain.block_size, 1000.0);
        assert_eq!(config.terrain.block_density, 64);
        assert_eq!(config.terrain.octave_count, 4);
        assert_eq!(config.props.tree_count, 50);
    }

    #[test]
    fn test_config_serialization() {
        let config = WorldConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("block_size"));
        assert!(toml_str.contains("tree_count"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml_str = toml::to_string(&WorldConfig::default()).unwrap();
        file.write_all(toml_str.as_bytes()).unwrap();

        let loaded = WorldConfig::load(file.path()).unwrap();
        assert_eq!(loaded.terrain.block_density, 64);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = WorldConfig::load_or_default("./does-not-exist.toml");
        assert_eq!(config.terrain.block_size, 1000.0);
    }
}
