use clap::Parser;
use rand::Rng;
use std::path::PathBuf;
use steppe_terrain::config::WorldConfig;
use steppe_terrain::props::PropKind;
use steppe_terrain::terrain::{generate_world, save_world_cache};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to world.toml configuration file
    #[arg(short, long, default_value = "./world.toml")]
    config: String,

    /// Generation seed; a random one is drawn when omitted
    #[arg(short, long)]
    seed: Option<u32>,

    /// Write the generated world to a cache file (.json or msgpack)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override log level (trace|debug|info|warn|error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = args.log_level.as_deref().unwrap_or("info");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    info!("Starting Steppe terrain generator v0.1.0");

    // Load configuration
    let config = WorldConfig::load_or_default(&args.config);
    info!("Configuration loaded from: {}", args.config);
    info!(
        "Tile: {} units, {} samples per side, {} octaves",
        config.terrain.block_size, config.terrain.block_density, config.terrain.octave_count
    );

    // Each session gets a fresh seed unless one was pinned on the CLI
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Session seed: {}", seed);

    let world = generate_world(&config, seed);

    let heights = world.grid.variants().normal.as_slice();
    let min = heights.iter().min().copied().unwrap_or(0);
    let max = heights.iter().max().copied().unwrap_or(0);
    let trees = world.props.iter().filter(|p| p.kind == PropKind::Tree).count();
    let yurts = world.props.len() - trees;

    info!(
        "World ready: 16 tiles, height range {}..{}, {} trees, {} yurts",
        min, max, trees, yurts
    );

    if let Some(path) = &args.output {
        save_world_cache(path, &world)?;
    }

    Ok(())
}
