//! undercroft
//!
//! Generates one dungeon floor and prints it as ASCII, north at the top.

mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uc_core::{DungeonGenerator, GenerationConfig, PlacementStrategy};

/// Procedural dungeon floor generator
#[derive(Parser, Debug)]
#[command(name = "undercroft")]
#[command(author, version, about = "Generate a dungeon floor and print it", long_about = None)]
struct Args {
    /// JSON file with generation parameters; flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Grid width in tiles
    #[arg(long)]
    width: Option<i32>,

    /// Grid height in tiles
    #[arg(long)]
    height: Option<i32>,

    /// Number of room slots
    #[arg(short = 'n', long = "rooms")]
    rooms: Option<usize>,

    /// Smallest room side, walls included
    #[arg(long = "min-size")]
    min_size: Option<i32>,

    /// Largest room side, walls included
    #[arg(long = "max-size")]
    max_size: Option<i32>,

    /// Placement strategy (scatter or compact)
    #[arg(short = 's', long = "strategy")]
    strategy: Option<PlacementStrategy>,

    /// Random attempts per room slot
    #[arg(long = "attempts")]
    attempts: Option<usize>,

    /// Fixed seed for a reproducible floor
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Print tile counts after the map
    #[arg(long = "stats")]
    stats: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Start from the JSON file (or defaults) and apply flag overrides
    fn to_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => GenerationConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(rooms) = self.rooms {
            config.room_count = rooms;
        }
        if let Some(min) = self.min_size {
            config.min_room_size = min;
        }
        if let Some(max) = self.max_size {
            config.max_room_size = max;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(attempts) = self.attempts {
            config.attempts_per_room = attempts;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.to_config()?;
    let generator = DungeonGenerator::new(config).context("invalid generation parameters")?;
    let mut rng = generator.rng();
    tracing::debug!(seed = rng.seed(), "generating");

    let dungeon = generator.generate(&mut rng)?;
    print!("{}", render::render(&dungeon));
    if args.stats {
        eprintln!("seed: {}", rng.seed());
        eprint!("{}", render::stats(&dungeon));
    }
    Ok(())
}
