#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a scripted bedside scenario.
//!
//! A player places a bed on a small stone floor, tries to sleep in it and, if
//! that succeeds, gets up the next morning. World settings come from an
//! optional TOML file and can be overridden with flags.

mod scenario;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use bedstead_core::{Biome, Event};
use bedstead_world::WorldConfig;
use clap::Parser;
use serde::{de::IntoDeserializer, Deserialize};

use crate::scenario::{Scenario, ScenarioOptions};

/// Runs the bedside scenario and prints what happened.
#[derive(Debug, Parser)]
#[command(name = "bedstead", version, about)]
struct Cli {
    /// TOML file with a `[world]` table.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Absolute world time to start at.
    #[arg(long)]
    time: Option<u64>,

    /// Start with a thunderstorm.
    #[arg(long)]
    thunder: bool,

    /// Biome of every column, e.g. `Plains` or `NetherWastes`.
    #[arg(long, value_parser = parse_biome)]
    biome: Option<Biome>,

    /// Yaw of the player placing the bed, in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    yaw: f32,

    /// Number of mobs scattered around the bed.
    #[arg(long, default_value_t = 0)]
    mobs: u32,

    /// Seed used to scatter mobs.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print events as JSON lines instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    world: WorldConfig,
}

fn parse_biome(name: &str) -> Result<Biome, String> {
    Biome::deserialize(name.into_deserializer())
        .map_err(|error: serde::de::value::Error| error.to_string())
}

fn load_config(path: &Path) -> Result<WorldConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    let file: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config toml at {}", path.display()))?;
    Ok(file.world)
}

fn world_config(cli: &Cli) -> Result<WorldConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WorldConfig::default(),
    };
    if let Some(time) = cli.time {
        config.start_time = time;
    }
    if cli.thunder {
        config.thundering = true;
    }
    if let Some(biome) = cli.biome {
        config.default_biome = biome;
    }
    Ok(config)
}

fn describe(event: &Event) -> Option<String> {
    let line = match event {
        Event::BlockChanged { pos, old, new } if new.material != old.material => {
            format!("{:?} -> {:?} at {pos:?}", old.material, new.material)
        }
        Event::NoticeSent { player, notice } => {
            format!("player {} told {}", player.get(), notice.key())
        }
        Event::ExplosionTriggered { center, power, .. } => {
            format!("explosion of power {power} at {center:?}")
        }
        Event::PlayerEnteredBed { player, head } => {
            format!("player {} sleeps at {head:?}", player.get())
        }
        Event::PlayerLeftBed { player, location } => format!(
            "player {} got up at ({:.1}, {:.1}, {:.1})",
            player.get(),
            location.x,
            location.y,
            location.z
        ),
        Event::EntitySpawned { entity, kind } => {
            format!("{kind:?} {} spawned", entity.get())
        }
        _ => return None,
    };
    Some(line)
}

/// Entry point for the Bedstead command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let cli = Cli::parse();
    let config = world_config(&cli)?;
    log::debug!("running scenario with {config:?}");

    let report = Scenario::new(&config).run(ScenarioOptions {
        yaw: cli.yaw,
        mobs: cli.mobs,
        seed: cli.seed,
    })?;

    for event in &report.events {
        if cli.json {
            let line = serde_json::to_string(event).context("failed to serialize event")?;
            println!("{line}");
        } else if let Some(line) = describe(event) {
            println!("{line}");
        }
    }
    log::info!(
        "{} events, {} sound announcements ({} bytes)",
        report.events.len(),
        report.sounds,
        report.sound_bytes.len()
    );
    Ok(())
}
