use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::Parser;
use log::info;

use gallery_app::autoaim::AutoAim;
use gallery_app::game_loop::{spawn_game_loop, TICK_DURATION};
use gallery_app::init_logging;
use gallery_core::commands::PlayerCommand;
use gallery_sim::engine::GalleryConfig;

/// Headless shooting-gallery session with scripted controllers
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Session length in seconds
    #[arg(long, default_value_t = 20.0)]
    seconds: f64,

    /// Delay between scripted shots
    #[arg(long, default_value_t = 400)]
    fire_interval_ms: u64,

    /// Maximum aim error per axis in meters
    #[arg(long, default_value_t = 0.15)]
    jitter: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> anyhow::Result<GalleryConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GalleryConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if !(args.seconds.is_finite() && args.seconds > 0.0) {
        bail!("--seconds must be positive, got {}", args.seconds);
    }

    let config = load_config(&args)?;
    let mut aim = AutoAim::new(config.seed ^ 0x5eed, args.jitter);
    let handle = spawn_game_loop(config)?;

    handle.send(PlayerCommand::StartSession);
    let session = Duration::from_secs_f64(args.seconds);
    let fire_interval = Duration::from_millis(args.fire_interval_ms.max(1));
    let started = Instant::now();

    while started.elapsed() < session {
        std::thread::sleep(fire_interval);
        let Some(snapshot) = handle.snapshot() else {
            continue;
        };
        if let Some(shot) = aim.next_shot(&snapshot) {
            handle.send(shot);
            handle.send(PlayerCommand::TriggerRelease {
                controller: aim.last_controller(),
            });
        }
    }

    let summary = handle.snapshot().map(|s| s.score).unwrap_or_default();
    handle.send(PlayerCommand::EndSession);
    // Let the loop process the teardown before stopping it.
    std::thread::sleep(TICK_DURATION * 3);
    if handle.shutdown().is_err() {
        bail!("game loop thread panicked");
    }

    info!(
        "session over: score {}, {} shots, {} hits, {} misses",
        summary.score, summary.shots_fired, summary.hits, summary.misses
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
