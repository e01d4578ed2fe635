//! Game loop thread: runs the simulation engine at the tick rate and
//! publishes snapshots.
//!
//! Commands arrive via an `mpsc` channel. Each snapshot's events are
//! handed to the presentation hook (here, the log) and the snapshot is
//! stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Context;
use log::{debug, info};

use gallery_core::constants::TICK_RATE;
use gallery_core::events::GalleryEvent;
use gallery_core::state::GameStateSnapshot;
use gallery_sim::engine::{GalleryConfig, SimulationEngine};

use crate::state::{GameLoopCommand, LoopHandle};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Validate `config`, build the engine and start the loop thread.
pub fn spawn_game_loop(config: GalleryConfig) -> anyhow::Result<LoopHandle> {
    let engine = SimulationEngine::new(config).context("invalid gallery config")?;
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));

    let shared = Arc::clone(&latest_snapshot);
    let thread = std::thread::Builder::new()
        .name("gallery-game-loop".into())
        .spawn(move || run_game_loop(engine, command_rx, &shared))
        .context("failed to spawn game loop thread")?;

    Ok(LoopHandle {
        command_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(command)) => engine.queue_command(command),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Presentation cues
        for event in &snapshot.events {
            log_event(event);
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

fn log_event(event: &GalleryEvent) {
    match event {
        GalleryEvent::TargetDestroyed {
            target,
            kind,
            points,
            ..
        } => info!("{target} ({kind:?}) destroyed, +{points}"),
        GalleryEvent::TargetDamaged { target, remaining } => {
            debug!("{target} damaged, {remaining} hp left")
        }
        GalleryEvent::SessionEnded { final_score } => info!("final score {final_score}"),
        other => debug!("{other:?}"),
    }
}
