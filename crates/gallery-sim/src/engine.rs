//! Simulation engine: the single owner of all gallery state.
//!
//! `SimulationEngine` owns the hecs world of targets, the scheduler, the
//! controllers and the score. Hosts either queue `PlayerCommand`s and call
//! `tick()` once per frame, or call the session and input methods directly.
//! Completely headless, enabling deterministic testing.

use std::collections::{HashMap, VecDeque};

use glam::DVec3;
use hecs::World;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use gallery_core::commands::PlayerCommand;
use gallery_core::components::{ControllerState, TargetId};
use gallery_core::constants::*;
use gallery_core::enums::SessionPhase;
use gallery_core::error::{ConfigError, PoseError};
use gallery_core::events::GalleryEvent;
use gallery_core::kinds::total_spawn_weight;
use gallery_core::state::GameStateSnapshot;
use gallery_core::types::{ControllerPose, Ray, SimTime};

use crate::scheduler::{Scheduler, TimerHandle, TimerKind};
use crate::score::ScoreState;
use crate::systems;
use crate::systems::hit_resolver::HitOutcome;
use crate::world_setup;

const CONTROLLERS: usize = CONTROLLER_COUNT as usize;

/// Configuration for a simulation. Every field has a default, so a JSON
/// config file only needs the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Maximum simultaneously active targets.
    pub capacity: usize,
    /// Targets placed when a session starts.
    pub initial_targets: usize,
    pub spawn_interval_ticks: u64,
    pub respawn_delay_ticks: u64,
    pub movement_interval_ticks: u64,
    /// Half-width of the square play area (meters).
    pub boundary: f64,
    /// Hit radius multiplier applied to each kind's radius.
    pub hit_tolerance: f64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            capacity: TARGET_CAPACITY,
            initial_targets: INITIAL_TARGETS,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            respawn_delay_ticks: RESPAWN_DELAY_TICKS,
            movement_interval_ticks: MOVEMENT_INTERVAL_TICKS,
            boundary: BOUNDARY,
            hit_tolerance: HIT_TOLERANCE,
        }
    }
}

impl GalleryConfig {
    /// Reject configurations that would break population or motion
    /// invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.initial_targets > self.capacity {
            return Err(ConfigError::InitialAboveCapacity {
                initial: self.initial_targets,
                capacity: self.capacity,
            });
        }
        for (name, value) in [
            ("spawn_interval_ticks", self.spawn_interval_ticks),
            ("respawn_delay_ticks", self.respawn_delay_ticks),
            ("movement_interval_ticks", self.movement_interval_ticks),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroInterval { name });
            }
        }
        for (name, value) in [
            ("boundary", self.boundary),
            ("hit_tolerance", self.hit_tolerance),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        let total = total_spawn_weight();
        if (total - 1.0).abs() > 1e-9 {
            return Err(ConfigError::SpawnWeights(total));
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SessionPhase,
    config: GalleryConfig,
    rng: ChaCha8Rng,
    next_target_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GalleryEvent>,
    scheduler: Scheduler,
    controllers: [ControllerState; CONTROLLERS],
    muzzle_timers: [Option<TimerHandle>; CONTROLLERS],
    damage_timers: HashMap<TargetId, TimerHandle>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new engine after validating the config.
    pub fn new(config: GalleryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SessionPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            next_target_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            scheduler: Scheduler::new(),
            controllers: [ControllerState::default(); CONTROLLERS],
            muzzle_timers: [None; CONTROLLERS],
            damage_timers: HashMap::new(),
            score: ScoreState::default(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Queued commands are applied first. Timers only run, and time only
    /// advances, while a session is active.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == SessionPhase::Active {
            self.run_timers();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.controllers,
            events,
            &self.score,
        )
    }

    // --- Population ---

    /// Spawn one random target if below capacity.
    pub fn spawn(&mut self) -> Option<TargetId> {
        systems::population::spawn(
            &mut self.world,
            &mut self.rng,
            &mut self.next_target_id,
            self.config.capacity,
            self.config.boundary,
            &mut self.events,
        )
    }

    /// Periodic spawn hook: spawns only while below capacity.
    pub fn tick_spawn(&mut self) -> Option<TargetId> {
        systems::population::tick_spawn(
            &mut self.world,
            &mut self.rng,
            &mut self.next_target_id,
            self.config.capacity,
            self.config.boundary,
            &mut self.events,
        )
    }

    /// Remove a target. Returns false if it is not active.
    pub fn remove(&mut self, id: TargetId) -> bool {
        let removed = systems::population::remove(&mut self.world, id);
        if removed {
            if let Some(handle) = self.damage_timers.remove(&id) {
                self.scheduler.cancel(handle);
            }
        }
        removed
    }

    // --- Hit resolution ---

    /// Resolve a shot along the ray `origin + t * direction`. The shot
    /// counts toward `shots_fired` like a trigger press.
    pub fn resolve_hit(
        &mut self,
        origin: DVec3,
        direction: DVec3,
    ) -> Result<HitOutcome, PoseError> {
        let ray = Ray::new(origin, direction)?;
        self.score.shots_fired += 1;
        Ok(self.resolve_ray(&ray, None))
    }

    /// Fire from a controller at its current pose.
    ///
    /// Rejects unknown controllers and degenerate poses without changing
    /// any state.
    pub fn trigger_press(
        &mut self,
        controller: u8,
        pose: &ControllerPose,
    ) -> Result<HitOutcome, PoseError> {
        let idx = controller as usize;
        if idx >= CONTROLLERS {
            return Err(PoseError::UnknownController(controller));
        }
        let ray = Ray::from_pose(pose)?;

        let state = &mut self.controllers[idx];
        state.trigger_held = true;
        state.muzzle_flash = true;
        state.shots_fired += 1;
        self.score.shots_fired += 1;

        if let Some(previous) = self.muzzle_timers[idx].take() {
            self.scheduler.cancel(previous);
        }
        self.muzzle_timers[idx] = Some(self.scheduler.schedule_once(
            TimerKind::MuzzleFlashOff { controller },
            MUZZLE_FLASH_TICKS,
            self.time.tick,
        ));
        self.events.push(GalleryEvent::ShotFired { controller });

        Ok(self.resolve_ray(&ray, Some(controller)))
    }

    /// Release a controller's trigger. Unknown controllers are ignored.
    pub fn trigger_release(&mut self, controller: u8) {
        if let Some(state) = self.controllers.get_mut(controller as usize) {
            state.trigger_held = false;
        }
    }

    fn resolve_ray(&mut self, ray: &Ray, controller: Option<u8>) -> HitOutcome {
        let outcome = systems::hit_resolver::run(
            &mut self.world,
            ray,
            self.config.hit_tolerance,
            &mut self.score,
            &mut self.events,
        );

        match outcome {
            HitOutcome::Miss => {
                debug!("shot from {controller:?} missed");
                self.events.push(GalleryEvent::HitMissed { controller });
            }
            HitOutcome::Damaged { target, .. } => {
                systems::feedback::set_damage_flash(&mut self.world, target, true);
                let handle = self.scheduler.schedule_once(
                    TimerKind::DamageFlashOff { target },
                    DAMAGE_FLASH_TICKS,
                    self.time.tick,
                );
                if let Some(previous) = self.damage_timers.insert(target, handle) {
                    self.scheduler.cancel(previous);
                }
            }
            HitOutcome::Destroyed { target, .. } => {
                if let Some(handle) = self.damage_timers.remove(&target) {
                    self.scheduler.cancel(handle);
                }
                self.scheduler.schedule_once(
                    TimerKind::Respawn,
                    self.config.respawn_delay_ticks,
                    self.time.tick,
                );
            }
        }
        outcome
    }

    // --- Session lifecycle ---

    /// Begin a session: reset the clock, place the initial targets and
    /// arm the periodic spawn and movement timers. Returns false if a
    /// session is already active.
    pub fn on_session_start(&mut self) -> bool {
        if self.phase == SessionPhase::Active {
            debug!("session start ignored: already active");
            return false;
        }

        self.phase = SessionPhase::Active;
        self.time = SimTime::default();
        for _ in 0..self.config.initial_targets {
            self.spawn();
        }
        self.scheduler.schedule_every(
            TimerKind::SpawnTick,
            self.config.spawn_interval_ticks,
            self.time.tick,
        );
        self.scheduler.schedule_every(
            TimerKind::MovementTick,
            self.config.movement_interval_ticks,
            self.time.tick,
        );
        self.events.push(GalleryEvent::SessionStarted);

        info!(
            "session started with {} targets (capacity {})",
            self.target_count(),
            self.config.capacity
        );
        true
    }

    /// End the session: remove every target, cancel every pending timer,
    /// reset controllers and zero the score.
    pub fn on_session_end(&mut self) {
        let final_score = self.score.score;
        let destroyed = self.score.destroyed_total();
        let removed = systems::population::clear(&mut self.world, &mut self.despawn_buffer);
        let cancelled = self.scheduler.pending();
        self.scheduler.cancel_all();
        self.muzzle_timers = [None; CONTROLLERS];
        self.damage_timers.clear();
        self.controllers = [ControllerState::default(); CONTROLLERS];
        self.score.reset();
        self.phase = SessionPhase::Idle;
        self.events.push(GalleryEvent::SessionEnded { final_score });

        info!(
            "session ended: final score {final_score}, {destroyed} destroyed, removed {removed} targets, cancelled {cancelled} timers"
        );
    }

    // --- Accessors ---

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn target_count(&self) -> usize {
        world_setup::target_count(&self.world)
    }

    /// Number of pending scheduled effects (periodic and deferred).
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn controller(&self, controller: u8) -> Option<&ControllerState> {
        self.controllers.get(controller as usize)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a stationary target at a fixed floor position (for tests).
    #[cfg(test)]
    pub fn spawn_target_at(
        &mut self,
        kind: gallery_core::enums::TargetKind,
        x: f64,
        z: f64,
    ) -> TargetId {
        let id = TargetId(self.next_target_id);
        self.next_target_id += 1;
        world_setup::spawn_target(
            &mut self.world,
            id,
            kind,
            x,
            z,
            gallery_core::types::PlanarVelocity::default(),
        );
        id
    }

    #[cfg(test)]
    pub fn score_mut(&mut self) -> &mut ScoreState {
        &mut self.score
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                self.on_session_start();
            }
            PlayerCommand::EndSession => {
                if self.phase == SessionPhase::Active {
                    self.on_session_end();
                }
            }
            PlayerCommand::TriggerPress { controller, pose } => {
                if self.phase != SessionPhase::Active {
                    debug!("trigger on controller {controller} ignored outside a session");
                    return;
                }
                if let Err(err) = self.trigger_press(controller, &pose) {
                    warn!("rejected trigger press on controller {controller}: {err}");
                }
            }
            PlayerCommand::TriggerRelease { controller } => {
                self.trigger_release(controller);
            }
        }
    }

    /// Fire every due timer in deadline order.
    fn run_timers(&mut self) {
        for kind in self.scheduler.drain_due(self.time.tick) {
            match kind {
                TimerKind::SpawnTick => {
                    self.tick_spawn();
                }
                TimerKind::MovementTick => {
                    let step_secs = DT * self.config.movement_interval_ticks as f64;
                    systems::movement::run(&mut self.world, self.config.boundary, step_secs);
                }
                TimerKind::Respawn => {
                    self.spawn();
                }
                TimerKind::MuzzleFlashOff { controller } => {
                    let idx = controller as usize;
                    if let Some(state) = self.controllers.get_mut(idx) {
                        state.muzzle_flash = false;
                    }
                    if let Some(slot) = self.muzzle_timers.get_mut(idx) {
                        *slot = None;
                    }
                }
                TimerKind::DamageFlashOff { target } => {
                    self.damage_timers.remove(&target);
                    systems::feedback::set_damage_flash(&mut self.world, target, false);
                }
            }
        }
    }
}
