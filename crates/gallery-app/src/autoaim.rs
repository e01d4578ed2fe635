//! Scripted controller driver used by the headless demo.
//!
//! Stands in for a player: alternates hands, aims at the nearest live
//! target with some random error, and emits trigger commands.

use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gallery_core::commands::PlayerCommand;
use gallery_core::constants::CONTROLLER_COUNT;
use gallery_core::state::{GameStateSnapshot, TargetView};
use gallery_core::types::ControllerPose;

/// Resting hand positions of a player standing at the center of the
/// play area (left, right).
pub const HAND_POSITIONS: [DVec3; CONTROLLER_COUNT as usize] =
    [DVec3::new(-0.2, 1.4, 0.0), DVec3::new(0.2, 1.4, 0.0)];

pub struct AutoAim {
    rng: ChaCha8Rng,
    /// Maximum aim error per axis (meters).
    jitter: f64,
    next_controller: u8,
}

impl AutoAim {
    pub fn new(seed: u64, jitter: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            jitter: jitter.abs(),
            next_controller: 0,
        }
    }

    /// Build a trigger press for the next hand, or `None` if there is
    /// nothing to shoot at.
    pub fn next_shot(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        let controller = self.next_controller;
        let hand = HAND_POSITIONS[controller as usize];
        let target = nearest_target(&snapshot.targets, hand)?;

        let mut aim = target.position.to_dvec3();
        if self.jitter > 0.0 {
            aim += DVec3::new(
                self.rng.gen_range(-self.jitter..=self.jitter),
                self.rng.gen_range(-self.jitter..=self.jitter),
                self.rng.gen_range(-self.jitter..=self.jitter),
            );
        }

        self.next_controller = (controller + 1) % CONTROLLER_COUNT;
        Some(PlayerCommand::TriggerPress {
            controller,
            pose: ControllerPose::aimed_at(hand, aim),
        })
    }

    /// The hand that fired last, for pairing with a release.
    pub fn last_controller(&self) -> u8 {
        (self.next_controller + CONTROLLER_COUNT - 1) % CONTROLLER_COUNT
    }
}

/// Target whose center is closest to `from`.
fn nearest_target(targets: &[TargetView], from: DVec3) -> Option<&TargetView> {
    targets.iter().min_by(|a, b| {
        let da = a.position.to_dvec3().distance_squared(from);
        let db = b.position.to_dvec3().distance_squared(from);
        da.total_cmp(&db)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::enums::SessionPhase;
    use gallery_sim::engine::{GalleryConfig, SimulationEngine};

    fn active_engine() -> SimulationEngine {
        let mut engine = SimulationEngine::new(GalleryConfig {
            seed: 21,
            ..Default::default()
        })
        .unwrap();
        engine.queue_command(PlayerCommand::StartSession);
        engine
    }

    #[test]
    fn test_no_targets_no_shot() {
        let mut aim = AutoAim::new(1, 0.0);
        assert!(aim.next_shot(&GameStateSnapshot::default()).is_none());
    }

    #[test]
    fn test_alternates_hands() {
        let mut engine = active_engine();
        let snap = engine.tick();
        let mut aim = AutoAim::new(1, 0.0);

        let first = aim.next_shot(&snap).unwrap();
        assert_eq!(aim.last_controller(), 0);
        let second = aim.next_shot(&snap).unwrap();
        assert_eq!(aim.last_controller(), 1);

        assert!(matches!(first, PlayerCommand::TriggerPress { controller: 0, .. }));
        assert!(matches!(second, PlayerCommand::TriggerPress { controller: 1, .. }));
    }

    #[test]
    fn test_perfect_aim_scores() {
        let mut engine = active_engine();
        let mut aim = AutoAim::new(1, 0.0);
        let mut snap = engine.tick();
        assert_eq!(snap.phase, SessionPhase::Active);

        for _ in 0..30 {
            if let Some(shot) = aim.next_shot(&snap) {
                engine.queue_command(shot);
            }
            snap = engine.tick();
        }

        assert!(snap.score.hits > 0);
        assert!(snap.score.score > 0);
    }
}
