//! Per-kind tuning table.

use serde::{Deserialize, Serialize};

use crate::enums::TargetKind;

/// Static parameters of a target kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindParams {
    /// Sphere radius in meters. Also the resting height above the floor.
    pub radius: f64,
    /// Hits needed to destroy.
    pub max_health: u32,
    /// Score awarded on destruction.
    pub points: u32,
    /// Multiplier on the random base speed.
    pub speed_multiplier: f64,
    /// Probability of this kind in a spawn draw.
    pub spawn_weight: f64,
    /// Fraction of the remaining gap the displayed position closes per
    /// movement tick.
    pub lerp_factor: f64,
}

impl TargetKind {
    pub fn params(self) -> KindParams {
        match self {
            TargetKind::Small => KindParams {
                radius: 0.15,
                max_health: 1,
                points: 30,
                speed_multiplier: 2.0,
                spawn_weight: 0.2,
                lerp_factor: 0.20,
            },
            TargetKind::Medium => KindParams {
                radius: 0.25,
                max_health: 2,
                points: 10,
                speed_multiplier: 1.0,
                spawn_weight: 0.5,
                lerp_factor: 0.12,
            },
            TargetKind::Large => KindParams {
                radius: 0.40,
                max_health: 3,
                points: 5,
                speed_multiplier: 0.5,
                spawn_weight: 0.3,
                lerp_factor: 0.06,
            },
        }
    }

    /// Pick a kind from a uniform draw `u` in [0, 1) by walking the
    /// cumulative spawn weights in declared order.
    pub fn from_weighted_draw(u: f64) -> TargetKind {
        let mut cumulative = 0.0;
        for kind in TargetKind::ALL {
            cumulative += kind.params().spawn_weight;
            if u < cumulative {
                return kind;
            }
        }
        // Rounding in the cumulative sum can leave u just above the total.
        TargetKind::Large
    }
}

/// Sum of spawn weights over all kinds. Should be 1.
pub fn total_spawn_weight() -> f64 {
    TargetKind::ALL
        .iter()
        .map(|k| k.params().spawn_weight)
        .sum()
}
