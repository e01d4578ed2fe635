//! Running score tracked by the engine.

use gallery_core::enums::TargetKind;

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    pub shots_fired: u32,
    pub hits: u32,
    pub misses: u32,
    pub destroyed_small: u32,
    pub destroyed_medium: u32,
    pub destroyed_large: u32,
}

impl ScoreState {
    /// Credit a kill.
    pub fn record_destroyed(&mut self, kind: TargetKind) {
        self.score += kind.params().points;
        match kind {
            TargetKind::Small => self.destroyed_small += 1,
            TargetKind::Medium => self.destroyed_medium += 1,
            TargetKind::Large => self.destroyed_large += 1,
        }
    }

    pub fn destroyed_total(&self) -> u32 {
        self.destroyed_small + self.destroyed_medium + self.destroyed_large
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
