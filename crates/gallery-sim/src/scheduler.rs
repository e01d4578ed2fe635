//! Tick-based timers for periodic systems and deferred effects.
//!
//! Every pending effect is an explicit entry with a handle, so a session
//! teardown can cancel all of them at once instead of leaving stale
//! callbacks behind.

use serde::{Deserialize, Serialize};

use gallery_core::components::TargetId;

/// What to do when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Periodic spawn attempt.
    SpawnTick,
    /// Periodic movement integration.
    MovementTick,
    /// Replacement spawn after a kill.
    Respawn,
    /// Hide a controller's muzzle flash.
    MuzzleFlashOff { controller: u8 },
    /// Clear a damaged target's flash.
    DamageFlashOff { target: TargetId },
}

/// Cancellation handle returned when scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct TimerEntry {
    handle: TimerHandle,
    kind: TimerKind,
    fire_at_tick: u64,
    /// `Some` for repeating timers.
    period: Option<u64>,
}

/// Pending timers, fired in (fire tick, handle) order.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    entries: Vec<TimerEntry>,
    next_handle: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `kind` once, `delay_ticks` after `now`. Deadlines past the
    /// end of the tick range saturate and never fire.
    pub fn schedule_once(&mut self, kind: TimerKind, delay_ticks: u64, now: u64) -> TimerHandle {
        self.push(kind, now.saturating_add(delay_ticks), None)
    }

    /// Fire `kind` every `period_ticks`, first at `now + period_ticks`.
    /// A zero period is treated as one tick.
    pub fn schedule_every(&mut self, kind: TimerKind, period_ticks: u64, now: u64) -> TimerHandle {
        let period = period_ticks.max(1);
        self.push(kind, now.saturating_add(period), Some(period))
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Cancel everything.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Number of pending timers.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Remove and return every timer due at or before `now`. Repeating
    /// timers are re-armed one period after their scheduled tick.
    pub fn drain_due(&mut self, now: u64) -> Vec<TimerKind> {
        let mut due: Vec<TimerEntry> = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].fire_at_tick <= now {
                due.push(self.entries.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|e| (e.fire_at_tick, e.handle));

        let mut fired = Vec::with_capacity(due.len());
        for entry in due {
            fired.push(entry.kind);
            if let Some(period) = entry.period {
                // Catch up without firing more than once per drain.
                let mut next = entry.fire_at_tick.saturating_add(period);
                while next <= now && next != u64::MAX {
                    next = next.saturating_add(period);
                }
                self.entries.push(TimerEntry {
                    fire_at_tick: next,
                    ..entry
                });
            }
        }
        fired
    }

    fn push(&mut self, kind: TimerKind, fire_at_tick: u64, period: Option<u64>) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(TimerEntry {
            handle,
            kind,
            fire_at_tick,
            period,
        });
        handle
    }
}
