//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). Matches a typical headset refresh.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play area ---

/// Half-width of the square play area on the floor plane (meters).
/// Targets reflect off |x| = BOUNDARY and |z| = BOUNDARY.
pub const BOUNDARY: f64 = 4.5;

// --- Population ---

/// Maximum number of simultaneously active targets.
pub const TARGET_CAPACITY: usize = 10;

/// Targets placed when a session starts.
pub const INITIAL_TARGETS: usize = 5;

/// Interval between periodic spawn attempts (ticks). 3 seconds at 60Hz.
pub const SPAWN_INTERVAL_TICKS: u64 = 180;

/// Delay between a kill and its replacement spawn (ticks). 1 second.
pub const RESPAWN_DELAY_TICKS: u64 = 60;

/// Period of the movement timer (ticks).
pub const MOVEMENT_INTERVAL_TICKS: u64 = 1;

// --- Motion ---

/// Lower bound of the base target speed (m/s), before the kind multiplier.
pub const BASE_SPEED_MIN: f64 = 0.3;

/// Upper bound (exclusive) of the base target speed (m/s).
pub const BASE_SPEED_MAX: f64 = 0.9;

// --- Hit detection ---

/// A target is hit when the ray passes within radius * this factor.
pub const HIT_TOLERANCE: f64 = 1.2;

// --- Controllers ---

/// Number of tracked input devices (left and right hand).
pub const CONTROLLER_COUNT: u8 = 2;

/// Muzzle flash duration (ticks). ~100 ms.
pub const MUZZLE_FLASH_TICKS: u64 = 6;

/// Damage flash duration on a surviving target (ticks). ~200 ms.
pub const DAMAGE_FLASH_TICKS: u64 = 12;
