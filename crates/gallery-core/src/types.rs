//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::PoseError;

/// 3D position in play-area space (meters, Cartesian).
/// x = right, y = up (height above the floor), z = toward the player.
/// The play area is the x/z plane centered on the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Velocity on the floor plane (m/s). Targets never move vertically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanarVelocity {
    pub x: f64,
    pub z: f64,
}

/// Pose of a tracked input device as reported by the host each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerPose {
    /// World position of the device (the muzzle).
    pub position: DVec3,
    /// Forward (aim) direction. Need not be normalized.
    pub forward: DVec3,
}

/// A half-line used for aim tests. `direction` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed session time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance on the floor plane (ignoring height).
    pub fn planar_range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Move a fraction `t` of the way toward `target`.
    pub fn lerp_toward(&mut self, target: &Position, t: f64) {
        self.x += (target.x - self.x) * t;
        self.y += (target.y - self.y) * t;
        self.z += (target.z - self.z) * t;
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl PlanarVelocity {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Velocity of magnitude `speed` pointing at `heading` radians
    /// (0 = +x, counter-clockwise toward +z).
    pub fn from_heading(speed: f64, heading: f64) -> Self {
        Self {
            x: speed * heading.cos(),
            z: speed * heading.sin(),
        }
    }
}

impl ControllerPose {
    pub fn new(position: DVec3, forward: DVec3) -> Self {
        Self { position, forward }
    }

    /// Pose aimed from `position` straight at `target`.
    pub fn aimed_at(position: DVec3, target: DVec3) -> Self {
        Self::new(position, target - position)
    }
}

impl Ray {
    /// Build a ray, rejecting non-finite or zero-length input.
    pub fn new(origin: DVec3, direction: DVec3) -> Result<Self, PoseError> {
        if !origin.is_finite() {
            return Err(PoseError::NonFiniteOrigin);
        }
        if !direction.is_finite() {
            return Err(PoseError::NonFiniteDirection);
        }
        let direction = direction
            .try_normalize()
            .ok_or(PoseError::DegenerateDirection)?;
        Ok(Self { origin, direction })
    }

    pub fn from_pose(pose: &ControllerPose) -> Result<Self, PoseError> {
        Self::new(pose.position, pose.forward)
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Shortest distance from `point` to the ray.
    ///
    /// Points behind the origin measure to the origin itself, so a target
    /// behind the shooter is never closer than its straight-line distance.
    pub fn distance_to_point(&self, point: DVec3) -> f64 {
        let t = (point - self.origin).dot(self.direction);
        if t < 0.0 {
            point.distance(self.origin)
        } else {
            point.distance(self.at(t))
        }
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
