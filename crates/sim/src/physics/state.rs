use std::f32::consts::PI;

use glam::Vec2;

/// Uncompressed size of a [`PendulumState`] on the wire.
pub const STATE_BYTES: usize = 16;

/// Masses, rod lengths, and gravity. Static configuration; never
/// negotiated at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub m1: f32,
    pub m2: f32,
    pub l1: f32,
    pub l2: f32,
    pub g: f32,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            m1: 1.0,
            m2: 1.0,
            l1: 1.0,
            l2: 1.0,
            g: 9.81,
        }
    }
}

/// Full simulation state of the double pendulum, and also the entire wire
/// payload: angles in radians, angular velocities in radians/second.
///
/// Binary layout is fixed at 16 bytes, little-endian IEEE-754, in field
/// order `theta1, omega1, theta2, omega2`. Angles are never wrapped to
/// `[-pi, pi]`; they grow unbounded and every consumer goes through
/// `sin`/`cos`, which are exact for any magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    pub theta1: f32,
    pub omega1: f32,
    pub theta2: f32,
    pub omega2: f32,
}

impl PendulumState {
    pub fn new(theta1: f32, omega1: f32, theta2: f32, omega2: f32) -> Self {
        Self {
            theta1,
            omega1,
            theta2,
            omega2,
        }
    }

    /// Reference initial condition: both rods pointing up, the second
    /// offset by one radian, at rest.
    pub fn inverted() -> Self {
        Self::new(PI, 0.0, PI + 1.0, 0.0)
    }

    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut bytes = [0u8; STATE_BYTES];
        bytes[0..4].copy_from_slice(&self.theta1.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.omega1.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.theta2.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.omega2.to_le_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8; STATE_BYTES]) -> Self {
        Self {
            theta1: f32::from_le_bytes(bytes[0..4].try_into().unwrap()),
            omega1: f32::from_le_bytes(bytes[4..8].try_into().unwrap()),
            theta2: f32::from_le_bytes(bytes[8..12].try_into().unwrap()),
            omega2: f32::from_le_bytes(bytes[12..16].try_into().unwrap()),
        }
    }

    /// Cartesian position of the first bob, origin at the pivot, y up.
    pub fn bob1(&self, constants: &PhysicalConstants) -> Vec2 {
        Vec2::new(
            constants.l1 * self.theta1.sin(),
            -constants.l1 * self.theta1.cos(),
        )
    }

    /// Cartesian position of the second bob.
    pub fn bob2(&self, constants: &PhysicalConstants) -> Vec2 {
        self.bob1(constants)
            + Vec2::new(
                constants.l2 * self.theta2.sin(),
                -constants.l2 * self.theta2.cos(),
            )
    }
}
