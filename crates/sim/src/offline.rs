use glam::Vec2;

use crate::physics::{self, PendulumState, PhysicalConstants};
use crate::trail::TrailBuffer;

/// Default trail capacity for the local variant: short history.
pub const OFFLINE_TRAIL_CAPACITY: usize = 500;

/// Local variant of the simulation: same integrator, no protocol. Every
/// tick always succeeds, so the trail extends once per tick.
pub struct OfflineSession {
    state: PendulumState,
    constants: PhysicalConstants,
    dt: f32,
    trail: TrailBuffer,
}

impl OfflineSession {
    pub fn new(
        initial: PendulumState,
        constants: PhysicalConstants,
        dt: f32,
        trail_capacity: usize,
    ) -> Self {
        Self {
            state: initial,
            constants,
            dt,
            trail: TrailBuffer::new(trail_capacity),
        }
    }

    pub fn tick(&mut self) {
        self.state = physics::step(&self.state, &self.constants, self.dt);
        self.trail.push(self.state.bob2(&self.constants));
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn bob_positions(&self) -> (Vec2, Vec2) {
        (self.state.bob1(&self.constants), self.state.bob2(&self.constants))
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::DEFAULT_DT;

    #[test]
    fn tick_matches_a_direct_step() {
        let constants = PhysicalConstants::default();
        let initial = PendulumState::inverted();
        let mut session =
            OfflineSession::new(initial, constants, DEFAULT_DT, OFFLINE_TRAIL_CAPACITY);

        session.tick();

        let expected = physics::step(&initial, &constants, DEFAULT_DT);
        assert_eq!(*session.state(), expected);
        assert_eq!(session.trail().len(), 1);
        assert_eq!(session.trail().latest(), Some(expected.bob2(&constants)));
    }

    #[test]
    fn trail_stays_bounded_over_long_runs() {
        let mut session = OfflineSession::new(
            PendulumState::inverted(),
            PhysicalConstants::default(),
            DEFAULT_DT,
            16,
        );

        for _ in 0..100 {
            session.tick();
        }
        assert_eq!(session.trail().len(), 16);
    }
}
