use super::state::{PendulumState, PhysicalConstants};

/// Timestep used by the reference step server.
pub const DEFAULT_DT: f32 = 0.005;

/// Advances the state by one explicit (forward) Euler step of the
/// double-pendulum equations of motion. Pure: identical inputs produce
/// bit-identical outputs.
///
/// Velocities are advanced first, then angles from the updated velocities.
/// Explicit Euler does not conserve energy, so long runs or a large `dt`
/// drift; that is a known property of this service, not something this
/// function compensates for.
pub fn step(state: &PendulumState, constants: &PhysicalConstants, dt: f32) -> PendulumState {
    let PhysicalConstants { m1, m2, l1, l2, g } = *constants;

    let delta = state.theta2 - state.theta1;
    let denom1 = (m1 + m2) * l1 - m2 * l1 * delta.cos() * delta.cos();
    let denom2 = (l2 / l1) * denom1;

    let a1 = (m2 * l1 * state.omega1 * state.omega1 * delta.sin() * delta.cos()
        + m2 * g * state.theta2.sin() * delta.cos()
        + m2 * l2 * state.omega2 * state.omega2 * delta.sin()
        - (m1 + m2) * g * state.theta1.sin())
        / denom1;

    let a2 = (-m2 * l2 * state.omega2 * state.omega2 * delta.sin() * delta.cos()
        + (m1 + m2) * g * state.theta1.sin() * delta.cos()
        - (m1 + m2) * l1 * state.omega1 * state.omega1 * delta.sin()
        - (m1 + m2) * g * state.theta2.sin())
        / denom2;

    let omega1 = state.omega1 + a1 * dt;
    let omega2 = state.omega2 + a2 * dt;

    PendulumState {
        theta1: state.theta1 + omega1 * dt,
        omega1,
        theta2: state.theta2 + omega2 * dt,
        omega2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_deterministic() {
        let constants = PhysicalConstants::default();
        let state = PendulumState::new(1.2, -0.7, 2.9, 3.1);

        let a = step(&state, &constants, DEFAULT_DT);
        let b = step(&state, &constants, DEFAULT_DT);

        assert_eq!(a.theta1.to_bits(), b.theta1.to_bits());
        assert_eq!(a.omega1.to_bits(), b.omega1.to_bits());
        assert_eq!(a.theta2.to_bits(), b.theta2.to_bits());
        assert_eq!(a.omega2.to_bits(), b.omega2.to_bits());
    }

    #[test]
    fn step_does_not_touch_its_input() {
        let constants = PhysicalConstants::default();
        let state = PendulumState::inverted();
        let copy = state;

        let _ = step(&state, &constants, DEFAULT_DT);
        assert_eq!(state, copy);
    }

    // Reference scenario: both rods inverted, second offset by one radian,
    // at rest, dt = 0.005, unit masses and lengths, g = 9.81.
    #[test]
    fn reference_scenario_matches_known_values() {
        let constants = PhysicalConstants::default();
        let next = step(&PendulumState::inverted(), &constants, DEFAULT_DT);

        assert!((next.omega1 - -0.013_055_94).abs() < 1e-5);
        assert!((next.omega2 - 0.048_328_32).abs() < 1e-5);
        assert!((next.theta1 - 3.141_527_4).abs() < 1e-5);
        assert!((next.theta2 - 4.141_834_7).abs() < 1e-5);
    }

    #[test]
    fn rest_state_stays_at_rest() {
        let constants = PhysicalConstants::default();
        let next = step(&PendulumState::new(0.0, 0.0, 0.0, 0.0), &constants, DEFAULT_DT);

        assert!(next.omega1.abs() < 1e-9);
        assert!(next.omega2.abs() < 1e-9);
        assert!(next.theta1.abs() < 1e-9);
        assert!(next.theta2.abs() < 1e-9);
    }
}
