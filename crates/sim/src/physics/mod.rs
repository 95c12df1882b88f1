mod integrator;
mod state;

pub use integrator::{DEFAULT_DT, step};
pub use state::{PendulumState, PhysicalConstants, STATE_BYTES};
