pub mod net;
pub mod offline;
pub mod physics;
pub mod trail;

pub use net::{
    ClientSession, CodecError, DEFAULT_PORT, DEFAULT_TRAIL_CAPACITY, Endpoint, MAX_FRAME_SIZE,
    NetworkStats, RoundError, TransportError, decode, encode,
};
pub use offline::{OFFLINE_TRAIL_CAPACITY, OfflineSession};
pub use physics::{DEFAULT_DT, PendulumState, PhysicalConstants, STATE_BYTES, step};
pub use trail::TrailBuffer;
