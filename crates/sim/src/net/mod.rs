mod codec;
mod session;
mod stats;
mod transport;

pub use codec::{CodecError, MAX_FRAME_SIZE, decode, encode};
pub use session::{ClientSession, DEFAULT_TRAIL_CAPACITY, RoundError};
pub use stats::NetworkStats;
pub use transport::{DEFAULT_PORT, Endpoint, PREFIX_BYTES, TransportError};
