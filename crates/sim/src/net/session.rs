use std::io;
use std::net::SocketAddr;

use glam::Vec2;

use crate::physics::{PendulumState, PhysicalConstants};
use crate::trail::TrailBuffer;

use super::codec::{self, CodecError};
use super::stats::NetworkStats;
use super::transport::{Endpoint, TransportError};

/// Default trail capacity for the networked client: a long history ring.
pub const DEFAULT_TRAIL_CAPACITY: usize = 100_000;

/// Anything that can end a round early. All variants are handled inside
/// [`ClientSession::tick`]; none of them escape to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RoundError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Client half of the step-offload protocol.
///
/// Owns the authoritative display state; the server keeps nothing between
/// requests, so whatever this session last accepted *is* the simulation.
/// Each tick re-sends the held state and takes one best-effort shot at a
/// reply. A lost request or reply costs one stale frame, nothing more; the
/// next tick re-sends and the exchange self-heals.
pub struct ClientSession {
    endpoint: Endpoint,
    server_addr: SocketAddr,
    state: PendulumState,
    constants: PhysicalConstants,
    trail: TrailBuffer,
    rounds_completed: u64,
    rounds_dropped: u64,
}

impl ClientSession {
    /// Binds an ephemeral local port targeting `server_addr`. The socket is
    /// non-blocking for its whole life: a tick never waits on the network.
    pub fn connect(
        server_addr: SocketAddr,
        initial: PendulumState,
        constants: PhysicalConstants,
        trail_capacity: usize,
    ) -> io::Result<Self> {
        let endpoint = Endpoint::bind("0.0.0.0:0")?;
        endpoint.set_nonblocking(true)?;

        Ok(Self {
            endpoint,
            server_addr,
            state: initial,
            constants,
            trail: TrailBuffer::new(trail_capacity),
            rounds_completed: 0,
            rounds_dropped: 0,
        })
    }

    /// One simulation tick: at most one send and one best-effort receive.
    ///
    /// Returns `true` when a server reply replaced the held state. Every
    /// failure mode (nothing waiting, short read, oversize or corrupt
    /// frame, socket error) leaves the previous state untouched and the
    /// trail unextended, so the caller just renders the last good state
    /// again.
    pub fn tick(&mut self) -> bool {
        match self.exchange() {
            Ok(next) => {
                self.state = next;
                self.trail.push(self.state.bob2(&self.constants));
                self.rounds_completed += 1;
                true
            }
            Err(RoundError::Transport(TransportError::NoData)) => {
                self.rounds_dropped += 1;
                log::trace!("no reply this tick, keeping previous state");
                false
            }
            Err(err) => {
                self.rounds_dropped += 1;
                log::debug!("round dropped: {err}");
                false
            }
        }
    }

    fn exchange(&mut self) -> Result<PendulumState, RoundError> {
        let request = codec::encode(&self.state)?;
        self.endpoint.send_frame(&request, self.server_addr)?;

        let (reply, _) = self.endpoint.recv_frame()?;
        Ok(codec::decode(reply)?)
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Current joint positions for the render sink, pivot at the origin.
    pub fn bob_positions(&self) -> (Vec2, Vec2) {
        (self.state.bob1(&self.constants), self.state.bob2(&self.constants))
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn stats(&self) -> &NetworkStats {
        self.endpoint.stats()
    }

    pub fn rounds_completed(&self) -> u64 {
        self.rounds_completed
    }

    pub fn rounds_dropped(&self) -> u64 {
        self.rounds_dropped
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.endpoint.local_addr()
    }
}
