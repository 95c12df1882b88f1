use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use super::codec::MAX_FRAME_SIZE;
use super::stats::NetworkStats;

/// Wire length prefix: big-endian u16, sent as its own datagram ahead of
/// the payload datagram.
pub const PREFIX_BYTES: usize = 2;

pub const DEFAULT_PORT: u16 = 5555;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Nothing waiting on a non-blocking socket. A normal outcome of a
    /// best-effort receive, not a fault.
    #[error("no data available")]
    NoData,
    #[error("declared frame length {len} exceeds {MAX_FRAME_SIZE}")]
    FrameTooLarge { len: usize },
    #[error("short read: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },
    #[error("socket error: {0}")]
    Io(#[from] io::Error),
}

/// One UDP socket plus length-prefixed framing. The socket is owned by its
/// session for the process lifetime; client sessions switch it to
/// non-blocking so a receive can never stall a tick, the server leaves it
/// blocking between requests.
pub struct Endpoint {
    socket: UdpSocket,
    local_addr: SocketAddr,
    recv_buffer: [u8; MAX_FRAME_SIZE],
    stats: NetworkStats,
}

impl Endpoint {
    pub fn bind<A: ToSocketAddrs>(addr: A) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr)?;
        let local_addr = socket.local_addr()?;

        Ok(Self {
            socket,
            local_addr,
            recv_buffer: [0u8; MAX_FRAME_SIZE],
            stats: NetworkStats::default(),
        })
    }

    pub fn set_nonblocking(&self, nonblocking: bool) -> io::Result<()> {
        self.socket.set_nonblocking(nonblocking)
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn stats(&self) -> &NetworkStats {
        &self.stats
    }

    /// Sends one frame: the length prefix datagram, then the payload
    /// datagram.
    pub fn send_frame(&mut self, frame: &[u8], addr: SocketAddr) -> Result<(), TransportError> {
        if frame.len() > MAX_FRAME_SIZE {
            return Err(TransportError::FrameTooLarge { len: frame.len() });
        }

        let prefix = (frame.len() as u16).to_be_bytes();
        self.socket.send_to(&prefix, addr)?;
        self.socket.send_to(frame, addr)?;

        self.stats.frames_sent += 1;
        self.stats.bytes_sent += (PREFIX_BYTES + frame.len()) as u64;

        Ok(())
    }

    /// Receives one frame: the length prefix, then exactly that many
    /// payload bytes. Returns the frame body and the sender of the payload
    /// datagram.
    ///
    /// An implausible declared length is rejected before any payload read.
    /// On a non-blocking socket a missing prefix maps to `NoData`; a
    /// missing payload is a short read, since the peer already committed to
    /// sending one.
    pub fn recv_frame(&mut self) -> Result<(&[u8], SocketAddr), TransportError> {
        let mut prefix = [0u8; PREFIX_BYTES];
        let (n, _) = match self.socket.recv_from(&mut prefix) {
            Ok(r) => r,
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Err(TransportError::NoData),
            Err(e) => return Err(TransportError::Io(e)),
        };
        if n != PREFIX_BYTES {
            return Err(TransportError::ShortRead {
                expected: PREFIX_BYTES,
                got: n,
            });
        }

        let len = u16::from_be_bytes(prefix) as usize;
        if len > MAX_FRAME_SIZE {
            return Err(TransportError::FrameTooLarge { len });
        }

        let (got, addr) = match self.socket.recv_from(&mut self.recv_buffer[..len]) {
            Ok(r) => r,
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                return Err(TransportError::ShortRead {
                    expected: len,
                    got: 0,
                });
            }
            Err(e) => return Err(TransportError::Io(e)),
        };
        if got != len {
            return Err(TransportError::ShortRead { expected: len, got });
        }

        self.stats.frames_received += 1;
        self.stats.bytes_received += (PREFIX_BYTES + len) as u64;

        Ok((&self.recv_buffer[..len], addr))
    }
}
