use std::io;
use std::net::SocketAddr;

use pendle::{Endpoint, PendulumState, RoundError, decode, encode, step};

use crate::config::ServerConfig;

/// Stateless step service: every reply is computed from nothing but the
/// bytes of the request it answers. There are no sessions, no per-client
/// records, and nothing survives from one request to the next.
pub struct StepServer {
    endpoint: Endpoint,
    config: ServerConfig,
    requests_served: u64,
    requests_discarded: u64,
}

impl StepServer {
    pub fn new(bind_addr: &str, config: ServerConfig) -> io::Result<Self> {
        let endpoint = Endpoint::bind(bind_addr)?;

        Ok(Self {
            endpoint,
            config,
            requests_served: 0,
            requests_discarded: 0,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.endpoint.local_addr()
    }

    /// Serves until the process is killed, blocking on the socket between
    /// requests; there is nothing else to do.
    pub fn run(&mut self) -> ! {
        loop {
            self.serve_once();
        }
    }

    /// One request/reply cycle. A malformed request (implausible length,
    /// short read, bytes that do not decompress to a state) is discarded
    /// without a reply and without disturbing the next request.
    pub fn serve_once(&mut self) {
        let (state, from) = match self.recv_request() {
            Ok(request) => request,
            Err(err) => {
                self.requests_discarded += 1;
                log::debug!("request discarded ({} so far): {err}", self.requests_discarded);
                return;
            }
        };

        let next = step(&state, &self.config.constants, self.config.dt);

        let reply = match encode(&next) {
            Ok(frame) => frame,
            Err(err) => {
                self.requests_discarded += 1;
                log::warn!("reply dropped: {err}");
                return;
            }
        };

        if let Err(err) = self.endpoint.send_frame(&reply, from) {
            self.requests_discarded += 1;
            log::debug!("reply send failed: {err}");
            return;
        }

        self.requests_served += 1;
        if self.requests_served % 10_000 == 0 {
            log::info!("{} requests served", self.requests_served);
        }
    }

    fn recv_request(&mut self) -> Result<(PendulumState, SocketAddr), RoundError> {
        let (frame, from) = self.endpoint.recv_frame()?;
        let state = decode(frame)?;
        Ok((state, from))
    }
}
