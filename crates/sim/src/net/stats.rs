/// Running transport counters, kept per endpoint. Purely diagnostic; the
/// protocol itself carries no sequencing, so loss is only visible here.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkStats {
    pub frames_sent: u64,
    pub frames_received: u64,
    pub bytes_sent: u64,
    pub bytes_received: u64,
}
