use pendle::PhysicalConstants;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub frame_rate: u32,
    pub trail_capacity: usize,
    pub constants: PhysicalConstants,
    pub report_interval_secs: f32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            trail_capacity: pendle::DEFAULT_TRAIL_CAPACITY,
            constants: PhysicalConstants::default(),
            report_interval_secs: 1.0,
        }
    }
}
