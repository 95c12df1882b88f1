use pendle::{DEFAULT_DT, PhysicalConstants};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub dt: f32,
    pub constants: PhysicalConstants,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            constants: PhysicalConstants::default(),
        }
    }
}
