mod config;
mod server;

use anyhow::Result;
use clap::Parser;

use config::ServerConfig;
use pendle::{DEFAULT_DT, DEFAULT_PORT, PhysicalConstants};
use server::StepServer;

#[derive(Parser)]
#[command(name = "pendle-server")]
#[command(about = "Stateless double-pendulum step server")]
struct Args {
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    #[arg(long, default_value_t = DEFAULT_DT, help = "Timestep per request")]
    dt: f32,

    #[arg(long, default_value_t = 1.0, help = "Mass of the first bob")]
    m1: f32,

    #[arg(long, default_value_t = 1.0, help = "Mass of the second bob")]
    m2: f32,

    #[arg(long, default_value_t = 1.0, help = "Length of the first rod")]
    l1: f32,

    #[arg(long, default_value_t = 1.0, help = "Length of the second rod")]
    l2: f32,

    #[arg(long, default_value_t = 9.81, help = "Gravitational acceleration")]
    g: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let bind_addr = format!("{}:{}", args.bind, args.port);

    let config = ServerConfig {
        dt: args.dt,
        constants: PhysicalConstants {
            m1: args.m1,
            m2: args.m2,
            l1: args.l1,
            l2: args.l2,
            g: args.g,
        },
    };

    let mut server = StepServer::new(&bind_addr, config)?;
    log::info!("Step server listening on {}", server.local_addr());
    server.run()
}
