mod config;

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;

use config::ClientConfig;
use pendle::{
    ClientSession, DEFAULT_DT, DEFAULT_PORT, OFFLINE_TRAIL_CAPACITY, OfflineSession,
    PendulumState, PhysicalConstants,
};

#[derive(Parser)]
#[command(name = "pendle")]
#[command(about = "Double-pendulum client, physics offloaded to a step server")]
struct Args {
    #[arg(short, long, default_value = "127.0.0.1", help = "Step server address")]
    server: String,

    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    #[arg(long, default_value_t = 60, help = "Ticks per second of the display loop")]
    frame_rate: u32,

    #[arg(
        long,
        help = "Trail capacity (default: 100000 networked, 500 offline)"
    )]
    trail_capacity: Option<usize>,

    #[arg(long, help = "Integrate locally instead of exchanging with a server")]
    offline: bool,

    #[arg(
        long,
        default_value_t = DEFAULT_DT,
        help = "Timestep for offline integration"
    )]
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

    #[arg(long, default_value_t = 1.0, help = "Seconds between position reports")]
    report_interval: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = ClientConfig {
        frame_rate: args.frame_rate,
        trail_capacity: args.trail_capacity.unwrap_or(if args.offline {
            OFFLINE_TRAIL_CAPACITY
        } else {
            pendle::DEFAULT_TRAIL_CAPACITY
        }),
        constants: PhysicalConstants {
            m1: args.m1,
            m2: args.m2,
            l1: args.l1,
            l2: args.l2,
            g: args.g,
        },
        report_interval_secs: args.report_interval,
    };

    if args.offline {
        run_offline(&config, args.dt)
    } else {
        let server_addr: SocketAddr = format!("{}:{}", args.server, args.port).parse()?;
        run_networked(&config, server_addr)
    }
}

/// Stands in for the render event loop: one session tick per frame
/// interval, and the positions that a draw call would consume get logged
/// instead.
fn run_networked(config: &ClientConfig, server_addr: SocketAddr) -> Result<()> {
    let mut session = ClientSession::connect(
        server_addr,
        PendulumState::inverted(),
        config.constants,
        config.trail_capacity,
    )?;
    log::info!(
        "Exchanging state with {} from {}",
        server_addr,
        session.local_addr()
    );

    let frame = Duration::from_secs_f64(1.0 / config.frame_rate as f64);
    let report_interval = Duration::from_secs_f32(config.report_interval_secs);
    let mut last_report = Instant::now();

    loop {
        let tick_start = Instant::now();
        session.tick();

        if last_report.elapsed() >= report_interval {
            let (bob1, bob2) = session.bob_positions();
            log::info!(
                "bob1=({:.3}, {:.3}) bob2=({:.3}, {:.3}) trail={} rounds ok={} dropped={}",
                bob1.x,
                bob1.y,
                bob2.x,
                bob2.y,
                session.trail().len(),
                session.rounds_completed(),
                session.rounds_dropped(),
            );
            last_report = Instant::now();
        }

        let elapsed = tick_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
}

fn run_offline(config: &ClientConfig, dt: f32) -> Result<()> {
    let mut session = OfflineSession::new(
        PendulumState::inverted(),
        config.constants,
        dt,
        config.trail_capacity,
    );
    log::info!("Integrating locally, dt={}", dt);

    let frame = Duration::from_secs_f64(1.0 / config.frame_rate as f64);
    let report_interval = Duration::from_secs_f32(config.report_interval_secs);
    let mut last_report = Instant::now();

    loop {
        let tick_start = Instant::now();
        session.tick();

        if last_report.elapsed() >= report_interval {
            let (bob1, bob2) = session.bob_positions();
            log::info!(
                "bob1=({:.3}, {:.3}) bob2=({:.3}, {:.3}) trail={}",
                bob1.x,
                bob1.y,
                bob2.x,
                bob2.y,
                session.trail().len(),
            );
            last_report = Instant::now();
        }

        let elapsed = tick_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
}
