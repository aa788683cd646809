mod orbit;
mod view_app;

use clap::{Parser, Subcommand, ValueEnum};
use simple_logger::SimpleLogger;
use springball_core::{
    build_simulation_context, format_startup_error, run_steps, IntegrationMode, SimulationConfig,
};
use view_app::ViewApp;

#[derive(Parser)]
#[command(name = "springball")]
#[command(about = "SpringBall - a ball on a vertical spring, integrated with RK4", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the 3D viewer
    View {
        /// Integration scheme
        #[arg(long, value_enum, default_value_t = Mode::Rk4)]
        mode: Mode,
    },
    /// Step the simulation without a window and print the trajectory
    Run {
        /// Integration scheme
        #[arg(long, value_enum, default_value_t = Mode::Rk4)]
        mode: Mode,
        /// Number of steps to simulate
        #[arg(long, default_value_t = 100)]
        steps: usize,
        /// Print every n-th step
        #[arg(long, default_value_t = 1)]
        every: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Rk4,
    Euler,
}

impl From<Mode> for IntegrationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Rk4 => IntegrationMode::Rk4,
            Mode::Euler => IntegrationMode::Euler,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format_startup_error(e.as_ref()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init()?;

    match cli.command {
        Commands::View { mode } => view(mode.into()),
        Commands::Run { mode, steps, every } => print_trajectory(mode.into(), steps, every),
    }
}

fn view(mode: IntegrationMode) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = build_simulation_context(SimulationConfig::with_mode(mode))?;
    log::debug!("Opening viewer in {} mode", mode);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };
    eframe::run_native(
        "SpringBall",
        options,
        Box::new(move |cc| Ok(Box::new(ViewApp::new(ctx, cc)))),
    )?;

    Ok(())
}

fn print_trajectory(
    mode: IntegrationMode,
    steps: usize,
    every: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = build_simulation_context(SimulationConfig::with_mode(mode))?;
    let every = every.max(1);

    println!("step\tt\tx\ty\tz\tvy\tenergy");
    for sample in run_steps(&mut ctx, steps)
        .into_iter()
        .filter(|s| s.step % every == 0)
    {
        println!(
            "{}\t{:.3}\t{:.9}\t{:.9}\t{:.9}\t{:.9}\t{:.12}",
            sample.step,
            sample.time,
            sample.position.x,
            sample.position.y,
            sample.position.z,
            sample.velocity.y,
            sample.energy
        );
    }

    Ok(())
}
