pub mod color;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod integrator;
pub mod runtime;

pub use color::height_to_gray;
pub use config::SimulationConfig;
pub use diagnostics::{format_startup_error, SimError};
pub use engine::{derivative, total_energy, ForceParams, Phase, PhysicsState, SpringParams};
pub use integrator::{advance, euler, rk4, step, IntegrationMode};
pub use runtime::{
    build_simulation_context, frame_steps, run_steps, step_simulation, Sample, SimulationContext,
};
