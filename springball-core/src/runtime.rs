use crate::config::SimulationConfig;
use crate::diagnostics::SimError;
use crate::engine::{total_energy, PhysicsState, SpringParams};
use crate::integrator::{step, IntegrationMode};
use glam::DVec3;

/// Snapshot of the ball taken after a step
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub step: usize,
    pub time: f64,
    pub position: DVec3,
    pub velocity: DVec3,
    pub energy: f64,
}

/// A running simulation. Owns the canonical ball state.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub state: PhysicsState,
    pub config: SimulationConfig,
    pub current_step: usize,
    initial: PhysicsState,
}

/// Build a context with the ball at rest at the configured position
pub fn build_simulation_context(config: SimulationConfig) -> Result<SimulationContext, SimError> {
    let state = PhysicsState::new(config.initial_position, config.mass)?;
    log::info!(
        "Starting simulation: mode={} dt={} k={} mass={} position={:?}",
        config.mode,
        config.dt,
        config.spring.k,
        config.mass,
        config.initial_position
    );

    Ok(SimulationContext {
        initial: state.clone(),
        state,
        config,
        current_step: 0,
    })
}

impl SimulationContext {
    pub fn mode(&self) -> IntegrationMode {
        self.config.mode
    }

    pub fn spring(&self) -> SpringParams {
        self.config.spring
    }

    pub fn sim_time(&self) -> f64 {
        self.state.sim_time()
    }

    pub fn energy(&self) -> f64 {
        total_energy(&self.state, self.config.spring)
    }

    pub fn sample(&self) -> Sample {
        Sample {
            step: self.current_step,
            time: self.state.sim_time(),
            position: self.state.position(),
            velocity: self.state.velocity(),
            energy: self.energy(),
        }
    }

    /// Put the ball back where it started
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.current_step = 0;
        log::debug!("Simulation reset");
    }
}

/// Advance by one fixed dt and hand back a copy of the new position.
///
/// Called once per frame regardless of how much wall-clock time passed, so
/// simulation time runs at `dt` per frame rather than in real time.
pub fn step_simulation(ctx: &mut SimulationContext) -> DVec3 {
    step(&mut ctx.state, ctx.config.spring, ctx.config.mode, ctx.config.dt);
    ctx.current_step += 1;
    log::trace!(
        "step {} t={:.3} pos={:?} vel={:?}",
        ctx.current_step,
        ctx.state.sim_time(),
        ctx.state.position(),
        ctx.state.velocity()
    );
    ctx.state.position()
}

/// How many steps a rendered frame should take: one while playing or when a
/// single step was requested, never more.
pub fn frame_steps(playing: bool, step_requested: bool) -> usize {
    usize::from(playing || step_requested)
}

/// Run `steps` steps, recording a sample after each one
pub fn run_steps(ctx: &mut SimulationContext, steps: usize) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(steps);
    for _ in 0..steps {
        step_simulation(ctx);
        samples.push(ctx.sample());
    }
    samples
}
