//! Fixed simulation constants

use crate::engine::SpringParams;
use crate::integrator::IntegrationMode;
use glam::DVec3;

/// Spring constant of the vertical restoring force
pub const SPRING_K: f64 = 0.1;
/// Velocity friction. Zero keeps the oscillator undamped.
pub const DAMPING: f64 = 0.0;
/// Downward acceleration. Zero leaves the spring as the only force.
pub const GRAVITY: f64 = 0.0;
/// Simulation time advanced per frame
pub const TIME_STEP: f64 = 0.1;
pub const BALL_MASS: f64 = 1.0;
pub const INITIAL_POSITION: DVec3 = DVec3::new(0.0, 5.0, 0.0);

/// Everything needed to start a simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub spring: SpringParams,
    pub dt: f64,
    pub mass: f64,
    pub initial_position: DVec3,
    pub mode: IntegrationMode,
}

impl SimulationConfig {
    pub fn with_mode(mode: IntegrationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            spring: SpringParams {
                k: SPRING_K,
                damping: DAMPING,
                gravity: GRAVITY,
            },
            dt: TIME_STEP,
            mass: BALL_MASS,
            initial_position: INITIAL_POSITION,
            mode: IntegrationMode::default(),
        }
    }
}
