use crate::engine::{derivative, ForceParams, Phase, PhysicsState, SpringParams};
use std::fmt;

/// Which scheme advances the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationMode {
    /// First-order explicit Euler, kept for comparison
    Euler,
    /// Classic fourth-order Runge-Kutta
    #[default]
    Rk4,
}

impl fmt::Display for IntegrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationMode::Euler => write!(f, "euler"),
            IntegrationMode::Rk4 => write!(f, "rk4"),
        }
    }
}

/// One RK4 step of `phase` from time `t`.
///
/// Every stage is evaluated against the untouched starting phase, so
/// nothing is written back until the weighted sum is formed.
pub fn rk4(t: f64, phase: Phase, dt: f64, params: ForceParams) -> Phase {
    let half = dt / 2.0;
    let k1 = derivative(t, phase, params);
    let k2 = derivative(t + half, phase + k1 * half, params);
    let k3 = derivative(t + half, phase + k2 * half, params);
    let k4 = derivative(t + dt, phase + k3 * dt, params);

    phase + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
}

/// One explicit Euler step of `phase` from time `t`
pub fn euler(t: f64, phase: Phase, dt: f64, params: ForceParams) -> Phase {
    let d = derivative(t, phase, params);
    phase + d * dt
}

/// Compute the state one `dt` after `state` without touching it
pub fn advance(
    state: &PhysicsState,
    spring: SpringParams,
    mode: IntegrationMode,
    dt: f64,
) -> PhysicsState {
    let params = state.force_params(spring);
    let t = state.sim_time();
    let next = match mode {
        IntegrationMode::Euler => euler(t, state.phase(), dt, params),
        IntegrationMode::Rk4 => rk4(t, state.phase(), dt, params),
    };

    state.stepped(next, dt)
}

/// Step the ball forward by dt in place
pub fn step(state: &mut PhysicsState, spring: SpringParams, mode: IntegrationMode, dt: f64) {
    *state = advance(state, spring, mode, dt);
}
