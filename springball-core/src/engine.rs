use crate::diagnostics::SimError;
use glam::DVec3;
use std::ops::{Add, Mul};

/// Position and velocity of the ball, or their time derivatives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub position: DVec3,
    pub velocity: DVec3,
}

impl Phase {
    pub fn new(position: DVec3, velocity: DVec3) -> Self {
        Self { position, velocity }
    }
}

impl Add for Phase {
    type Output = Phase;

    fn add(self, rhs: Phase) -> Phase {
        Phase {
            position: self.position + rhs.position,
            velocity: self.velocity + rhs.velocity,
        }
    }
}

impl Mul<f64> for Phase {
    type Output = Phase;

    fn mul(self, rhs: f64) -> Phase {
        Phase {
            position: self.position * rhs,
            velocity: self.velocity * rhs,
        }
    }
}

/// Constants of the force model that don't depend on the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub k: f64,       // spring constant
    pub damping: f64, // velocity friction, 0 disables it
    pub gravity: f64, // downward acceleration, 0 disables it
}

impl SpringParams {
    /// Pure spring: no damping, no gravity
    pub fn spring(k: f64) -> Self {
        Self {
            k,
            damping: 0.0,
            gravity: 0.0,
        }
    }
}

/// Everything the derivative needs, passed by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    pub mass: f64,
    pub k: f64,
    pub damping: f64,
    pub gravity: f64,
}

impl ForceParams {
    pub fn new(mass: f64, spring: SpringParams) -> Self {
        Self {
            mass,
            k: spring.k,
            damping: spring.damping,
            gravity: spring.gravity,
        }
    }
}

/// The simulated point mass.
///
/// Only built through [`PhysicsState::new`] or [`PhysicsState::with_velocity`],
/// so `mass` is always positive and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsState {
    position: DVec3,
    velocity: DVec3,
    mass: f64,
    sim_time: f64,
}

impl PhysicsState {
    /// Create a ball at rest. Fails if `mass` is not strictly positive and finite.
    pub fn new(position: DVec3, mass: f64) -> Result<Self, SimError> {
        Self::with_velocity(position, DVec3::ZERO, mass)
    }

    pub fn with_velocity(position: DVec3, velocity: DVec3, mass: f64) -> Result<Self, SimError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass(mass));
        }
        Ok(Self {
            position,
            velocity,
            mass,
            sim_time: 0.0,
        })
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn velocity(&self) -> DVec3 {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// The same ball moved to `next`, `dt` later
    pub(crate) fn stepped(&self, next: Phase, dt: f64) -> Self {
        Self {
            position: next.position,
            velocity: next.velocity,
            mass: self.mass,
            sim_time: self.sim_time + dt,
        }
    }

    pub fn phase(&self) -> Phase {
        Phase::new(self.position, self.velocity)
    }

    pub fn force_params(&self, spring: SpringParams) -> ForceParams {
        ForceParams::new(self.mass, spring)
    }
}

/// Rate of change of `phase` under the spring model.
///
/// The restoring force acts on the vertical axis only and pulls toward y = 0.
/// Damping and gravity are added on top when non-zero. `_t` is unused since
/// the model is autonomous.
pub fn derivative(_t: f64, phase: Phase, params: ForceParams) -> Phase {
    let spring = DVec3::new(0.0, -params.k * phase.position.y / params.mass, 0.0);
    let mut accel = spring;
    if params.damping != 0.0 {
        accel -= phase.velocity * (params.damping / params.mass);
    }
    if params.gravity != 0.0 {
        accel.y -= params.gravity;
    }

    Phase {
        position: phase.velocity,
        velocity: accel,
    }
}

/// Kinetic plus potential energy of the ball.
///
/// Kinetic energy uses the full velocity, so horizontal motion is counted too.
pub fn total_energy(state: &PhysicsState, spring: SpringParams) -> f64 {
    let kinetic = 0.5 * state.mass * state.velocity.length_squared();
    let elastic = 0.5 * spring.k * state.position.y * state.position.y;
    let gravitational = state.mass * spring.gravity * state.position.y;
    kinetic + elastic + gravitational
}
