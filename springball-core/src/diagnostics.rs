//! Errors and error reporting for SpringBall
//!
//! The integrator itself cannot fail; the only error surface is
//! validating the ball when the simulation is set up.

use thiserror::Error;

/// Setup error for a simulation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
}

/// Format an error raised while starting a simulation
pub fn format_startup_error(error: &dyn std::error::Error) -> String {
    format!("Startup error: {}", error)
}
