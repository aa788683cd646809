//! Tests for the simulation context that drives the ball frame by frame

use glam::DVec3;
use springball_core::config::{SimulationConfig, INITIAL_POSITION, TIME_STEP};
use springball_core::integrator::IntegrationMode;
use springball_core::runtime::{build_simulation_context, frame_steps, run_steps, step_simulation};
use springball_core::SimError;
use springball_core::tests::test_helpers::approx_eq;

#[test]
fn test_default_config() {
    let config = SimulationConfig::default();

    assert_eq!(config.mode, IntegrationMode::Rk4);
    assert_eq!(config.dt, 0.1);
    assert_eq!(config.spring.k, 0.1);
    assert_eq!(config.spring.damping, 0.0);
    assert_eq!(config.spring.gravity, 0.0);
    assert_eq!(config.mass, 1.0);
    assert_eq!(config.initial_position, DVec3::new(0.0, 5.0, 0.0));
}

#[test]
fn test_context_starts_at_rest() {
    let ctx = build_simulation_context(SimulationConfig::default()).expect("valid config");

    assert_eq!(ctx.current_step, 0);
    assert_eq!(ctx.sim_time(), 0.0);
    assert_eq!(ctx.state.position(), INITIAL_POSITION);
    assert_eq!(ctx.state.velocity(), DVec3::ZERO);
}

#[test]
fn test_invalid_mass_rejected() {
    let config = SimulationConfig {
        mass: 0.0,
        ..SimulationConfig::default()
    };

    let err = build_simulation_context(config).unwrap_err();
    assert_eq!(err, SimError::InvalidMass(0.0));
}

#[test]
fn test_step_returns_copy_of_position() {
    let mut ctx = build_simulation_context(SimulationConfig::default()).expect("valid config");
    let mut pos = step_simulation(&mut ctx);

    assert_eq!(pos, ctx.state.position());

    // Mutating the returned copy must not affect the simulation
    pos.y = 100.0;
    assert_ne!(ctx.state.position().y, 100.0);
}

#[test]
fn test_one_step_per_call() {
    let mut ctx = build_simulation_context(SimulationConfig::default()).expect("valid config");
    for _ in 0..7 {
        step_simulation(&mut ctx);
    }

    assert_eq!(ctx.current_step, 7);
    assert!(approx_eq(ctx.sim_time(), 7.0 * TIME_STEP, 1e-12));
}

#[test]
fn test_run_steps_records_each_step() {
    let mut ctx = build_simulation_context(SimulationConfig::default()).expect("valid config");
    let samples = run_steps(&mut ctx, 20);

    assert_eq!(samples.len(), 20);
    for (i, sample) in samples.iter().enumerate() {
        assert_eq!(sample.step, i + 1);
        assert!(approx_eq(sample.time, (i + 1) as f64 * TIME_STEP, 1e-12));
    }
    assert_eq!(samples.last().map(|s| s.position), Some(ctx.state.position()));
}

#[test]
fn test_sim_time_never_decreases() {
    let mut ctx = build_simulation_context(SimulationConfig::default()).expect("valid config");
    let samples = run_steps(&mut ctx, 200);

    for pair in samples.windows(2) {
        assert!(pair[1].time > pair[0].time);
    }
}

#[test]
fn test_reset_restores_start() {
    let mut ctx = build_simulation_context(SimulationConfig::default()).expect("valid config");
    run_steps(&mut ctx, 30);
    ctx.reset();

    assert_eq!(ctx.current_step, 0);
    assert_eq!(ctx.sim_time(), 0.0);
    assert_eq!(ctx.state.position(), INITIAL_POSITION);
    assert_eq!(ctx.state.velocity(), DVec3::ZERO);
}

#[test]
fn test_mode_is_respected() {
    let mut rk4 = build_simulation_context(SimulationConfig::default()).expect("valid config");
    let mut euler =
        build_simulation_context(SimulationConfig::with_mode(IntegrationMode::Euler)).expect("valid config");

    assert_eq!(euler.mode(), IntegrationMode::Euler);

    run_steps(&mut rk4, 100);
    run_steps(&mut euler, 100);
    assert!(euler.energy() > rk4.energy());
}

#[test]
fn test_reset_uses_validated_start_state() {
    let mut ctx = build_simulation_context(SimulationConfig::default()).expect("valid config");
    run_steps(&mut ctx, 10);

    // Reset replays the state accepted at construction, not the current config
    ctx.config.mass = 0.0;
    ctx.reset();

    assert_eq!(ctx.state.mass(), 1.0);
    assert_eq!(ctx.state.position(), INITIAL_POSITION);
}

#[test]
fn test_frame_steps_at_most_one() {
    assert_eq!(frame_steps(false, false), 0);
    assert_eq!(frame_steps(true, false), 1);
    assert_eq!(frame_steps(false, true), 1);
    // A step request while already playing must not double the frame's step
    assert_eq!(frame_steps(true, true), 1);
}

#[test]
fn test_playing_frame_with_step_request_advances_once() {
    let mut ctx = build_simulation_context(SimulationConfig::default()).expect("valid config");
    for _ in 0..frame_steps(true, true) {
        step_simulation(&mut ctx);
    }

    assert_eq!(ctx.current_step, 1);
    assert!(approx_eq(ctx.sim_time(), TIME_STEP, 1e-12));
}
