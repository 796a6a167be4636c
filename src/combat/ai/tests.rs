//! Combat domain: unit tests for the enemy AI state machine.

use bevy::prelude::*;

use super::{AiState, AiTuning, Distances, EnemyAi, SteeringInput};
use crate::combat::resources::AiMotionTuning;

fn enemy() -> EnemyAi {
    EnemyAi::new(AiTuning::default(), Vec2::ZERO)
}

fn at(to_target: f32, to_anchor: f32) -> Distances {
    Distances {
        to_target,
        to_anchor,
    }
}

/// Seconds past the debounce window.
const STEP: f32 = 0.31;

// --- Transition table ---

#[test]
fn test_idle_to_chasing_in_range() {
    let mut ai = enemy();
    let transition = ai.evaluate(0.0, at(8.0, 0.0)).unwrap();
    assert_eq!(transition.from, AiState::Idle);
    assert_eq!(transition.to, AiState::Chasing);
    assert!(ai.is_aggroed());
}

#[test]
fn test_idle_stays_idle_out_of_range() {
    let mut ai = enemy();
    assert!(ai.evaluate(0.0, at(20.0, 12.0)).is_none());
    assert_eq!(ai.state(), AiState::Idle);
    assert!(!ai.is_aggroed());
}

#[test]
fn test_idle_inside_stopping_distance_does_not_chase() {
    let mut ai = enemy();
    assert!(ai.evaluate(0.0, at(0.5, 0.0)).is_none());
    assert_eq!(ai.state(), AiState::Idle);
}

#[test]
fn test_leash_sends_enemy_home_and_clears_aggro() {
    let mut ai = enemy();
    ai.evaluate(0.0, at(8.0, 0.0));
    assert_eq!(ai.state(), AiState::Chasing);

    let transition = ai.evaluate(STEP, at(5.0, 16.0)).unwrap();
    assert_eq!(transition.to, AiState::Returning);
    assert!(!ai.is_aggroed());

    let transition = ai.evaluate(2.0 * STEP, at(30.0, 0.8)).unwrap();
    assert_eq!(transition.to, AiState::Idle);
}

#[test]
fn test_leash_boundary_is_inclusive() {
    let mut ai = enemy();
    ai.evaluate(0.0, at(8.0, 0.0));
    // Exactly at leash range is still inside the leash
    assert!(!ai.should_stop_chasing(at(8.0, 15.0)));
    assert!(ai.evaluate(STEP, at(8.0, 15.0)).is_none());
    assert_eq!(ai.state(), AiState::Chasing);
}

#[test]
fn test_aggro_buffer_only_applies_without_aggro() {
    let mut ai = enemy();
    assert!(ai.should_stop_chasing(at(12.5, 3.0)));
    assert!(!ai.should_stop_chasing(at(11.5, 3.0)));

    ai.notify_damaged();
    assert!(!ai.should_stop_chasing(at(12.5, 3.0)));
    assert!(ai.should_stop_chasing(at(12.5, 15.5)));
}

#[test]
fn test_returning_reacquires_target() {
    let mut ai = enemy();
    ai.evaluate(0.0, at(8.0, 0.0));
    ai.evaluate(STEP, at(5.0, 16.0));
    assert_eq!(ai.state(), AiState::Returning);

    let transition = ai.evaluate(2.0 * STEP, at(6.0, 10.0)).unwrap();
    assert_eq!(transition.to, AiState::Chasing);
    assert!(ai.is_aggroed());
}

// --- Debounce ---

#[test]
fn test_evaluation_is_debounced() {
    let mut ai = enemy();
    // First evaluation runs immediately but finds nothing to do
    assert!(ai.evaluate(0.0, at(20.0, 0.0)).is_none());
    // Target steps in, but the window has not elapsed
    assert!(ai.evaluate(0.1, at(8.0, 0.0)).is_none());
    assert_eq!(ai.state(), AiState::Idle);

    assert!(ai.evaluate(0.35, at(8.0, 0.0)).is_some());
    assert_eq!(ai.state(), AiState::Chasing);
}

// --- External triggers ---

#[test]
fn test_damage_aggroes_from_any_distance() {
    let mut ai = enemy();
    assert!(ai.evaluate(0.0, at(50.0, 0.0)).is_none());

    let transition = ai.notify_damaged().unwrap();
    assert_eq!(transition.to, AiState::Chasing);
    assert!(ai.is_aggroed());

    // Aggro keeps the chase going well past chase range
    assert!(ai.evaluate(0.01 + STEP, at(50.0, 0.0)).is_none());
    assert_eq!(ai.state(), AiState::Chasing);
}

#[test]
fn test_damage_while_chasing_is_a_no_op() {
    let mut ai = enemy();
    ai.evaluate(0.0, at(8.0, 0.0));
    assert!(ai.notify_damaged().is_none());
    assert_eq!(ai.state(), AiState::Chasing);
}

#[test]
fn test_stun_restores_previous_state() {
    let mut ai = enemy();
    ai.evaluate(0.0, at(8.0, 0.0));

    let transition = ai.stun(1.0).unwrap();
    assert_eq!(transition.to, AiState::Stunned);
    // No transitions while stunned
    assert!(ai.evaluate(10.0, at(40.0, 20.0)).is_none());

    assert!(ai.tick_stun(0.6).is_none());
    let transition = ai.tick_stun(0.6).unwrap();
    assert_eq!(transition.to, AiState::Chasing);
    assert!(ai.stun_remaining().is_none());
}

#[test]
fn test_restun_restarts_and_comes_out_idle() {
    let mut ai = enemy();
    ai.evaluate(0.0, at(8.0, 0.0));
    ai.stun(1.0);
    ai.tick_stun(0.8);

    assert!(ai.stun(1.0).is_none());
    assert_eq!(ai.stun_remaining(), Some(1.0));

    assert!(ai.tick_stun(0.5).is_none());
    let transition = ai.tick_stun(0.5).unwrap();
    assert_eq!(transition.to, AiState::Idle);
}

#[test]
fn test_damage_breaks_stun_into_chase() {
    let mut ai = enemy();
    ai.stun(1.0);

    let transition = ai.notify_damaged().unwrap();
    assert_eq!(transition.from, AiState::Stunned);
    assert_eq!(transition.to, AiState::Chasing);
    assert_eq!(ai.state(), AiState::Chasing);
    assert!(ai.is_aggroed());
    assert!(ai.stun_remaining().is_none());

    // The broken stun never fires its restore
    assert!(ai.tick_stun(1.0).is_none());
    assert_eq!(ai.state(), AiState::Chasing);
}

#[test]
fn test_reset_clears_everything() {
    let mut ai = enemy();
    ai.evaluate(0.0, at(8.0, 0.0));
    ai.stun(2.0);

    ai.reset(5.0);
    assert_eq!(ai.state(), AiState::Idle);
    assert!(!ai.is_aggroed());
    assert!(ai.stun_remaining().is_none());
    // Debounce window restarts at the reset time
    assert!(ai.evaluate(5.1, at(8.0, 0.0)).is_none());
    assert!(ai.evaluate(5.4, at(8.0, 0.0)).is_some());
}

// --- Steering ---

fn steering(position: Vec2, target: Vec2, velocity: Vec2) -> SteeringInput {
    SteeringInput {
        position,
        target,
        velocity,
        facing: Quat::IDENTITY,
    }
}

#[test]
fn test_chase_blends_toward_target() {
    let mut ai = enemy();
    ai.notify_damaged();
    let motion = AiMotionTuning::default();

    let intent = ai.steer(
        steering(Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::ZERO),
        &motion,
        1.0,
    );
    // 20% of the way to 3.0
    assert!((intent.velocity.x - 0.6).abs() < 1e-5);
    assert_eq!(intent.velocity.y, 0.0);
    assert!(intent.position.is_none());
}

#[test]
fn test_chase_decays_inside_stopping_distance() {
    let mut ai = enemy();
    ai.notify_damaged();
    let motion = AiMotionTuning::default();

    let intent = ai.steer(
        steering(Vec2::ZERO, Vec2::new(0.5, 0.0), Vec2::new(2.0, 0.0)),
        &motion,
        1.0,
    );
    assert!((intent.velocity.x - 1.8).abs() < 1e-5);

    // Below rest speed the velocity is left alone
    let intent = ai.steer(
        steering(Vec2::ZERO, Vec2::new(0.5, 0.0), Vec2::new(0.05, 0.0)),
        &motion,
        1.0,
    );
    assert!((intent.velocity.x - 0.05).abs() < 1e-6);
}

#[test]
fn test_slow_scales_chase_speed() {
    let mut ai = enemy();
    ai.notify_damaged();
    let motion = AiMotionTuning::default();

    let intent = ai.steer(
        steering(Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::ZERO),
        &motion,
        0.5,
    );
    assert!((intent.velocity.x - 0.3).abs() < 1e-5);
}

#[test]
fn test_return_heads_home_then_settles() {
    let mut ai = enemy();
    ai.evaluate(0.0, at(8.0, 0.0));
    ai.evaluate(STEP, at(5.0, 16.0));
    assert_eq!(ai.state(), AiState::Returning);
    let motion = AiMotionTuning::default();

    let intent = ai.steer(
        steering(Vec2::new(0.0, 10.0), Vec2::ZERO, Vec2::ZERO),
        &motion,
        1.0,
    );
    // 10% of the way to 0.7 * 3.0, pointing at the anchor
    assert!((intent.velocity.y + 0.21).abs() < 1e-5);
    assert!(intent.facing.is_some());

    let intent = ai.steer(
        steering(Vec2::new(0.4, 0.0), Vec2::ZERO, Vec2::new(1.0, 0.0)),
        &motion,
        1.0,
    );
    assert_eq!(intent.velocity, Vec2::ZERO);
    let eased = intent.position.unwrap();
    assert!((eased.x - 0.36).abs() < 1e-5);
}

#[test]
fn test_idle_does_not_self_propel() {
    let ai = enemy();
    let motion = AiMotionTuning::default();
    let intent = ai.steer(
        steering(Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(0.4, 0.0)),
        &motion,
        1.0,
    );
    assert_eq!(intent.velocity, Vec2::new(0.4, 0.0));
    assert!(intent.facing.is_none());
    assert!(intent.position.is_none());
}
