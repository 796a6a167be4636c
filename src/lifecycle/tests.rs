//! Lifecycle domain: unit tests for death, lives and respawn timing.

use bevy::prelude::*;

use super::{DeathOutcome, LifePhase, Lives, RespawnLifecycle};
use crate::abilities::{AbilityCooldowns, AbilitySlot};
use crate::stats::{DamageGuard, ResourcePool, StatGrowth};

fn player_lifecycle(lives: u32) -> RespawnLifecycle {
    RespawnLifecycle::new(Lives::limited(lives), Vec2::new(2.0, 3.0), 3.0).with_invulnerability(2.0)
}

fn pool() -> ResourcePool {
    ResourcePool::from_class(&StatGrowth::flat(100, 50, 10), 1)
}

// --- Death ---

#[test]
fn test_death_with_lives_left_schedules_respawn() {
    let mut lifecycle = player_lifecycle(3);

    let outcome = lifecycle.on_health_reached_zero();
    assert_eq!(outcome, DeathOutcome::RespawnScheduled { respawn_in: 3.0 });
    assert!(lifecycle.is_dead());
    assert_eq!(lifecycle.lives().remaining(), Some(2));
}

#[test]
fn test_second_death_notification_is_ignored() {
    let mut lifecycle = player_lifecycle(3);
    lifecycle.on_health_reached_zero();

    assert_eq!(lifecycle.on_health_reached_zero(), DeathOutcome::AlreadyDead);
    assert_eq!(lifecycle.lives().remaining(), Some(2));
}

#[test]
fn test_last_life_is_terminal() {
    let mut lifecycle = player_lifecycle(1);
    assert_eq!(lifecycle.on_health_reached_zero(), DeathOutcome::Terminal);
    assert!(lifecycle.is_terminal());
    assert_eq!(lifecycle.lives().remaining(), Some(0));

    // Terminal actors never come back
    lifecycle.tick(100.0);
    assert!(!lifecycle.is_respawn_due());
    let mut pool = pool();
    assert!(lifecycle.respawn(&mut pool, None).is_none());
}

#[test]
fn test_unlimited_lives_always_respawn() {
    let mut lifecycle = RespawnLifecycle::new(Lives::Unlimited, Vec2::ZERO, 10.0);
    for _ in 0..5 {
        assert!(matches!(
            lifecycle.on_health_reached_zero(),
            DeathOutcome::RespawnScheduled { .. }
        ));
        lifecycle.tick(10.0);
        let mut pool = pool();
        assert!(lifecycle.respawn(&mut pool, None).is_some());
    }
}

// --- Respawn ---

#[test]
fn test_respawn_waits_for_timer() {
    let mut lifecycle = player_lifecycle(3);
    lifecycle.on_health_reached_zero();

    lifecycle.tick(2.0);
    assert!(!lifecycle.is_respawn_due());
    lifecycle.tick(1.0);
    assert!(lifecycle.is_respawn_due());
}

#[test]
fn test_respawn_restores_actor() {
    let mut lifecycle = player_lifecycle(3);
    let mut pool = pool();
    let mut cooldowns = AbilityCooldowns::default();
    cooldowns.start_cooldown(AbilitySlot::Ultimate, 10.0);

    pool.spend_mana(50).unwrap();
    pool.take_damage(100, lifecycle.damage_guard());
    lifecycle.on_health_reached_zero();
    lifecycle.tick(3.0);

    let position = lifecycle.respawn(&mut pool, Some(&mut cooldowns));
    assert_eq!(position, Some(Vec2::new(2.0, 3.0)));
    assert_eq!(lifecycle.phase(), LifePhase::Alive);
    assert_eq!(pool.health(), 100);
    assert_eq!(pool.mana(), 50);
    assert!(cooldowns.is_ready(AbilitySlot::Ultimate));
}

#[test]
fn test_defer_respawn_pushes_timer_back() {
    let mut lifecycle = RespawnLifecycle::new(Lives::Unlimited, Vec2::ZERO, 10.0);
    lifecycle.on_health_reached_zero();
    lifecycle.tick(10.0);
    assert!(lifecycle.is_respawn_due());

    assert!(lifecycle.defer_respawn(5.0));
    assert!(!lifecycle.is_respawn_due());
    lifecycle.tick(5.0);
    assert!(lifecycle.is_respawn_due());
}

#[test]
fn test_respawn_defers_only_once_per_death() {
    let mut lifecycle = RespawnLifecycle::new(Lives::Unlimited, Vec2::ZERO, 10.0);
    let mut pool = pool();
    lifecycle.on_health_reached_zero();
    lifecycle.tick(10.0);

    assert!(lifecycle.defer_respawn(5.0));
    lifecycle.tick(5.0);
    assert!(lifecycle.is_respawn_due());
    assert!(!lifecycle.defer_respawn(5.0));
    assert!(lifecycle.is_respawn_due());

    // The next death gets a fresh deferral
    assert!(lifecycle.respawn(&mut pool, None).is_some());
    assert!(!lifecycle.is_respawn_deferred());
    lifecycle.on_health_reached_zero();
    lifecycle.tick(10.0);
    assert!(lifecycle.defer_respawn(5.0));
}

#[test]
fn test_alive_actor_cannot_defer() {
    let mut lifecycle = player_lifecycle(3);
    assert!(!lifecycle.defer_respawn(5.0));
    assert!(!lifecycle.is_respawn_deferred());
}

#[test]
fn test_set_respawn_point_moves_next_respawn() {
    let mut lifecycle = player_lifecycle(3);
    lifecycle.set_respawn_point(Vec2::new(-4.0, 1.0));
    lifecycle.on_health_reached_zero();
    lifecycle.tick(3.0);

    let mut pool = pool();
    assert_eq!(lifecycle.respawn(&mut pool, None), Some(Vec2::new(-4.0, 1.0)));
}

// --- Invulnerability ---

#[test]
fn test_respawn_invulnerability_blocks_damage_then_expires() {
    let mut lifecycle = player_lifecycle(3);
    let mut pool = pool();
    lifecycle.on_health_reached_zero();
    lifecycle.tick(3.0);
    lifecycle.respawn(&mut pool, None);

    assert!(lifecycle.is_invulnerable());
    pool.take_damage(30, lifecycle.damage_guard());
    assert_eq!(pool.health(), 100);

    lifecycle.tick(2.0);
    assert!(!lifecycle.is_invulnerable());
    pool.take_damage(30, lifecycle.damage_guard());
    assert_eq!(pool.health(), 70);
}

#[test]
fn test_dead_guard_blocks_damage() {
    let mut lifecycle = player_lifecycle(3);
    lifecycle.on_health_reached_zero();
    assert_eq!(
        lifecycle.damage_guard(),
        DamageGuard {
            dead: true,
            invulnerable: false
        }
    );
}

// --- Lives ---

#[test]
fn test_add_life_caps_at_max() {
    let mut lifecycle = player_lifecycle(3);
    assert!(!lifecycle.add_life());

    lifecycle.on_health_reached_zero();
    assert!(lifecycle.add_life());
    assert_eq!(lifecycle.lives().remaining(), Some(3));
    assert!(!lifecycle.add_life());

    let mut unlimited = RespawnLifecycle::new(Lives::Unlimited, Vec2::ZERO, 1.0);
    assert!(!unlimited.add_life());
}
