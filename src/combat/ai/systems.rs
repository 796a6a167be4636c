//! Combat domain: enemy AI decision and motion systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::ai::enemy::{AiTransition, Distances, EnemyAi, SteeringInput};
use crate::combat::components::{Enemy, EnemyShooter, Player};
use crate::combat::effects::ActiveEffects;
use crate::combat::events::{ShotFired, StunEnemy};
use crate::content::GameplayDefaults;
use crate::lifecycle::Dead;

fn log_transition(entity: Entity, transition: AiTransition) {
    debug!(
        "Enemy {:?}: {:?} -> {:?}",
        entity, transition.from, transition.to
    );
}

pub(crate) fn tick_stuns(
    time: Res<Time>,
    mut query: Query<(Entity, &mut EnemyAi, &mut LinearVelocity), Without<Dead>>,
) {
    let dt = time.delta_secs();
    for (entity, mut ai, mut velocity) in &mut query {
        if let Some(transition) = ai.tick_stun(dt) {
            velocity.0 = Vec2::ZERO;
            log_transition(entity, transition);
        }
    }
}

pub(crate) fn apply_stuns(
    mut stun_events: MessageReader<StunEnemy>,
    mut query: Query<(&mut EnemyAi, &mut LinearVelocity), Without<Dead>>,
) {
    for event in stun_events.read() {
        let Ok((mut ai, mut velocity)) = query.get_mut(event.target) else {
            continue;
        };
        if let Some(transition) = ai.stun(event.duration) {
            log_transition(event.target, transition);
        }
        velocity.0 = Vec2::ZERO;
    }
}

pub(crate) fn update_enemy_ai(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<Dead>)>,
    mut enemy_query: Query<
        (Entity, &Transform, &mut EnemyAi, &mut LinearVelocity),
        (With<Enemy>, Without<Player>, Without<Dead>),
    >,
) {
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();
    let now = time.elapsed_secs();

    for (entity, transform, mut ai, mut velocity) in &mut enemy_query {
        let enemy_pos = transform.translation.truncate();
        let distances = Distances {
            to_target: enemy_pos.distance(player_pos),
            to_anchor: enemy_pos.distance(ai.spawn_anchor()),
        };

        if let Some(transition) = ai.evaluate(now, distances) {
            velocity.0 = Vec2::ZERO;
            log_transition(entity, transition);
        }
    }
}

pub(crate) fn steer_enemies(
    defaults: Res<GameplayDefaults>,
    player_query: Query<&Transform, (With<Player>, Without<Dead>)>,
    mut enemy_query: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &EnemyAi,
            Option<&ActiveEffects>,
        ),
        (With<Enemy>, Without<Player>, Without<Dead>),
    >,
) {
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (mut transform, mut velocity, ai, effects) in &mut enemy_query {
        let speed_multiplier = effects.map_or(1.0, ActiveEffects::speed_multiplier);
        let intent = ai.steer(
            SteeringInput {
                position: transform.translation.truncate(),
                target: player_pos,
                velocity: velocity.0,
                facing: transform.rotation,
            },
            &defaults.ai_motion,
            speed_multiplier,
        );

        velocity.0 = intent.velocity;
        if let Some(facing) = intent.facing {
            transform.rotation = facing;
        }
        if let Some(position) = intent.position {
            transform.translation = position.extend(transform.translation.z);
        }
    }
}

pub(crate) fn fire_enemy_shooters(
    time: Res<Time>,
    mut shots: MessageWriter<ShotFired>,
    player_query: Query<&Transform, (With<Player>, Without<Dead>)>,
    mut shooter_query: Query<
        (Entity, &Transform, &mut EnemyShooter),
        (With<Enemy>, Without<Player>, Without<Dead>),
    >,
) {
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();
    let dt = time.delta_secs();

    for (entity, transform, mut shooter) in &mut shooter_query {
        let origin = transform.translation.truncate();
        if shooter.tick(dt, origin.distance(player_pos)) {
            shots.write(ShotFired {
                shooter: entity,
                origin,
                direction: (player_pos - origin).normalize_or_zero(),
            });
        }
    }
}
