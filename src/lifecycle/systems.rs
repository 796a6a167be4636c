//! Lifecycle domain: death handling and respawn systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::abilities::AbilityCooldowns;
use crate::combat::{ActiveEffects, Enemy, EnemyAi, Player};
use crate::content::GameplayDefaults;
use crate::lifecycle::components::{DeathOutcome, Dead, RespawnLifecycle};
use crate::lifecycle::events::{Died, LivesExhausted, Respawned};
use crate::sim::RunStats;
use crate::stats::{HealthChanged, ManaChanged, ResourcePool};

pub(crate) fn tick_lifecycles(time: Res<Time>, mut query: Query<&mut RespawnLifecycle>) {
    let dt = time.delta_secs();
    for mut lifecycle in &mut query {
        lifecycle.tick(dt);
    }
}

pub(crate) fn handle_deaths(
    mut commands: Commands,
    mut died_events: MessageReader<Died>,
    mut exhausted_events: MessageWriter<LivesExhausted>,
    mut stats: ResMut<RunStats>,
    mut query: Query<(
        Option<&mut RespawnLifecycle>,
        Option<&mut ActiveEffects>,
        Option<&mut LinearVelocity>,
        Has<Player>,
        Has<Enemy>,
    )>,
) {
    for event in died_events.read() {
        let Ok((lifecycle, effects, velocity, is_player, is_enemy)) = query.get_mut(event.entity)
        else {
            continue;
        };

        let outcome = match lifecycle {
            Some(mut lifecycle) => lifecycle.on_health_reached_zero(),
            None => DeathOutcome::Terminal,
        };
        if outcome == DeathOutcome::AlreadyDead {
            continue;
        }

        if is_player {
            stats.player_deaths += 1;
        }
        if let Some(mut effects) = effects {
            effects.clear();
        }
        if let Some(mut velocity) = velocity {
            velocity.0 = Vec2::ZERO;
        }

        match outcome {
            DeathOutcome::RespawnScheduled { respawn_in } => {
                info!("Entity {:?} died, respawning in {:.1}s", event.entity, respawn_in);
                commands.entity(event.entity).insert(Dead);
            }
            DeathOutcome::Terminal if is_enemy => {
                debug!("Enemy {:?} died", event.entity);
                commands.entity(event.entity).despawn();
            }
            DeathOutcome::Terminal => {
                info!("Entity {:?} died with no lives left", event.entity);
                commands.entity(event.entity).insert(Dead);
                exhausted_events.write(LivesExhausted {
                    entity: event.entity,
                });
            }
            DeathOutcome::AlreadyDead => {}
        }
    }
}

pub(crate) fn complete_respawns(
    mut commands: Commands,
    time: Res<Time>,
    defaults: Res<GameplayDefaults>,
    mut respawned_events: MessageWriter<Respawned>,
    mut health_events: MessageWriter<HealthChanged>,
    mut mana_events: MessageWriter<ManaChanged>,
    player_query: Query<&Transform, (With<Player>, Without<Dead>)>,
    mut query: Query<
        (
            Entity,
            &mut RespawnLifecycle,
            &mut ResourcePool,
            &mut Transform,
            Option<&mut AbilityCooldowns>,
            Option<&mut EnemyAi>,
            Option<&mut LinearVelocity>,
        ),
        With<Dead>,
    >,
) {
    let guard = defaults.respawn_guard;
    let player_positions: Vec<Vec2> = player_query
        .iter()
        .map(|transform| transform.translation.truncate())
        .collect();

    for (entity, mut lifecycle, mut pool, mut transform, cooldowns, ai, velocity) in &mut query {
        if !lifecycle.is_respawn_due() {
            continue;
        }

        // One deferral per death; after it the enemy comes back regardless
        if ai.is_some() && !lifecycle.is_respawn_deferred() {
            let point = lifecycle.respawn_point;
            let blocked = player_positions
                .iter()
                .any(|player| player.distance(point) < guard.radius);
            if blocked && lifecycle.defer_respawn(guard.delay) {
                debug!("Respawn of {:?} deferred, player near spawn", entity);
                continue;
            }
        }

        let Some(position) = lifecycle.respawn(&mut pool, cooldowns.map(|c| c.into_inner()))
        else {
            continue;
        };

        transform.translation = position.extend(transform.translation.z);
        if let Some(mut velocity) = velocity {
            velocity.0 = Vec2::ZERO;
        }
        if let Some(mut ai) = ai {
            transform.rotation = ai.spawn_facing();
            ai.reset(time.elapsed_secs());
        }
        commands.entity(entity).remove::<Dead>();

        info!("Entity {:?} respawned at {:?}", entity, position);
        respawned_events.write(Respawned { entity, position });
        health_events.write(HealthChanged {
            entity,
            current: pool.health(),
            max: pool.max_health(),
        });
        mana_events.write(ManaChanged {
            entity,
            current: pool.mana(),
            max: pool.max_mana(),
        });
    }
}
