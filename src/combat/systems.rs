//! Combat domain: effects, damage application and kill rewards.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::ai::EnemyAi;
use crate::combat::components::{Enemy, EnemyReward, Player};
use crate::combat::effects::{ActiveEffects, Curse};
use crate::combat::events::{ApplyCurse, DamageEvent, LootDropped};
use crate::combat::loot::LootTable;
use crate::lifecycle::{Dead, Died, RespawnLifecycle};
use crate::sim::{RunStats, SimRng};
use crate::stats::{DamageGuard, DamageOutcome, ExperienceGained, HealthChanged, ResourcePool};

pub(crate) fn tick_effects(
    time: Res<Time>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut query: Query<(Entity, &mut ActiveEffects), Without<Dead>>,
) {
    let dt = time.delta_secs();
    for (entity, mut effects) in &mut query {
        if let Some(damage) = effects.tick(dt) {
            damage_events.write(DamageEvent {
                source: damage.source,
                target: entity,
                amount: damage.amount,
            });
        }
    }
}

pub(crate) fn apply_curses(
    mut curse_events: MessageReader<ApplyCurse>,
    mut query: Query<&mut ActiveEffects, Without<Dead>>,
) {
    for event in curse_events.read() {
        let Ok(mut effects) = query.get_mut(event.target) else {
            continue;
        };
        let refreshed = effects.curse().is_some();
        effects.apply_curse(Curse::new(
            event.source,
            event.damage_per_second,
            event.duration,
            event.slow_fraction,
        ));
        debug!(
            "Curse {} on {:?} ({} dps for {:.1}s)",
            if refreshed { "refreshed" } else { "applied" },
            event.target,
            event.damage_per_second,
            event.duration
        );
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut health_events: MessageWriter<HealthChanged>,
    mut died_events: MessageWriter<Died>,
    mut query: Query<(
        &mut ResourcePool,
        Option<&RespawnLifecycle>,
        Option<&mut EnemyAi>,
        Option<&mut LinearVelocity>,
        Has<Dead>,
    )>,
) {
    for event in damage_events.read() {
        let Ok((mut pool, lifecycle, ai, velocity, is_dead)) = query.get_mut(event.target) else {
            continue;
        };

        let mut guard = lifecycle.map_or(DamageGuard::default(), RespawnLifecycle::damage_guard);
        guard.dead |= is_dead;

        let outcome = pool.take_damage(event.amount, guard);
        if outcome == DamageOutcome::Ignored {
            continue;
        }

        debug!(
            "{:?} took {} damage ({}/{})",
            event.target,
            event.amount,
            pool.health(),
            pool.max_health()
        );
        health_events.write(HealthChanged {
            entity: event.target,
            current: pool.health(),
            max: pool.max_health(),
        });

        if outcome == DamageOutcome::Killed {
            died_events.write(Died {
                entity: event.target,
                killer: event.source,
            });
            continue;
        }

        let Some(mut ai) = ai else {
            continue;
        };
        if ai.notify_damaged().is_some() {
            debug!("Enemy {:?} aggroed by damage", event.target);
            if let Some(mut velocity) = velocity {
                velocity.0 = Vec2::ZERO;
            }
        }
    }
}

pub(crate) fn reward_enemy_deaths(
    mut died_events: MessageReader<Died>,
    mut xp_events: MessageWriter<ExperienceGained>,
    mut loot_events: MessageWriter<LootDropped>,
    mut stats: ResMut<RunStats>,
    mut rng: ResMut<SimRng>,
    player_query: Query<Entity, (With<Player>, Without<Dead>)>,
    enemy_query: Query<(&Transform, &EnemyReward, Option<&LootTable>), With<Enemy>>,
) {
    for event in died_events.read() {
        let Ok((transform, reward, loot)) = enemy_query.get(event.entity) else {
            continue;
        };

        stats.enemies_killed += 1;

        let recipient = event
            .killer
            .filter(|killer| player_query.contains(*killer))
            .or_else(|| player_query.iter().next());
        if let Some(player) = recipient.filter(|_| reward.xp_reward > 0) {
            xp_events.write(ExperienceGained {
                entity: player,
                amount: reward.xp_reward,
            });
        }

        let Some(loot) = loot else {
            continue;
        };
        if let Some(count) = loot.roll(&mut rng.rng) {
            info!("Enemy {:?} dropped {} x{}", event.entity, loot.item_id, count);
            loot_events.write(LootDropped {
                enemy: event.entity,
                position: transform.translation.truncate(),
                item_id: loot.item_id.clone(),
                count,
            });
        }
    }
}
