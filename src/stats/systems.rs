//! Stats domain: experience and consumable systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::lifecycle::Dead;
use crate::stats::events::{ConsumeItem, ExperienceGained, HealthChanged, LeveledUp, ManaChanged};
use crate::stats::pool::ResourcePool;

pub(crate) fn apply_experience(
    mut xp_events: MessageReader<ExperienceGained>,
    mut level_events: MessageWriter<LeveledUp>,
    mut health_events: MessageWriter<HealthChanged>,
    mut mana_events: MessageWriter<ManaChanged>,
    mut query: Query<&mut ResourcePool, Without<Dead>>,
) {
    for event in xp_events.read() {
        let Ok(mut pool) = query.get_mut(event.entity) else {
            continue;
        };
        // Killed this tick; `Dead` lands later in the tick
        if pool.is_depleted() {
            continue;
        }

        let levels = pool.gain_xp(event.amount);
        debug!(
            "Entity {:?} gained {} XP ({}/{})",
            event.entity,
            event.amount,
            pool.xp(),
            pool.xp_to_next()
        );

        if levels.is_empty() {
            continue;
        }

        for new_level in levels {
            info!("Entity {:?} reached level {}", event.entity, new_level);
            level_events.write(LeveledUp {
                entity: event.entity,
                new_level,
            });
        }
        health_events.write(HealthChanged {
            entity: event.entity,
            current: pool.health(),
            max: pool.max_health(),
        });
        mana_events.write(ManaChanged {
            entity: event.entity,
            current: pool.mana(),
            max: pool.max_mana(),
        });
    }
}

pub(crate) fn apply_consumables(
    mut consume_events: MessageReader<ConsumeItem>,
    mut health_events: MessageWriter<HealthChanged>,
    mut mana_events: MessageWriter<ManaChanged>,
    registry: Res<ContentRegistry>,
    mut query: Query<&mut ResourcePool, Without<Dead>>,
) {
    for event in consume_events.read() {
        let Some(item) = registry.consumable(&event.item_id) else {
            warn!("Consumable '{}' not found in registry", event.item_id);
            continue;
        };
        let Ok(mut pool) = query.get_mut(event.entity) else {
            continue;
        };

        if item.health_restore > 0 && pool.heal(item.health_restore) {
            health_events.write(HealthChanged {
                entity: event.entity,
                current: pool.health(),
                max: pool.max_health(),
            });
        }
        if item.mana_restore > 0 && pool.restore_mana(item.mana_restore) {
            mana_events.write(ManaChanged {
                entity: event.entity,
                current: pool.mana(),
                max: pool.max_mana(),
            });
        }

        debug!("Entity {:?} used {}", event.entity, item.name);
    }
}
