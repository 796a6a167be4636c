//! Abilities domain: cooldown aging and cast processing.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::abilities::caster::AbilityLoadout;
use crate::abilities::cooldowns::AbilityCooldowns;
use crate::abilities::events::{AbilityCast, CastRejected, CastRequest};
use crate::lifecycle::Dead;
use crate::stats::{ManaChanged, ResourcePool};

pub(crate) fn tick_cooldowns(time: Res<Time>, mut query: Query<&mut AbilityCooldowns>) {
    let dt = time.delta_secs();
    for mut cooldowns in &mut query {
        cooldowns.tick(dt);
    }
}

pub(crate) fn process_cast_requests(
    mut requests: MessageReader<CastRequest>,
    mut casts: MessageWriter<AbilityCast>,
    mut rejections: MessageWriter<CastRejected>,
    mut mana_events: MessageWriter<ManaChanged>,
    mut query: Query<(
        &AbilityLoadout,
        &mut ResourcePool,
        &mut AbilityCooldowns,
        Has<Dead>,
    )>,
) {
    for request in requests.read() {
        let Ok((loadout, mut pool, mut cooldowns, is_dead)) = query.get_mut(request.caster) else {
            continue;
        };

        let mana_before = pool.mana();
        let mut effect_id = None;
        let result = loadout.try_use_index(
            request.slot_index,
            is_dead,
            &mut pool,
            &mut cooldowns,
            |spec| effect_id = Some(spec.effect.clone()),
        );

        match (result, effect_id) {
            (Ok(slot), Some(effect)) => {
                debug!(
                    "Entity {:?} cast {:?} ({})",
                    request.caster, slot, effect
                );
                if pool.mana() != mana_before {
                    mana_events.write(ManaChanged {
                        entity: request.caster,
                        current: pool.mana(),
                        max: pool.max_mana(),
                    });
                }
                casts.write(AbilityCast {
                    caster: request.caster,
                    slot,
                    effect,
                });
            }
            (Ok(_), None) => {}
            (Err(reason), _) => {
                debug!(
                    "Entity {:?} cast of slot {} rejected: {}",
                    request.caster, request.slot_index, reason
                );
                rejections.write(CastRejected {
                    caster: request.caster,
                    slot_index: request.slot_index,
                    reason,
                });
            }
        }
    }
}
