//! Headless demo run: a necromancer fights the shipped enemy roster under a
//! scripted cast rotation, with logging standing in for the HUD.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use emberfall::EmberfallPlugin;
use emberfall::abilities::{AbilityCast, AbilitySlot, CastRejected, CastRequest};
use emberfall::combat::{
    ApplyCurse, DamageEvent, Enemy, LootDropped, Player, ShotFired, StunEnemy, spawn_enemy,
    spawn_player,
};
use emberfall::content::{ContentRegistry, GameplayDefaults, load_content};
use emberfall::lifecycle::{Dead, LivesExhausted, Respawned};
use emberfall::sim::{RunConfig, RunStats, SimSet};
use emberfall::stats::{ConsumeItem, LeveledUp, ResourcePool};

const TICK_RATE: f64 = 60.0;
const RUN_SECONDS: f64 = 90.0;
const CAST_INTERVAL: f32 = 1.5;

/// What an ability effect id does once it lands.
#[derive(Debug, Clone, Copy, Default)]
struct EffectProfile {
    damage: i32,
    /// Hits every enemy within this radius of the caster instead of the nearest
    radius: Option<f32>,
    stun: Option<f32>,
    /// (damage per second, duration, slow fraction)
    curse: Option<(i32, f32, f32)>,
}

fn effect_profile(effect: &str) -> Option<EffectProfile> {
    let profile = match effect {
        "fire_bolt" => EffectProfile {
            damage: 30,
            ..default()
        },
        "flame_wave" => EffectProfile {
            damage: 20,
            radius: Some(4.0),
            ..default()
        },
        "inferno" => EffectProfile {
            damage: 60,
            radius: Some(8.0),
            ..default()
        },
        "frost_bolt" => EffectProfile {
            damage: 25,
            stun: Some(0.5),
            ..default()
        },
        "frost_nova" => EffectProfile {
            damage: 10,
            radius: Some(4.0),
            stun: Some(2.0),
            ..default()
        },
        "blizzard" => EffectProfile {
            damage: 40,
            radius: Some(8.0),
            stun: Some(1.0),
            ..default()
        },
        "shadow_bolt" => EffectProfile {
            damage: 35,
            curse: Some((5, 3.0, 0.3)),
            ..default()
        },
        "curse" => EffectProfile {
            curse: Some((10, 5.0, 0.5)),
            ..default()
        },
        "soul_harvest" => EffectProfile {
            damage: 50,
            radius: Some(6.0),
            curse: Some((5, 3.0, 0.3)),
            ..default()
        },
        _ => return None,
    };
    Some(profile)
}

fn main() {
    let step = Duration::from_secs_f64(1.0 / TICK_RATE);

    let mut app = App::new();
    app.insert_resource(RunConfig {
        seed: 7,
        tick_rate: TICK_RATE,
    })
    .add_plugins(MinimalPlugins)
    .add_plugins(LogPlugin {
        filter: "info,emberfall=debug".to_string(),
        ..default()
    })
    .add_plugins(EmberfallPlugin::default())
    .insert_resource(TimeUpdateStrategy::ManualDuration(step))
    .init_resource::<GameOver>()
    .add_systems(Startup, spawn_roster.after(load_content))
    .add_systems(
        FixedUpdate,
        (
            scripted_casts.before(SimSet::Casting),
            (resolve_ability_effects, resolve_enemy_shots)
                .after(SimSet::AiMotion)
                .before(SimSet::Damage),
            integrate_velocity
                .after(SimSet::AiMotion)
                .before(SimSet::Damage),
            (collect_loot, report_events).after(SimSet::Lifecycle),
        ),
    );

    app.finish();
    app.cleanup();

    let ticks = (RUN_SECONDS * TICK_RATE) as usize;
    for _ in 0..ticks {
        app.update();
        let exhausted = app
            .world()
            .get_resource::<GameOver>()
            .is_some_and(|over| over.0);
        if exhausted {
            break;
        }
    }

    if let Some(stats) = app.world().get_resource::<RunStats>() {
        info!(
            "Run finished: {} enemies killed, {} player deaths",
            stats.enemies_killed, stats.player_deaths
        );
    }
}

#[derive(Resource, Default)]
struct GameOver(bool);

fn spawn_roster(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    defaults: Res<GameplayDefaults>,
) {
    let Some(class) = registry.class("necromancer") else {
        warn!("Class 'necromancer' not loaded; nothing to run");
        return;
    };
    spawn_player(&mut commands, class, &defaults.player, Vec2::ZERO);

    let roster = [
        ("skeleton", Vec2::new(7.0, 0.0)),
        ("skeleton", Vec2::new(-6.0, 5.0)),
        ("skeleton_archer", Vec2::new(0.0, -9.0)),
        ("training_dummy", Vec2::new(2.0, 2.0)),
    ];
    for (id, position) in roster {
        match registry.enemy(id) {
            Some(def) => {
                spawn_enemy(&mut commands, def, position);
            }
            None => warn!("Enemy '{}' not loaded", id),
        }
    }
}

fn scripted_casts(
    time: Res<Time>,
    mut next_cast: Local<f32>,
    mut slot_cursor: Local<usize>,
    mut requests: MessageWriter<CastRequest>,
    player_query: Query<Entity, (With<Player>, Without<Dead>)>,
) {
    let Some(player) = player_query.iter().next() else {
        return;
    };
    if time.elapsed_secs() < *next_cast {
        return;
    }
    *next_cast = time.elapsed_secs() + CAST_INTERVAL;

    requests.write(CastRequest {
        caster: player,
        slot_index: *slot_cursor % AbilitySlot::ALL.len(),
    });
    *slot_cursor += 1;
}

fn resolve_ability_effects(
    mut casts: MessageReader<AbilityCast>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut stun_events: MessageWriter<StunEnemy>,
    mut curse_events: MessageWriter<ApplyCurse>,
    caster_query: Query<&Transform, With<Player>>,
    enemy_query: Query<(Entity, &Transform), (With<Enemy>, Without<Dead>)>,
) {
    for cast in casts.read() {
        let Some(profile) = effect_profile(&cast.effect) else {
            warn!("No effect registered for '{}'", cast.effect);
            continue;
        };
        let Ok(caster) = caster_query.get(cast.caster) else {
            continue;
        };
        let origin = caster.translation.truncate();

        let mut by_distance: Vec<(Entity, f32)> = enemy_query
            .iter()
            .map(|(entity, transform)| {
                (entity, transform.translation.truncate().distance(origin))
            })
            .collect();
        by_distance.sort_by(|a, b| a.1.total_cmp(&b.1));

        let targets: Vec<Entity> = match profile.radius {
            Some(radius) => by_distance
                .iter()
                .filter(|(_, distance)| *distance <= radius)
                .map(|(entity, _)| *entity)
                .collect(),
            None => by_distance.first().map(|(entity, _)| *entity).into_iter().collect(),
        };

        for target in targets {
            if profile.damage > 0 {
                damage_events.write(DamageEvent {
                    source: Some(cast.caster),
                    target,
                    amount: profile.damage,
                });
            }
            if let Some(duration) = profile.stun {
                stun_events.write(StunEnemy { target, duration });
            }
            if let Some((damage_per_second, duration, slow_fraction)) = profile.curse {
                curse_events.write(ApplyCurse {
                    source: Some(cast.caster),
                    target,
                    damage_per_second,
                    duration,
                    slow_fraction,
                });
            }
        }
    }
}

/// Shots land instantly for the shooter's attack power.
fn resolve_enemy_shots(
    mut shots: MessageReader<ShotFired>,
    mut damage_events: MessageWriter<DamageEvent>,
    shooter_query: Query<&ResourcePool, With<Enemy>>,
    player_query: Query<Entity, (With<Player>, Without<Dead>)>,
) {
    let Some(player) = player_query.iter().next() else {
        return;
    };
    for shot in shots.read() {
        let Ok(pool) = shooter_query.get(shot.shooter) else {
            continue;
        };
        damage_events.write(DamageEvent {
            source: Some(shot.shooter),
            target: player,
            amount: pool.attack_power(),
        });
    }
}

/// No physics backend runs here, so velocity intents move transforms directly.
fn integrate_velocity(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &LinearVelocity), Without<Dead>>,
) {
    let dt = time.delta_secs();
    for (mut transform, velocity) in &mut query {
        transform.translation += (velocity.0 * dt).extend(0.0);
    }
}

/// Dropped potions go straight into the player's mouth.
fn collect_loot(
    mut drops: MessageReader<LootDropped>,
    mut consume: MessageWriter<ConsumeItem>,
    player_query: Query<Entity, (With<Player>, Without<Dead>)>,
) {
    let Some(player) = player_query.iter().next() else {
        return;
    };
    for drop in drops.read() {
        for _ in 0..drop.count {
            consume.write(ConsumeItem {
                entity: player,
                item_id: drop.item_id.clone(),
            });
        }
    }
}

fn report_events(
    mut level_ups: MessageReader<LeveledUp>,
    mut rejections: MessageReader<CastRejected>,
    mut respawns: MessageReader<Respawned>,
    mut exhausted: MessageReader<LivesExhausted>,
    mut game_over: ResMut<GameOver>,
) {
    for event in level_ups.read() {
        info!("Level up! {:?} is now level {}", event.entity, event.new_level);
    }
    for event in rejections.read() {
        debug!("Cast slot {} refused: {}", event.slot_index, event.reason);
    }
    for event in respawns.read() {
        debug!("{:?} back at {:?}", event.entity, event.position);
    }
    if exhausted.read().next().is_some() {
        info!("Out of lives");
        game_over.0 = true;
    }
}
