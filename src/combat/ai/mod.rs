//! Combat domain: enemy AI state machine and its systems.

pub(crate) mod enemy;
pub(crate) mod systems;

#[cfg(test)]
mod tests;

pub use enemy::{
    ARRIVE_RADIUS, AiState, AiTransition, AiTuning, Distances, EnemyAi, MotionIntent,
    SteeringInput,
};
pub(crate) use systems::{
    apply_stuns, fire_enemy_shooters, steer_enemies, tick_stuns, update_enemy_ai,
};
