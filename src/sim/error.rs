//! Sim domain: recoverable gameplay outcomes.

/// Why an action (cast, mana spend) was refused.
///
/// These are expected results of normal play, not failures: the caller
/// reports them (UI flash, log line) and simply tries again on a later input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The ability's cooldown has not elapsed yet.
    #[error("ability is on cooldown")]
    OnCooldown,

    /// Not enough mana to pay the cost.
    #[error("insufficient mana")]
    InsufficientResource,

    /// The acting actor is dead or waiting to respawn.
    #[error("actor is dead")]
    ActorDead,

    /// Ability index outside the three hotbar slots.
    #[error("ability slot {0} does not exist")]
    InvalidSlot(usize),
}
