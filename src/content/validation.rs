//! Validation for cross-references and tuning ranges in loaded content.

use super::data::*;
use super::registry::ContentRegistry;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{source_type} '{source_id}' references missing {target_type} '{missing_id}' in field '{field}'")]
    MissingReference {
        source_type: &'static str,
        source_id: String,
        field: &'static str,
        target_type: &'static str,
        missing_id: String,
    },
    #[error("{source_type} '{source_id}' has invalid '{field}': {reason}")]
    OutOfRange {
        source_type: &'static str,
        source_id: String,
        field: &'static str,
        reason: &'static str,
    },
}

macro_rules! check_ref {
    ($errors:expr, $registry_map:expr, $source_type:expr, $source_id:expr, $field:expr, $target_type:expr, $ref_id:expr) => {
        if !$registry_map.contains_key($ref_id) {
            $errors.push(ValidationError::MissingReference {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                target_type: $target_type,
                missing_id: $ref_id.to_string(),
            });
        }
    };
}

macro_rules! check_range {
    ($errors:expr, $ok:expr, $source_type:expr, $source_id:expr, $field:expr, $reason:expr) => {
        if !$ok {
            $errors.push(ValidationError::OutOfRange {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                reason: $reason,
            });
        }
    };
}

/// Validate every loaded definition. Empty when everything checks out.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, class) in &registry.classes {
        let stats = &class.stats;
        check_range!(errors, stats.base_health > 0, "Class", id, "stats.base_health", "must be positive");
        check_range!(errors, stats.base_mana >= 0, "Class", id, "stats.base_mana", "must not be negative");

        for (field, spec) in [
            ("abilities.primary", &class.abilities.primary),
            ("abilities.secondary", &class.abilities.secondary),
            ("abilities.ultimate", &class.abilities.ultimate),
        ] {
            check_range!(errors, spec.cooldown >= 0.0, "Class", id, field, "cooldown must not be negative");
            check_range!(errors, spec.mana_cost >= 0, "Class", id, field, "mana cost must not be negative");
        }
    }

    for (id, enemy) in &registry.enemies {
        check_range!(errors, enemy.max_health > 0, "Enemy", id, "max_health", "must be positive");
        check_range!(errors, enemy.xp_reward >= 0, "Enemy", id, "xp_reward", "must not be negative");

        let ai = &enemy.ai;
        check_range!(
            errors,
            ai.stopping_distance < ai.chase_range,
            "Enemy",
            id,
            "ai.stopping_distance",
            "must be below chase_range"
        );
        check_range!(
            errors,
            ai.chase_range <= ai.leash_range,
            "Enemy",
            id,
            "ai.leash_range",
            "must not be below chase_range"
        );
        check_range!(errors, ai.state_change_delay >= 0.0, "Enemy", id, "ai.state_change_delay", "must not be negative");

        if let Some(loot) = &enemy.loot {
            check_ref!(errors, registry.consumables, "Enemy", id, "loot.item_id", "Consumable", &loot.item_id);
            check_range!(
                errors,
                (0.0..=1.0).contains(&loot.drop_chance),
                "Enemy",
                id,
                "loot.drop_chance",
                "must be within [0, 1]"
            );
            check_range!(errors, loot.min <= loot.max, "Enemy", id, "loot.min", "must not exceed loot.max");
        }
        if let Some(shooter) = &enemy.shooter {
            check_range!(errors, shooter.interval > 0.0, "Enemy", id, "shooter.interval", "must be positive");
        }
    }

    for (id, item) in &registry.consumables {
        check_range!(
            errors,
            item.health_restore >= 0 && item.mana_restore >= 0,
            "Consumable",
            id,
            "restore",
            "must not be negative"
        );
    }

    errors
}
