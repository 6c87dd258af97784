//! CombatEvent - One line's worth of combat log

use crate::types::IceColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single fact produced during an attack
///
/// Every variant renders to exactly one log line through `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CombatEvent {
    /// A hero starts an attack
    AttackStarted { attacker: String, target: String },
    /// An ability is used against a target
    AbilityUsed {
        user: String,
        ability: String,
        target: String,
    },
    /// A hero is hit
    DamageTaken {
        target: String,
        damage: i32,
        attacker: String,
    },
    /// Burn applied by a fire ability
    Burning { target: String, seconds: u32 },
    /// Freeze applied by an ice ability
    Frozen { target: String, color: IceColor },
    /// Cooldown reported after a freeze
    Cooldown { seconds: u32 },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::AttackStarted { attacker, target } => {
                write!(f, "{} is attacking {}", attacker, target)
            }
            CombatEvent::AbilityUsed {
                user,
                ability,
                target,
            } => write!(f, "{} uses {} on {}", user, ability, target),
            CombatEvent::DamageTaken {
                target,
                damage,
                attacker,
            } => write!(f, "{} takes {} damage from {}", target, damage, attacker),
            CombatEvent::Burning { target, seconds } => {
                write!(f, "{} is burning for {} seconds", target, seconds)
            }
            CombatEvent::Frozen { target, color } => {
                write!(f, "Freezing {} with {} ice", target, color)
            }
            CombatEvent::Cooldown { seconds } => write!(f, "Cooldown time: {} seconds", seconds),
        }
    }
}
