//! Ability effect variants

use crate::types::IceColor;
use serde::{Deserialize, Serialize};

/// What an ability does when it lands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AbilityEffect {
    /// Fixed damage, independent of the user's attack damage
    Basic {
        damage: i32,
        /// Reach in tiles. Informational only.
        #[serde(default = "default_range")]
        range: u32,
    },
    /// User's attack damage times a multiplier
    WeaponScaled { multiplier: i32 },
    /// User's attack damage, then the target burns
    Burn { seconds: u32 },
    /// User's attack damage, then the target is frozen
    Freeze {
        color: IceColor,
        cooldown_seconds: u32,
    },
}

fn default_range() -> u32 {
    1
}

impl AbilityEffect {
    /// Damage dealt for a user with the given attack damage
    ///
    /// Saturates at the `i32` bounds.
    pub fn damage_for(&self, attack_damage: i32) -> i32 {
        match self {
            AbilityEffect::Basic { damage, .. } => *damage,
            AbilityEffect::WeaponScaled { multiplier } => attack_damage.saturating_mul(*multiplier),
            AbilityEffect::Burn { .. } | AbilityEffect::Freeze { .. } => attack_damage,
        }
    }

    /// Whether damage depends on the user's attack damage
    pub fn scales_with_attack(&self) -> bool {
        !matches!(self, AbilityEffect::Basic { .. })
    }

    /// Whether the ability announces itself before its hit lands
    pub fn announces_before_hit(&self) -> bool {
        matches!(self, AbilityEffect::Basic { .. })
    }

    /// Short label for the variant
    pub fn kind(&self) -> &'static str {
        match self {
            AbilityEffect::Basic { .. } => "basic",
            AbilityEffect::WeaponScaled { .. } => "weapon_scaled",
            AbilityEffect::Burn { .. } => "burn",
            AbilityEffect::Freeze { .. } => "freeze",
        }
    }
}
