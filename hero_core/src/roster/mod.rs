//! Roster - Preset hero builds assembled from ability building blocks

use crate::ability::Ability;
use crate::hero::Hero;
use crate::types::IceColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name shared by every preset's opening strike
pub const BASIC_ATTACK_NAME: &str = "Basic Attack";
/// Damage of the shared opening strike
pub const BASIC_ATTACK_DAMAGE: i32 = 10;
/// Reach of the shared opening strike
pub const BASIC_ATTACK_RANGE: u32 = 1;

/// The strike every preset opens with
pub fn basic_attack() -> Ability {
    Ability::basic(BASIC_ATTACK_NAME, BASIC_ATTACK_DAMAGE, BASIC_ATTACK_RANGE)
}

/// Basic attack, then a sword swing at double attack damage
pub fn sword_hero(name: impl Into<String>) -> Hero {
    Hero::new(
        name,
        vec![basic_attack(), Ability::weapon_scaled("Sword Attack", 2)],
    )
}

/// Basic attack, then a fire strike that burns for 3 seconds
pub fn fire_hero(name: impl Into<String>) -> Hero {
    Hero::new(name, vec![basic_attack(), Ability::burn("Fire Attack", 3)])
}

/// Basic attack, then a blue freeze with a 4 second cooldown
pub fn freeze_hero(name: impl Into<String>) -> Hero {
    Hero::new(
        name,
        vec![
            basic_attack(),
            Ability::freeze("Freeze Attack", IceColor::Blue, 4),
        ],
    )
}

/// Errors from naming presets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Unknown hero preset '{0}'")]
    UnknownPreset(String),
}

/// Named preset builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroPreset {
    Sword,
    Fire,
    Freeze,
}

impl HeroPreset {
    /// Get all presets
    pub fn all() -> &'static [HeroPreset] {
        &[HeroPreset::Sword, HeroPreset::Fire, HeroPreset::Freeze]
    }

    /// Build a hero of this preset
    pub fn build(self, name: impl Into<String>) -> Hero {
        match self {
            HeroPreset::Sword => sword_hero(name),
            HeroPreset::Fire => fire_hero(name),
            HeroPreset::Freeze => freeze_hero(name),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeroPreset::Sword => "sword",
            HeroPreset::Fire => "fire",
            HeroPreset::Freeze => "freeze",
        }
    }
}

impl fmt::Display for HeroPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeroPreset {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeroPreset::all()
            .iter()
            .copied()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RosterError::UnknownPreset(s.to_string()))
    }
}
