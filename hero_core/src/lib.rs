//! hero_core - Hero and ability composition for turn-based combat
//!
//! This library provides:
//! - Ability: Named combat behaviour (basic, weapon-scaled, burn, freeze)
//! - Hero: Ordered abilities plus attack damage; resolves attacks
//! - Roster: Preset sword, fire and freeze heroes
//! - CombatLog: Sinks for the combat log lines
//! - Arena/Scenario: Scripted bouts, optionally loaded from TOML

pub mod ability;
pub mod arena;
pub mod combat;
pub mod config;
pub mod hero;
pub mod log;
pub mod prelude;
pub mod roster;
pub mod types;

// Re-export core types for convenience
pub use ability::{Ability, AbilityEffect};
pub use arena::{Arena, Bout, CombatError, Scenario};
pub use combat::CombatEvent;
pub use config::{default_scenario, ConfigError};
pub use hero::Hero;
pub use log::{CombatLog, ConsoleLog, MemoryLog, TracingLog};
pub use roster::{fire_hero, freeze_hero, sword_hero, HeroPreset, RosterError};
pub use types::IceColor;
