//! Prelude module for convenient imports
//!
//! ```rust
//! use hero_core::prelude::*;
//! ```

// Core types
pub use crate::ability::{Ability, AbilityEffect};
pub use crate::hero::Hero;
pub use crate::types::IceColor;

// Roster
pub use crate::roster::{basic_attack, fire_hero, freeze_hero, sword_hero, HeroPreset};

// Logging
pub use crate::log::{CombatLog, ConsoleLog, MemoryLog, TracingLog};

// Scenarios
pub use crate::arena::{Arena, Bout, Scenario};
pub use crate::config::default_scenario;
