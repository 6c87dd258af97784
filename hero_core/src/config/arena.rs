//! Arena configuration loading

use super::ConfigError;
use crate::ability::Ability;
use crate::arena::{Arena, Bout, Scenario};
use crate::hero::Hero;
use crate::roster::HeroPreset;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for a cast and its bouts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub heroes: Vec<HeroEntry>,
    #[serde(default)]
    pub bouts: Vec<Bout>,
}

/// One hero in the cast: either a preset or an explicit ability list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<HeroPreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<Ability>>,
    #[serde(default)]
    pub attack_damage: i32,
}

impl HeroEntry {
    /// Build the hero this entry describes
    pub fn build(&self) -> Result<Hero, ConfigError> {
        let hero = match (&self.preset, &self.abilities) {
            (Some(preset), None) => preset.build(self.name.clone()),
            (None, Some(abilities)) => Hero::new(self.name.clone(), abilities.clone()),
            (Some(_), Some(_)) => {
                return Err(ConfigError::ValidationError(format!(
                    "Hero '{}' sets both a preset and abilities",
                    self.name
                )))
            }
            (None, None) => {
                return Err(ConfigError::ValidationError(format!(
                    "Hero '{}' needs a preset or abilities",
                    self.name
                )))
            }
        };
        Ok(hero.with_attack_damage(self.attack_damage))
    }
}

impl ArenaConfig {
    /// Build and validate the scenario
    pub fn into_scenario(self) -> Result<Scenario, ConfigError> {
        let mut arena = Arena::new();
        for entry in &self.heroes {
            arena
                .add_hero(entry.build()?)
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }

        arena
            .validate(&self.bouts)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        Ok(Scenario::new(arena, self.bouts))
    }
}

/// Load a scenario from a TOML file
pub fn load_scenario(path: &Path) -> Result<Scenario, ConfigError> {
    let config: ArenaConfig = super::load_toml(path)?;
    config.into_scenario()
}

/// Load a scenario from a TOML string
pub fn parse_scenario(content: &str) -> Result<Scenario, ConfigError> {
    let config: ArenaConfig = super::parse_toml(content)?;
    config.into_scenario()
}

/// Get the bundled scenario
///
/// Falls back to the built-in showcase if the bundled file is invalid.
pub fn default_scenario() -> Result<Scenario, ConfigError> {
    let toml = include_str!("../../config/arena.toml");
    parse_scenario(toml).or_else(|err| {
        tracing::warn!(%err, "bundled arena config is invalid, using built-in showcase");
        Scenario::showcase().map_err(|e| ConfigError::ValidationError(e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityEffect;
    use crate::log::MemoryLog;

    #[test]
    fn test_parse_custom_arena() {
        let toml = r#"
[[heroes]]
name = "Glacier"
attack_damage = 6

[[heroes.abilities]]
name = "Jab"
effect = { type = "basic", damage = 4 }

[[heroes.abilities]]
name = "Frost Bite"
effect = { type = "freeze", color = "white", cooldown_seconds = 2 }

[[heroes]]
name = "Ember"
preset = "fire"
attack_damage = 3

[[bouts]]
attacker = "Glacier"
target = "Ember"
"#;

        let scenario = parse_scenario(toml).unwrap();
        let glacier = scenario.arena.get("Glacier").unwrap();
        assert_eq!(glacier.attack_damage(), 6);
        assert_eq!(
            glacier.abilities()[0].effect(),
            &AbilityEffect::Basic {
                damage: 4,
                range: 1
            }
        );

        let mut log = MemoryLog::new();
        scenario.run(&mut log).unwrap();
        assert_eq!(
            log.lines(),
            [
                "Glacier is attacking Ember",
                "Glacier uses Jab on Ember",
                "Ember takes 4 damage from Glacier",
                "Ember takes 6 damage from Glacier",
                "Glacier uses Frost Bite on Ember",
                "Freezing Ember with White ice",
                "Cooldown time: 2 seconds",
            ]
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let toml = r#"
[[heroes]]
name = "Twin"
preset = "sword"

[[heroes]]
name = "Twin"
preset = "fire"
"#;
        let err = parse_scenario(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_preset_and_abilities_conflict() {
        let toml = r#"
[[heroes]]
name = "Both"
preset = "sword"
abilities = []
"#;
        let err = parse_scenario(toml).unwrap_err();
        assert!(err.to_string().contains("both a preset and abilities"));
    }

    #[test]
    fn test_entry_needs_preset_or_abilities() {
        let toml = r#"
[[heroes]]
name = "Nothing"
"#;
        assert!(matches!(
            parse_scenario(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_unknown_preset_is_parse_error() {
        let toml = r#"
[[heroes]]
name = "Zap"
preset = "lightning"
"#;
        assert!(matches!(parse_scenario(toml), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_bout_with_unknown_hero_rejected() {
        let toml = r#"
[[heroes]]
name = "Solo"
preset = "sword"

[[bouts]]
attacker = "Solo"
target = "Ghost"
"#;
        let err = parse_scenario(toml).unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn test_default_scenario_matches_showcase() {
        assert_eq!(default_scenario().unwrap(), Scenario::showcase().unwrap());
    }

    #[test]
    fn test_load_bundled_file_matches_showcase() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/arena.toml");

        let scenario = load_scenario(&path).unwrap();

        assert_eq!(scenario, Scenario::showcase().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/missing.toml");
        assert!(matches!(load_scenario(&path), Err(ConfigError::IoError(_))));
    }
}
