//! Ability - Named combat behaviour owned by a hero

mod effect;

pub use effect::AbilityEffect;

use crate::combat::{emit, CombatEvent};
use crate::hero::Hero;
use crate::log::CombatLog;
use crate::types::IceColor;
use serde::{Deserialize, Serialize};

/// A named ability. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    name: String,
    effect: AbilityEffect,
}

impl Ability {
    /// Create an ability from a name and effect
    pub fn new(name: impl Into<String>, effect: AbilityEffect) -> Self {
        Ability {
            name: name.into(),
            effect,
        }
    }

    /// Fixed-damage strike
    pub fn basic(name: impl Into<String>, damage: i32, range: u32) -> Self {
        Self::new(name, AbilityEffect::Basic { damage, range })
    }

    /// Strike scaled by the user's attack damage
    pub fn weapon_scaled(name: impl Into<String>, multiplier: i32) -> Self {
        Self::new(name, AbilityEffect::WeaponScaled { multiplier })
    }

    /// Flat strike that sets the target burning
    pub fn burn(name: impl Into<String>, seconds: u32) -> Self {
        Self::new(name, AbilityEffect::Burn { seconds })
    }

    /// Flat strike that freezes the target
    pub fn freeze(name: impl Into<String>, color: IceColor, cooldown_seconds: u32) -> Self {
        Self::new(
            name,
            AbilityEffect::Freeze {
                color,
                cooldown_seconds,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn effect(&self) -> &AbilityEffect {
        &self.effect
    }

    /// Damage this ability would deal if `user` used it right now
    pub fn damage_against(&self, user: &Hero) -> i32 {
        self.effect.damage_for(user.attack_damage())
    }

    /// Use the ability: hit `target` on behalf of `user` and log what happened
    ///
    /// Basic strikes announce themselves and then land. Every other effect
    /// lands first, announces itself, then reports its consequences.
    pub fn use_on(&self, user: &Hero, target: &Hero, log: &mut dyn CombatLog) {
        let damage = self.damage_against(user);
        tracing::debug!(
            user = user.name(),
            ability = %self.name,
            kind = self.effect.kind(),
            target = target.name(),
            damage,
            "using ability"
        );

        if self.effect.announces_before_hit() {
            self.announce(user, target, log);
            target.take_damage(damage, user, log);
            return;
        }

        target.take_damage(damage, user, log);
        self.announce(user, target, log);

        match &self.effect {
            AbilityEffect::Burn { seconds } => emit(
                log,
                CombatEvent::Burning {
                    target: target.name().to_string(),
                    seconds: *seconds,
                },
            ),
            AbilityEffect::Freeze {
                color,
                cooldown_seconds,
            } => {
                emit(
                    log,
                    CombatEvent::Frozen {
                        target: target.name().to_string(),
                        color: *color,
                    },
                );
                emit(
                    log,
                    CombatEvent::Cooldown {
                        seconds: *cooldown_seconds,
                    },
                );
            }
            AbilityEffect::Basic { .. } | AbilityEffect::WeaponScaled { .. } => {}
        }
    }

    fn announce(&self, user: &Hero, target: &Hero, log: &mut dyn CombatLog) {
        emit(
            log,
            CombatEvent::AbilityUsed {
                user: user.name().to_string(),
                ability: self.name.clone(),
                target: target.name().to_string(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MemoryLog;

    fn duel(ability: &Ability, attack_damage: i32) -> Vec<String> {
        let user = Hero::new("Ayla", Vec::new()).with_attack_damage(attack_damage);
        let target = Hero::new("Brom", Vec::new());
        let mut log = MemoryLog::new();
        ability.use_on(&user, &target, &mut log);
        log.drain()
    }

    #[test]
    fn test_basic_announces_then_hits() {
        let lines = duel(&Ability::basic("Basic Attack", 10, 1), 99);
        assert_eq!(
            lines,
            ["Ayla uses Basic Attack on Brom", "Brom takes 10 damage from Ayla"]
        );
    }

    #[test]
    fn test_weapon_scaled_hits_then_announces() {
        let lines = duel(&Ability::weapon_scaled("Sword Attack", 2), 6);
        assert_eq!(
            lines,
            ["Brom takes 12 damage from Ayla", "Ayla uses Sword Attack on Brom"]
        );
    }

    #[test]
    fn test_burn_reports_duration() {
        let lines = duel(&Ability::burn("Fire Attack", 3), 5);
        assert_eq!(
            lines,
            [
                "Brom takes 5 damage from Ayla",
                "Ayla uses Fire Attack on Brom",
                "Brom is burning for 3 seconds",
            ]
        );
    }

    #[test]
    fn test_freeze_reports_after_damage() {
        let lines = duel(&Ability::freeze("Freeze Attack", IceColor::Blue, 4), 8);
        assert_eq!(
            lines,
            [
                "Brom takes 8 damage from Ayla",
                "Ayla uses Freeze Attack on Brom",
                "Freezing Brom with Blue ice",
                "Cooldown time: 4 seconds",
            ]
        );
    }

    #[test]
    fn test_damage_recomputed_each_use() {
        let sword = Ability::weapon_scaled("Sword Attack", 3);
        let mut user = Hero::new("Ayla", Vec::new());

        user.set_attack_damage(4);
        assert_eq!(sword.damage_against(&user), 12);

        user.set_attack_damage(10);
        assert_eq!(sword.damage_against(&user), 30);
    }

    #[test]
    fn test_ability_from_toml() {
        let ability: Ability = toml::from_str(
            r#"
name = "Frost Bite"
effect = { type = "freeze", color = "white", cooldown_seconds = 2 }
"#,
        )
        .unwrap();

        assert_eq!(ability.name(), "Frost Bite");
        assert_eq!(
            ability.effect(),
            &AbilityEffect::Freeze {
                color: IceColor::White,
                cooldown_seconds: 2
            }
        );
    }
}
