//! Hero - A combat entity with an ordered list of abilities

use crate::ability::Ability;
use crate::combat::{emit, CombatEvent};
use crate::log::CombatLog;
use serde::{Deserialize, Serialize};

/// A hero: name, base attack damage, and abilities in execution order
///
/// Heroes have no health pool. Taking damage only produces a log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    name: String,
    /// Base power read by scaling and flat abilities
    #[serde(default)]
    attack_damage: i32,
    #[serde(default)]
    abilities: Vec<Ability>,
}

impl Hero {
    /// Create a hero with zero attack damage
    pub fn new(name: impl Into<String>, abilities: Vec<Ability>) -> Self {
        Hero {
            name: name.into(),
            attack_damage: 0,
            abilities,
        }
    }

    /// Set the attack damage
    pub fn with_attack_damage(mut self, attack_damage: i32) -> Self {
        self.attack_damage = attack_damage;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attack_damage(&self) -> i32 {
        self.attack_damage
    }

    pub fn set_attack_damage(&mut self, attack_damage: i32) {
        self.attack_damage = attack_damage;
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    /// Append an ability; it runs after every existing one
    pub fn add_ability(&mut self, ability: Ability) {
        self.abilities.push(ability);
    }

    /// Remove all abilities. Attacks then only announce themselves.
    pub fn clear_abilities(&mut self) {
        self.abilities.clear();
    }

    /// Attack `target` with every ability, in list order
    pub fn attack(&self, target: &Hero, log: &mut dyn CombatLog) {
        let _span = tracing::debug_span!("attack", attacker = %self.name, target = %target.name)
            .entered();

        emit(
            log,
            CombatEvent::AttackStarted {
                attacker: self.name.clone(),
                target: target.name.clone(),
            },
        );

        for ability in &self.abilities {
            ability.use_on(self, target, log);
        }
    }

    /// Record a hit from `attacker`
    pub fn take_damage(&self, damage: i32, attacker: &Hero, log: &mut dyn CombatLog) {
        emit(
            log,
            CombatEvent::DamageTaken {
                target: self.name.clone(),
                damage,
                attacker: attacker.name.clone(),
            },
        );
    }
}
