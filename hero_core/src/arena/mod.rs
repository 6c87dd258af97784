//! Arena - A cast of heroes and the scripted bouts between them

mod scenario;

pub use scenario::Scenario;

use crate::hero::Hero;
use crate::log::CombatLog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from running bouts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("No hero named '{0}' in the arena")]
    UnknownHero(String),
    #[error("A hero named '{0}' is already in the arena")]
    DuplicateHero(String),
}

/// One scripted attack, by hero name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bout {
    pub attacker: String,
    pub target: String,
}

impl Bout {
    pub fn new(attacker: impl Into<String>, target: impl Into<String>) -> Self {
        Bout {
            attacker: attacker.into(),
            target: target.into(),
        }
    }
}

/// Ordered cast of uniquely named heroes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arena {
    heroes: Vec<Hero>,
}

impl Arena {
    /// Create an empty arena
    pub fn new() -> Self {
        Arena { heroes: Vec::new() }
    }

    /// Add a hero; names must be unique
    pub fn add_hero(&mut self, hero: Hero) -> Result<(), CombatError> {
        if self.get(hero.name()).is_some() {
            return Err(CombatError::DuplicateHero(hero.name().to_string()));
        }
        self.heroes.push(hero);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Hero> {
        self.heroes.iter_mut().find(|h| h.name() == name)
    }

    /// Heroes in the order they were added
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    fn hero(&self, name: &str) -> Result<&Hero, CombatError> {
        self.get(name)
            .ok_or_else(|| CombatError::UnknownHero(name.to_string()))
    }

    /// Check that every bout names heroes in this arena
    pub fn validate(&self, bouts: &[Bout]) -> Result<(), CombatError> {
        for bout in bouts {
            self.hero(&bout.attacker)?;
            self.hero(&bout.target)?;
        }
        Ok(())
    }

    /// Run a single bout
    pub fn fight(&self, bout: &Bout, log: &mut dyn CombatLog) -> Result<(), CombatError> {
        let attacker = self.hero(&bout.attacker)?;
        let target = self.hero(&bout.target)?;
        attacker.attack(target, log);
        Ok(())
    }

    /// Run bouts in order, returning how many attacks were made
    ///
    /// All bouts are checked first, so an unknown name logs nothing.
    pub fn run(&self, bouts: &[Bout], log: &mut dyn CombatLog) -> Result<usize, CombatError> {
        self.validate(bouts)?;
        for bout in bouts {
            self.fight(bout, log)?;
        }
        tracing::debug!(bouts = bouts.len(), heroes = self.len(), "bouts finished");
        Ok(bouts.len())
    }
}
