//! Scenario - An arena plus the bouts to run in it

use super::{Arena, Bout, CombatError};
use crate::log::CombatLog;
use crate::roster::{fire_hero, freeze_hero, sword_hero};

/// A cast and its script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    pub arena: Arena,
    pub bouts: Vec<Bout>,
}

impl Scenario {
    pub fn new(arena: Arena, bouts: Vec<Bout>) -> Self {
        Scenario { arena, bouts }
    }

    /// The preset showcase: three heroes, each attacking the next once
    ///
    /// Sword Hero attacks Fire Hero, Fire Hero attacks Freeze Hero, then
    /// Freeze Hero attacks Sword Hero. All attack damage stays at 0.
    pub fn showcase() -> Result<Self, CombatError> {
        let mut arena = Arena::new();
        for hero in [
            sword_hero("Sword Hero"),
            fire_hero("Fire Hero"),
            freeze_hero("Freeze Hero"),
        ] {
            arena.add_hero(hero)?;
        }

        let bouts = vec![
            Bout::new("Sword Hero", "Fire Hero"),
            Bout::new("Fire Hero", "Freeze Hero"),
            Bout::new("Freeze Hero", "Sword Hero"),
        ];
        arena.validate(&bouts)?;

        Ok(Scenario { arena, bouts })
    }

    /// Run every bout in order
    pub fn run(&self, log: &mut dyn CombatLog) -> Result<usize, CombatError> {
        self.arena.run(&self.bouts, log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MemoryLog;

    #[test]
    fn test_showcase_sword_opening() {
        let mut log = MemoryLog::new();
        Scenario::showcase().unwrap().run(&mut log).unwrap();

        assert_eq!(
            &log.lines()[..5],
            [
                "Sword Hero is attacking Fire Hero",
                "Sword Hero uses Basic Attack on Fire Hero",
                "Fire Hero takes 10 damage from Sword Hero",
                "Fire Hero takes 0 damage from Sword Hero",
                "Sword Hero uses Sword Attack on Fire Hero",
            ]
        );
    }

    #[test]
    fn test_showcase_freeze_closes() {
        let mut log = MemoryLog::new();
        let attacks = Scenario::showcase().unwrap().run(&mut log).unwrap();

        assert_eq!(attacks, 3);
        assert_eq!(log.len(), 18);
        assert_eq!(
            &log.lines()[14..],
            [
                "Sword Hero takes 0 damage from Freeze Hero",
                "Freeze Hero uses Freeze Attack on Sword Hero",
                "Freezing Sword Hero with Blue ice",
                "Cooldown time: 4 seconds",
            ]
        );
    }

    #[test]
    fn test_showcase_is_deterministic() {
        let mut first = MemoryLog::new();
        let mut second = MemoryLog::new();
        Scenario::showcase().unwrap().run(&mut first).unwrap();
        Scenario::showcase().unwrap().run(&mut second).unwrap();

        assert_eq!(first.transcript(), second.transcript());
    }

    #[test]
    fn test_showcase_cast_is_uniquely_named() {
        let scenario = Scenario::showcase().unwrap();
        let names: Vec<&str> = scenario.arena.heroes().iter().map(|h| h.name()).collect();

        assert_eq!(names, ["Sword Hero", "Fire Hero", "Freeze Hero"]);
        assert!(scenario.arena.validate(&scenario.bouts).is_ok());
    }
}
