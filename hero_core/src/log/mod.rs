//! CombatLog - Trait and sinks for combat log lines

mod console;
mod memory;
mod traced;

pub use console::ConsoleLog;
pub use memory::MemoryLog;
pub use traced::TracingLog;

/// Anything that accepts combat log lines
///
/// Lines arrive one at a time from a single thread of control, in the order
/// the combat events happen. Sinks have no failure path.
pub trait CombatLog {
    /// Record one line
    fn log(&mut self, message: &str);
}

impl<L: CombatLog + ?Sized> CombatLog for &mut L {
    fn log(&mut self, message: &str) {
        (**self).log(message);
    }
}

impl<L: CombatLog + ?Sized> CombatLog for Box<L> {
    fn log(&mut self, message: &str) {
        (**self).log(message);
    }
}
