//! TracingLog - Forwards combat lines to the tracing facade

use super::CombatLog;

/// Sink that emits each line as an `info` event on the `hero_core::combat` target
///
/// Lines only show up if the host installed a subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl TracingLog {
    pub fn new() -> Self {
        TracingLog
    }
}

impl CombatLog for TracingLog {
    fn log(&mut self, message: &str) {
        tracing::info!(target: "hero_core::combat", "{}", message);
    }
}
