//! Combat events - Typed facts emitted while heroes fight

mod event;

pub use event::CombatEvent;

use crate::log::CombatLog;

/// Render an event into the log, tracing it on the way through
pub(crate) fn emit(log: &mut dyn CombatLog, event: CombatEvent) {
    tracing::trace!(?event, "combat event");
    log.log(&event.to_string());
}
