//! ConsoleLog - Writes combat lines to stdout

use super::CombatLog;
use std::io::{self, Write};

/// Default sink: one line per message on standard output
///
/// Write failures never panic. A closed reader (broken pipe) is ignored, any
/// other error is reported through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLog;

impl ConsoleLog {
    pub fn new() -> Self {
        ConsoleLog
    }
}

impl CombatLog for ConsoleLog {
    fn log(&mut self, message: &str) {
        write_line(&mut io::stdout().lock(), message);
    }
}

/// Write one line, swallowing the error after reporting it
fn write_line<W: Write>(out: &mut W, message: &str) {
    match writeln!(out, "{}", message) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
        Err(err) => tracing::warn!(%err, "failed to write combat line"),
    }
}
