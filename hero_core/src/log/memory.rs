//! MemoryLog - Buffers combat lines in memory

use super::CombatLog;

/// In-memory sink, mostly for tests and for rendering a transcript later
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLog {
    lines: Vec<String>,
}

impl MemoryLog {
    /// Create an empty log
    pub fn new() -> Self {
        MemoryLog { lines: Vec::new() }
    }

    /// All lines recorded so far, oldest first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every recorded line
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Take the recorded lines, leaving the log empty
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Join the lines the way a console would print them
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl CombatLog for MemoryLog {
    fn log(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
