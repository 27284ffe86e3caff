//! Simulated shutdown sequence for `exit`.

use crate::config::SHUTDOWN_LINES;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shutdown {
    step: usize,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next message, `None` when the terminal should go dark.
    pub fn step(&mut self) -> Option<&'static str> {
        let line = SHUTDOWN_LINES.get(self.step).copied()?;
        self.step += 1;
        Some(line)
    }
}
