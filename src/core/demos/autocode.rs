//! Autocode playback: a fixed program "typed" one character per key press.

use crate::config::AUTOCODE_PROGRAM;

/// What a single key press produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutocodeStep {
    /// Next character goes into the input buffer
    Typed(char),
    /// End of a program line; the buffer should be echoed and reset
    LineDone,
    /// Program exhausted
    Finished,
}

/// Cursor into [`AUTOCODE_PROGRAM`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Autocode {
    /// Byte offset of the next character
    cursor: usize,
}

impl Autocode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) -> AutocodeStep {
        let Some(c) = AUTOCODE_PROGRAM[self.cursor..].chars().next() else {
            return AutocodeStep::Finished;
        };
        self.cursor += c.len_utf8();
        if c == '\n' {
            AutocodeStep::LineDone
        } else {
            AutocodeStep::Typed(c)
        }
    }
}
