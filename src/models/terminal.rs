//! Terminal-related data types for output rendering and key input.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::EntryKind;

// =============================================================================
// Output Lines
// =============================================================================

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line.
///
/// Every variant is rendered as literal text; there is no way to smuggle
/// markup into the display through line content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// Plain text output
    Text(String),
    /// Error message (red)
    Error(String),
    /// Success message (green)
    Success(String),
    /// Status message (yellow)
    Info(String),
    /// Echoed prompt and input, as produced by autocode playback
    Command { prompt: String, input: String },
    /// Directory listing row
    ListEntry { name: String, kind: EntryKind },
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Success(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn list_entry(name: impl Into<String>, kind: EntryKind) -> Self {
        Self::new(OutputLineData::ListEntry {
            name: name.into(),
            kind,
        })
    }

    /// Text as it appears on screen, without styling.
    pub fn plain_text(&self) -> String {
        match &self.data {
            OutputLineData::Text(s)
            | OutputLineData::Error(s)
            | OutputLineData::Success(s)
            | OutputLineData::Info(s) => s.clone(),
            OutputLineData::Command { prompt, input } => format!("{}{}", prompt, input),
            OutputLineData::ListEntry { name, kind } => match kind {
                EntryKind::Folder => format!("[DIR] {}", name),
                EntryKind::File => format!("[FILE] {}", name),
            },
        }
    }

    /// Same variant with different text; list entries and commands are kept as is.
    fn with_text(&self, text: String) -> Self {
        let data = match &self.data {
            OutputLineData::Text(_) => OutputLineData::Text(text),
            OutputLineData::Error(_) => OutputLineData::Error(text),
            OutputLineData::Success(_) => OutputLineData::Success(text),
            OutputLineData::Info(_) => OutputLineData::Info(text),
            other => other.clone(),
        };
        Self::new(data)
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

// =============================================================================
// Output Log
// =============================================================================

/// Append-only scrollback.
///
/// Text lines are capped at `max_chars` characters and split on `\n`
/// before they are stored, so one logical message can become several rows.
/// Once `capacity` rows are held, the oldest row is dropped on each push.
#[derive(Clone, Debug)]
pub struct OutputLog {
    lines: VecDeque<OutputLine>,
    capacity: usize,
    max_chars: usize,
}

impl OutputLog {
    pub fn new(capacity: usize, max_chars: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity: capacity.max(1),
            max_chars,
        }
    }

    pub fn push(&mut self, line: OutputLine) {
        let text_variant = matches!(
            line.data,
            OutputLineData::Text(_)
                | OutputLineData::Error(_)
                | OutputLineData::Success(_)
                | OutputLineData::Info(_)
        );
        if !text_variant {
            self.push_row(line);
            return;
        }

        let text = line.plain_text();
        let capped: String = text.chars().take(self.max_chars).collect();
        if capped == text && !text.contains('\n') {
            self.push_row(line);
            return;
        }
        for part in capped.split('\n') {
            self.push_row(line.with_text(part.to_string()));
        }
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        for line in lines {
            self.push(line);
        }
    }

    fn push_row(&mut self, line: OutputLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_vec(&self) -> Vec<OutputLine> {
        self.lines.iter().cloned().collect()
    }

    /// Rendered text of every row, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.lines.iter().map(OutputLine::plain_text).collect()
    }
}

// =============================================================================
// Key Input
// =============================================================================

/// A single key event, already reduced to what the controller cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
    /// Arrows, modifiers, function keys and chorded shortcuts
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    ///
    /// Keys pressed together with Ctrl or Meta are reported as `Other` so the
    /// browser's own shortcuts keep working.
    pub fn from_dom(key: &str, chorded: bool) -> Self {
        if chorded {
            return Self::Other;
        }
        match key {
            "Enter" => Self::Enter,
            "Backspace" => Self::Backspace,
            "Escape" => Self::Escape,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}
