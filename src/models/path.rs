//! Absolute paths inside the virtual filesystem.

use std::fmt;

/// A normalized absolute path.
///
/// Stored as its segments; the root is the empty segment list and displays
/// as `/`. Construction always goes through [`VirtualPath::resolve`] or
/// [`VirtualPath::root`], so `.`, `..` and `...` never appear in a stored path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VirtualPath {
    segments: Vec<String>,
}

impl VirtualPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve `input` against `self` as the current directory.
    ///
    /// - A leading `/` starts from the root
    /// - `..` and `...` pop one segment (no-op at the root)
    /// - `.` and empty segments are ignored
    pub fn resolve(&self, input: &str) -> Self {
        let mut segments = if input.starts_with('/') {
            Vec::new()
        } else {
            self.segments.clone()
        };

        for part in input.split('/') {
            match part {
                "" | "." => {}
                ".." | "..." => {
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }

        Self { segments }
    }

    /// Parent path; the root is its own parent.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Final segment, `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Split into parent and leaf name, `None` for the root.
    pub fn split_leaf(&self) -> Option<(Self, &str)> {
        let name = self.file_name()?;
        Some((self.parent(), name))
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}
