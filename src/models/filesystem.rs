use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Filesystem Nodes
// =============================================================================

/// A node in the in-memory filesystem tree.
///
/// Names live in the parent's `children` map, so a node never knows its own
/// name. The root is always a `Folder`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VfsNode {
    Folder { children: HashMap<String, VfsNode> },
    File { content: String },
}

impl VfsNode {
    /// Create an empty folder.
    pub fn folder() -> Self {
        Self::Folder {
            children: HashMap::new(),
        }
    }

    /// Create a file with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        Self::File {
            content: content.into(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Folder { .. } => EntryKind::Folder,
            Self::File { .. } => EntryKind::File,
        }
    }

    /// Children of a folder, `None` for files.
    pub fn children(&self) -> Option<&HashMap<String, VfsNode>> {
        match self {
            Self::Folder { children } => Some(children),
            Self::File { .. } => None,
        }
    }

    /// Content of a file, `None` for folders.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File { content } => Some(content),
            Self::Folder { .. } => None,
        }
    }
}

/// Kind of a directory entry, as reported by listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    #[default]
    File,
}

/// Entry returned by `VirtualFs::list`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

// =============================================================================
// Seed Manifest
// =============================================================================

/// Initial filesystem contents, loaded from `assets/seed.toml`.
///
/// ```toml
/// [[entries]]
/// path = "readme.txt"
/// content = "Welcome!"
///
/// [[entries]]
/// path = "docs"
/// kind = "folder"
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SeedManifest {
    #[serde(default)]
    pub entries: Vec<SeedEntry>,
}

/// One file or folder in the seed manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SeedEntry {
    /// Path relative to the root, `/`-separated
    pub path: String,
    #[serde(default)]
    pub kind: EntryKind,
    /// File content (ignored for folders)
    #[serde(default)]
    pub content: String,
}

impl SeedManifest {
    /// Parse a manifest from TOML text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
