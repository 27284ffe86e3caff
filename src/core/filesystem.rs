use tracing::{debug, warn};

use crate::config::SEED_MANIFEST;
use crate::core::error::FsError;
use crate::models::{DirEntry, EntryKind, SeedManifest, VfsNode, VirtualPath};

/// Handle to a file opened by `edit`.
///
/// Holds the resolved path rather than a reference so the session can keep
/// it across keystrokes while the tree stays mutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditHandle {
    pub path: VirtualPath,
    /// Name as typed by the user, for messages
    pub name: String,
}

/// In-memory filesystem tree rooted at `/`.
///
/// The filesystem itself is stateless with respect to the working
/// directory: every operation takes the caller's current path and the raw
/// argument, and resolves the argument against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualFs {
    /// Always a `Folder`
    root: VfsNode,
}

impl VirtualFs {
    /// Create a filesystem containing only the root folder.
    pub fn empty() -> Self {
        Self {
            root: VfsNode::folder(),
        }
    }

    /// Build the filesystem described by a seed manifest.
    ///
    /// Intermediate folders are created as needed. An entry whose parent is
    /// blocked by an existing file is skipped.
    pub fn from_manifest(manifest: &SeedManifest) -> Self {
        let mut fs = Self::empty();

        for entry in &manifest.entries {
            let path = VirtualPath::root().resolve(&entry.path);
            let Some((parent, name)) = path.split_leaf() else {
                continue;
            };

            let mut current = &mut fs.root;
            let mut blocked = false;
            for part in parent.segments() {
                let VfsNode::Folder { children } = current else {
                    blocked = true;
                    break;
                };
                current = children.entry(part.clone()).or_insert_with(VfsNode::folder);
            }

            match current {
                VfsNode::Folder { children } if !blocked => {
                    let node = match entry.kind {
                        EntryKind::Folder => VfsNode::folder(),
                        EntryKind::File => VfsNode::file(entry.content.clone()),
                    };
                    children.entry(name.to_string()).or_insert(node);
                }
                _ => warn!(path = %entry.path, "seed entry blocked by an existing file"),
            }
        }

        fs
    }

    /// Filesystem from the bundled seed manifest.
    ///
    /// Falls back to the built-in default tree if the manifest does not parse.
    pub fn seeded() -> Self {
        match SeedManifest::parse(SEED_MANIFEST) {
            Ok(manifest) => Self::from_manifest(&manifest),
            Err(e) => {
                warn!(error = %e, "seed manifest is invalid, using default tree");
                Self::default_tree()
            }
        }
    }

    /// `readme.txt` and an empty `docs` folder.
    pub fn default_tree() -> Self {
        let mut fs = Self::empty();
        if let VfsNode::Folder { children } = &mut fs.root {
            children.insert(
                "readme.txt".to_string(),
                VfsNode::file("Welcome to ARM-23 virtual terminal!"),
            );
            children.insert("docs".to_string(), VfsNode::folder());
        }
        fs
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Walk the tree to `path`.
    ///
    /// Fails if any intermediate segment is missing or is a file.
    pub fn lookup(&self, path: &VirtualPath) -> Option<&VfsNode> {
        let mut current = &self.root;
        for part in path.segments() {
            current = current.children()?.get(part)?;
        }
        Some(current)
    }

    fn lookup_mut(&mut self, path: &VirtualPath) -> Option<&mut VfsNode> {
        let mut current = &mut self.root;
        for part in path.segments() {
            current = match current {
                VfsNode::Folder { children } => children.get_mut(part)?,
                VfsNode::File { .. } => return None,
            };
        }
        Some(current)
    }

    fn require_operand(name: &str, what: &'static str) -> Result<(), FsError> {
        if name.is_empty() {
            Err(FsError::MissingOperand(what))
        } else {
            Ok(())
        }
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// List a folder, sorted by name.
    ///
    /// An empty `name` lists the current folder.
    pub fn list(&self, cwd: &VirtualPath, name: &str) -> Result<Vec<DirEntry>, FsError> {
        let path = cwd.resolve(name);
        let shown = if name.is_empty() { "." } else { name };

        let node = self
            .lookup(&path)
            .ok_or_else(|| FsError::NotFound(shown.to_string()))?;
        let children = node
            .children()
            .ok_or_else(|| FsError::NotAFolder(shown.to_string()))?;

        let mut entries: Vec<DirEntry> = children
            .iter()
            .map(|(name, node)| DirEntry {
                name: name.clone(),
                kind: node.kind(),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Resolve a `cd` target and check that it is a folder.
    ///
    /// Returns the new working directory; the caller stores it.
    pub fn change_directory(&self, cwd: &VirtualPath, name: &str) -> Result<VirtualPath, FsError> {
        Self::require_operand(name, "folder")?;
        let path = cwd.resolve(name);
        match self.lookup(&path) {
            Some(node) if node.is_folder() => Ok(path),
            Some(_) => Err(FsError::NotAFolder(name.to_string())),
            None => Err(FsError::NotFound(name.to_string())),
        }
    }

    pub fn read_file(&self, cwd: &VirtualPath, name: &str) -> Result<&str, FsError> {
        Self::require_operand(name, "file")?;
        match self.lookup(&cwd.resolve(name)) {
            Some(VfsNode::File { content }) => Ok(content),
            Some(VfsNode::Folder { .. }) => Err(FsError::IsAFolder(name.to_string())),
            None => Err(FsError::NotFound(name.to_string())),
        }
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Insert `node` at the resolved path, returning the leaf name.
    fn insert(
        &mut self,
        cwd: &VirtualPath,
        name: &str,
        node: VfsNode,
        what: &'static str,
    ) -> Result<String, FsError> {
        Self::require_operand(name, what)?;
        let path = cwd.resolve(name);
        let (parent, leaf) = path
            .split_leaf()
            .ok_or_else(|| FsError::InvalidPath(name.to_string()))?;

        let Some(VfsNode::Folder { children }) = self.lookup_mut(&parent) else {
            return Err(FsError::InvalidPath(name.to_string()));
        };
        if children.contains_key(leaf) {
            return Err(FsError::AlreadyExists(leaf.to_string()));
        }

        debug!(path = %path, kind = ?node.kind(), "created entry");
        children.insert(leaf.to_string(), node);
        Ok(leaf.to_string())
    }

    pub fn make_folder(&mut self, cwd: &VirtualPath, name: &str) -> Result<String, FsError> {
        self.insert(cwd, name, VfsNode::folder(), "folder name")
    }

    pub fn make_file(&mut self, cwd: &VirtualPath, name: &str) -> Result<String, FsError> {
        self.insert(cwd, name, VfsNode::file(""), "file name")
    }

    /// Create a file with initial content; used when saving scripts.
    pub fn create_file(
        &mut self,
        cwd: &VirtualPath,
        name: &str,
        content: String,
    ) -> Result<String, FsError> {
        self.insert(cwd, name, VfsNode::file(content), "file name")
    }

    /// Remove a file or an empty folder, returning the leaf name.
    ///
    /// The root, the working directory and its ancestors cannot be removed.
    pub fn remove(&mut self, cwd: &VirtualPath, name: &str) -> Result<String, FsError> {
        Self::require_operand(name, "file or folder")?;
        let path = cwd.resolve(name);
        if cwd.segments().starts_with(path.segments()) {
            return Err(FsError::InvalidPath(name.to_string()));
        }
        let (parent, leaf) = path
            .split_leaf()
            .ok_or_else(|| FsError::InvalidPath(name.to_string()))?;

        let Some(VfsNode::Folder { children }) = self.lookup_mut(&parent) else {
            return Err(FsError::NotFound(name.to_string()));
        };
        match children.get(leaf) {
            None => return Err(FsError::NotFound(name.to_string())),
            Some(VfsNode::Folder { children: inner }) if !inner.is_empty() => {
                return Err(FsError::DirectoryNotEmpty(leaf.to_string()));
            }
            Some(_) => {}
        }

        children.remove(leaf);
        debug!(path = %path, "removed entry");
        Ok(leaf.to_string())
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Open a file for line-by-line appending.
    pub fn begin_edit(&self, cwd: &VirtualPath, name: &str) -> Result<EditHandle, FsError> {
        Self::require_operand(name, "file")?;
        let path = cwd.resolve(name);
        match self.lookup(&path) {
            Some(VfsNode::File { .. }) => Ok(EditHandle {
                path,
                name: name.to_string(),
            }),
            Some(VfsNode::Folder { .. }) => Err(FsError::IsAFolder(name.to_string())),
            None => Err(FsError::NotFound(name.to_string())),
        }
    }

    /// Append `line` plus a newline to the edited file.
    pub fn append_line(&mut self, handle: &EditHandle, line: &str) -> Result<(), FsError> {
        match self.lookup_mut(&handle.path) {
            Some(VfsNode::File { content }) => {
                content.push_str(line);
                content.push('\n');
                Ok(())
            }
            Some(VfsNode::Folder { .. }) => Err(FsError::IsAFolder(handle.name.clone())),
            None => Err(FsError::NotFound(handle.name.clone())),
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeedEntry;

    fn root() -> VirtualPath {
        VirtualPath::root()
    }

    fn create_test_fs() -> VirtualFs {
        VirtualFs::from_manifest(&SeedManifest {
            entries: vec![
                SeedEntry {
                    path: "readme.txt".to_string(),
                    kind: EntryKind::File,
                    content: "hello".to_string(),
                },
                SeedEntry {
                    path: "docs/notes/todo.txt".to_string(),
                    kind: EntryKind::File,
                    content: String::new(),
                },
                SeedEntry {
                    path: "empty".to_string(),
                    kind: EntryKind::Folder,
                    content: String::new(),
                },
            ],
        })
    }

    #[test]
    fn test_from_manifest_creates_parents() {
        let fs = create_test_fs();
        assert!(fs.lookup(&root().resolve("docs")).unwrap().is_folder());
        assert!(fs.lookup(&root().resolve("docs/notes")).unwrap().is_folder());
        assert_eq!(
            fs.lookup(&root().resolve("docs/notes/todo.txt")).unwrap().content(),
            Some("")
        );
    }

    #[test]
    fn test_from_manifest_skips_blocked_entry() {
        let fs = VirtualFs::from_manifest(&SeedManifest {
            entries: vec![
                SeedEntry {
                    path: "a".to_string(),
                    kind: EntryKind::File,
                    content: String::new(),
                },
                SeedEntry {
                    path: "a/b".to_string(),
                    kind: EntryKind::File,
                    content: String::new(),
                },
            ],
        });
        assert!(fs.lookup(&root().resolve("a/b")).is_none());
        assert_eq!(fs.lookup(&root().resolve("a")).unwrap().kind(), EntryKind::File);
    }

    #[test]
    fn test_seeded_has_readme_and_docs() {
        let fs = VirtualFs::seeded();
        assert!(fs.read_file(&root(), "readme.txt").is_ok());
        assert!(fs.lookup(&root().resolve("docs")).unwrap().is_folder());
    }

    #[test]
    fn test_lookup_through_file_fails() {
        let fs = create_test_fs();
        assert!(fs.lookup(&root().resolve("readme.txt/x")).is_none());
        assert!(fs.lookup(&root().resolve("missing")).is_none());
        assert!(fs.lookup(&root()).unwrap().is_folder());
    }

    #[test]
    fn test_list_sorted_by_name() {
        let fs = create_test_fs();
        let names: Vec<_> = fs
            .list(&root(), "")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["docs", "empty", "readme.txt"]);
    }

    #[test]
    fn test_list_file_is_not_a_folder() {
        let fs = create_test_fs();
        assert_eq!(
            fs.list(&root(), "readme.txt"),
            Err(FsError::NotAFolder("readme.txt".to_string()))
        );
    }

    #[test]
    fn test_change_directory() {
        let fs = create_test_fs();
        let cwd = fs.change_directory(&root(), "docs").unwrap();
        assert_eq!(cwd.to_string(), "/docs");
        assert_eq!(fs.change_directory(&cwd, "...").unwrap(), root());
        assert_eq!(fs.change_directory(&root(), "..").unwrap(), root());
        assert_eq!(
            fs.change_directory(&root(), "readme.txt"),
            Err(FsError::NotAFolder("readme.txt".to_string()))
        );
        assert_eq!(
            fs.change_directory(&root(), "nope"),
            Err(FsError::NotFound("nope".to_string()))
        );
        assert_eq!(
            fs.change_directory(&root(), ""),
            Err(FsError::MissingOperand("folder"))
        );
    }

    #[test]
    fn test_make_folder_and_file() {
        let mut fs = create_test_fs();
        assert_eq!(fs.make_folder(&root(), "src").unwrap(), "src");
        assert_eq!(fs.make_file(&root(), "src/main.rs").unwrap(), "main.rs");

        let folder = fs.lookup(&root().resolve("src")).unwrap();
        assert_eq!(folder.children().map(|c| c.len()), Some(1));
        let file = fs.lookup(&root().resolve("src/main.rs")).unwrap();
        assert_eq!(file.content(), Some(""));
    }

    #[test]
    fn test_make_existing_fails_and_leaves_tree() {
        let mut fs = create_test_fs();
        let before = fs.clone();
        assert_eq!(
            fs.make_folder(&root(), "readme.txt"),
            Err(FsError::AlreadyExists("readme.txt".to_string()))
        );
        assert_eq!(
            fs.make_file(&root(), "docs"),
            Err(FsError::AlreadyExists("docs".to_string()))
        );
        assert_eq!(fs, before);
    }

    #[test]
    fn test_make_with_invalid_parent() {
        let mut fs = create_test_fs();
        assert_eq!(
            fs.make_file(&root(), "missing/a.txt"),
            Err(FsError::InvalidPath("missing/a.txt".to_string()))
        );
        assert_eq!(
            fs.make_folder(&root(), "readme.txt/sub"),
            Err(FsError::InvalidPath("readme.txt/sub".to_string()))
        );
        assert_eq!(
            fs.make_folder(&root(), "/"),
            Err(FsError::InvalidPath("/".to_string()))
        );
    }

    #[test]
    fn test_read_file() {
        let fs = create_test_fs();
        assert_eq!(fs.read_file(&root(), "readme.txt"), Ok("hello"));
        assert_eq!(
            fs.read_file(&root(), "docs"),
            Err(FsError::IsAFolder("docs".to_string()))
        );
        assert_eq!(
            fs.read_file(&root(), "nope"),
            Err(FsError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_remove_non_empty_folder_until_emptied() {
        let mut fs = create_test_fs();
        assert_eq!(
            fs.remove(&root(), "docs"),
            Err(FsError::DirectoryNotEmpty("docs".to_string()))
        );
        assert_eq!(
            fs.remove(&root(), "docs/notes"),
            Err(FsError::DirectoryNotEmpty("notes".to_string()))
        );
        fs.remove(&root(), "docs/notes/todo.txt").unwrap();
        fs.remove(&root(), "docs/notes").unwrap();
        assert_eq!(fs.remove(&root(), "docs").unwrap(), "docs");
        assert!(fs.lookup(&root().resolve("docs")).is_none());
    }

    #[test]
    fn test_remove_missing() {
        let mut fs = create_test_fs();
        assert_eq!(
            fs.remove(&root(), "ghost"),
            Err(FsError::NotFound("ghost".to_string()))
        );
        assert_eq!(
            fs.remove(&root(), "ghost/child"),
            Err(FsError::NotFound("ghost/child".to_string()))
        );
    }

    #[test]
    fn test_remove_protects_root_and_cwd() {
        let mut fs = create_test_fs();
        let cwd = root().resolve("empty");
        assert_eq!(
            fs.remove(&root(), "/"),
            Err(FsError::InvalidPath("/".to_string()))
        );
        assert_eq!(
            fs.remove(&cwd, "."),
            Err(FsError::InvalidPath(".".to_string()))
        );
        assert!(fs.lookup(&cwd).is_some());
    }

    #[test]
    fn test_edit_appends_lines() {
        let mut fs = create_test_fs();
        let handle = fs.begin_edit(&root(), "readme.txt").unwrap();
        fs.append_line(&handle, "one").unwrap();
        fs.append_line(&handle, "two").unwrap();
        assert_eq!(fs.read_file(&root(), "readme.txt"), Ok("helloone\ntwo\n"));
    }

    #[test]
    fn test_edit_rejects_folder_and_missing() {
        let fs = create_test_fs();
        assert_eq!(
            fs.begin_edit(&root(), "docs"),
            Err(FsError::IsAFolder("docs".to_string()))
        );
        assert_eq!(
            fs.begin_edit(&root(), "nope"),
            Err(FsError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_append_after_remove_fails() {
        let mut fs = create_test_fs();
        let handle = fs.begin_edit(&root(), "readme.txt").unwrap();
        fs.remove(&root(), "readme.txt").unwrap();
        assert_eq!(
            fs.append_line(&handle, "x"),
            Err(FsError::NotFound("readme.txt".to_string()))
        );
    }
}
