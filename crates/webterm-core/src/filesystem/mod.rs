//! In-memory virtual filesystem.
//!
//! Directories are stored in an index keyed by absolute, trailing-slash
//! normalized path (see [`path`]). The index decides existence. Each
//! directory also keeps the names of its children for ordered display, and
//! every mutation updates the index entry and the parent's child list together.

pub mod path;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::{DIRECTORY_NAME_PATTERN, ROOT_DIRECTORIES, ROOT_PATH};
use crate::error::FsError;
use crate::models::{Directory, File, Listing};

static DIRECTORY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DIRECTORY_NAME_PATTERN).expect("directory name pattern is a valid regex")
});

/// Virtual filesystem for one session.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Directory index, the source of truth for existence
    index: HashMap<String, Directory>,
}

impl VirtualFs {
    /// Create the startup tree: `/` with `bin`, `home` and `var`.
    pub fn new() -> Self {
        let mut fs = Self::empty();
        for name in ROOT_DIRECTORIES {
            let created = fs.make_directory(ROOT_PATH, name);
            debug_assert!(created.is_ok(), "startup directory {name}: {created:?}");
        }
        fs
    }

    /// Create a filesystem holding only the root directory.
    pub fn empty() -> Self {
        let mut index = HashMap::new();
        index.insert(ROOT_PATH.to_string(), Directory::new(ROOT_PATH));
        Self { index }
    }

    /// Resolve `target` against `base`. Does not check existence.
    pub fn resolve_path(base: &str, target: &str) -> String {
        path::resolve(base, target)
    }

    /// Check whether a directory path is present in the index.
    pub fn exists(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Check a name against the directory naming rule.
    pub fn is_valid_name(name: &str) -> bool {
        DIRECTORY_NAME.is_match(name)
    }

    /// Create directory `name` inside `parent`.
    ///
    /// Returns the new directory's path.
    pub fn make_directory(&mut self, parent: &str, name: &str) -> Result<String, FsError> {
        if !Self::is_valid_name(name) {
            return Err(FsError::InvalidName(name.to_string()));
        }
        if !self.exists(parent) {
            return Err(FsError::NotFound(path::display(parent)));
        }

        let child = path::join(parent, name);
        if self.exists(&child) {
            return Err(FsError::AlreadyExists(name.to_string()));
        }

        self.index.insert(child.clone(), Directory::new(name));
        if let Some(dir) = self.index.get_mut(parent) {
            dir.subdirectories.push(name.to_string());
        }

        debug!(path = %child, "directory created");
        debug_assert!(self.is_consistent());
        Ok(child)
    }

    /// Remove an empty directory.
    pub fn remove_directory(&mut self, target: &str) -> Result<(), FsError> {
        if target == ROOT_PATH {
            return Err(FsError::Busy(ROOT_PATH.to_string()));
        }

        let dir = self
            .index
            .get(target)
            .ok_or_else(|| FsError::NotFound(path::display(target)))?;
        if !dir.is_empty() {
            return Err(FsError::NotEmpty(path::display(target)));
        }

        let name = dir.name.clone();
        let parent = path::parent(target);
        self.index.remove(target);
        if let Some(parent_dir) = self.index.get_mut(&parent) {
            parent_dir.subdirectories.retain(|d| *d != name);
        }

        debug!(path = %target, "directory removed");
        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// List subdirectory and file names of a directory.
    pub fn list_directory(&self, target: &str) -> Result<Listing, FsError> {
        let dir = self
            .index
            .get(target)
            .ok_or_else(|| FsError::NotFound(path::display(target)))?;

        Ok(Listing {
            dirs: dir.subdirectories.clone(),
            files: dir.files.iter().map(|f| f.name.clone()).collect(),
        })
    }

    /// Return the named file, creating an empty one if absent.
    pub fn create_or_get_file(&mut self, dir_path: &str, name: &str) -> Result<&File, FsError> {
        let dir = self.directory_mut(dir_path)?;

        let position = match dir.files.iter().position(|f| f.name == name) {
            Some(position) => position,
            None => {
                dir.files.push(File::new(name));
                debug!(dir = %dir_path, file = %name, "file created");
                dir.files.len() - 1
            }
        };

        Ok(&dir.files[position])
    }

    /// Remove a file from a directory.
    pub fn remove_file(&mut self, dir_path: &str, name: &str) -> Result<(), FsError> {
        let dir = self.directory_mut(dir_path)?;
        let position = dir
            .files
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;

        dir.files.remove(position);
        debug!(dir = %dir_path, file = %name, "file removed");
        Ok(())
    }

    /// Read a file's content.
    pub fn read_file(&self, dir_path: &str, name: &str) -> Result<&str, FsError> {
        self.index
            .get(dir_path)
            .ok_or_else(|| FsError::NotFound(path::display(dir_path)))?
            .file(name)
            .map(|f| f.content.as_str())
            .ok_or_else(|| FsError::NotFound(name.to_string()))
    }

    /// Create or overwrite a file.
    pub fn write_file(&mut self, dir_path: &str, name: &str, content: &str) -> Result<(), FsError> {
        let dir = self.directory_mut(dir_path)?;

        match dir.file_mut(name) {
            Some(file) => file.content = content.to_string(),
            None => dir.files.push(File {
                name: name.to_string(),
                content: content.to_string(),
            }),
        }

        debug!(dir = %dir_path, file = %name, bytes = content.len(), "file written");
        Ok(())
    }

    /// Verify that the index and the child lists describe the same tree.
    ///
    /// Checks that root exists, every directory has an indexed parent listing
    /// it, every listed child is indexed, and names are unique per directory.
    pub fn is_consistent(&self) -> bool {
        if !self.exists(ROOT_PATH) {
            return false;
        }

        self.index.iter().all(|(dir_path, dir)| {
            let parent_lists_child = dir_path == ROOT_PATH || {
                let parent = path::parent(dir_path);
                dir.name == path::file_name(dir_path)
                    && self
                        .index
                        .get(&parent)
                        .is_some_and(|p| p.subdirectories.contains(&dir.name))
            };

            let children_indexed = dir
                .subdirectories
                .iter()
                .all(|child| self.exists(&path::join(dir_path, child)));

            parent_lists_child
                && children_indexed
                && !has_duplicates(dir.subdirectories.iter())
                && !has_duplicates(dir.files.iter().map(|f| &f.name))
        })
    }

    fn directory_mut(&mut self, dir_path: &str) -> Result<&mut Directory, FsError> {
        self.index
            .get_mut(dir_path)
            .ok_or_else(|| FsError::NotFound(path::display(dir_path)))
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

fn has_duplicates<'a>(mut names: impl Iterator<Item = &'a String>) -> bool {
    let mut seen = std::collections::HashSet::new();
    names.any(|name| !seen.insert(name))
}
