//! Filesystem data types.

/// A text file stored inside a directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub content: String,
}

impl File {
    /// Create an empty file.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: String::new(),
        }
    }
}

/// A directory as stored in the filesystem index.
///
/// `subdirectories` holds child names only. Whether a child exists is decided
/// by the index; the list keeps creation order for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directory {
    pub name: String,
    pub files: Vec<File>,
    pub subdirectories: Vec<String>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// True when the directory holds neither files nor subdirectories.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.subdirectories.is_empty()
    }

    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn file_mut(&mut self, name: &str) -> Option<&mut File> {
        self.files.iter_mut().find(|f| f.name == name)
    }
}

/// Names contained in one directory, in creation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

impl Listing {
    /// Subdirectories first, then files.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.dirs
            .iter()
            .chain(self.files.iter())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}
