//! Interface consumed by the desktop view.
//!
//! The desktop mirrors the subdirectories of `/home/` as icons. Folder
//! creation from the desktop is flat: new folders always go directly under
//! `/home/`, whatever the current directory is.

use tracing::debug;

use crate::config::HOME_PATH;
use crate::error::FsError;
use crate::filesystem::path;
use crate::models::Listing;
use crate::session::Session;

impl Session {
    /// Names of the folders shown on the desktop.
    ///
    /// Empty when `/home/` has been removed.
    pub fn list_home_directory(&self) -> Vec<String> {
        self.fs
            .list_directory(HOME_PATH)
            .map(|listing| listing.dirs)
            .unwrap_or_default()
    }

    /// Create a desktop folder, with the same validation as `mkdir`.
    pub fn create_desktop_folder(&mut self, name: &str) -> Result<(), FsError> {
        self.fs.make_directory(HOME_PATH, name)?;
        debug!(name, "desktop folder created");
        Ok(())
    }

    /// Contents of a directory, for a folder window.
    pub fn list_directory_contents(&self, dir_path: &str) -> Result<Listing, FsError> {
        self.fs.list_directory(dir_path)
    }

    /// Index path of a desktop folder.
    pub fn desktop_folder_path(name: &str) -> String {
        path::join(HOME_PATH, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_listing_tracks_mkdir() {
        let mut session = Session::default();
        assert!(session.list_home_directory().is_empty());

        session.submit("mkdir /home/ignored");
        session.submit("cd home");
        session.submit("mkdir photos music");
        assert_eq!(session.list_home_directory(), vec!["photos", "music"]);
    }

    #[test]
    fn test_create_desktop_folder_ignores_cwd() {
        let mut session = Session::default();
        session.submit("cd var");
        session.create_desktop_folder("projects").unwrap();

        assert!(session.fs().exists("/home/projects/"));
        assert!(!session.fs().exists("/var/projects/"));
        assert_eq!(session.list_home_directory(), vec!["projects"]);
    }

    #[test]
    fn test_create_desktop_folder_validation() {
        let mut session = Session::default();
        assert_eq!(
            session.create_desktop_folder("New Folder"),
            Err(FsError::InvalidName("New Folder".to_string()))
        );
        session.create_desktop_folder("docs").unwrap();
        assert_eq!(
            session.create_desktop_folder("docs"),
            Err(FsError::AlreadyExists("docs".to_string()))
        );
    }

    #[test]
    fn test_create_desktop_folder_without_home() {
        let mut session = Session::default();
        session.submit("rmdir home");
        assert!(session.list_home_directory().is_empty());
        assert_eq!(
            session.create_desktop_folder("docs"),
            Err(FsError::NotFound("/home".to_string()))
        );
    }

    #[test]
    fn test_folder_contents() {
        let mut session = Session::default();
        session.create_desktop_folder("docs").unwrap();
        session.submit("cd /home/docs");
        session.submit("mkdir drafts");
        session.submit("nano readme");
        session.editor_command(crate::editor::EditorCommand::Exit);

        let listing = session
            .list_directory_contents(&Session::desktop_folder_path("docs"))
            .unwrap();
        assert_eq!(listing.dirs, vec!["drafts"]);
        assert_eq!(listing.files, vec!["readme"]);
    }
}
