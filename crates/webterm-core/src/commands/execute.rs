//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands against
//! a session's filesystem and state.

use tracing::debug;

use crate::config::{HELP_TEXT, IFCONFIG_TEXT, TOP_TEXT};
use crate::editor::{Editor, ShellMode};
use crate::error::{FsError, ShellError};
use crate::filesystem::path;
use crate::models::{OutputLine, ViewMode};
use crate::session::Session;

use super::{Command, CommandResult, PathArg};

/// Execute a parsed command.
///
/// Errors never leave this function: each one becomes a single error line
/// prefixed with the command name.
pub fn execute_command(cmd: Command, session: &mut Session) -> CommandResult {
    let name = cmd.name();

    let result = match cmd {
        Command::Ls(path) => execute_ls(path, session),
        Command::Cd(path) => execute_cd(path, session),
        Command::Mkdir(names) => Ok(execute_mkdir(&names, session)),
        Command::Rmdir(path) => execute_rmdir(path, session),
        Command::Rm(file) => execute_rm(&file, session),
        Command::Cat(file) => execute_cat(&file, session),
        Command::Pwd => Ok(CommandResult::output(vec![OutputLine::text(
            session.display_dir(),
        )])),
        Command::Nano(file) => execute_nano(&file, session),
        Command::Clear => Ok(CommandResult::clear()),
        Command::Help => Ok(static_text(HELP_TEXT)),
        Command::Ifconfig => Ok(static_text(IFCONFIG_TEXT)),
        Command::Top => Ok(static_text(TOP_TEXT)),
        Command::Startx => Ok(CommandResult::switch_view(
            ViewMode::Desktop,
            vec![OutputLine::info("Starting desktop...")],
        )),
    };

    result.unwrap_or_else(|e| {
        CommandResult::output(vec![OutputLine::error(format!("{name}: {e}"))])
    })
}

fn static_text(text: &str) -> CommandResult {
    CommandResult::output(text.lines().map(OutputLine::text).collect())
}

/// Execute `ls` command.
fn execute_ls(path: Option<PathArg>, session: &Session) -> Result<CommandResult, ShellError> {
    let target = path
        .map(|p| p.resolve(&session.cwd))
        .unwrap_or_else(|| session.cwd.clone());
    let listing = session.fs.list_directory(&target)?;

    if listing.is_empty() {
        return Ok(CommandResult::empty());
    }

    let line = listing.names().collect::<Vec<_>>().join("  ");
    Ok(CommandResult::output(vec![OutputLine::text(line)]))
}

/// Execute `cd` command.
fn execute_cd(path: PathArg, session: &mut Session) -> Result<CommandResult, ShellError> {
    let target = path.resolve(&session.cwd);
    if !session.fs.exists(&target) {
        return Err(FsError::NotFound(path.to_string()).into());
    }

    debug!(from = %session.cwd, to = %target, "changed directory");
    session.cwd = target;
    Ok(CommandResult::empty())
}

/// Execute `mkdir` command.
///
/// Every name is attempted; a failure only produces an error line for that name.
fn execute_mkdir(names: &[String], session: &mut Session) -> CommandResult {
    let lines = names
        .iter()
        .map(|name| match session.fs.make_directory(&session.cwd, name) {
            Ok(_) => OutputLine::success(format!("Directory '{name}' created")),
            Err(e) => OutputLine::error(format!("mkdir: {e}")),
        })
        .collect();

    CommandResult::output(lines)
}

/// Execute `rmdir` command.
fn execute_rmdir(path: PathArg, session: &mut Session) -> Result<CommandResult, ShellError> {
    let target = path.resolve(&session.cwd);

    // The current directory must stay valid.
    if session.fs.exists(&target) && path::is_within(&session.cwd, &target) {
        return Err(FsError::Busy(path::display(&target)).into());
    }

    session.fs.remove_directory(&target)?;
    Ok(CommandResult::output(vec![OutputLine::success(format!(
        "Directory '{path}' removed"
    ))]))
}

/// Execute `rm` command.
fn execute_rm(file: &str, session: &mut Session) -> Result<CommandResult, ShellError> {
    session.fs.remove_file(&session.cwd, file)?;
    Ok(CommandResult::output(vec![OutputLine::success(format!(
        "File '{file}' removed"
    ))]))
}

/// Execute `cat` command.
///
/// Content is emitted as one verbatim line; empty files print nothing.
fn execute_cat(file: &str, session: &Session) -> Result<CommandResult, ShellError> {
    let content = session.fs.read_file(&session.cwd, file)?;
    if content.is_empty() {
        return Ok(CommandResult::empty());
    }
    Ok(CommandResult::output(vec![OutputLine::text(content)]))
}

/// Execute `nano` command.
///
/// The file is created (empty) as soon as the editor opens it.
fn execute_nano(file: &str, session: &mut Session) -> Result<CommandResult, ShellError> {
    let content = session.fs.create_or_get_file(&session.cwd, file)?.content.clone();

    debug!(dir = %session.cwd, file = %file, "editor opened");
    session.mode = ShellMode::Editing(Editor::open(session.cwd.clone(), file, &content));
    Ok(CommandResult::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputLineData;

    fn run(session: &mut Session, line: &str) -> Vec<OutputLineData> {
        session
            .submit(line)
            .output
            .into_iter()
            .map(|l| l.data)
            .collect()
    }

    fn text(s: &str) -> OutputLineData {
        OutputLineData::Text(s.to_string())
    }

    #[test]
    fn test_ls_root() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "ls"), vec![text("bin  home  var")]);
    }

    #[test]
    fn test_ls_dirs_before_files() {
        let mut session = Session::default();
        session.fs.write_file("/", "readme", "hi").unwrap();
        run(&mut session, "mkdir zeta");
        assert_eq!(
            run(&mut session, "ls"),
            vec![text("bin  home  var  zeta  readme")]
        );
    }

    #[test]
    fn test_ls_with_path_and_missing_path() {
        let mut session = Session::default();
        run(&mut session, "cd home");
        run(&mut session, "mkdir foo");

        assert_eq!(run(&mut session, "ls /home"), vec![text("foo")]);
        assert_eq!(run(&mut session, "ls foo"), vec![]);
        assert!(matches!(
            run(&mut session, "ls nope").as_slice(),
            [OutputLineData::Error(msg)] if msg.contains("No such file or directory")
        ));
    }

    #[test]
    fn test_cd_and_pwd() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "pwd"), vec![text("/")]);

        run(&mut session, "cd home");
        assert_eq!(session.current_dir(), "/home/");
        assert_eq!(run(&mut session, "pwd"), vec![text("/home")]);

        run(&mut session, "cd /var/");
        assert_eq!(session.current_dir(), "/var/");

        run(&mut session, "cd ..");
        assert_eq!(session.current_dir(), "/");
    }

    #[test]
    fn test_cd_parent_at_root_is_noop() {
        let mut session = Session::default();
        assert!(run(&mut session, "cd ..").is_empty());
        assert_eq!(session.current_dir(), "/");
    }

    #[test]
    fn test_cd_missing_target() {
        let mut session = Session::default();
        run(&mut session, "cd home");
        let out = run(&mut session, "cd foo");

        assert_eq!(
            out,
            vec![OutputLineData::Error(
                "cd: foo: No such file or directory".to_string()
            )]
        );
        assert_eq!(session.current_dir(), "/home/");
    }

    #[test]
    fn test_cd_usage() {
        let mut session = Session::default();
        assert_eq!(
            run(&mut session, "cd"),
            vec![OutputLineData::Error("usage: cd <directory>".to_string())]
        );
    }

    #[test]
    fn test_mkdir_partial_success() {
        let mut session = Session::default();
        run(&mut session, "cd home");
        let out = run(&mut session, "mkdir a b$ c");

        assert_eq!(out.len(), 3);
        assert!(matches!(out[0], OutputLineData::Success(_)));
        assert!(matches!(&out[1], OutputLineData::Error(msg) if msg.contains("b$")));
        assert!(matches!(out[2], OutputLineData::Success(_)));
        assert_eq!(run(&mut session, "ls"), vec![text("a  c")]);
    }

    #[test]
    fn test_mkdir_duplicate_continues() {
        let mut session = Session::default();
        let out = run(&mut session, "mkdir home extra");

        assert!(matches!(&out[0], OutputLineData::Error(msg) if msg.contains("File exists")));
        assert!(matches!(out[1], OutputLineData::Success(_)));
        assert!(session.fs().exists("/extra/"));
    }

    #[test]
    fn test_rmdir() {
        let mut session = Session::default();
        run(&mut session, "mkdir tmp");
        assert!(matches!(
            run(&mut session, "rmdir tmp").as_slice(),
            [OutputLineData::Success(_)]
        ));
        assert!(!session.fs().exists("/tmp/"));
        assert!(matches!(
            run(&mut session, "rmdir tmp").as_slice(),
            [OutputLineData::Error(msg)] if msg.contains("No such file or directory")
        ));
    }

    #[test]
    fn test_rmdir_busy() {
        let mut session = Session::default();
        run(&mut session, "cd home");
        run(&mut session, "mkdir here");
        run(&mut session, "cd here");

        assert!(matches!(
            run(&mut session, "rmdir .").as_slice(),
            [OutputLineData::Error(msg)] if msg.contains("busy")
        ));
        assert!(matches!(
            run(&mut session, "rmdir /").as_slice(),
            [OutputLineData::Error(msg)] if msg.contains("busy")
        ));
        assert!(session.fs().exists("/home/here/"));
        assert_eq!(session.current_dir(), "/home/here/");
    }

    #[test]
    fn test_rm_and_cat() {
        let mut session = Session::default();
        session.fs.write_file("/", "notes", "line 1\nline 2\n").unwrap();

        assert_eq!(run(&mut session, "cat notes"), vec![text("line 1\nline 2\n")]);
        assert!(matches!(
            run(&mut session, "rm notes").as_slice(),
            [OutputLineData::Success(_)]
        ));
        assert!(matches!(
            run(&mut session, "cat notes").as_slice(),
            [OutputLineData::Error(msg)] if msg == "cat: notes: No such file or directory"
        ));
        assert!(matches!(
            run(&mut session, "rm notes").as_slice(),
            [OutputLineData::Error(msg)] if msg == "rm: notes: No such file or directory"
        ));
    }

    #[test]
    fn test_cat_empty_file_prints_nothing() {
        let mut session = Session::default();
        session.fs.write_file("/", "empty", "").unwrap();
        assert!(run(&mut session, "cat empty").is_empty());
    }

    #[test]
    fn test_nano_creates_file_and_enters_editor() {
        let mut session = Session::default();
        assert!(run(&mut session, "nano todo").is_empty());

        assert!(session.is_editing());
        assert_eq!(session.fs().read_file("/", "todo").unwrap(), "");
        assert_eq!(session.editor().unwrap().file_path(), "/todo");
    }

    #[test]
    fn test_static_commands() {
        let mut session = Session::default();
        assert!(!run(&mut session, "help").is_empty());
        assert!(
            run(&mut session, "ifconfig")
                .iter()
                .any(|l| matches!(l, OutputLineData::Text(s) if s.starts_with("eth0")))
        );
        assert_eq!(run(&mut session, "top").len(), 7);
    }

    #[test]
    fn test_startx_switches_view() {
        let mut session = Session::default();
        let result = session.submit("startx");
        assert_eq!(result.view, Some(ViewMode::Desktop));
        assert_eq!(session.view_mode(), ViewMode::Desktop);
    }

    #[test]
    fn test_unknown_command() {
        let mut session = Session::default();
        assert!(matches!(
            run(&mut session, "foo bar").as_slice(),
            [OutputLineData::Error(msg)] if msg.starts_with("foo: command not found")
        ));
    }
}
