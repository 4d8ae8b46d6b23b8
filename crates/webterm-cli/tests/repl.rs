//! Drives the REPL with scripted input and inspects the transcript.

use webterm_cli::run;
use webterm_core::Session;

fn transcript(input: &str) -> (Session, String) {
    let mut session = Session::default();
    let mut out = Vec::new();
    run(&mut session, input.as_bytes(), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn prompt_tracks_the_current_directory() {
    let (_, out) = transcript("cd home\npwd\n");
    assert!(out.contains("user@local.lg:/$ "));
    assert!(out.contains("user@local.lg:/home$ /home\n"));
}

#[test]
fn banner_is_printed_first() {
    let (_, out) = transcript("");
    assert!(out.starts_with("webterm"));
}

#[test]
fn errors_are_written_inline() {
    let (_, out) = transcript("frobnicate\ncd nowhere\n");
    assert!(out.contains("frobnicate: command not found"));
    assert!(out.contains("cd: nowhere: No such file or directory"));
}

#[test]
fn editor_lines_are_saved_on_ctrl_s() {
    let (session, out) = transcript("cd home\nnano notes\nfirst\nsecond\n^S\n^X\ncat notes\n");

    assert!(out.contains("nano  /home/notes"));
    assert!(out.contains("~\n~\n"));
    assert!(out.contains("File 'notes' saved"));
    assert!(out.contains("first\nsecond\n"));
    assert!(!session.is_editing());
    assert_eq!(
        session.fs().read_file("/home/", "notes").unwrap(),
        "first\nsecond"
    );
}

#[test]
fn raw_control_bytes_drive_the_editor() {
    let (session, _) = transcript("nano raw\nbody\n\u{13}\n\u{18}\n");
    assert!(!session.is_editing());
    assert_eq!(session.fs().read_file("/", "raw").unwrap(), "body");
}

#[test]
fn leading_blank_lines_are_saved() {
    let (session, _) = transcript("nano p\n\nbody\n^S\n^X\n");
    assert_eq!(session.fs().read_file("/", "p").unwrap(), "\nbody");

    let (session, _) = transcript("nano q\n\n\n^S\n^X\n");
    assert_eq!(session.fs().read_file("/", "q").unwrap(), "\n");
}

#[test]
fn reopened_file_gets_lines_appended() {
    let (session, _) = transcript("nano r\none\n^S\n^X\nnano r\n\ntwo\n^S\n^X\n");
    assert_eq!(session.fs().read_file("/", "r").unwrap(), "one\n\ntwo");
}

#[test]
fn exit_without_save_keeps_the_file_empty() {
    let (session, out) = transcript("nano draft\nunsaved\n^X\ncat draft\n");
    assert!(!out.contains("saved"));
    assert_eq!(session.fs().read_file("/", "draft").unwrap(), "");
}

#[test]
fn clear_emits_the_escape_sequence() {
    let (session, out) = transcript("help\nclear\n");
    assert!(out.contains("\x1b[2J\x1b[H"));
    assert!(session.log().is_empty());
}

#[test]
fn startx_lists_desktop_folders_and_stays_in_terminal() {
    let (session, out) = transcript("cd home\nmkdir photos music\nstartx\n");
    assert!(out.contains("Starting desktop..."));
    assert!(out.contains("Desktop: photos  music\n"));
    assert_eq!(
        session.view_mode(),
        webterm_core::models::ViewMode::Terminal
    );
}
