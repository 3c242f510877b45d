//! Keyboard input integration tests.
//!
//! These tests press keys through `update` and read back the log, the
//! input buffer and the commands that would reach the runtime.

use crossterm::event::KeyCode;

use folio::content::BANNER;
use folio::tea::{init, Command, EntryKind, View};

use crate::fixtures::TestShell;

#[test]
fn test_banner_then_command() {
    let mut shell = TestShell::new();
    assert!(init(&mut shell.model).is_empty());
    assert_eq!(shell.model.log.len(), BANNER.len());

    shell.run("help");
    let texts = shell.last_texts();
    assert!(texts[0].starts_with("Available commands"));
}

#[test]
fn test_history_never_moves_past_oldest() {
    let mut shell = TestShell::new();
    shell.run("ls");
    shell.run("cd projects");

    for _ in 0..10 {
        shell.press(KeyCode::Up);
    }
    assert_eq!(shell.model.input_buffer, "ls");

    shell.press(KeyCode::Down);
    assert_eq!(shell.model.input_buffer, "cd projects");
    shell.press(KeyCode::Down);
    assert_eq!(shell.model.input_buffer, "");
}

#[test]
fn test_recalled_line_can_be_edited_and_rerun() {
    let mut shell = TestShell::new();
    shell.run("cd projects");
    shell.run("cd chess_engin");
    assert_eq!(shell.last_output()[0].kind, EntryKind::Error);

    shell.press(KeyCode::Up);
    shell.press(KeyCode::Char('e'));
    shell.press(KeyCode::Enter);
    assert_eq!(shell.model.prompt(), "guest@folio:~/projects/chess_engine$");
}

#[test]
fn test_clear_empties_log() {
    let mut shell = TestShell::new();
    init(&mut shell.model);
    shell.run("ls");
    shell.run("clear");
    assert!(shell.model.log.is_empty());

    // First key after clear stops the animation and types normally.
    shell.run("ls");
    assert_eq!(shell.model.log.len(), 2);
}

#[test]
fn test_resume_from_terminal_and_tabs_agree() {
    let mut shell = TestShell::new();
    let from_terminal: Vec<Command> = shell
        .run("cd cv")
        .into_iter()
        .filter(|c| matches!(c, Command::OpenUrl { .. }))
        .collect();

    shell.model.view = View::Tabs;
    let from_tabs = shell.press(KeyCode::Char('4'));
    assert_eq!(from_terminal, from_tabs);
}
