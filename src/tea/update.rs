//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model,
//! and returns a list of commands to execute.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::animation::{Animation, AnimationId, AnimationKind, Step};
use crate::content::BANNER;
use crate::shell::{Effect, Outcome};
use crate::tabs::{Section, TabAction};
use crate::{flog_debug, flog_trace, flog_warn};

use super::command::Command;
use super::message::Message;
use super::model::{LogEntry, Model, View};

/// Lines moved per PageUp/PageDown.
const SCROLL_PAGE: usize = 10;

/// Startup commands: either the boot sequence or, when skipped, the banner.
pub fn init(model: &mut Model) -> Vec<Command> {
    let mut cmds = Vec::new();
    if model.config.skip_boot {
        model.push_lines(BANNER.iter().copied());
    } else {
        start_animation(model, AnimationKind::Boot, &mut cmds);
    }
    cmds
}

/// Pure update function: Model + Message → Commands
///
/// This function:
/// 1. Takes the current model and an input message
/// 2. Mutates the model state (and sets dirty flag)
/// 3. Returns a list of commands (side effects) to execute
///
/// The function itself has no side effects - all I/O happens via returned Commands.
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return cmds;
            }
            model.dirty = true; // Keyboard input always triggers render

            if is_ctrl(&key, 'c') || is_ctrl(&key, 'd') {
                cmds.push(Command::Quit);
                return cmds;
            }

            match model.view {
                View::Terminal => update_terminal_view(model, key, &mut cmds),
                View::Tabs => update_tabs_view(model, key, &mut cmds),
            }
        }

        Message::Resize(_, _) => {
            model.dirty = true; // Resize triggers re-render
        }

        Message::Tick(id) => on_tick(model, id, &mut cmds),

        Message::UrlOpened(url) => {
            flog_debug!("Message::UrlOpened url={}", url);
        }

        Message::UrlOpenFailed(url, err) => {
            flog_warn!("Message::UrlOpenFailed url={} err={}", url, err);
            model.push_entry(LogEntry::error(format!("open: {url}: {err}")));
        }
    }

    cmds
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

fn start_animation(model: &mut Model, kind: AnimationKind, cmds: &mut Vec<Command>) {
    if let Some(old) = model.animation.take() {
        cmds.push(Command::StopAnimation { id: old.id });
    }
    let animation = Animation::new(kind);
    flog_debug!("start animation {:?} id={}", kind, animation.id.raw());
    cmds.push(Command::StartAnimation { id: animation.id });
    model.animation = Some(animation);
    model.dirty = true;
}

/// Stop the running animation. A cut-short boot still prints the banner.
fn cancel_animation(model: &mut Model, cmds: &mut Vec<Command>) {
    let Some(animation) = model.animation.take() else {
        return;
    };
    flog_debug!("cancel animation {:?} id={}", animation.kind, animation.id.raw());
    cmds.push(Command::StopAnimation { id: animation.id });
    if animation.kind == AnimationKind::Boot {
        model.push_lines(BANNER.iter().copied());
    }
    model.dirty = true;
}

fn on_tick(model: &mut Model, id: AnimationId, cmds: &mut Vec<Command>) {
    let Some(animation) = model.animation.as_mut().filter(|a| a.id == id) else {
        flog_trace!("stale tick id={}", id.raw());
        return;
    };

    match animation.advance() {
        Step::Frame => model.dirty = true,
        Step::Reveal(line) => model.push_entry(LogEntry::output(line)),
        Step::Finished => {
            model.animation = None;
            cmds.push(Command::StopAnimation { id });
            model.push_lines(BANNER.iter().copied());
        }
    }
}

fn update_terminal_view(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    cancel_animation(model, cmds);

    if is_ctrl(&key, 't') {
        model.view = View::Tabs;
        return;
    }

    match key.code {
        KeyCode::Enter => submit(model, cmds),

        KeyCode::Up => {
            if let Some(line) = model.session.history_mut().previous() {
                model.input_buffer = line.to_string();
            }
        }

        KeyCode::Down => {
            model.input_buffer = model.session.history_mut().next().to_string();
        }

        KeyCode::Backspace => {
            model.input_buffer.pop();
        }

        KeyCode::PageUp => {
            model.scroll = (model.scroll + SCROLL_PAGE).min(model.log.len().saturating_sub(1));
        }

        KeyCode::PageDown => {
            model.scroll = model.scroll.saturating_sub(SCROLL_PAGE);
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            model.input_buffer.push(c);
        }

        _ => {}
    }
}

fn submit(model: &mut Model, cmds: &mut Vec<Command>) {
    let line = std::mem::take(&mut model.input_buffer);
    let stamp = chrono::Local::now().format("%H:%M:%S").to_string();
    let echo = format!("{} {}", model.prompt(), line.trim());
    model.push_entry(LogEntry::echo(echo.trim_end(), stamp));

    let Some(reply) = model.session.submit(&line) else {
        return;
    };

    match reply.outcome {
        Outcome::Success(lines) => model.push_lines(lines),
        Outcome::Failure(message) => model.push_entry(LogEntry::error(message)),
    }

    for effect in reply.effects {
        match effect {
            Effect::ClearLog => {
                model.log.clear();
                model.scroll = 0;
            }
            Effect::StartAnimation(kind) => start_animation(model, kind, cmds),
            Effect::OpenUrl(url) => cmds.push(Command::OpenUrl { url }),
            Effect::OpenResume => cmds.push(Command::OpenUrl {
                url: model.config.effective_resume().to_string(),
            }),
        }
    }
}

fn update_tabs_view(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    if is_ctrl(&key, 't') {
        model.view = View::Terminal;
        return;
    }

    let tabs = &mut model.tabs;
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            cmds.push(Command::Quit);
            TabAction::None
        }
        KeyCode::Right | KeyCode::Tab => {
            tabs.next_section();
            TabAction::None
        }
        KeyCode::Left | KeyCode::BackTab => {
            tabs.prev_section();
            TabAction::None
        }
        KeyCode::Char('1') => tabs.select(Section::About),
        KeyCode::Char('2') => tabs.select(Section::Skills),
        KeyCode::Char('3') => tabs.select(Section::Work),
        KeyCode::Char('4') | KeyCode::Char('r') => tabs.select(Section::Resume),
        KeyCode::Down if tabs.active == Section::Work => {
            tabs.select_next_block();
            TabAction::None
        }
        KeyCode::Up if tabs.active == Section::Work => {
            tabs.select_prev_block();
            TabAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') if tabs.active == Section::Work => {
            tabs.toggle_selected();
            TabAction::None
        }
        _ => TabAction::None,
    };

    if action == TabAction::OpenResume {
        cmds.push(Command::OpenUrl {
            url: model.config.effective_resume().to_string(),
        });
    }
}
