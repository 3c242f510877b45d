//! Terminal UI rendering for the folio TUI.
//!
//! Two screens share one chrome: a content area, a solid separator, and a
//! single status line at the bottom.
//! - Terminal view: the command log (or the clear-animation frame) above the
//!   prompt line
//! - Tabs view: a tab header above the selected section
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates application state. This enables the decoupled game loop.

use ansi_to_tui::IntoText;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::content::RESUME_BLOCKS;
use crate::render::RenderState;
use crate::tabs::{Section, TabsState};
use crate::tea::{EntryKind, LogEntry, View};
use crate::util::truncate;

// Color tokens (selection uses REVERSED modifier to adapt to terminal theme)
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_SEPARATOR: Color = Color::White;
const COLOR_PROMPT: Color = Color::Green;
const COLOR_ERROR: Color = Color::Red;

// -----------------------------------------------------------------------------
// Context-sensitive keymap system
// -----------------------------------------------------------------------------

/// Context for determining which keybindings to display.
/// Derived from RenderState - this is the "view model" for the statusbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapContext {
    /// Boot sequence running; any key skips it.
    Booting,
    Terminal,
    Tabs { in_work: bool },
}

impl KeymapContext {
    /// Derive keymap context from render state.
    pub fn from_render_state(state: &RenderState) -> Self {
        match state.view {
            View::Terminal if state.booting => KeymapContext::Booting,
            View::Terminal => KeymapContext::Terminal,
            View::Tabs => KeymapContext::Tabs {
                in_work: state.tabs.active == Section::Work,
            },
        }
    }
}

/// A single keybinding entry for display.
struct Keybinding(&'static str, &'static str);

/// A group of related keybindings (separated by │).
struct KeybindingGroup(Vec<Keybinding>);

/// Get keybindings for a given context.
fn keybindings_for_context(ctx: KeymapContext) -> Vec<KeybindingGroup> {
    match ctx {
        KeymapContext::Booting => vec![KeybindingGroup(vec![Keybinding("any key", "skip")])],
        KeymapContext::Terminal => vec![
            KeybindingGroup(vec![
                Keybinding("Enter", "run"),
                Keybinding("↑↓", "history"),
                Keybinding("PgUp/PgDn", "scroll"),
            ]),
            KeybindingGroup(vec![Keybinding("^T", "tabs")]),
            KeybindingGroup(vec![Keybinding("^C", "quit")]),
        ],
        KeymapContext::Tabs { in_work } => {
            let mut navigation = vec![Keybinding("←→", "section"), Keybinding("r", "resume")];
            if in_work {
                navigation.push(Keybinding("↑↓", "select"));
                navigation.push(Keybinding("Enter", "expand"));
            }
            vec![
                KeybindingGroup(navigation),
                KeybindingGroup(vec![Keybinding("^T", "terminal")]),
                KeybindingGroup(vec![Keybinding("q", "quit")]),
            ]
        }
    }
}

/// Main render function - entry point for all UI drawing.
/// Takes an immutable RenderState snapshot.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    if area.height < 3 {
        render_statusbar(frame, state, area);
        return;
    }

    match state.view {
        View::Terminal => render_terminal(frame, state, area),
        View::Tabs => render_tabs(frame, state, area),
    }
}

/// Log + separator + prompt + status bar.
fn render_terminal(frame: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    match state.frame {
        Some(art) => render_animation_frame(frame, art, chunks[0]),
        None => render_log(frame, state, chunks[0]),
    }
    render_separator(frame, chunks[1]);
    render_prompt_line(frame, state, chunks[2]);
    render_statusbar(frame, state, chunks[3]);
}

/// Convert one log entry to display lines. Output may span several lines
/// once its ANSI escapes are parsed.
fn entry_lines(entry: &LogEntry) -> Vec<Line<'static>> {
    match entry.kind {
        EntryKind::Echo => {
            let mut spans = Vec::with_capacity(2);
            if let Some(stamp) = &entry.stamp {
                spans.push(Span::styled(
                    format!("[{stamp}] "),
                    Style::default().fg(COLOR_TEXT_MUTED),
                ));
            }
            spans.push(Span::styled(
                entry.text.clone(),
                Style::default().fg(COLOR_TEXT_DIMMED),
            ));
            vec![Line::from(spans)]
        }
        EntryKind::Output => {
            let text: Text = entry.text.into_text().unwrap_or_default();
            if text.lines.is_empty() {
                vec![Line::default()]
            } else {
                text.lines
            }
        }
        EntryKind::Error => vec![Line::from(Span::styled(
            entry.text.clone(),
            Style::default().fg(COLOR_ERROR),
        ))],
    }
}

/// Render the tail of the log, `scroll` lines up from the bottom.
fn render_log(frame: &mut Frame, state: &RenderState, area: Rect) {
    let lines: Vec<Line> = state.log.iter().flat_map(entry_lines).collect();

    let visible_lines = area.height as usize;
    let max_scroll = lines.len().saturating_sub(visible_lines);
    let end = lines.len() - state.scroll.min(max_scroll);
    let start = end.saturating_sub(visible_lines);
    let lines: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render a clear-animation frame centered in the content area.
fn render_animation_frame(frame: &mut Frame, art: &[&str], area: Rect) {
    let height = art.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let target = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: height.min(area.height),
    };
    let lines: Vec<Line> = art
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(COLOR_PROMPT))))
        .collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

/// Render the separator - solid divider line between content and input.
fn render_separator(frame: &mut Frame, area: Rect) {
    let solid = "─".repeat(area.width as usize);
    let line = Line::from(Span::styled(solid, Style::default().fg(COLOR_SEPARATOR)));
    frame.render_widget(Paragraph::new(line), area);
}

/// `user@host:~/path$ buffer_`; hidden while booting.
fn render_prompt_line(frame: &mut Frame, state: &RenderState, area: Rect) {
    if state.booting {
        return;
    }

    let prompt_style = Style::default()
        .fg(COLOR_PROMPT)
        .add_modifier(Modifier::BOLD);
    let input_style = Style::default().fg(Color::White);
    let cursor_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::SLOW_BLINK);

    // Keep the cursor on screen: shorten the prompt first.
    let width = area.width as usize;
    let buffer_len = state.input_buffer.chars().count();
    let prompt_room = width.saturating_sub(buffer_len + 2);
    let prompt = truncate(&state.prompt, prompt_room);

    let line = Line::from(vec![
        Span::styled(prompt, prompt_style),
        Span::raw(" "),
        Span::styled(state.input_buffer.clone(), input_style),
        Span::styled("_", cursor_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render keybindings legend for the bottom line.
fn render_statusbar(frame: &mut Frame, state: &RenderState, area: Rect) {
    let line = render_keymap_line(KeymapContext::from_render_state(state));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_keymap_line(ctx: KeymapContext) -> Line<'static> {
    let key_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let desc_style = Style::default().fg(COLOR_TEXT_MUTED);
    let sep_style = Style::default().fg(COLOR_TEXT_MUTED);

    let mut spans: Vec<Span> = Vec::new();
    for group in keybindings_for_context(ctx) {
        if group.0.is_empty() {
            continue;
        }
        if !spans.is_empty() {
            spans.push(Span::styled(" │ ", sep_style));
        }
        for (key_idx, keybinding) in group.0.iter().enumerate() {
            if key_idx > 0 {
                spans.push(Span::styled(" • ", sep_style));
            }
            spans.push(Span::styled(keybinding.0, key_style));
            spans.push(Span::styled(format!(" {}", keybinding.1), desc_style));
        }
    }

    Line::from(spans)
}

// -----------------------------------------------------------------------------
// Tabbed view
// -----------------------------------------------------------------------------

fn render_tabs(frame: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let titles: Vec<Line> = Section::ALL.iter().map(|s| Line::from(s.title())).collect();
    let tabs = Tabs::new(titles)
        .select(state.tabs.active.index())
        .style(Style::default().fg(COLOR_TEXT_DIMMED))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .divider(Span::styled("│", Style::default().fg(COLOR_TEXT_MUTED)));
    frame.render_widget(tabs, chunks[0]);

    render_separator(frame, chunks[1]);

    let body = match state.tabs.active {
        Section::Work => work_lines(&state.tabs),
        section => section
            .body()
            .iter()
            .flat_map(|l| {
                let text: Text = l.into_text().unwrap_or_default();
                text.lines
            })
            .collect(),
    };
    frame.render_widget(Paragraph::new(body), chunks[2]);

    render_statusbar(frame, state, chunks[3]);
}

/// Resume blocks; the selected one reversed, expanded ones with details.
fn work_lines(tabs: &TabsState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, block) in RESUME_BLOCKS.iter().enumerate() {
        let expanded = tabs.is_expanded(idx);
        let marker = if expanded { "▾" } else { "▸" };
        let style = if idx == tabs.selected_block {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} {} · {}", block.role, block.org), style),
            Span::styled(
                format!("  ({})", block.period),
                Style::default().fg(COLOR_TEXT_MUTED),
            ),
        ]));
        if expanded {
            lines.extend(block.details.iter().map(|d| {
                Line::from(Span::styled(
                    format!("    {d}"),
                    Style::default().fg(COLOR_TEXT_DIMMED),
                ))
            }));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CLEAR_FRAMES;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_snapshot(state: &RenderState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                let mut line = String::new();
                for x in 0..width {
                    line.push_str(buffer[(x, y)].symbol());
                }
                line.trim_end().to_string()
            })
            .collect()
    }

    fn state_with_log(lines: &[&str]) -> RenderState {
        RenderState {
            prompt: "guest@folio:~$".to_string(),
            log: lines.iter().map(|l| LogEntry::output(*l)).collect(),
            ..RenderState::default()
        }
    }

    #[test]
    fn test_terminal_shows_log_tail_and_prompt() {
        let lines: Vec<String> = (0..20).map(|i| format!("line {i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut state = state_with_log(&refs);
        state.input_buffer = "ls".to_string();

        let screen = render_snapshot(&state, 80, 8);
        // 8 rows: 5 log, separator, prompt, status.
        assert_eq!(screen[0], "line 15");
        assert_eq!(screen[4], "line 19");
        assert_eq!(screen[6], "guest@folio:~$ ls_");
        assert!(screen[7].contains("^C quit"));
    }

    #[test]
    fn test_scroll_moves_window_up() {
        let lines: Vec<String> = (0..20).map(|i| format!("line {i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut state = state_with_log(&refs);
        state.scroll = 3;

        let screen = render_snapshot(&state, 40, 8);
        assert_eq!(screen[4], "line 16");
    }

    #[test]
    fn test_scroll_past_top_keeps_a_full_window() {
        let lines: Vec<String> = (0..15).map(|i| format!("line {i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut state = state_with_log(&refs);
        state.scroll = 15;

        let screen = render_snapshot(&state, 40, 8);
        assert_eq!(screen[0], "line 0");
        assert_eq!(screen[4], "line 4");
    }

    #[test]
    fn test_ansi_output_is_styled_not_printed() {
        let state = state_with_log(&["\x1b[1mbold\x1b[0m plain"]);
        let screen = render_snapshot(&state, 40, 6);
        assert!(screen.iter().any(|l| l == "bold plain"));
        assert!(!screen.iter().any(|l| l.contains("[1m")));
    }

    #[test]
    fn test_echo_shows_stamp() {
        let mut state = state_with_log(&[]);
        state.log.push(LogEntry::echo("guest@folio:~$ help", "09:05:00"));
        let screen = render_snapshot(&state, 40, 6);
        assert!(screen.contains(&"[09:05:00] guest@folio:~$ help".to_string()));
    }

    #[test]
    fn test_clear_frame_replaces_log() {
        let mut state = state_with_log(&["should not show"]);
        state.frame = Some(CLEAR_FRAMES[0]);
        let screen = render_snapshot(&state, 40, 10);
        assert!(!screen.iter().any(|l| l.contains("should not show")));
        assert!(screen.iter().any(|l| l.contains("(o)")));
    }

    #[test]
    fn test_booting_hides_prompt() {
        let mut state = state_with_log(&["[ ok ] loading profile"]);
        state.booting = true;
        let screen = render_snapshot(&state, 40, 6);
        assert!(!screen.iter().any(|l| l.contains("guest@folio")));
        assert!(screen[5].contains("skip"));
    }

    #[test]
    fn test_tabs_view_header_and_work_blocks() {
        let mut state = RenderState {
            view: View::Tabs,
            ..RenderState::default()
        };
        state.tabs.select(Section::Work);
        state.tabs.toggle_selected();

        let screen = render_snapshot(&state, 60, 12);
        assert!(screen[0].contains("About"));
        assert!(screen[0].contains("Resume ↗"));
        assert!(screen.iter().any(|l| l.contains(RESUME_BLOCKS[0].role)));
        assert!(screen.iter().any(|l| l.contains(RESUME_BLOCKS[0].details[0])));
        assert!(!screen.iter().any(|l| l.contains(RESUME_BLOCKS[1].details[0])));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = state_with_log(&["x"]);
        render_snapshot(&state, 10, 2);
    }

    #[test]
    fn test_keymap_context() {
        let mut state = RenderState::default();
        assert_eq!(KeymapContext::from_render_state(&state), KeymapContext::Terminal);
        state.booting = true;
        assert_eq!(KeymapContext::from_render_state(&state), KeymapContext::Booting);
        state.view = View::Tabs;
        assert_eq!(
            KeymapContext::from_render_state(&state),
            KeymapContext::Tabs { in_work: false }
        );
    }
}
