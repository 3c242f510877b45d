//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model is pure application state - no channels, no handles, no runtime infrastructure.

use crate::animation::{Animation, AnimationKind};
use crate::config::Config;
use crate::render::{next_version, RenderState};
use crate::session::Session;
use crate::tabs::TabsState;

/// Oldest entries are dropped beyond this.
pub const MAX_LOG_ENTRIES: usize = 1000;

/// How a log line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The prompt and the submitted line, time-stamped.
    Echo,
    /// Command output; may carry ANSI colour.
    Output,
    /// A one-line command failure.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub kind: EntryKind,
    pub text: String,
    /// `HH:MM:SS`, set on echoes only.
    pub stamp: Option<String>,
}

impl LogEntry {
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Output,
            text: text.into(),
            stamp: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Error,
            text: text.into(),
            stamp: None,
        }
    }

    pub fn echo(text: impl Into<String>, stamp: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Echo,
            text: text.into(),
            stamp: Some(stamp.into()),
        }
    }
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Terminal,
    Tabs,
}

/// Pure application state - the single source of truth.
pub struct Model {
    // Core state
    pub session: Session,
    pub log: Vec<LogEntry>,
    pub view: View,
    pub tabs: TabsState,

    // Input state
    pub input_buffer: String,
    /// Lines scrolled up from the tail; 0 follows the newest output.
    pub scroll: usize,

    /// The running animation, if any. Its id matches the live timer.
    pub animation: Option<Animation>,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Config (immutable after init)
    pub config: Config,
}

impl Model {
    pub fn new(config: Config) -> Self {
        Self {
            session: Session::new(),
            log: Vec::new(),
            view: View::default(),
            tabs: TabsState::new(),
            input_buffer: String::new(),
            scroll: 0,
            animation: None,
            dirty: true,
            config,
        }
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    /// Append an entry and jump back to the tail.
    pub fn push_entry(&mut self, entry: LogEntry) {
        self.log.push(entry);
        if self.log.len() > MAX_LOG_ENTRIES {
            let excess = self.log.len() - MAX_LOG_ENTRIES;
            self.log.drain(..excess);
        }
        self.scroll = 0;
        self.dirty = true;
    }

    pub fn push_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push_entry(LogEntry::output(line));
        }
    }

    pub fn prompt(&self) -> String {
        self.session
            .prompt(self.config.effective_user(), self.config.effective_host())
    }

    /// Create an immutable snapshot for the render thread.
    ///
    /// Each snapshot gets a monotonically increasing version number so the
    /// render thread can skip redundant draws.
    pub fn snapshot(&self) -> RenderState {
        RenderState {
            version: next_version(),
            view: self.view,
            log: self.log.clone(),
            scroll: self.scroll,
            prompt: self.prompt(),
            input_buffer: self.input_buffer.clone(),
            frame: self.animation.as_ref().and_then(|a| a.frame()),
            booting: self.animation.map(|a| a.kind) == Some(AnimationKind::Boot),
            tabs: self.tabs.clone(),
        }
    }
}
