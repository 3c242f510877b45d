use std::sync::atomic::{AtomicU64, Ordering};

use crate::tabs::TabsState;
use crate::tea::{LogEntry, View};

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    pub view: View,
    pub log: Vec<LogEntry>,
    /// Lines scrolled up from the tail.
    pub scroll: usize,
    pub prompt: String,
    pub input_buffer: String,
    /// Clear-animation frame drawn in place of the log.
    pub frame: Option<&'static [&'static str]>,
    /// Boot sequence still running; the input line is hidden.
    pub booting: bool,
    pub tabs: TabsState,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            view: View::Terminal,
            log: Vec::new(),
            scroll: 0,
            prompt: String::new(),
            input_buffer: String::new(),
            frame: None,
            booting: false,
            tabs: TabsState::default(),
        }
    }
}
