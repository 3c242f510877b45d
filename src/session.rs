//! The shell session: current location plus history.
//!
//! A `Session` is the single owner of navigation state. It knows nothing
//! about rendering or timers; [`Session::submit`] returns the handler's
//! [`Reply`] and the caller decides how to show it and which effects to run.

use crate::flog_debug;
use crate::history::History;
use crate::shell::{dispatch, Location, Reply};

#[derive(Debug, Clone, Default)]
pub struct Session {
    location: Location,
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// `user@host:~/path$`
    pub fn prompt(&self, user: &str, host: &str) -> String {
        format!("{user}@{host}:{}$", self.location)
    }

    /// Record and run one input line. Blank lines are neither recorded nor
    /// dispatched and yield `None`.
    pub fn submit(&mut self, line: &str) -> Option<Reply> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        self.history.push(line);

        let transition = dispatch(&self.location, line)?;
        if transition.location != self.location {
            flog_debug!("cd {} -> {}", self.location, transition.location);
            self.location = transition.location;
        }
        Some(transition.reply)
    }
}
