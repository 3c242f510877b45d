//! Timer-driven animations: the boot sequence and the post-`clear` loop.
//!
//! An [`Animation`] is pure state advanced once per timer tick. The timer
//! itself lives in [`crate::actors::TickerActor`]; every tick carries the
//! [`AnimationId`] it was started for so ticks from a cancelled timer can be
//! recognised and dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::content::{BOOT_LINES, CLEAR_FRAMES};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    /// Reveals [`BOOT_LINES`] one per tick, then finishes.
    Boot,
    /// Loops [`CLEAR_FRAMES`] until cancelled.
    Clear,
}

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The visible frame changed.
    Frame,
    /// A boot line should be appended to the log.
    Reveal(&'static str),
    /// The animation is over; its timer should be stopped.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub id: AnimationId,
    pub kind: AnimationKind,
    step: usize,
}

impl Animation {
    pub fn new(kind: AnimationKind) -> Self {
        Self {
            id: AnimationId::next(),
            kind,
            step: 0,
        }
    }

    pub fn advance(&mut self) -> Step {
        match self.kind {
            AnimationKind::Clear => {
                self.step = (self.step + 1) % CLEAR_FRAMES.len();
                Step::Frame
            }
            AnimationKind::Boot => match BOOT_LINES.get(self.step) {
                Some(line) => {
                    self.step += 1;
                    Step::Reveal(line)
                }
                None => Step::Finished,
            },
        }
    }

    /// The ASCII frame to draw in place of the log, if any.
    pub fn frame(&self) -> Option<&'static [&'static str]> {
        match self.kind {
            AnimationKind::Clear => Some(CLEAR_FRAMES[self.step % CLEAR_FRAMES.len()]),
            AnimationKind::Boot => None,
        }
    }
}
