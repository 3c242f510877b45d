//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function - they come from the keyboard,
//! the animation timer, or URL-opening tasks reporting back.

use crossterm::event::KeyEvent;

use crate::animation::AnimationId;

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    // Keyboard/terminal events
    Key(KeyEvent),
    Resize(u16, u16),

    // From the animation timer
    /// One interval elapsed for the timer started with this id.
    Tick(AnimationId),

    // Command completion callbacks
    UrlOpened(String),
    /// (url, reason)
    UrlOpenFailed(String, String),
}
