//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - they represent side effects
//! to be executed by the runtime.

use crate::animation::AnimationId;

/// Output commands from the update function.
/// These represent side effects that need to be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Animation timer
    /// Start a ticker for `id`, replacing whatever timer is running.
    StartAnimation {
        id: AnimationId,
    },
    StopAnimation {
        id: AnimationId,
    },

    // External effects
    OpenUrl {
        url: String,
    },

    // App lifecycle
    Quit,
}
