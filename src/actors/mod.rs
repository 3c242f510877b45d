//! Actor system for background tasks.
//!
//! Each actor is an independent tokio task that communicates with the main
//! application via message passing. The only long-lived actor is the
//! animation ticker (TickerActor); at most one runs at a time, tracked by
//! an [`AnimationSlot`].
//!
//! NOTE: Keyboard input is handled synchronously in the logic thread,
//! not via an actor, for minimum latency.

pub mod ticker;

use tokio_util::sync::CancellationToken;

use crate::animation::AnimationId;
use crate::flog_debug;

pub use ticker::TickerActor;

/// Handle to a running actor, used for graceful shutdown.
#[derive(Debug, Clone)]
pub struct ActorHandle {
    cancel: CancellationToken,
}

impl ActorHandle {
    /// Create a new actor handle with a cancellation token.
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Signal the actor to shut down gracefully.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Check if shutdown has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Holds the one live animation timer.
#[derive(Debug, Default)]
pub struct AnimationSlot {
    current: Option<(AnimationId, ActorHandle)>,
}

impl AnimationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `handle` the live timer, cancelling the one it replaces.
    pub fn install(&mut self, id: AnimationId, handle: ActorHandle) {
        if let Some((old_id, old)) = self.current.replace((id, handle)) {
            flog_debug!("AnimationSlot: replacing timer {} with {}", old_id.raw(), id.raw());
            old.shutdown();
        }
    }

    /// Cancel the timer for `id`. Returns false when a different (or no)
    /// timer is live.
    pub fn cancel(&mut self, id: AnimationId) -> bool {
        match &self.current {
            Some((live, _)) if *live == id => {
                if let Some((_, handle)) = self.current.take() {
                    handle.shutdown();
                }
                true
            }
            _ => false,
        }
    }

    pub fn cancel_all(&mut self) {
        if let Some((id, handle)) = self.current.take() {
            flog_debug!("AnimationSlot: cancelling timer {}", id.raw());
            handle.shutdown();
        }
    }

    pub fn active_id(&self) -> Option<AnimationId> {
        self.current.as_ref().map(|(id, _)| *id)
    }
}
