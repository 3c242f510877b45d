//! Ticker actor driving one animation.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::animation::AnimationId;
use crate::tea::Message;
use crate::{flog_debug, flog_trace};

use super::ActorHandle;

/// Actor that posts `Message::Tick(id)` every interval until cancelled.
pub struct TickerActor {
    msg_tx: mpsc::UnboundedSender<Message>,
    id: AnimationId,
    interval: Duration,
}

impl TickerActor {
    pub fn new(
        msg_tx: mpsc::UnboundedSender<Message>,
        id: AnimationId,
        interval: Duration,
    ) -> Self {
        Self {
            msg_tx,
            id,
            interval,
        }
    }

    pub fn spawn(self) -> ActorHandle {
        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();

        flog_debug!(
            "TickerActor::spawn id={} interval={:?}",
            self.id.raw(),
            self.interval
        );

        tokio::spawn(async move {
            // First tick one interval from now, not immediately.
            let mut interval = interval_at(Instant::now() + self.interval, self.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = cancel_clone.cancelled() => {
                        flog_debug!("TickerActor {} cancelled", self.id.raw());
                        break;
                    }
                    _ = interval.tick() => {
                        flog_trace!("TickerActor {} tick", self.id.raw());
                        if self.msg_tx.send(Message::Tick(self.id)).is_err() {
                            flog_debug!("TickerActor: message channel closed");
                            break;
                        }
                    }
                }
            }
        });

        ActorHandle::new(cancel)
    }
}
