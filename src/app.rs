use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::actors::{AnimationSlot, TickerActor};
use crate::browser::Opener;
use crate::config::Config;
use crate::render::RenderState;
use crate::tea::{init, update, Command, Message, Model, View};
use crate::util::blocking_with_timeout;
use crate::{flog_debug, flog_warn, Result};

const MAX_BG_MESSAGES: usize = 50;
const OPEN_TIMEOUT: Duration = Duration::from_secs(5);

pub struct LogicThread;

impl LogicThread {
    pub fn run(
        config: Config,
        view: View,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        Runtime::new()?.block_on(Self::run_async(config, view, state_tx, shutdown))
    }

    async fn run_async(
        config: Config,
        view: View,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        flog_debug!(
            "LogicThread::run_async view={:?} skip_boot={} interval={:?}",
            view,
            config.skip_boot,
            config.frame_interval()
        );
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();
        let mut executor = Executor::new(msg_tx, &config);
        let mut model = Model::new(config).with_view(view);

        for cmd in init(&mut model) {
            executor.execute(cmd);
        }
        send_state(&state_tx, &model);

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Keyboard input (priority)
            while event::poll(Duration::ZERO)? {
                let msg = match event::read()? {
                    Event::Key(key) => Message::Key(key),
                    Event::Resize(w, h) => Message::Resize(w, h),
                    _ => continue,
                };

                for cmd in update(&mut model, msg) {
                    if executor.execute(cmd) {
                        shutdown.store(true, Ordering::Relaxed);
                        executor.shutdown();
                        return Ok(());
                    }
                }

                if model.dirty {
                    send_state(&state_tx, &model);
                    model.dirty = false;
                }
            }

            // Background messages (bounded)
            for _ in 0..MAX_BG_MESSAGES {
                let Ok(msg) = msg_rx.try_recv() else { break };
                for cmd in update(&mut model, msg) {
                    if executor.execute(cmd) {
                        shutdown.store(true, Ordering::Relaxed);
                        executor.shutdown();
                        return Ok(());
                    }
                }
            }

            if model.dirty {
                send_state(&state_tx, &model);
                model.dirty = false;
            }

            tokio::time::sleep(Duration::from_micros(500)).await;
        }

        executor.shutdown();
        Ok(())
    }
}

/// Runs the commands `update` returns. Owns the only animation timer.
pub(crate) struct Executor {
    msg_tx: mpsc::UnboundedSender<Message>,
    slot: AnimationSlot,
    opener: Arc<Opener>,
    frame_interval: Duration,
}

impl Executor {
    pub(crate) fn new(msg_tx: mpsc::UnboundedSender<Message>, config: &Config) -> Self {
        Self {
            msg_tx,
            slot: AnimationSlot::new(),
            opener: Arc::new(Opener::from_config(config)),
            frame_interval: config.frame_interval(),
        }
    }

    /// Returns true when the app should quit. Must run inside a tokio runtime.
    pub(crate) fn execute(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::StartAnimation { id } => {
                flog_debug!("Command::StartAnimation id={}", id.raw());
                let handle = TickerActor::new(self.msg_tx.clone(), id, self.frame_interval).spawn();
                self.slot.install(id, handle);
            }

            Command::StopAnimation { id } => {
                flog_debug!("Command::StopAnimation id={}", id.raw());
                self.slot.cancel(id);
            }

            Command::OpenUrl { url } => {
                flog_debug!("Command::OpenUrl url={}", url);
                let opener = self.opener.clone();
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let target = url.clone();
                    match blocking_with_timeout(OPEN_TIMEOUT, move || opener.open(&target)).await {
                        Ok(()) => {
                            let _ = tx.send(Message::UrlOpened(url));
                        }
                        Err(e) => {
                            flog_warn!("Open failed: {} - {}", url, e);
                            let _ = tx.send(Message::UrlOpenFailed(url, e.to_string()));
                        }
                    }
                });
            }

            Command::Quit => {
                flog_debug!("Command::Quit");
                return true;
            }
        }

        false
    }

    pub(crate) fn shutdown(&mut self) {
        self.slot.cancel_all();
    }

    #[cfg(test)]
    pub(crate) fn slot(&self) -> &AnimationSlot {
        &self.slot
    }
}

fn send_state(state_tx: &Sender<RenderState>, model: &Model) {
    let _ = state_tx.try_send(model.snapshot());
}
