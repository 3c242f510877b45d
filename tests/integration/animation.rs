//! Animation integration tests.
//!
//! These tests run real `TickerActor`s under paused tokio time and feed
//! their ticks back through `update`, standing in for the logic thread.

use std::time::Duration;

use crossterm::event::KeyCode;
use tokio::sync::mpsc;

use folio::actors::{AnimationSlot, TickerActor};
use folio::config::Config;
use folio::content::{BANNER, BOOT_LINES};
use folio::tea::{init, update, Command, Message, Model};

use crate::fixtures::TestShell;

const INTERVAL: Duration = Duration::from_millis(300);

/// Minimal runtime: executes timer commands and pumps ticks.
struct Harness {
    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
    slot: AnimationSlot,
}

impl Harness {
    fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            slot: AnimationSlot::new(),
        }
    }

    fn execute(&mut self, cmds: Vec<Command>) {
        for cmd in cmds {
            match cmd {
                Command::StartAnimation { id } => {
                    let handle = TickerActor::new(self.tx.clone(), id, INTERVAL).spawn();
                    self.slot.install(id, handle);
                }
                Command::StopAnimation { id } => {
                    self.slot.cancel(id);
                }
                Command::OpenUrl { .. } | Command::Quit => {}
            }
        }
    }

    /// Deliver every queued message; returns how many ticks arrived.
    fn pump(&mut self, model: &mut Model) -> usize {
        let mut ticks = 0;
        while let Ok(msg) = self.rx.try_recv() {
            ticks += 1;
            let cmds = update(model, msg);
            self.execute(cmds);
        }
        ticks
    }
}

#[tokio::test(start_paused = true)]
async fn test_boot_sequence_runs_to_banner_and_stops() {
    let mut model = Model::new(Config::default());
    let mut harness = Harness::new();
    harness.execute(init(&mut model));

    tokio::time::sleep(INTERVAL * (BOOT_LINES.len() as u32 + 1) + INTERVAL / 2).await;
    harness.pump(&mut model);

    assert!(model.animation.is_none());
    assert!(harness.slot.active_id().is_none());
    assert_eq!(model.log.len(), BOOT_LINES.len() + BANNER.len());

    // The timer is gone: nothing more arrives.
    tokio::time::sleep(INTERVAL * 4).await;
    assert_eq!(harness.pump(&mut model), 0);
}

#[tokio::test(start_paused = true)]
async fn test_clear_twice_leaves_exactly_one_timer() {
    let mut shell = TestShell::new();
    let mut harness = Harness::new();

    let cmds = shell.run("clear");
    harness.execute(cmds);
    let first = harness.slot.active_id().expect("first timer");

    let cmds = shell.run("clear");
    harness.execute(cmds);
    let second = harness.slot.active_id().expect("second timer");
    assert_ne!(first, second);

    tokio::time::sleep(INTERVAL * 3 + INTERVAL / 2).await;
    let mut ids = Vec::new();
    while let Ok(Message::Tick(id)) = harness.rx.try_recv() {
        ids.push(id);
    }
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| *id == second));
}

#[tokio::test(start_paused = true)]
async fn test_key_press_stops_clear_loop() {
    let mut shell = TestShell::new();
    let mut harness = Harness::new();
    harness.execute(shell.run("cls"));

    tokio::time::sleep(INTERVAL * 2 + INTERVAL / 2).await;
    assert_eq!(harness.pump(&mut shell.model), 2);
    assert!(shell.model.snapshot().frame.is_some());

    harness.execute(shell.press(KeyCode::Char('x')));
    assert!(harness.slot.active_id().is_none());
    assert!(shell.model.log.is_empty());

    tokio::time::sleep(INTERVAL * 3).await;
    assert_eq!(harness.pump(&mut shell.model), 0);
}

#[tokio::test(start_paused = true)]
async fn test_skipping_boot_midway() {
    let mut model = Model::new(Config::default());
    let mut harness = Harness::new();
    harness.execute(init(&mut model));

    tokio::time::sleep(INTERVAL + INTERVAL / 2).await;
    harness.pump(&mut model);
    assert_eq!(model.log.len(), 1);

    let cmds = update(
        &mut model,
        Message::Key(crate::fixtures::key(KeyCode::Enter)),
    );
    harness.execute(cmds);
    assert!(harness.slot.active_id().is_none());
    // One boot line, the banner, then the echo of the empty submit.
    assert_eq!(model.log.len(), 1 + BANNER.len() + 1);
}
