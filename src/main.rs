use std::io::{self, stdout, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use folio::app::LogicThread;
use folio::browser::Opener;
use folio::config::Config;
use folio::headless::{render_plain, run_script};
use folio::render::RenderState;
use folio::tea::View;
use folio::{flog, flog_warn, ui, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// folio - a portfolio you browse like a shell
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    FOLIO_DEBUG=1   Enable debug logging (alternative to --debug)"
)]
pub struct Cli {
    /// Enable debug logging (writes to ~/.folio/folio.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Skip the boot sequence and show the banner straight away
    #[arg(long)]
    pub no_boot: bool,

    /// Start in the tabbed view instead of the terminal
    #[arg(long)]
    pub tabs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run shell lines without the TUI and print the transcript
    Exec {
        /// Lines to run in order, e.g. "cd projects" "ls"
        #[arg(required = true)]
        lines: Vec<String>,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,

        /// Actually open requested URLs instead of listing them
        #[arg(long)]
        open: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    folio::log::init_with_debug(cli.debug);

    let mut config = Config::load()?;
    if cli.no_boot {
        config.skip_boot = true;
    }

    if let Some(Command::Exec { lines, json, open }) = cli.command {
        return run_exec(&config, &lines, json, open);
    }

    if cli.debug {
        flog!("folio starting (debug mode enabled)");
    } else {
        flog!("folio starting");
    }

    let view = if cli.tabs { View::Tabs } else { View::Terminal };
    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let shutdown_clone = shutdown.clone();
    let logic_handle =
        thread::spawn(move || LogicThread::run(config, view, state_tx, shutdown_clone));

    let mut terminal = setup_terminal()?;
    let result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let logic_result = logic_handle.join();
    restore_terminal(&mut terminal)?;
    result?;
    match logic_result {
        Ok(inner) => inner,
        Err(_) => Err(folio::Error::TaskJoin("logic thread panicked".to_string())),
    }
}

/// Headless transcript for `folio exec`.
fn run_exec(config: &Config, lines: &[String], json: bool, open: bool) -> Result<()> {
    flog!("Exec: {} lines json={} open={}", lines.len(), json, open);
    let entries = run_script(config, lines);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_plain(&entries, !open));
    }

    if open {
        let opener = Opener::from_config(config);
        for url in entries.iter().flat_map(|e| e.urls.iter()) {
            if let Err(e) = opener.open(url) {
                flog_warn!("Exec open failed: {} - {}", url, e);
                eprintln!("open: {url}: {e}");
            }
        }
    }
    Ok(())
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_command_returns_none() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
        assert!(!cli.no_boot);
        assert!(!cli.tabs);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["folio", "-d", "--no-boot", "--tabs"]).unwrap();
        assert!(cli.debug);
        assert!(cli.no_boot);
        assert!(cli.tabs);
    }

    #[test]
    fn test_exec_collects_lines() {
        let cli = Cli::try_parse_from(["folio", "exec", "--json", "cd projects", "ls"]).unwrap();
        match cli.command {
            Some(Command::Exec { lines, json, open }) => {
                assert_eq!(lines, ["cd projects", "ls"]);
                assert!(json);
                assert!(!open);
            }
            _ => panic!("Expected Exec command"),
        }
    }

    #[test]
    fn test_exec_requires_a_line() {
        assert!(Cli::try_parse_from(["folio", "exec"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["folio", "nope"]).is_err());
    }
}
