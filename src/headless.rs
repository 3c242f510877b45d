//! Non-interactive mode behind `folio exec`: run lines through a fresh
//! session and report a plain-text or JSON transcript.

use serde::Serialize;

use crate::config::Config;
use crate::content::strip_ansi;
use crate::session::Session;
use crate::shell::{Effect, Outcome};

/// One submitted line and what came of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    /// Prompt shown before the line was run.
    pub prompt: String,
    pub input: String,
    /// `None` for blank lines.
    pub outcome: Option<Outcome>,
    /// Location after the line, as shown in the prompt.
    pub location: String,
    /// URLs the line asked to open, resume already resolved.
    pub urls: Vec<String>,
    /// The line cleared the screen.
    pub cleared: bool,
}

pub fn run_script<I, S>(config: &Config, lines: I) -> Vec<TranscriptEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut session = Session::new();
    let user = config.effective_user();
    let host = config.effective_host();

    lines
        .into_iter()
        .map(|line| {
            let input = line.as_ref().trim().to_string();
            let prompt = session.prompt(user, host);
            let reply = session.submit(&input);

            let mut urls = Vec::new();
            let mut cleared = false;
            let outcome = reply.map(|reply| {
                for effect in &reply.effects {
                    match effect {
                        Effect::OpenUrl(url) => urls.push(url.clone()),
                        Effect::OpenResume => urls.push(config.effective_resume().to_string()),
                        Effect::ClearLog => cleared = true,
                        Effect::StartAnimation(_) => {}
                    }
                }
                match reply.outcome {
                    Outcome::Success(lines) => {
                        Outcome::Success(lines.iter().map(|l| strip_ansi(l)).collect())
                    }
                    Outcome::Failure(msg) => Outcome::Failure(strip_ansi(&msg)),
                }
            });

            TranscriptEntry {
                prompt,
                input,
                outcome,
                location: session.location().to_string(),
                urls,
                cleared,
            }
        })
        .collect()
}

/// Plain transcript, one echoed prompt per entry. With `show_opens`, each
/// URL is listed as `open: <url>`.
pub fn render_plain(entries: &[TranscriptEntry], show_opens: bool) -> String {
    let mut out = Vec::new();
    for entry in entries {
        out.push(format!("{} {}", entry.prompt, entry.input).trim_end().to_string());
        match &entry.outcome {
            Some(Outcome::Success(lines)) => out.extend(lines.iter().cloned()),
            Some(Outcome::Failure(msg)) => out.push(msg.clone()),
            None => {}
        }
        if show_opens {
            out.extend(entry.urls.iter().map(|url| format!("open: {url}")));
        }
    }
    let mut text = out.join("\n");
    text.push('\n');
    text
}
