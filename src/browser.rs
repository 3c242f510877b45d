use std::process::{Command, Stdio};

use crate::config::Config;
use crate::{flog_debug, flog_warn, Error, Result};

/// External command that hands a URL or path to the desktop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opener {
    program: String,
    args: Vec<String>,
}

impl Opener {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The configured `opener` split on whitespace, else the platform default.
    pub fn from_config(config: &Config) -> Self {
        let mut words = config
            .opener
            .as_deref()
            .map(|s| s.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter();
        match words.next() {
            Some(program) => Self::new(program, words.collect()),
            None => Self::platform_default(),
        }
    }

    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("open", Vec::new())
        } else if cfg!(target_os = "windows") {
            Self::new(
                "cmd",
                vec!["/C".to_string(), "start".to_string(), String::new()],
            )
        } else {
            Self::new("xdg-open", Vec::new())
        }
    }

    #[cfg(test)]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argv for opening `target`.
    #[cfg(test)]
    pub fn command_line(&self, target: &str) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv.push(target.to_string());
        argv
    }

    /// Run the opener and wait for it. Blocking; call through
    /// [`crate::util::blocking_with_timeout`] from async code.
    pub fn open(&self, target: &str) -> Result<()> {
        flog_debug!("Opener::open program={} target={}", self.program, target);
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(target)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::Opener(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => output.status.to_string(),
                msg => msg.to_string(),
            };
            flog_warn!("Opener failed for {}: {}", target, reason);
            return Err(Error::Opener(reason));
        }
        Ok(())
    }
}
