use serde::Serialize;

use crate::animation::AnimationKind;

use super::location::Location;

/// Exactly one of these is produced per dispatched line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "output", rename_all = "snake_case")]
pub enum Outcome {
    Success(Vec<String>),
    Failure(String),
}

/// Side effects requested by a handler; the runtime carries them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "target", rename_all = "snake_case")]
pub enum Effect {
    ClearLog,
    StartAnimation(AnimationKind),
    OpenUrl(String),
    /// Resolved against the configured resume location.
    OpenResume,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub outcome: Outcome,
    pub effects: Vec<Effect>,
}

impl Reply {
    pub fn success<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            outcome: Outcome::Success(lines.into_iter().map(Into::into).collect()),
            effects: Vec::new(),
        }
    }

    pub fn silent() -> Self {
        Self::success(Vec::<String>::new())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Failure(message.into()),
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }
}

/// A handler's result: the location to be in afterwards plus the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub location: Location,
    pub reply: Reply,
}

impl Transition {
    pub fn stay(at: &Location, reply: Reply) -> Self {
        Self {
            location: *at,
            reply,
        }
    }

    pub fn move_to(location: Location, reply: Reply) -> Self {
        Self { location, reply }
    }
}
