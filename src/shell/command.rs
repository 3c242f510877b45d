//! Line parsing: a verb token followed by arguments.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Ls,
    Cd,
    Clear,
    Help,
    Cat,
    Link,
}

impl Verb {
    pub const ALL: [Verb; 6] = [
        Verb::Ls,
        Verb::Cd,
        Verb::Clear,
        Verb::Help,
        Verb::Cat,
        Verb::Link,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Verb::Ls => "ls",
            Verb::Cd => "cd",
            Verb::Clear => "clear",
            Verb::Help => "help",
            Verb::Cat => "cat",
            Verb::Link => "./link",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerb(pub String);

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_lowercase().as_str() {
            "ls" => Ok(Verb::Ls),
            "cd" => Ok(Verb::Cd),
            "clear" | "cls" => Ok(Verb::Clear),
            "help" => Ok(Verb::Help),
            "cat" => Ok(Verb::Cat),
            "./link" => Ok(Verb::Link),
            _ => Err(UnknownVerb(token.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub verb: Verb,
    /// Arguments exactly as typed.
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Empty,
    Known(Invocation),
    Unknown(String),
}

pub fn parse(line: &str) -> Parsed {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Parsed::Empty;
    };
    match first.parse::<Verb>() {
        Ok(verb) => Parsed::Known(Invocation {
            verb,
            args: tokens.map(str::to_string).collect(),
        }),
        Err(UnknownVerb(token)) => Parsed::Unknown(token),
    }
}
