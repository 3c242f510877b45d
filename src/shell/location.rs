use std::fmt;

use crate::content::{Project, PROJECTS};

/// The pseudo-directory a session is inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    Root,
    Projects,
    Contact,
    Project(&'static Project),
}

/// Coarse grouping of locations used by the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Any,
    Root,
    Projects,
    Contact,
    Project,
}

impl Location {
    pub fn scope(&self) -> Scope {
        match self {
            Location::Root => Scope::Root,
            Location::Projects => Scope::Projects,
            Location::Contact => Scope::Contact,
            Location::Project(_) => Scope::Project,
        }
    }

    /// Where `cd ..` leads. Root has no parent.
    pub fn parent(&self) -> Option<Location> {
        match self {
            Location::Root => None,
            Location::Projects | Location::Contact => Some(Location::Root),
            Location::Project(_) => Some(Location::Projects),
        }
    }

    /// Every reachable location, for exhaustive checks.
    pub fn all() -> impl Iterator<Item = Location> {
        [Location::Root, Location::Projects, Location::Contact]
            .into_iter()
            .chain(PROJECTS.iter().map(Location::Project))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Root => write!(f, "~"),
            Location::Projects => write!(f, "~/projects"),
            Location::Contact => write!(f, "~/contact_me"),
            Location::Project(p) => write!(f, "~/projects/{}", p.name),
        }
    }
}
