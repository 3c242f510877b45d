//! The routing table: `(scope, verb) → handler`.
//!
//! Rows are checked in order and the first row whose verb matches and whose
//! scope is `Any` or the current location's scope wins. Scope-specific rows
//! therefore come before their `Any` fallbacks.

use super::command::{parse, Parsed, Verb};
use super::handlers;
use super::location::{Location, Scope};
use super::reply::{Reply, Transition};

pub type Handler = fn(&Location, &[String]) -> Transition;

struct Route {
    verb: Verb,
    scope: Scope,
    handler: Handler,
}

const ROUTES: &[Route] = &[
    Route { verb: Verb::Ls, scope: Scope::Any, handler: handlers::ls },
    Route { verb: Verb::Help, scope: Scope::Any, handler: handlers::help },
    Route { verb: Verb::Clear, scope: Scope::Any, handler: handlers::clear },
    Route { verb: Verb::Cat, scope: Scope::Any, handler: handlers::cat },
    Route { verb: Verb::Cd, scope: Scope::Root, handler: handlers::cd_from_root },
    Route { verb: Verb::Cd, scope: Scope::Projects, handler: handlers::cd_from_projects },
    Route { verb: Verb::Cd, scope: Scope::Contact, handler: handlers::cd_from_contact },
    Route { verb: Verb::Cd, scope: Scope::Project, handler: handlers::cd_from_project },
    Route { verb: Verb::Link, scope: Scope::Project, handler: handlers::link },
    Route { verb: Verb::Link, scope: Scope::Any, handler: handlers::link_unavailable },
];

pub fn route(verb: Verb, at: &Location) -> Option<Handler> {
    let scope = at.scope();
    ROUTES
        .iter()
        .find(|r| r.verb == verb && (r.scope == Scope::Any || r.scope == scope))
        .map(|r| r.handler)
}

/// Parse and run one line. `None` for a blank line.
pub fn dispatch(at: &Location, line: &str) -> Option<Transition> {
    match parse(line) {
        Parsed::Empty => None,
        Parsed::Unknown(token) => Some(Transition::stay(
            at,
            Reply::failure(format!("Command not found: {token}")),
        )),
        Parsed::Known(invocation) => Some(match route(invocation.verb, at) {
            Some(handler) => handler(at, &invocation.args),
            None => Transition::stay(
                at,
                Reply::failure(format!("{}: not available here", invocation.verb)),
            ),
        }),
    }
}
