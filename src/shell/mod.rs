//! The faux shell: locations, line parsing, the routing table and handlers.
//!
//! Everything here is pure: handlers take a location and arguments and
//! return a [`Transition`]. Rendering and side effects happen in the caller.

pub mod command;
pub mod dispatch;
pub mod handlers;
pub mod location;
pub mod reply;

pub use command::{parse, Invocation, Parsed, Verb};
pub use dispatch::{dispatch, route};
pub use location::{Location, Scope};
pub use reply::{Effect, Outcome, Reply, Transition};
