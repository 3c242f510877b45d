//! Integration test suite for folio.
//!
//! These tests drive the public API the way the binary does: lines through
//! a session, keys through `update`, ticks from real timer actors.
//!
//! # Test Categories
//!
//! - `navigation`: Directory state machine and command outcomes
//! - `input`: Keyboard input, history recall and the log
//! - `animation`: Timer ownership, cancellation and stale ticks
//! - `headless`: `folio exec` transcripts and config loading

mod fixtures;

mod animation;
mod headless;
mod input;
mod navigation;
