pub mod animation;
pub mod browser;
pub mod config;
pub mod content;
pub mod error;
pub mod headless;
pub mod history;
pub mod log;
pub mod session;
pub mod shell;
pub mod tabs;
pub mod util;

// Decoupled game loop architecture
pub mod actors;
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use error::{Error, Result};
pub use session::Session;
