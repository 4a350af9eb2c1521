//! User interface formatting and display functions

pub mod colors;
pub mod display;
pub mod renderer;
pub mod terminal;

// Re-export commonly used functions
pub use colors::*;
pub use display::*;
pub use renderer::render_ui;
pub use terminal::TerminalGuard;
