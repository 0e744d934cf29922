pub mod backends;
pub mod cli;
pub mod color;
pub mod error;
pub mod pipeline;
pub mod preview;
pub mod tui;
