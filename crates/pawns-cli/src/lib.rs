//! Console front end for pawns-only chess.
//!
//! - [`CliConfig`] - `pawns.toml` loading
//! - [`render_board`] - text drawing of the board
//! - [`Session`] - the prompt/move/print loop

pub mod config;
mod render;
mod session;

pub use config::{CliConfig, ConfigError};
pub use render::render_board;
pub use session::{Session, SessionEnd};
