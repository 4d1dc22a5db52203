//! # Connect Four Bot
//!
//! Turn-based Connect Four as played through a chat bot: players react to the
//! game message with column selectors, the bot drops their piece and edits the
//! rendered board until someone completes a line.
//!
//! ## Modules
//!
//! - [`game`] — Board engine: grid, gravity drops, line scan, session state machine
//! - [`bot`] — Adapter owning the single active game and mapping reactions to moves
//! - [`render`] — Text rendering of a session with emoji or terminal glyphs
//! - [`ui`] — Hot-seat terminal front-end driving the adapter
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod bot;
pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod ui;
