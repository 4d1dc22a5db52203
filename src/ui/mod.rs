//! Terminal UI: a hot-seat front-end that plays through the chat-bot adapter,
//! with key presses standing in for reactions on the game message.

mod app;
mod game_view;

pub use app::{App, LocalMessage};
