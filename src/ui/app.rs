use crate::bot::{Effect, GameBot};
use crate::error::BotError;
use crate::config::AppConfig;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Handle of the one local "message" the game is shown in.
const MESSAGE_ID: u64 = 1;

/// Local stand-in for the chat message a game lives in.
#[derive(Debug, Default)]
pub struct LocalMessage {
    pub content: String,
    /// Column selectors the bot currently offers
    pub selectors: Vec<String>,
}

impl LocalMessage {
    /// Carry out the effects the bot asked for. Returns announcements.
    fn apply(&mut self, effects: Vec<Effect>) -> Option<String> {
        let mut announcement = None;
        for effect in effects {
            match effect {
                Effect::Announce(text) => announcement = Some(text),
                Effect::SendBoard(text) => {
                    self.content = text;
                    self.selectors.clear();
                }
                Effect::AddReaction(selector) => self.selectors.push(selector),
                Effect::EditBoard(text) => self.content = text,
                Effect::RemoveBotReaction(selector) => {
                    self.selectors.retain(|s| *s != selector);
                }
                Effect::ClearReactions => self.selectors.clear(),
                // Players' reactions are never kept locally
                Effect::RemoveUserReactions => {}
            }
        }
        announcement
    }
}

/// Hot-seat front-end: every key press is a reaction by the acting player.
pub struct App {
    bot: GameBot<String, u64>,
    players: Vec<String>,
    acting: usize,
    selected_column: usize,
    view: LocalMessage,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig, players: Vec<String>) -> Result<Self, BotError> {
        let mut app = App {
            bot: GameBot::new(config.board, config.glyphs())?,
            players,
            acting: 0,
            selected_column: 0,
            view: LocalMessage::default(),
            should_quit: false,
            message: None,
        };
        app.new_game();
        Ok(app)
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;
        let columns = self.view.selectors.len().max(1);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < columns {
                    self.selected_column += 1;
                }
            }
            KeyCode::Tab => {
                self.acting = (self.acting + 1) % self.players.len();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let selector = self.view.selectors.get(self.selected_column).cloned();
                if let Some(selector) = selector {
                    self.react(&selector);
                }
            }
            KeyCode::Char('r') => {
                self.bot.end_game();
                self.new_game();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char(c) => {
                self.react(&c.to_string());
            }
            _ => {}
        }
    }

    fn new_game(&mut self) {
        self.acting = 0;
        self.selected_column = 0;
        match self.bot.start_game(self.players.clone()) {
            Ok(effects) => {
                self.view.apply(effects);
                if let Err(err) = self.bot.attach_message(MESSAGE_ID) {
                    self.message = Some(err.to_string());
                }
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// React with `emoji` as the acting player
    fn react(&mut self, emoji: &str) {
        if !self.bot.is_active() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let user = self.players[self.acting].clone();
        let effects = self.bot.on_reaction(&MESSAGE_ID, emoji, &user);
        if effects.is_empty() {
            self.message = Some(format!("{user}'s reaction was ignored"));
            return;
        }
        if let Some(text) = self.view.apply(effects) {
            self.message = Some(text);
        }

        // Hand the keyboard to whoever moves next
        if let Some(state) = self.bot.active() {
            self.acting = state.turn();
        }
        let columns = self.view.selectors.len();
        if columns > 0 && self.selected_column >= columns {
            self.selected_column = columns - 1;
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.view,
            &self.players[self.acting],
            self.selected_column,
            &self.message,
        );
    }
}
