//! Chat-bot adapter: owns the single active game, turns reactions on the game
//! message into engine moves, and turns move reports back into transport
//! effects for the caller to carry out.

use crate::error::{BotError, RosterError};
use crate::game::{BoardConfig, GameState, MoveOutcome, Players};
use crate::render::{self, GlyphSet, Participant};

pub const GAME_NAME: &str = "ConnectFour";

/// Something the transport should do on the bot's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Plain message to the channel the game was started from
    Announce(String),
    /// Post the game message; its handle goes back through `attach_message`
    SendBoard(String),
    /// Bot reacts to the game message with a column selector
    AddReaction(String),
    /// Replace the game message content
    EditBoard(String),
    /// Withdraw the bot's own selector for a column that is now full
    RemoveBotReaction(String),
    /// Clear every reaction from the game message
    ClearReactions,
    /// Remove all players' selector reactions, leaving the bot's
    RemoveUserReactions,
}

/// First member whose name starts with `prefix`.
pub fn find_member<'a, U: Participant>(members: &'a [U], prefix: &str) -> Option<&'a U> {
    members
        .iter()
        .find(|member| member.name().starts_with(prefix))
}

/// Holds at most one running game.
///
/// `U` identifies chat users, `H` identifies the message that shows the game.
/// Calls take `&mut self`, so events for the game are handled one at a time in
/// the order the caller delivers them.
#[derive(Debug)]
pub struct GameBot<U, H> {
    active: Option<GameState<U, H>>,
    board: BoardConfig,
    glyphs: GlyphSet,
}

impl<U, H> GameBot<U, H>
where
    U: Participant + Clone + PartialEq,
    H: PartialEq,
{
    /// Fails unless `board` is playable and every column has a selector.
    pub fn new(board: BoardConfig, glyphs: GlyphSet) -> Result<Self, BotError> {
        board.validate()?;
        glyphs.check_board(&board)?;
        Ok(GameBot {
            active: None,
            board,
            glyphs,
        })
    }

    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    pub fn active(&self) -> Option<&GameState<U, H>> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// `!connectfour <name>`: challenge the first member matching `prefix`.
    pub fn challenge(
        &mut self,
        author: U,
        members: &[U],
        prefix: &str,
    ) -> Result<Vec<Effect>, BotError> {
        if self.active.is_some() {
            return Err(BotError::GameInProgress);
        }
        let opponent = find_member(members, prefix)
            .ok_or_else(|| BotError::NoMatchingMember(prefix.to_string()))?
            .clone();

        let mut effects = vec![Effect::Announce(format!(
            "Starting a Connect Four game against {}",
            opponent.mention()
        ))];
        effects.extend(self.start_game(vec![author, opponent])?);
        Ok(effects)
    }

    /// Create a game between `players` and present it.
    ///
    /// Fails while another game is active. The returned effects post the board
    /// and add one selector reaction per column; the posted message must then
    /// be registered with `attach_message` before reactions are accepted.
    pub fn start_game(&mut self, players: Vec<U>) -> Result<Vec<Effect>, BotError> {
        if self.active.is_some() {
            return Err(BotError::GameInProgress);
        }
        let max = self.glyphs.max_players();
        if players.len() > max {
            return Err(RosterError::TooManyPlayers {
                count: players.len(),
                max,
            }
            .into());
        }

        let mut state = GameState::new(Players::new(players)?, self.board);
        state.start();

        let mut effects = vec![Effect::SendBoard(render::render(&state, &self.glyphs))];
        effects.extend(
            (0..self.board.cols)
                .filter_map(|col| self.glyphs.selector(col))
                .map(|selector| Effect::AddReaction(selector.to_string())),
        );
        self.active = Some(state);
        Ok(effects)
    }

    /// Register the message showing the active game.
    pub fn attach_message(&mut self, handle: H) -> Result<(), BotError> {
        let state = self.active.as_mut().ok_or(BotError::NoActiveGame)?;
        state.set_handle(handle);
        Ok(())
    }

    /// A user reacted with `emoji` on `message`.
    ///
    /// Reactions on other messages, from non-players, or that the engine
    /// rejects produce no effects.
    pub fn on_reaction(&mut self, message: &H, emoji: &str, user: &U) -> Vec<Effect> {
        let Some(state) = self.active.as_mut() else {
            return Vec::new();
        };
        if state.handle() != Some(message) || !state.players().contains(user) {
            return Vec::new();
        }
        let Some(column) = self.glyphs.column_of(emoji) else {
            return Vec::new();
        };

        let report = state.attempt_move(column, user);
        let mut effects = Vec::new();
        if report.filled_column {
            effects.push(Effect::RemoveBotReaction(emoji.to_string()));
        }

        match report.outcome {
            MoveOutcome::NoOp(_) => {}
            MoveOutcome::Continued => {
                effects.push(Effect::EditBoard(render::render(state, &self.glyphs)));
                effects.push(Effect::RemoveUserReactions);
            }
            MoveOutcome::Won(_) => {
                effects.push(Effect::EditBoard(render::render(state, &self.glyphs)));
                effects.push(Effect::ClearReactions);
                self.active = None;
            }
        }
        effects
    }

    /// Current rendering of the active game, for debugging.
    pub fn snapshot(&self) -> Result<String, BotError> {
        let state = self.active.as_ref().ok_or(BotError::NoActiveGame)?;
        Ok(render::render(state, &self.glyphs))
    }

    /// Drop the active game, if any.
    pub fn end_game(&mut self) -> Option<GameState<U, H>> {
        self.active.take()
    }
}

impl<U, H> Default for GameBot<U, H>
where
    U: Participant + Clone + PartialEq,
    H: PartialEq,
{
    fn default() -> Self {
        // Classic board, one emoji keycap per column
        GameBot {
            active: None,
            board: BoardConfig::classic(),
            glyphs: GlyphSet::emoji(),
        }
    }
}
