//! Text rendering of a game session: turn or winner banner, roster, column
//! selectors and the grid, using a swappable glyph table.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::game::{BoardConfig, Cell, GameState, Stage};

/// Anything that can take part in a game and be shown on the board.
pub trait Participant {
    fn name(&self) -> &str;

    /// How to address the participant in the banner
    fn mention(&self) -> String {
        format!("@{}", self.name())
    }
}

impl Participant for String {
    fn name(&self) -> &str {
        self
    }
}

impl Participant for &str {
    fn name(&self) -> &str {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// Chat emoji, as posted by the bot
    #[default]
    Emoji,
    /// Plain ASCII for terminals
    Terminal,
}

/// Glyphs for cells and column selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    /// Index 0 is the empty cell, index `n` is the piece of player `n`
    pub pieces: Vec<String>,
    /// One selector per selectable column, in column order
    pub columns: Vec<String>,
    pub separator: &'static str,
}

impl GlyphSet {
    pub fn emoji() -> Self {
        GlyphSet {
            pieces: [
                ":black_circle:",
                ":joy:",
                ":rage:",
                ":nauseated_face:",
                ":smiling_imp:",
            ]
            .map(String::from)
            .to_vec(),
            columns: (0..10)
                .map(|digit| format!("{digit}\u{20e3}"))
                .chain(std::iter::once("\u{1f51f}".to_string()))
                .collect(),
            separator: "",
        }
    }

    pub fn terminal() -> Self {
        GlyphSet {
            pieces: [".", "X", "O", "A", "V"].map(String::from).to_vec(),
            columns: "0123456789T".chars().map(String::from).collect(),
            separator: " ",
        }
    }

    pub fn for_style(style: GlyphStyle) -> Self {
        match style {
            GlyphStyle::Emoji => Self::emoji(),
            GlyphStyle::Terminal => Self::terminal(),
        }
    }

    /// Largest roster the piece table can draw
    pub fn max_players(&self) -> usize {
        self.pieces.len().saturating_sub(1)
    }

    pub fn cell(&self, cell: Cell) -> &str {
        let index = cell.piece().map_or(0, |piece| piece.get() as usize);
        self.pieces.get(index).map_or("?", String::as_str)
    }

    pub fn selector(&self, column: usize) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    /// Every column of `board` needs a selector to be playable
    pub fn check_board(&self, board: &BoardConfig) -> Result<(), BoardError> {
        if board.cols > self.columns.len() {
            return Err(BoardError::TooManyColumns {
                cols: board.cols,
                selectors: self.columns.len(),
            });
        }
        Ok(())
    }

    /// Column picked by a selector glyph, if it is one
    pub fn column_of(&self, selector: &str) -> Option<usize> {
        self.columns.iter().position(|glyph| glyph == selector)
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::emoji()
    }
}

/// Render the whole session as a message body.
pub fn render<P: Participant + Clone + PartialEq, H>(
    state: &GameState<P, H>,
    glyphs: &GlyphSet,
) -> String {
    let mut out = String::new();

    match state.stage() {
        Stage::Starting => {}
        Stage::Running => {
            out.push_str(&format!(
                "It's {}'s turn.\n\n",
                state.current_player().mention()
            ));
        }
        Stage::Ended => {
            out.push_str(&format!(
                "{} has won!\n\n",
                state.current_player().mention()
            ));
        }
    }

    out.push_str("**Connect Four**\n");
    let roster: Vec<String> = state
        .players()
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let piece = glyphs.pieces.get(i + 1).map_or("?", String::as_str);
            format!("{} {}", piece, player.name())
        })
        .collect();
    out.push_str(&roster.join(" vs. "));
    out.push_str("\n\n");

    out.push_str(&render_board(state, glyphs));
    out
}

/// Column selector header followed by the grid, one line per row.
pub fn render_board<P: Clone + PartialEq, H>(
    state: &GameState<P, H>,
    glyphs: &GlyphSet,
) -> String {
    let board = state.board();
    let mut out = String::new();

    let header: Vec<&str> = (0..board.cols())
        .map(|col| glyphs.selector(col).unwrap_or("?"))
        .collect();
    out.push_str(&header.join(glyphs.separator));
    out.push('\n');

    for row in board.iter_rows() {
        let cells: Vec<&str> = row.iter().map(|&cell| glyphs.cell(cell)).collect();
        out.push_str(&cells.join(glyphs.separator));
        out.push('\n');
    }
    out
}
