use std::path::PathBuf;

/// Errors that can occur when building a player roster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("a game needs at least 2 players, got {0}")]
    TooFewPlayers(usize),

    #[error("player {0} appears more than once in the roster")]
    DuplicatePlayer(usize),

    #[error("a game supports at most {max} players, got {count}")]
    TooManyPlayers { count: usize, max: usize },
}

/// Board shapes that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have at least one row")]
    NoRows,

    #[error("board must have at least one column")]
    NoColumns,

    #[error("line length must be >= 2, got {0}")]
    LineTooShort(usize),

    #[error("a line of {line_length} does not fit on a {rows}x{cols} board")]
    LineDoesNotFit {
        line_length: usize,
        rows: usize,
        cols: usize,
    },

    #[error("board has {cols} columns but only {selectors} column selectors")]
    TooManyColumns { cols: usize, selectors: usize },
}

/// Errors surfaced by the chat-bot adapter to the command layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BotError {
    #[error("a Connect Four game is already in progress")]
    GameInProgress,

    #[error("no users matched name \"{0}\"")]
    NoMatchingMember(String),

    #[error("no Connect Four game is in progress")]
    NoActiveGame,

    #[error("invalid roster: {0}")]
    Roster(#[from] RosterError),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}
