use crate::error::RosterError;

/// 1-based piece identity: the player at turn index `i` owns piece `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerIndex(u8);

impl PlayerIndex {
    /// Returns `None` for 0, which is reserved for empty cells
    pub fn new(index: u8) -> Option<Self> {
        (index > 0).then_some(PlayerIndex(index))
    }

    /// Piece owned by the player at a 0-based turn index
    pub fn from_turn(turn: usize) -> Self {
        PlayerIndex(turn as u8 + 1)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// 0-based position in the roster
    pub fn turn(self) -> usize {
        self.0 as usize - 1
    }
}

/// Ordered, fixed roster of distinct participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players<P> {
    players: Vec<P>,
}

impl<P: PartialEq> Players<P> {
    pub const MAX: usize = u8::MAX as usize;

    pub fn new(players: Vec<P>) -> Result<Self, RosterError> {
        if players.len() < 2 {
            return Err(RosterError::TooFewPlayers(players.len()));
        }
        if players.len() > Self::MAX {
            return Err(RosterError::TooManyPlayers {
                count: players.len(),
                max: Self::MAX,
            });
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].contains(player) {
                return Err(RosterError::DuplicatePlayer(i));
            }
        }
        Ok(Players { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Player at a 0-based turn index
    pub fn get(&self, turn: usize) -> Option<&P> {
        self.players.get(turn)
    }

    pub fn contains(&self, player: &P) -> bool {
        self.players.contains(player)
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.players.iter()
    }
}
