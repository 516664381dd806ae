//! Game state types.

use core::fmt;

/// Result status of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The hand is still in progress.
    Playing,
    /// The player won.
    PlayerWin,
    /// The dealer won.
    DealerWin,
    /// Both sides stood on the same total.
    Push,
}

impl GameStatus {
    /// Returns whether the hand has a result and accepts no further actions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }

    /// Returns the status string shown to players.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::PlayerWin => "player wins",
            Self::DealerWin => "dealer wins",
            Self::Push => "push",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player and dealer totals after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    /// The player's total.
    pub player: u16,
    /// The dealer's total, including cards not yet shown to the player.
    pub dealer: u16,
}
