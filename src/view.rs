//! Render data handed to the adapter layer.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Rank;
use crate::game::{Game, GameStatus, PlayerId};

/// Snapshot of a hand as the player is allowed to see it.
///
/// While the hand is being played only the dealer's first card is shown;
/// the rest are `None`. Once the hand is over every card is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// The owning player.
    pub player_id: PlayerId,
    /// Dealer cards, `None` for cards still face down.
    pub dealer: Vec<Option<Rank>>,
    /// Player cards in draw order.
    pub player: Vec<Rank>,
    /// The player's total.
    pub player_score: u16,
    /// The dealer's total over the visible cards.
    pub dealer_score: u16,
    /// Result status.
    pub status: GameStatus,
}

impl HandView {
    pub(crate) fn new(game: &Game) -> Self {
        let status = game.status();
        let dealer = game.dealer_hand();
        let shown = if status.is_terminal() { dealer.len() } else { 1 };

        Self {
            player_id: game.player_id(),
            dealer: dealer
                .ranks()
                .iter()
                .enumerate()
                .map(|(i, &rank)| (i < shown).then_some(rank))
                .collect(),
            player: game.player_hand().ranks().to_vec(),
            player_score: game.player_hand().score(),
            dealer_score: dealer.score_first(shown),
            status,
        }
    }

    /// Returns whether any dealer card is still face down.
    #[must_use]
    pub fn has_hidden_cards(&self) -> bool {
        self.dealer.iter().any(Option::is_none)
    }
}

impl fmt::Display for HandView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dealer:")?;
        for card in &self.dealer {
            match card {
                Some(rank) => write!(f, " {rank}")?,
                None => f.write_str(" ?")?,
            }
        }
        writeln!(f, " ({})", self.dealer_score)?;

        f.write_str("Player:")?;
        for rank in &self.player {
            write!(f, " {rank}")?;
        }
        writeln!(f, " ({})", self.player_score)?;

        write!(f, "Result: {}", self.status)
    }
}
