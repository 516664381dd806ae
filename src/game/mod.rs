//! Single-hand game engine.

use core::fmt;

use rand::Rng;

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::view::HandView;

mod actions;
mod dealer;
pub mod state;

pub use state::{GameStatus, Scores};

/// Opaque identifier of a player, as supplied by the hosting platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One player's hand against the dealer.
///
/// The game owns its deck; every card dealt after the opening comes from the
/// same deck. Once [`Game::status`] is terminal the game no longer changes.
#[derive(Debug, Clone)]
pub struct Game {
    player_id: PlayerId,
    options: TableOptions,
    deck: Deck,
    dealer: Hand,
    player: Hand,
    status: GameStatus,
}

impl Game {
    /// Deals a new hand from `deck`: two cards to the dealer, then two to the player.
    ///
    /// The deck is used in its current order; shuffle it first for a random hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than four cards.
    pub fn deal(
        player_id: PlayerId,
        mut deck: Deck,
        options: TableOptions,
    ) -> Result<Self, DealError> {
        if deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        let mut dealer = Hand::new();
        let mut player = Hand::new();
        for hand in [&mut dealer, &mut player] {
            for _ in 0..2 {
                hand.add(deck.deal().ok_or(DealError::NotEnoughCards)?);
            }
        }

        log::debug!(
            "dealt hand for {player_id}: dealer {:?}, player {:?}",
            dealer.ranks(),
            player.ranks()
        );

        Ok(Self {
            player_id,
            options,
            deck,
            dealer,
            player,
            status: GameStatus::Playing,
        })
    }

    /// Shuffles a fresh deck with `rng` and deals from it.
    ///
    /// # Errors
    ///
    /// A fresh deck always covers the opening, so this only fails if
    /// [`Game::deal`] does.
    pub fn shuffled<R: Rng + ?Sized>(
        player_id: PlayerId,
        options: TableOptions,
        rng: &mut R,
    ) -> Result<Self, DealError> {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::deal(player_id, deck, options)
    }

    /// Returns the owning player.
    #[must_use]
    pub const fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, including cards hidden from the player.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns both totals.
    #[must_use]
    pub fn scores(&self) -> Scores {
        Scores {
            player: self.player.score(),
            dealer: self.dealer.score(),
        }
    }

    /// Builds the render data for the hand.
    #[must_use]
    pub fn view(&self) -> HandView {
        HandView::new(self)
    }
}
