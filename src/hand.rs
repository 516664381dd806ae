//! Ranks held by one side of the table.

use alloc::vec::Vec;

use crate::card::Rank;

/// Bust threshold.
pub const BLACKJACK: u16 = 21;

/// Total at which the dealer stops drawing.
pub const DEALER_STAND: u16 = 17;

fn score_ranks(ranks: &[Rank]) -> u16 {
    ranks
        .iter()
        .fold(0u16, |total, rank| total.saturating_add(u16::from(rank.value())))
}

/// The ranks dealt to the player or the dealer, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    ranks: Vec<Rank>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { ranks: Vec::new() }
    }

    /// Adds a rank to the hand.
    pub fn add(&mut self, rank: Rank) {
        self.ranks.push(rank);
    }

    /// Returns the ranks in draw order.
    #[must_use]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Returns the number of ranks held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns whether the hand holds no ranks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Sums the valuation table over the hand.
    ///
    /// Aces always count 11, so the score may exceed 21 for a hand that
    /// holds an ace without being treated as bust (see [`Hand::is_bust`]).
    #[must_use]
    pub fn score(&self) -> u16 {
        score_ranks(&self.ranks)
    }

    /// Sums the valuation table over the first `n` ranks.
    #[must_use]
    pub fn score_first(&self, n: usize) -> u16 {
        score_ranks(&self.ranks[..n.min(self.ranks.len())])
    }

    /// Returns whether the hand holds at least one ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.ranks.iter().any(|rank| rank.is_ace())
    }

    /// Returns whether the hand is over 21 without an ace to protect it.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK && !self.has_ace()
    }

    /// Returns whether the hand is exactly 17 with an ace in it.
    #[must_use]
    pub fn is_soft_17(&self) -> bool {
        self.score() == DEALER_STAND && self.has_ace()
    }
}
