//! The deck of undealt ranks.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use core::iter::Copied;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{COPIES_PER_RANK, DECK_SIZE, RANKS, Rank};

/// An ordered sequence of undealt ranks.
///
/// The front of the deck is the next card dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Rank>,
}

impl Deck {
    /// Creates a full 52-card deck in canonical order (`2,2,2,2,3,...,A`).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for rank in RANKS {
            for _ in 0..COPIES_PER_RANK {
                cards.push_back(rank);
            }
        }
        Self { cards }
    }

    /// Creates a stacked deck. The first rank yielded is dealt first.
    ///
    /// ```
    /// use bjtable::{Deck, Rank};
    ///
    /// let mut deck = Deck::from_ranks([Rank::King, Rank::Two]);
    /// assert_eq!(deck.deal(), Some(Rank::King));
    /// assert_eq!(deck.deal(), Some(Rank::Two));
    /// assert_eq!(deck.deal(), None);
    /// ```
    pub fn from_ranks<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        Self {
            cards: ranks.into_iter().collect(),
        }
    }

    /// Shuffles the deck in place with a Fisher–Yates pass.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card, or `None` once the deck is exhausted.
    pub fn deal(&mut self) -> Option<Rank> {
        self.cards.pop_front()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many copies of `rank` remain.
    #[must_use]
    pub fn count(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|&&card| card == rank).count()
    }

    /// Iterates over the remaining cards, front first.
    #[must_use]
    pub fn iter(&self) -> Copied<vec_deque::Iter<'_, Rank>> {
        self.cards.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = Rank;
    type IntoIter = Copied<vec_deque::Iter<'a, Rank>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
