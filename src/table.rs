//! Per-player registry of hands in progress.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::deck::Deck;
use crate::error::{ActionError, TableError};
use crate::game::{Game, PlayerId, Scores};
use crate::options::TableOptions;
use crate::sync::Mutex;
use crate::view::HandView;

/// A blackjack table that routes player actions to their hand.
///
/// Each player has at most one hand. All hands sit behind a single lock, so
/// starting a hand and acting on it can never interleave for the same
/// player, and hands of different players never share state. The table is
/// `Sync`; share it between event handlers with an `Arc`.
pub struct Table {
    options: TableOptions,
    games: Mutex<HashMap<PlayerId, Game>>,
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates an empty table. Decks are shuffled from an RNG seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{PlayerId, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// let view = table.start(PlayerId(7)).unwrap();
    /// assert_eq!(view.player.len(), 2);
    /// assert_eq!(view.dealer.len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            options,
            games: Mutex::new(HashMap::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Starts a hand for `player` from a freshly shuffled deck.
    ///
    /// Any hand the player already has is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error only if dealing fails, which a full deck cannot cause.
    pub fn start(&self, player: PlayerId) -> Result<HandView, TableError> {
        let game = self
            .rng
            .with(|rng| Game::shuffled(player, self.options, rng))?;
        Ok(self.seat(game))
    }

    /// Starts a hand for `player` dealing from `deck` as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than four cards.
    pub fn start_with_deck(&self, player: PlayerId, deck: Deck) -> Result<HandView, TableError> {
        let game = Game::deal(player, deck, self.options)?;
        Ok(self.seat(game))
    }

    /// Stores `game` as its player's hand, replacing any earlier one.
    fn seat(&self, game: Game) -> HandView {
        let player = game.player_id();
        let view = game.view();

        if let Some(previous) = self.games.lock().insert(player, game) {
            log::debug!("replaced hand for {player} (was {})", previous.status());
        }
        log::info!("started hand for {player}");

        view
    }

    fn act(
        &self,
        player: PlayerId,
        action: impl FnOnce(&mut Game) -> Result<Scores, ActionError>,
    ) -> Result<HandView, TableError> {
        self.games.with(|games| -> Result<HandView, TableError> {
            let game = games.get_mut(&player).ok_or(TableError::NoActiveGame)?;
            action(game)?;
            Ok(game.view())
        })
    }

    /// Player action: Hit.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has no hand, the hand is over, or the
    /// deck is exhausted.
    pub fn hit(&self, player: PlayerId) -> Result<HandView, TableError> {
        self.act(player, Game::hit)
    }

    /// Player action: Stay.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has no hand or the hand is over.
    pub fn stay(&self, player: PlayerId) -> Result<HandView, TableError> {
        self.act(player, Game::stay)
    }

    /// Returns the current view of the player's hand.
    #[must_use]
    pub fn view(&self, player: PlayerId) -> Option<HandView> {
        self.games.lock().get(&player).map(Game::view)
    }

    /// Returns a copy of the player's full game state, hidden cards included.
    #[must_use]
    pub fn game(&self, player: PlayerId) -> Option<Game> {
        self.games.lock().get(&player).cloned()
    }

    /// Returns whether the player has a hand at this table.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.games.lock().contains_key(&player)
    }

    /// Returns the number of hands held, finished ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    /// Returns whether the table holds no hands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }

    /// Removes and returns the player's hand.
    #[must_use]
    pub fn remove(&self, player: PlayerId) -> Option<Game> {
        self.games.lock().remove(&player)
    }

    /// Drops every finished hand. Returns how many were removed.
    pub fn evict_finished(&self) -> usize {
        self.games.with(|games| {
            let before = games.len();
            games.retain(|_, game| !game.status().is_terminal());
            let evicted = before - games.len();
            if evicted > 0 {
                log::debug!("evicted {evicted} finished hand(s)");
            }
            evicted
        })
    }
}
