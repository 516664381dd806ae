use core::cmp::Ordering;

use crate::hand::DEALER_STAND;
use crate::options::DealerDraw;

use super::{Game, GameStatus};

impl Game {
    /// Returns whether the dealer must take another card.
    fn dealer_must_draw(&self) -> bool {
        self.dealer.score() < DEALER_STAND
            || (self.options.hit_soft_17 && self.dealer.is_soft_17())
    }

    /// Dealer draws according to the table rules.
    ///
    /// Draws a single card under [`DealerDraw::Single`], or keeps drawing
    /// until the dealer stands or busts under [`DealerDraw::UntilStand`].
    /// An exhausted deck ends the turn early.
    ///
    /// Returns whether at least one card was drawn.
    fn dealer_play(&mut self) -> bool {
        let mut drew = false;

        while self.dealer_must_draw() {
            let Some(rank) = self.deck.deal() else {
                log::warn!("deck exhausted on dealer draw for {}", self.player_id);
                break;
            };
            self.dealer.add(rank);
            drew = true;
            log::debug!("dealer draws {rank} for {}", self.player_id);

            if self.options.dealer_draw == DealerDraw::Single || self.dealer.is_bust() {
                break;
            }
        }

        drew
    }

    fn finish(&mut self, status: GameStatus) -> GameStatus {
        self.status = status;
        log::info!(
            "hand for {} over: {status} ({} to {})",
            self.player_id,
            self.player.score(),
            self.dealer.score()
        );
        status
    }

    /// Scores the hand after a player action and settles it if possible.
    ///
    /// Busts are checked for the player first, then for the dealer, before
    /// the dealer plays. A hand in which an ace is held is never bust. When
    /// neither side took a card this round the higher total wins and equal
    /// totals push.
    pub(super) fn resolve(&mut self, player_acted: bool) -> GameStatus {
        if self.player.is_bust() {
            return self.finish(GameStatus::DealerWin);
        }
        if self.dealer.is_bust() {
            return self.finish(GameStatus::PlayerWin);
        }

        let dealer_hit = self.dealer_play();
        if self.dealer.is_bust() {
            return self.finish(GameStatus::PlayerWin);
        }

        if !player_acted && !dealer_hit {
            let status = match self.player.score().cmp(&self.dealer.score()) {
                Ordering::Greater => GameStatus::PlayerWin,
                Ordering::Less => GameStatus::DealerWin,
                Ordering::Equal => GameStatus::Push,
            };
            return self.finish(status);
        }

        GameStatus::Playing
    }
}
