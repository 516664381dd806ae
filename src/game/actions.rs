use crate::error::ActionError;

use super::{Game, Scores};

impl Game {
    fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.status.is_terminal() {
            return Err(ActionError::RoundOver);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card), then let the dealer respond.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is already over or the deck is empty.
    /// The game is left unchanged in both cases.
    pub fn hit(&mut self) -> Result<Scores, ActionError> {
        self.ensure_playing()?;

        let Some(rank) = self.deck.deal() else {
            log::warn!("deck exhausted on hit for {}", self.player_id);
            return Err(ActionError::NoCards);
        };
        self.player.add(rank);
        log::debug!("{} hits and draws {rank}", self.player_id);

        self.resolve(true);
        Ok(self.scores())
    }

    /// Player action: Stay (keep the current hand), then let the dealer respond.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is already over.
    pub fn stay(&mut self) -> Result<Scores, ActionError> {
        self.ensure_playing()?;
        log::debug!("{} stays on {}", self.player_id, self.player.score());

        self.resolve(false);
        Ok(self.scores())
    }
}
