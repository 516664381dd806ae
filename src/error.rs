//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur while dealing a new hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck cannot cover the two-card opening for both sides.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The hand already has a result.
    #[error("the hand is already over")]
    RoundOver,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors returned by [`Table`](crate::Table) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The player has no hand at this table.
    #[error("no active game for this player")]
    NoActiveGame,
    /// Dealing the opening cards failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// The player action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
}

/// Errors that can occur while validating slash-command options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command name is not recognised.
    #[error("unknown command `{0}`")]
    UnknownCommand(alloc::string::String),
    /// An option name is not recognised for this command.
    #[error("unknown option `{0}`")]
    UnknownOption(alloc::string::String),
    /// A required option was not supplied.
    #[error("missing required option `{0}`")]
    MissingOption(&'static str),
    /// An option was supplied with the wrong value type.
    #[error("option `{0}` has the wrong type")]
    InvalidType(&'static str),
}

/// Error returned when a string is not a rank label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid rank label")]
pub struct ParseRankError;

/// Error returned when a component id is not a known button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown button id")]
pub struct ParseButtonError;
