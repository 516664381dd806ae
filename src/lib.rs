//! A single-player blackjack hand engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] that keeps one [`Game`] per player and
//! routes hit/stay actions to it, returning a [`HandView`] for rendering.
//! Chat-bot adapters validate incoming commands and button clicks with the
//! types in [`command`] before calling into the table.
//!
//! Scoring follows a simplified rule set: an ace is always worth 11, a hand
//! holding an ace is never bust, and the dealer draws at most one card per
//! player action unless [`DealerDraw::UntilStand`] is configured.
//!
//! # Example
//!
//! ```
//! use bjtable::{PlayerId, Table, TableOptions};
//!
//! let table = Table::new(TableOptions::default(), 42);
//! let player = PlayerId(1);
//!
//! table.start(player).unwrap();
//! let view = table.stay(player).unwrap();
//! println!("{view}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod command;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
mod sync;
pub mod table;
pub mod view;

// Re-export main types
pub use card::{DECK_SIZE, RANKS, Rank};
pub use command::{Button, Command, EchoOptions, OptionValue};
pub use deck::Deck;
pub use error::{
    ActionError, CommandError, DealError, ParseButtonError, ParseRankError, TableError,
};
pub use game::{Game, GameStatus, PlayerId, Scores};
pub use hand::Hand;
pub use options::{DealerDraw, TableOptions};
pub use table::Table;
pub use view::HandView;
