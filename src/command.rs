//! Typed slash-command options and button ids.
//!
//! Chat platforms deliver command options as loosely typed name/value pairs.
//! These are validated here before anything reaches the table.

use core::fmt;
use core::str::FromStr;

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;

use crate::error::{CommandError, ParseButtonError};

const MESSAGE: &str = "message";
const AUTHOR: &str = "author";

/// Raw option value as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A string option.
    String(String),
    /// A boolean option.
    Bool(bool),
    /// An integer option.
    Integer(i64),
}

/// Options for the `echo` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoOptions {
    /// Text to repeat.
    pub message: String,
    /// Whether to prefix the message with its author.
    pub announce_author: bool,
}

impl EchoOptions {
    /// Validates raw options: `message` (string, required) and `author`
    /// (bool, optional).
    ///
    /// # Errors
    ///
    /// Returns an error for unknown options, mistyped values, or a missing
    /// message.
    pub fn from_options<'a, I>(options: I) -> Result<Self, CommandError>
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        let mut message = None;
        let mut announce_author = false;

        for (name, value) in options {
            match (name, value) {
                (MESSAGE, OptionValue::String(text)) => message = Some(text),
                (MESSAGE, _) => return Err(CommandError::InvalidType(MESSAGE)),
                (AUTHOR, OptionValue::Bool(flag)) => announce_author = flag,
                (AUTHOR, _) => return Err(CommandError::InvalidType(AUTHOR)),
                (other, _) => return Err(CommandError::UnknownOption(other.to_owned())),
            }
        }

        Ok(Self {
            message: message.ok_or(CommandError::MissingOption(MESSAGE))?,
            announce_author,
        })
    }

    /// Formats the reply text.
    ///
    /// ```
    /// use bjtable::EchoOptions;
    ///
    /// let options = EchoOptions { message: "hi".into(), announce_author: true };
    /// assert_eq!(options.render(Some("ana")), "**ana** says: hi");
    /// assert_eq!(options.render(None), "hi");
    /// ```
    #[must_use]
    pub fn render(&self, author: Option<&str>) -> String {
        match author {
            Some(author) if self.announce_author => format!("**{author}** says: {}", self.message),
            _ => self.message.clone(),
        }
    }
}

/// A validated slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Repeat a message.
    Echo(EchoOptions),
    /// Start a blackjack hand.
    Blackjack,
}

impl Command {
    /// Validates a command by name and raw options.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or invalid options.
    pub fn parse<'a, I>(name: &str, options: I) -> Result<Self, CommandError>
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        match name {
            "echo" => EchoOptions::from_options(options).map(Self::Echo),
            "blackjack" => match options.into_iter().next() {
                Some((other, _)) => Err(CommandError::UnknownOption(other.to_owned())),
                None => Ok(Self::Blackjack),
            },
            other => Err(CommandError::UnknownCommand(other.to_owned())),
        }
    }
}

/// Buttons attached to a hand in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Draw a card.
    Hit,
    /// Keep the current hand.
    Stay,
}

impl Button {
    /// Both buttons, in display order.
    pub const ALL: [Self; 2] = [Self::Hit, Self::Stay];

    /// Returns the component custom id.
    #[must_use]
    pub const fn custom_id(self) -> &'static str {
        match self {
            Self::Hit => "hit-btn",
            Self::Stay => "stay-btn",
        }
    }

    /// Returns the button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stay => "Stay",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.custom_id())
    }
}

impl FromStr for Button {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|button| button.custom_id() == s)
            .ok_or(ParseButtonError)
    }
}
