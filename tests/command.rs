//! Command option validation tests.

use bjtable::{Button, Command, CommandError, EchoOptions, OptionValue, ParseButtonError};

fn no_options() -> [(&'static str, OptionValue); 0] {
    []
}

fn text(value: &str) -> OptionValue {
    OptionValue::String(value.to_string())
}

#[test]
fn echo_requires_a_message() {
    let command = Command::parse("echo", [("message", text("hello"))]).unwrap();
    assert_eq!(
        command,
        Command::Echo(EchoOptions {
            message: "hello".to_string(),
            announce_author: false,
        })
    );

    assert_eq!(
        Command::parse("echo", no_options()).unwrap_err(),
        CommandError::MissingOption("message")
    );
}

#[test]
fn echo_author_flag_prefixes_the_reply() {
    let options = EchoOptions::from_options([
        ("author", OptionValue::Bool(true)),
        ("message", text("hit me")),
    ])
    .unwrap();

    assert!(options.announce_author);
    assert_eq!(options.render(Some("sam#0001")), "**sam#0001** says: hit me");
    assert_eq!(options.render(None), "hit me");

    let quiet = EchoOptions::from_options([
        ("message", text("hit me")),
        ("author", OptionValue::Bool(false)),
    ])
    .unwrap();
    assert_eq!(quiet.render(Some("sam#0001")), "hit me");
}

#[test]
fn echo_rejects_bad_options() {
    assert_eq!(
        EchoOptions::from_options([("message", OptionValue::Integer(3))]).unwrap_err(),
        CommandError::InvalidType("message")
    );
    assert_eq!(
        EchoOptions::from_options([("message", text("x")), ("author", text("yes"))]).unwrap_err(),
        CommandError::InvalidType("author")
    );
    assert_eq!(
        EchoOptions::from_options([("message", text("x")), ("volume", OptionValue::Integer(11))])
            .unwrap_err(),
        CommandError::UnknownOption("volume".to_string())
    );
}

#[test]
fn blackjack_takes_no_options() {
    assert_eq!(Command::parse("blackjack", no_options()).unwrap(), Command::Blackjack);
    assert_eq!(
        Command::parse("blackjack", [("bet", OptionValue::Integer(5))]).unwrap_err(),
        CommandError::UnknownOption("bet".to_string())
    );
}

#[test]
fn unknown_commands_are_rejected() {
    let err = Command::parse("poker", no_options()).unwrap_err();
    assert_eq!(err, CommandError::UnknownCommand("poker".to_string()));
    assert_eq!(err.to_string(), "unknown command `poker`");
}

#[test]
fn buttons_parse_from_custom_ids() {
    assert_eq!("hit-btn".parse::<Button>(), Ok(Button::Hit));
    assert_eq!("stay-btn".parse::<Button>(), Ok(Button::Stay));
    assert_eq!("fold-btn".parse::<Button>(), Err(ParseButtonError));

    for button in Button::ALL {
        assert_eq!(button.to_string().parse::<Button>(), Ok(button));
    }
    assert_eq!(Button::Stay.label(), "Stay");
}
