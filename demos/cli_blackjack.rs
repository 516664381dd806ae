//! Terminal stand-in for the chat adapter.
//!
//! Lines starting with `/` are slash commands (`/blackjack`,
//! `/echo message=hello author=true`); `hit-btn` and `stay-btn` play the
//! buttons. Set `RUST_LOG=debug` to watch the table.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Button, Command, HandView, OptionValue, PlayerId, Table, TableError, TableOptions};

const AUTHOR: &str = "you";

fn main() {
    env_logger::init();
    println!("Blackjack adapter example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = Table::new(TableOptions::default(), seed);
    let player = PlayerId(1);

    loop {
        let line = prompt_line("> ");
        match line.as_str() {
            "" => {}
            "q" | "quit" => break,
            _ if line.starts_with('/') => handle_command(&table, player, &line[1..]),
            _ => handle_button(&table, player, &line),
        }
    }
}

fn handle_command(table: &Table, player: PlayerId, line: &str) {
    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let options: Vec<(&str, OptionValue)> = words.map(parse_option).collect();

    match Command::parse(name, options) {
        Ok(Command::Echo(echo)) => println!("{}", echo.render(Some(AUTHOR))),
        Ok(Command::Blackjack) => match table.start(player) {
            Ok(view) => print_view(&view),
            Err(err) => println!("Deal error: {err}"),
        },
        Err(err) => println!("Command error: {err}"),
    }
}

fn parse_option(word: &str) -> (&str, OptionValue) {
    let (name, raw) = word.split_once('=').unwrap_or((word, ""));
    let value = match raw {
        "true" => OptionValue::Bool(true),
        "false" => OptionValue::Bool(false),
        _ => raw
            .parse()
            .map_or_else(|_| OptionValue::String(raw.to_string()), OptionValue::Integer),
    };
    (name, value)
}

fn handle_button(table: &Table, player: PlayerId, id: &str) {
    let Ok(button) = id.parse::<Button>() else {
        println!("Unknown input. Try /blackjack, hit-btn or stay-btn.");
        return;
    };

    let result = match button {
        Button::Hit => table.hit(player),
        Button::Stay => table.stay(player),
    };

    match result {
        Ok(view) => print_view(&view),
        Err(TableError::NoActiveGame) => println!("Start a hand with /blackjack first."),
        Err(err) => println!("Action error: {err}"),
    }

    if table.evict_finished() > 0 {
        println!("Hand cleared. Type /blackjack to play again.");
    }
}

fn print_view(view: &HandView) {
    println!("\n{view}");
    if view.status.is_terminal() {
        println!("{}\n", colorize(view.status.as_str(), "33"));
    } else {
        let buttons: Vec<String> = Button::ALL
            .iter()
            .map(|button| colorize(&format!("[{}]{}", button.custom_id(), button.label()), "31"))
            .collect();
        println!("{}\n", buttons.join(" "));
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_string(),
    }
}
