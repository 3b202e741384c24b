use std::io::{self, BufRead};

use chess_core::{Result, Square};
use chess_session::{ClickOutcome, GameConfig, GameSession, GameStatus};
use log::{error, info};

const HELP: &str = "commands: <square> | move <from> <to> | cancel | flip | hints | show | quit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Click(String),
    Move(String, String),
    Cancel,
    Flip,
    Hints,
    Show,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit"] | ["q"] => Some(Command::Quit),
        ["cancel"] => Some(Command::Cancel),
        ["flip"] | ["f"] => Some(Command::Flip),
        ["hints"] => Some(Command::Hints),
        ["show"] => Some(Command::Show),
        ["move", from, to] => Some(Command::Move(from.to_string(), to.to_string())),
        [square] => Some(Command::Click(square.to_string())),
        _ => None,
    }
}

fn square_names(session: &GameSession, squares: &[Square]) -> String {
    let flipped = session.position().is_flipped();
    squares
        .iter()
        .filter_map(|square| square.to_algebraic(flipped))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_board(session: &GameSession) {
    println!("{}", session.position());
    println!("{} to move", session.position().turn());
}

/// Runs one command. Returns false when the shell should stop.
fn execute(session: &mut GameSession, command: Command) -> Result<bool> {
    match command {
        Command::Quit => return Ok(false),
        Command::Cancel => session.cancel(),
        Command::Flip => {
            session.flip();
            print_board(session);
        }
        Command::Show => print_board(session),
        Command::Hints => {
            let hints = session.hints()?;
            println!("{}", square_names(session, &hints));
        }
        Command::Click(notation) => {
            let square = session.position().square_from_algebraic(&notation)?;
            match session.click(square)? {
                ClickOutcome::Moved { .. } => print_board(session),
                ClickOutcome::Rejected { .. } => println!("illegal move"),
                ClickOutcome::Ignored => println!("game over"),
                ClickOutcome::Selected(_) | ClickOutcome::Deselected => {}
            }
        }
        Command::Move(from, to) => {
            let from = session.position().square_from_algebraic(&from)?;
            let to = session.position().square_from_algebraic(&to)?;
            if session.try_move(from, to)? {
                print_board(session);
            } else {
                println!("illegal move");
            }
        }
    }

    match session.refresh()? {
        GameStatus::Ongoing => {}
        GameStatus::Check { color } => println!("{color} is in check"),
        GameStatus::Checkmate { winner } => println!("checkmate, {winner} wins"),
    }
    Ok(true)
}

fn main() {
    env_logger::init();

    let config = GameConfig::from_env();
    info!("starting from {:?} (flipped: {})", config.start_fen, config.flipped);
    let mut session = GameSession::new(&config);

    println!("{HELP}");
    print_board(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("failed to read input: {}", err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Some(command) => command,
            None => {
                println!("{HELP}");
                continue;
            }
        };

        match execute(&mut session, command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => println!("{err}"),
        }
    }
}
