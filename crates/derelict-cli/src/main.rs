//! CLI frontend for Derelict, a survival text adventure aboard a damaged
//! space station.

mod console;

use std::io::{self, Write};
use std::process;

use colored::Colorize;
use derelict_core::{Phase, RoomId};
use derelict_game::{GameConfig, GameSession, narration};
use rand::Rng;

use crate::console::StdConsole;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let seed: u64 = rand::rng().random();
    let mut session = GameSession::new(StdConsole, GameConfig::default().with_seed(seed));

    print_block(&narration::intro());
    println!();
    print!("Press Enter to begin emergency protocols...");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    if matches!(io::stdin().read_line(&mut line), Ok(0) | Err(_)) {
        return Ok(());
    }
    println!();
    print_block(&format!(
        "* Current Location: {}\n{}",
        RoomId::Airlock.name(),
        narration::first_visit(RoomId::Airlock)
    ));
    session.state_mut().room_mut(RoomId::Airlock).visited = true;
    println!("{}", "Type 'help' for a list of commands.".cyan());

    loop {
        print!("\n> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(reply) => {
                if !reply.is_empty() {
                    print_block(&reply);
                }
            }
            Err(e) => {
                println!("{}", e.to_string().yellow());
            }
        }

        if session.state().is_over() {
            if session.state().phase == Phase::Won {
                println!("\n{}", "MISSION COMPLETE".green().bold());
            }
            break;
        }
    }

    Ok(())
}

/// Print a reply block, coloring alert lines red and info lines cyan.
fn print_block(text: &str) {
    for line in text.lines() {
        if line.starts_with("! ") {
            println!("{}", line.red());
        } else if line.starts_with("* ") {
            println!("{}", line.cyan());
        } else {
            println!("{line}");
        }
    }
}
