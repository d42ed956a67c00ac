//! Terminal-backed [`Console`] implementation: typewriter output, real
//! pauses, and stdin prompts.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use derelict_game::{Console, Pace};

/// Milliseconds between characters for quick typewriter output.
const QUICK_MS: u64 = 30;
/// Milliseconds between characters for slow, dramatic output.
const SLOW_MS: u64 = 100;

/// The real terminal console used by the binary.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn type_out(&mut self, text: &str, pace: Pace) {
        let delay = match pace {
            Pace::Quick => Duration::from_millis(QUICK_MS),
            Pace::Slow => Duration::from_millis(SLOW_MS),
        };
        for ch in text.chars() {
            print!("{ch}");
            let _ = io::stdout().flush();
            thread::sleep(delay);
        }
        println!();
    }

    fn pause(&mut self, seconds: u64) {
        thread::sleep(Duration::from_secs(seconds));
    }

    fn countdown(&mut self, from: u32) {
        for i in (1..=from).rev() {
            print!("{i}... ");
            let _ = io::stdout().flush();
            thread::sleep(Duration::from_secs(1));
        }
        println!();
    }

    fn prompt(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        // Locking per read keeps the prompt usable from inside the main
        // REPL loop, which reads the same stdin.
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}
