//! The seam between the game engine and the terminal.
//!
//! Everything with a temporal texture — character-paced type-out, dramatic
//! pauses, lockout countdowns, mid-command sub-prompts — goes through the
//! [`Console`] trait. The engine itself never sleeps and never touches
//! stdin/stdout, so tests drive it with the time-free [`ScriptedConsole`]
//! while the CLI supplies a real one.

use std::collections::VecDeque;

/// Pacing for typed-out terminal text.
///
/// The shipped console maps these to per-character delays; the scripted one
/// ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Fast ticker for banners and boot chatter.
    Quick,
    /// Slow, deliberate pacing for verdict lines.
    Slow,
}

/// Output and sub-prompt input for one game session.
pub trait Console {
    /// Print one plain line immediately.
    fn line(&mut self, text: &str);

    /// Print a line character by character at the given pace.
    fn type_out(&mut self, text: &str, pace: Pace);

    /// Hold for a dramatic beat of roughly the given number of seconds.
    fn pause(&mut self, seconds: u64);

    /// Display a visible lockout countdown from `from` down to 1.
    fn countdown(&mut self, from: u32);

    /// Prompt for one line of input. `None` means end of input (EOF),
    /// which every caller treats as a cancel.
    fn prompt(&mut self, prompt: &str) -> Option<String>;
}

/// A console fed from a fixed script, recording everything it prints.
///
/// Used by the engine's own tests and available to embedders that want to
/// drive a session non-interactively.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// A console with no scripted input: every prompt answers EOF.
    pub fn new() -> Self {
        Self::default()
    }

    /// A console that will answer prompts with the given lines in order,
    /// then EOF.
    pub fn with_input(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|s| (*s).to_string()).collect(),
            output: Vec::new(),
        }
    }

    /// Everything printed so far, one entry per line.
    pub fn transcript(&self) -> &[String] {
        &self.output
    }

    /// True when any printed line contains the given fragment.
    pub fn printed(&self, fragment: &str) -> bool {
        self.output.iter().any(|line| line.contains(fragment))
    }
}

impl Console for ScriptedConsole {
    fn line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn type_out(&mut self, text: &str, _pace: Pace) {
        self.output.push(text.to_string());
    }

    fn pause(&mut self, _seconds: u64) {}

    fn countdown(&mut self, from: u32) {
        self.output.push(format!("countdown from {from}"));
    }

    fn prompt(&mut self, prompt: &str) -> Option<String> {
        self.output.push(prompt.to_string());
        self.input.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_console_answers_in_order_then_eof() {
        let mut console = ScriptedConsole::with_input(&["first", "second"]);
        assert_eq!(console.prompt("> "), Some("first".to_string()));
        assert_eq!(console.prompt("> "), Some("second".to_string()));
        assert_eq!(console.prompt("> "), None);
    }

    #[test]
    fn transcript_records_prints_and_prompts() {
        let mut console = ScriptedConsole::new();
        console.line("hello");
        console.type_out("banner", Pace::Quick);
        console.prompt("choice: ");
        assert!(console.printed("hello"));
        assert!(console.printed("banner"));
        assert!(console.printed("choice:"));
    }
}
