//! Parsing of human turn entries.

use std::io::{self, BufRead, Write};

use crate::board::Coord;

/// Maximum accepted computer difficulty (search depth)
pub const MAX_DIFFICULTY: usize = 10;

/// What a human typed at the turn prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A move in cell notation, e.g. `E6`
    Move(Coord),
    /// Retune the computer difficulty (0-10)
    Difficulty(usize),
    /// Toggle debug mode (show the engine's heuristic map)
    ToggleDebug,
}

/// Parse one line of turn input. Returns `None` when the line is none
/// of a move, a difficulty digit, or the debug toggle.
#[must_use]
pub fn parse_entry(line: &str) -> Option<Entry> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.eq_ignore_ascii_case("d") {
        return Some(Entry::ToggleDebug);
    }
    if let Ok(level) = trimmed.parse::<usize>() {
        return (level <= MAX_DIFFICULTY).then_some(Entry::Difficulty(level));
    }
    trimmed.parse::<Coord>().ok().map(Entry::Move)
}

/// Print `prompt` and read one line from stdin. Returns `None` on EOF
/// or a read error, which callers treat as leaving the game.
pub(crate) fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}
