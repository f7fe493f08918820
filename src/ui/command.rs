use std::str::FromStr;

use super::UiError;

/// A single line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play { row: usize, col: usize },
    Reset,
    Quit,
}

impl FromStr for Command {
    type Err = UiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "q" | "quit" => return Ok(Command::Quit),
            "r" | "reset" => return Ok(Command::Reset),
            _ => {}
        }

        let parts: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();
        let [row, col] = parts.as_slice() else {
            return Err(UiError::invalid_input(line));
        };
        Ok(Command::Play {
            row: row.parse()?,
            col: col.parse()?,
        })
    }
}
