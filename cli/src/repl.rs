//! Line parsing for the interactive `chat` command.

use chatcore::prompts::QuickAction;

/// What one line of REPL input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplInput<'a> {
    Quit,
    /// Blank line; nothing to send.
    Empty,
    Send(&'a str),
    Action(QuickAction),
    /// A `/command` that is not recognized.
    Unknown(&'a str),
}

pub const HELP: &str = "commands: /products /orders /customers /create-product /quit";

pub fn parse_line(line: &str) -> ReplInput<'_> {
    let line = line.trim();
    if line.is_empty() {
        return ReplInput::Empty;
    }
    let Some(command) = line.strip_prefix('/') else {
        return ReplInput::Send(line);
    };
    if command == "quit" {
        return ReplInput::Quit;
    }
    QuickAction::from_key(command).map_or(ReplInput::Unknown(line), ReplInput::Action)
}

#[cfg(test)]
#[path = "repl_test.rs"]
mod tests;
