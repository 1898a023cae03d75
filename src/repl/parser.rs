use super::ReplCommand;
use crate::app::Setting;
use crate::engine::config::{MergeStrategy, SymbolicMode};

/// Parse `:set <name> <value>` arguments
fn parse_setting(args: &str) -> Option<Setting> {
    let mut parts = args.split_whitespace();
    let name = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    match (name, value) {
        ("symbolic", "centric") => Some(Setting::Symbolic(SymbolicMode::Centric)),
        ("symbolic", "skip") => Some(Setting::Symbolic(SymbolicMode::Skip)),
        ("inject", "on") => Some(Setting::Inject(true)),
        ("inject", "off") => Some(Setting::Inject(false)),
        ("merge", "greedy") => Some(Setting::Merge(MergeStrategy::Greedy)),
        ("merge", "backtrack") => Some(Setting::Merge(MergeStrategy::Backtrack)),
        _ => None,
    }
}

/// Parse REPL input string into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `:vocab` → Vocabulary listing
/// - `:set <name> <value>` → Setting change
/// - `@filename` → Load file command
/// - anything else → a description to craft
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if input.is_empty() {
        return ReplCommand::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd {
            "q" | "quit" => ReplCommand::Quit,
            "h" | "help" => ReplCommand::Help,
            "vocab" => ReplCommand::Vocabulary,
            _ => match cmd.strip_prefix("set ").and_then(parse_setting) {
                Some(setting) => ReplCommand::Set(setting),
                None => ReplCommand::Unknown(input.to_string()),
            },
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() {
            ReplCommand::Unknown(input.to_string())
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        ReplCommand::Describe(input.to_string())
    }
}
