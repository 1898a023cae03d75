use crate::app::{AppEvent, Setting};

/// Commands that can be parsed from REPL input
///
/// These commands map to AppEvent for handling in App core.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Quit the REPL
    Quit,

    /// Show help information
    Help,

    /// List the active vocabulary
    Vocabulary,

    /// Change a parser setting
    Set(Setting),

    /// Load a description from a file
    LoadFile(String),

    /// Craft a typed description
    Describe(String),

    /// Unknown/invalid command
    Unknown(String),
}

/// Convert a parsed REPL command into an AppEvent
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::Help => AppEvent::Help,
        ReplCommand::Vocabulary => AppEvent::ShowVocabulary,
        ReplCommand::Set(setting) => AppEvent::Change(setting),
        ReplCommand::LoadFile(path) => AppEvent::LoadFile(path),
        ReplCommand::Describe(text) => AppEvent::Describe(text),
        ReplCommand::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::SymbolicMode;

    #[test]
    fn test_command_to_app_event_quit() {
        let event = command_to_app_event(ReplCommand::Quit);
        assert_eq!(event, AppEvent::Quit);
    }

    #[test]
    fn test_command_to_app_event_set() {
        let setting = Setting::Symbolic(SymbolicMode::Skip);
        let event = command_to_app_event(ReplCommand::Set(setting));
        assert_eq!(event, AppEvent::Change(setting));
    }

    #[test]
    fn test_command_to_app_event_describe() {
        let event = command_to_app_event(ReplCommand::Describe("a is b".to_string()));
        assert_eq!(event, AppEvent::Describe("a is b".to_string()));
    }

    #[test]
    fn test_command_to_app_event_unknown() {
        let event = command_to_app_event(ReplCommand::Unknown(":x".to_string()));
        assert!(matches!(event, AppEvent::InvalidCommand(_)));
    }
}
