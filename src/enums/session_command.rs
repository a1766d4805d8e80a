use std::path::PathBuf;
use crate::enums::app_state::AppState;

/// A line of input typed during an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Load a survey file, replacing the current text.
    LoadFile(PathBuf),
    /// Drop the collected text and file name.
    Clear,
    /// Submit the collected text for analysis.
    Submit,
    /// Switch the displayed report language.
    ToggleLanguage,
    /// Return to the input screen.
    Reset,
    Quit,
    Help,
    /// Anything else is survey text.
    Text(String),
}

impl SessionCommand {
    /// Parses `line` for the screen `state` is showing.
    ///
    /// The single-key shortcuts (`l`, `r`, `q`, `?`) only apply on the
    /// report and error screens; while collecting input they are survey text.
    pub fn parse(line: &str, state: &AppState) -> Self {
        let trimmed = line.trim();

        if let Some(path) = trimmed.strip_prefix(":file ") {
            return SessionCommand::LoadFile(PathBuf::from(path.trim()));
        }

        match trimmed {
            ":clear" => return SessionCommand::Clear,
            ":go" | ":analyze" => return SessionCommand::Submit,
            ":lang" => return SessionCommand::ToggleLanguage,
            ":reset" => return SessionCommand::Reset,
            ":quit" => return SessionCommand::Quit,
            ":help" => return SessionCommand::Help,
            _ => {}
        }

        if state.is_idle() {
            return SessionCommand::Text(line.to_string());
        }

        match trimmed {
            "l" => SessionCommand::ToggleLanguage,
            "r" => SessionCommand::Reset,
            "q" => SessionCommand::Quit,
            "?" => SessionCommand::Help,
            _ => SessionCommand::Text(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_screen() -> AppState {
        AppState::Error("HTTP 500".to_string())
    }

    #[test]
    fn recognises_session_commands() {
        let idle = AppState::Idle;

        assert_eq!(
            SessionCommand::parse(":file  ./survey.csv ", &idle),
            SessionCommand::LoadFile(PathBuf::from("./survey.csv"))
        );
        assert_eq!(SessionCommand::parse(" :go", &idle), SessionCommand::Submit);
        assert_eq!(SessionCommand::parse(":quit", &idle), SessionCommand::Quit);
        assert_eq!(SessionCommand::parse(":lang", &error_screen()), SessionCommand::ToggleLanguage);
    }

    #[test]
    fn shortcuts_only_apply_off_the_input_screen() {
        assert_eq!(SessionCommand::parse("l", &error_screen()), SessionCommand::ToggleLanguage);
        assert_eq!(SessionCommand::parse("q\n", &error_screen()), SessionCommand::Quit);
        assert_eq!(SessionCommand::parse("r", &error_screen()), SessionCommand::Reset);
        assert_eq!(SessionCommand::parse("?", &error_screen()), SessionCommand::Help);

        for key in ["l", "r", "q", "?"] {
            assert_eq!(
                SessionCommand::parse(key, &AppState::Idle),
                SessionCommand::Text(key.to_string())
            );
        }
    }

    #[test]
    fn survey_lines_are_kept_verbatim() {
        assert_eq!(
            SessionCommand::parse("  checkout was slow\n", &AppState::Idle),
            SessionCommand::Text("  checkout was slow\n".to_string())
        );
    }
}
