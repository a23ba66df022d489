//! Output formatting utilities for CLI.

use monpoke::{MatchResult, Narration};
use serde::Serialize;

/// JSON-serializable result of one command.
#[derive(Debug, Serialize)]
pub(super) struct JsonEntry<'a> {
    /// Raw input line.
    pub(super) line: &'a str,
    /// Whether the command succeeded.
    pub(super) ok: bool,
    /// Rendered narration on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) output: Option<String>,
    /// Structured narration on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) events: Option<&'a Narration>,
    /// Error code on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) code: Option<&'static str>,
    /// Error message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) error: Option<String>,
}

impl<'a> JsonEntry<'a> {
    /// Create from a processed line.
    pub(super) fn new(line: &'a str, result: &'a MatchResult<Narration>) -> Self {
        match result {
            Ok(narration) => Self {
                line,
                ok: true,
                output: Some(narration.to_string()),
                events: Some(narration),
                code: None,
                error: None,
            },
            Err(e) => Self {
                line,
                ok: false,
                output: None,
                events: None,
                code: Some(e.code()),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Format a processed line as human-readable text.
pub(super) fn format_text(result: &MatchResult<Narration>) -> String {
    match result {
        Ok(narration) => narration.to_string(),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monpoke::{Event, MatchError};

    #[test]
    fn test_json_success_entry() {
        let result = Ok(Narration::from(Event::Entered {
            creature: "Meekachu".to_string(),
        }));
        let json = serde_json::to_value(JsonEntry::new("ICHOOSEYOU Meekachu", &result)).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["output"], "Meekachu has entered the battle!");
        assert_eq!(json["events"][0]["kind"], "entered");
        assert!(json.get("code").is_none());
    }

    #[test]
    fn test_json_error_entry() {
        let result = Err(MatchError::NotEnoughTeams);
        let json = serde_json::to_value(JsonEntry::new("ICHOOSEYOU Meekachu", &result)).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["code"], "not_enough_teams");
        assert_eq!(format_text(&result), json["error"]);
    }
}
