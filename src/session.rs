//! Driving a match from a sequence of raw command lines.
//!
//! A [`Session`] sits between line-oriented input and the
//! [`MatchController`]: it skips blank lines, stops once a winner is declared,
//! and by default halts on the first rejected command.

use tracing::warn;

use crate::controller::MatchController;
use crate::error::MatchResult;
use crate::game::MatchState;
use crate::narration::Narration;

/// Session behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Stop processing after the first rejected command.
    pub halt_on_error: bool,
    /// Ignore lines that contain only whitespace instead of rejecting them.
    pub skip_blank_lines: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            halt_on_error: true,
            skip_blank_lines: true,
        }
    }
}

/// Why a session stopped consuming lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Input ran out before the match was decided.
    Exhausted,
    /// A winner was declared.
    MatchOver {
        /// Winning team name.
        winner: String,
    },
    /// A command was rejected while halting on errors.
    Halted,
}

/// One processed line and what it produced.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Raw input line.
    pub line: String,
    /// Narration, or the reason the command was rejected.
    pub result: MatchResult<Narration>,
}

/// Ordered record of a finished session.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Processed lines in input order. Skipped lines are not recorded.
    pub entries: Vec<Entry>,
    /// Why the session stopped.
    pub end: SessionEnd,
}

impl Transcript {
    /// Text output of each entry: the narration, or the error message.
    #[must_use]
    pub fn outputs(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| match &entry.result {
                Ok(narration) => narration.to_string(),
                Err(e) => e.to_string(),
            })
            .collect()
    }
}

/// A match fed one raw line at a time.
#[derive(Debug, Clone, Default)]
pub struct Session {
    controller: MatchController,
    config: SessionConfig,
    halted: bool,
}

impl Session {
    /// Create a session for a fresh match.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            controller: MatchController::new(),
            config,
            halted: false,
        }
    }

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        self.controller.state()
    }

    /// Check if the session accepts no further lines.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.halted || self.controller.state().is_over()
    }

    /// Why the session stopped, or would stop if input ended now.
    #[must_use]
    pub fn end(&self) -> SessionEnd {
        if let Some(winner) = self.controller.state().winner() {
            SessionEnd::MatchOver {
                winner: winner.to_string(),
            }
        } else if self.halted {
            SessionEnd::Halted
        } else {
            SessionEnd::Exhausted
        }
    }

    /// Process one raw line.
    ///
    /// Returns `None` if the line was skipped or the session is finished.
    pub fn feed(&mut self, line: &str) -> Option<MatchResult<Narration>> {
        if self.is_finished() {
            return None;
        }
        if self.config.skip_blank_lines && line.trim().is_empty() {
            return None;
        }

        let result = self.controller.execute_line(line);
        if let Err(e) = &result {
            if self.config.halt_on_error {
                warn!(line, error = %e, "halting on rejected command");
                self.halted = true;
            } else {
                warn!(line, error = %e, "command rejected");
            }
        }
        Some(result)
    }

    /// Process lines until input runs out or the session finishes.
    pub fn run<I, S>(mut self, lines: I) -> Transcript
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        for line in lines {
            if self.is_finished() {
                break;
            }
            let line = line.as_ref();
            if let Some(result) = self.feed(line) {
                entries.push(Entry {
                    line: line.to_string(),
                    result,
                });
            }
        }
        Transcript {
            entries,
            end: self.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    const SCENARIO: [&str; 8] = [
        "CREATE Rocket Meekachu 2 1",
        "CREATE Socket Flonyx 5 1",
        "ICHOOSEYOU Meekachu",
        "ICHOOSEYOU Flonyx",
        "ATTACK",
        "ATTACK",
        "ATTACK",
        "ATTACK",
    ];

    #[test]
    fn test_run_to_winner_ignores_trailing_lines() {
        let mut lines = SCENARIO.to_vec();
        lines.push("ATTACK");
        let transcript = Session::default().run(lines);
        assert_eq!(transcript.entries.len(), SCENARIO.len());
        assert_eq!(
            transcript.end,
            SessionEnd::MatchOver {
                winner: "Socket".to_string()
            }
        );
        assert!(transcript.outputs()[7].ends_with("Socket is the winner!"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let transcript = Session::default().run(["CREATE Rocket Meekachu 2 1", "", "\r"]);
        assert_eq!(transcript.entries.len(), 1);
        assert_eq!(transcript.end, SessionEnd::Exhausted);
    }

    #[test]
    fn test_blank_lines_rejected_when_not_skipping() {
        let config = SessionConfig {
            skip_blank_lines: false,
            ..SessionConfig::default()
        };
        let transcript = Session::new(config).run(["", "CREATE Rocket Meekachu 2 1"]);
        assert_eq!(transcript.entries.len(), 1);
        assert_eq!(transcript.end, SessionEnd::Halted);
    }

    #[test]
    fn test_halts_on_first_error() {
        let transcript = Session::default().run([
            "CREATE Rocket Meekachu 2 1",
            "ICHOOSEYOU Meekachu",
            "CREATE Socket Flonyx 5 1",
        ]);
        assert_eq!(transcript.entries.len(), 2);
        assert_eq!(transcript.end, SessionEnd::Halted);
        assert_eq!(
            transcript.entries[1].result.as_ref().unwrap_err(),
            &MatchError::NotEnoughTeams
        );
    }

    #[test]
    fn test_continue_on_error() {
        let config = SessionConfig {
            halt_on_error: false,
            ..SessionConfig::default()
        };
        let mut session = Session::new(config);
        assert!(session.feed("ICHOOSEYOU Meekachu").unwrap().is_err());
        assert!(session.feed("CREATE Rocket Meekachu 2 1").unwrap().is_ok());
        assert!(!session.is_finished());
        assert_eq!(session.state().team_count(), 1);
    }
}
