//! Play command implementation.

use super::output::{format_text, JsonEntry};
use super::{open_lines, CliError, OutputFormat};
use monpoke::{Session, SessionConfig, SessionEnd};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or output cannot be written.
/// A rejected command is not an error here; it ends the session with
/// [`SessionEnd::Halted`].
pub(crate) fn execute(
    input: Option<PathBuf>,
    format: OutputFormat,
    continue_on_error: bool,
) -> Result<SessionEnd, CliError> {
    let lines = open_lines(input.as_deref())?;
    let config = SessionConfig {
        halt_on_error: !continue_on_error,
        ..SessionConfig::default()
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let end = drive(lines, &mut out, format, config)?;
    info!(?end, "session finished");
    Ok(end)
}

/// Feed lines into a fresh session, writing one record per processed command.
///
/// Stops reading as soon as the session finishes.
pub(crate) fn drive<I, W>(
    lines: I,
    out: &mut W,
    format: OutputFormat,
    config: SessionConfig,
) -> Result<SessionEnd, CliError>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut session = Session::new(config);
    for line in lines {
        if session.is_finished() {
            break;
        }
        let line = line?;
        let Some(result) = session.feed(&line) else {
            continue;
        };
        match format {
            OutputFormat::Text => writeln!(out, "{}", format_text(&result))?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &JsonEntry::new(&line, &result))?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(session.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> Vec<io::Result<String>> {
        input.iter().map(|s| Ok((*s).to_string())).collect()
    }

    fn play(input: &[&str], format: OutputFormat, config: SessionConfig) -> (String, SessionEnd) {
        let mut out = Vec::new();
        let end = drive(lines(input), &mut out, format, config).unwrap();
        (String::from_utf8(out).unwrap(), end)
    }

    #[test]
    fn test_text_output_stops_after_error() {
        let (text, end) = play(
            &["CREATE Rocket Meekachu 2 1", "ICHOOSEYOU Meekachu", "ATTACK"],
            OutputFormat::Text,
            SessionConfig::default(),
        );
        assert_eq!(
            text,
            "Meekachu has been assigned to team Rocket!\n\
             You may not choose a Mon until another team arrives\n"
        );
        assert_eq!(end, SessionEnd::Halted);
    }

    #[test]
    fn test_json_output_one_object_per_line() {
        let config = SessionConfig {
            halt_on_error: false,
            ..SessionConfig::default()
        };
        let (text, end) = play(
            &["CREATE Rocket Meekachu 2 1", "", "JUMP"],
            OutputFormat::Json,
            config,
        );
        let records: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["ok"], true);
        assert_eq!(records[1]["code"], "parse_failure");
        assert_eq!(end, SessionEnd::Exhausted);
    }

    #[test]
    fn test_read_error_propagates() {
        let input = vec![
            Ok("CREATE Rocket Meekachu 2 1".to_string()),
            Err(io::Error::other("broken pipe")),
        ];
        let mut out = Vec::new();
        let result = drive(input, &mut out, OutputFormat::Text, SessionConfig::default());
        assert!(result.is_err());
    }
}
