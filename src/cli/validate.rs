//! Command file validation.

use super::{open_lines, CliError};
use std::io::{self, Write};
use std::path::PathBuf;

/// Execute the validate command.
///
/// Parses every non-blank line without playing the match.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any line fails to parse.
pub(crate) fn execute(input: PathBuf) -> Result<(), CliError> {
    let lines = open_lines(Some(&input))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Validating: {}", input.display())?;
    writeln!(out)?;

    let mut commands = 0usize;
    let mut failures = 0usize;
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let number = index + 1;
        match monpoke::parse(&line) {
            Ok(command) => {
                commands += 1;
                print_check(&mut out, number, &command.to_string(), None)?;
            }
            Err(e) => {
                failures += 1;
                print_check(&mut out, number, &line, Some(&e.to_string()))?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "  Commands: {commands}")?;
    writeln!(out, "  Failures: {failures}")?;

    if failures > 0 {
        return Err(CliError::new(format!("{failures} line(s) failed to parse")));
    }
    writeln!(out)?;
    writeln!(out, "Validation successful!")?;
    Ok(())
}

fn print_check<W: Write>(
    out: &mut W,
    number: usize,
    line: &str,
    error: Option<&str>,
) -> io::Result<()> {
    match error {
        None => writeln!(out, "  ✓ {number:>4}: {line}"),
        Some(e) => writeln!(out, "  ✗ {number:>4}: {line} ({e})"),
    }
}
