//! Command grammar.
//!
//! One command per line, space-delimited tokens:
//!
//! ```text
//! CREATE <team> <creature> <health> <attack>
//! ICHOOSEYOU <creature>
//! ATTACK
//! ```
//!
//! Tokens after the last operand are ignored.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Verb that adds a creature to a team.
pub const CREATE: &str = "CREATE";
/// Verb that puts a creature in the ring.
pub const CHOOSE: &str = "ICHOOSEYOU";
/// Verb that attacks with the creature in the ring.
pub const ATTACK: &str = "ATTACK";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a creature to a team, creating the team if it is new.
    Create {
        /// Owning team name.
        team: String,
        /// New creature name.
        creature: String,
        /// Starting health, `None` if the token was not a number.
        health: Option<i32>,
        /// Attack power, `None` if the token was not a number.
        attack: Option<i32>,
    },
    /// Put a creature in the ring for the team on turn.
    Choose {
        /// Creature name.
        creature: String,
    },
    /// Attack the opposing creature in the ring.
    Attack,
}

impl Command {
    /// The verb this command was parsed from.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Command::Create { .. } => CREATE,
            Command::Choose { .. } => CHOOSE,
            Command::Attack => ATTACK,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Create {
                team,
                creature,
                health,
                attack,
            } => write!(
                f,
                "{CREATE} {team} {creature} {} {}",
                Operand(*health),
                Operand(*attack)
            ),
            Command::Choose { creature } => write!(f, "{CHOOSE} {creature}"),
            Command::Attack => write!(f, "{ATTACK}"),
        }
    }
}

struct Operand(Option<i32>);

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => write!(f, "NaN"),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse a single command line.
///
/// Line endings are expected to be stripped by the caller; surrounding
/// whitespace and repeated spaces between tokens are tolerated.
///
/// # Errors
///
/// Returns a [`ParseError`] if the line is empty, starts with an unknown verb,
/// or lacks a required name operand. Missing or non-numeric stat operands are
/// not parse errors; they become `None` and fail creature validation later.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().ok_or(ParseError::Empty)?;

    match verb {
        CREATE => {
            let team = operand(tokens.next(), CREATE, "team name")?;
            let creature = operand(tokens.next(), CREATE, "creature name")?;
            let health = tokens.next().and_then(parse_int);
            let attack = tokens.next().and_then(parse_int);
            Ok(Command::Create {
                team,
                creature,
                health,
                attack,
            })
        }
        CHOOSE => {
            let creature = operand(tokens.next(), CHOOSE, "creature name")?;
            Ok(Command::Choose { creature })
        }
        ATTACK => Ok(Command::Attack),
        other => Err(ParseError::UnknownVerb(other.to_string())),
    }
}

fn operand(
    token: Option<&str>,
    verb: &'static str,
    operand: &'static str,
) -> Result<String, ParseError> {
    token
        .map(str::to_string)
        .ok_or(ParseError::MissingOperand { verb, operand })
}

/// Parse the leading integer of a token.
///
/// Accepts an optional sign followed by decimal digits, or by `0x`/`0X` and
/// hex digits, and ignores anything after the digits: `"12abc"` is 12 and
/// `"0x1g"` is 1. Returns `None` when there are no digits or the value does
/// not fit in an `i32`.
#[must_use]
pub fn parse_int(token: &str) -> Option<i32> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let negative = token.starts_with('-');
    let (body, radix) = match unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };
    let digits = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    if digits == 0 {
        return None;
    }
    let magnitude = i64::from_str_radix(&body[..digits], radix).ok()?;
    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}
