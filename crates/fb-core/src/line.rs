//! Log line parsing.
//!
//! Each log line has the shape `HH:MM:SS <userId> <Action>` with single
//! space separators. The user ID group is greedy, so it may contain
//! internal spaces; the action is always the final token.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use thiserror::Error;

/// Pre-compiled pattern for log lines.
static LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}):(\d{2}):(\d{2}) (.*) (.*)$").unwrap());

/// Reasons a line is rejected by the parser.
///
/// Rejected lines are skipped with a diagnostic; they never abort the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineFormatError {
    /// The line was empty.
    #[error("empty line")]
    Empty,

    /// The line does not match `HH:MM:SS <userId> <Action>`.
    #[error("line does not match `HH:MM:SS <userId> <Action>`")]
    Shape,

    /// The final token was neither `Start` nor `End`.
    #[error("action must be Start or End, got `{token}`")]
    UnknownAction { token: String },
}

/// Raw clock fields exactly as they appeared on the line.
///
/// The parser checks the two-digit pattern only; range validation is
/// deferred to [`TimeFields::to_time_of_day`], which is where an
/// impossible time like `12:61:00` surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeFields {
    /// Converts the raw fields into a time of day.
    pub fn to_time_of_day(self) -> Result<NaiveTime, InvalidTime> {
        NaiveTime::from_hms_opt(self.hours, self.minutes, self.seconds).ok_or(InvalidTime(self))
    }
}

impl fmt::Display for TimeFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// A pattern-valid line carried clock fields that do not form a valid
/// time of day. Fatal: aborts the whole run.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid time of day {0}")]
pub struct InvalidTime(pub TimeFields);

/// Whether an event opens or closes a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    End,
}

impl Action {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = LineFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Start" => Ok(Self::Start),
            "End" => Ok(Self::End),
            _ => Err(LineFormatError::UnknownAction {
                token: s.to_string(),
            }),
        }
    }
}

/// One parsed Start/End occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub time: TimeFields,
    pub user_id: String,
    pub action: Action,
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.time, self.user_id, self.action)
    }
}

/// Parses one raw log line into an event.
pub fn parse_line(line: &str) -> Result<LogEvent, LineFormatError> {
    if line.is_empty() {
        return Err(LineFormatError::Empty);
    }

    let caps = LINE_RE.captures(line).ok_or(LineFormatError::Shape)?;

    // Two-digit groups always fit in u32; map_err keeps the parser
    // panic-free anyway.
    let field = |i: usize| caps[i].parse::<u32>().map_err(|_| LineFormatError::Shape);
    let time = TimeFields {
        hours: field(1)?,
        minutes: field(2)?,
        seconds: field(3)?,
    };

    let user_id = caps[4].to_string();
    if user_id.is_empty() {
        return Err(LineFormatError::Shape);
    }

    let action = caps[5].parse()?;

    Ok(LogEvent {
        time,
        user_id,
        action,
    })
}
