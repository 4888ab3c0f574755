//! Parsing of `key=value` assignments and `watch` commands.

use roicalc_engine::ParamKey;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected KEY=VALUE, got '{0}'")]
    MissingEquals(String),

    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),
}

impl InputError {
    /// Suggestion for the user, if one applies.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::UnknownParameter(_) => Some(format!("known parameters: {}", known_names())),
            Self::MissingEquals(_) => Some("example: hourlyCost=45".to_string()),
        }
    }
}

/// Comma-separated list of parameter names.
pub fn known_names() -> String {
    ParamKey::ALL
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split `key=value` into a parameter and its raw text.
///
/// The value is not parsed here; the store applies its lenient rules.
pub fn parse_assignment(input: &str) -> Result<(ParamKey, String), InputError> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| InputError::MissingEquals(input.trim().to_string()))?;
    let name = name.trim();
    let key =
        ParamKey::from_name(name).ok_or_else(|| InputError::UnknownParameter(name.to_string()))?;
    Ok((key, value.trim().to_string()))
}

/// One line of `watch` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchCommand {
    Set(ParamKey, String),
    Reset,
    Show,
    Quit,
    /// Blank line or comment.
    Skip,
}

pub fn parse_watch_line(line: &str) -> Result<WatchCommand, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(WatchCommand::Skip);
    }
    match trimmed {
        "reset" => Ok(WatchCommand::Reset),
        "show" => Ok(WatchCommand::Show),
        "quit" | "exit" => Ok(WatchCommand::Quit),
        _ => {
            let (key, value) = parse_assignment(trimmed)?;
            Ok(WatchCommand::Set(key, value))
        }
    }
}
