//! Enumeration types for the pass registry
//!
//! This module contains the pass kinds, access decisions and output formats
//! used throughout the registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two kinds of pass an employee can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    /// Valid at any instant
    Permanent,
    /// Valid inside an inclusive start/end window
    Temporary,
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassKind::Permanent => write!(f, "Permanent"),
            PassKind::Temporary => write!(f, "Temporary"),
        }
    }
}

impl FromStr for PassKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permanent" => Ok(PassKind::Permanent),
            "temporary" => Ok(PassKind::Temporary),
            _ => Err(format!("Unknown pass kind: {}", s)),
        }
    }
}

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// The pass was valid at the checked instant
    Granted,
    /// The pass was not valid at the checked instant
    Denied,
}

impl AccessDecision {
    /// Whether access was granted
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }
}

impl From<bool> for AccessDecision {
    fn from(valid: bool) -> Self {
        if valid {
            AccessDecision::Granted
        } else {
            AccessDecision::Denied
        }
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDecision::Granted => write!(f, "granted"),
            AccessDecision::Denied => write!(f, "denied"),
        }
    }
}

/// Output formats supported by the command line report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_kind_display() {
        assert_eq!(format!("{}", PassKind::Permanent), "Permanent");
        assert_eq!(format!("{}", PassKind::Temporary), "Temporary");
    }

    #[test]
    fn test_pass_kind_from_str() {
        assert_eq!("permanent".parse::<PassKind>().unwrap(), PassKind::Permanent);
        assert_eq!("Temporary".parse::<PassKind>().unwrap(), PassKind::Temporary);
        assert!("temp".parse::<PassKind>().is_err());
        assert!("visitor".parse::<PassKind>().is_err());
    }

    #[test]
    fn test_access_decision_from_bool() {
        assert_eq!(AccessDecision::from(true), AccessDecision::Granted);
        assert_eq!(AccessDecision::from(false), AccessDecision::Denied);
        assert!(AccessDecision::Granted.is_granted());
        assert!(!AccessDecision::Denied.is_granted());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(format!("{}", OutputFormat::Json), "JSON");
        assert_eq!(format!("{}", OutputFormat::Text), "TEXT");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
