//! Document display status taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use citewise_common::AppError;

/// Display status of a knowledge-base document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentDisplayStatus {
    /// Waiting for indexing to start
    Queuing,
    /// Splitting, parsing, or cleaning in progress
    Indexing,
    /// Indexing paused
    Paused,
    /// Indexing failed
    Error,
    /// Completed, not archived, enabled
    Available,
    /// Completed, not archived, enabled
    Enabled,
    /// Completed, not archived, disabled
    Disabled,
    /// Completed and archived
    Archived,
}

impl DocumentDisplayStatus {
    /// Whether indexing has finished for this document, successfully or not
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Queuing | Self::Indexing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queuing => "queuing",
            Self::Indexing => "indexing",
            Self::Paused => "paused",
            Self::Error => "error",
            Self::Available => "available",
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for DocumentDisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentDisplayStatus {
    type Err = AppError;

    // the API reports statuses in mixed case; match case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "queuing" => Ok(Self::Queuing),
            "indexing" => Ok(Self::Indexing),
            "paused" => Ok(Self::Paused),
            "error" => Ok(Self::Error),
            "available" => Ok(Self::Available),
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            "archived" => Ok(Self::Archived),
            other => Err(AppError::InvalidFormat {
                message: format!("unknown document status: {other}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DocumentDisplayStatus; 8] = [
        DocumentDisplayStatus::Queuing,
        DocumentDisplayStatus::Indexing,
        DocumentDisplayStatus::Paused,
        DocumentDisplayStatus::Error,
        DocumentDisplayStatus::Available,
        DocumentDisplayStatus::Enabled,
        DocumentDisplayStatus::Disabled,
        DocumentDisplayStatus::Archived,
    ];

    #[test]
    fn test_parse_round_trip() {
        for status in ALL {
            let parsed: DocumentDisplayStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let parsed: DocumentDisplayStatus = "INDEXING".parse().unwrap();
        assert_eq!(parsed, DocumentDisplayStatus::Indexing);
    }

    #[test]
    fn test_parse_unknown_status() {
        let result = "splitting".parse::<DocumentDisplayStatus>();
        assert!(result.is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!DocumentDisplayStatus::Queuing.is_terminal());
        assert!(!DocumentDisplayStatus::Indexing.is_terminal());
        assert!(DocumentDisplayStatus::Error.is_terminal());
        assert!(DocumentDisplayStatus::Available.is_terminal());
        assert!(DocumentDisplayStatus::Archived.is_terminal());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&DocumentDisplayStatus::Available).unwrap();
        assert_eq!(json, "\"available\"");
    }
}
