use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Sort key accepted by the issue list endpoint. Ordering itself is server-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueSort {
    #[default]
    CreatedAt,
    UpdatedAt,
    Priority,
    Status,
}

impl IssueSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Priority => "priority",
            Self::Status => "status",
        }
    }

    /// Label shown in the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreatedAt => "Newest First",
            Self::UpdatedAt => "Recently Updated",
            Self::Priority => "Priority",
            Self::Status => "Status",
        }
    }
}

impl FromStr for IssueSort {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            "priority" => Ok(Self::Priority),
            "status" => Ok(Self::Status),
            _ => Err(CoreError::InvalidIssueSort {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for IssueSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
