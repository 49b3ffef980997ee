use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid issue status: {value} {location}")]
    InvalidIssueStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid issue priority: {value} {location}")]
    InvalidIssuePriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project role: {value} {location}")]
    InvalidProjectRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid issue sort key: {value} {location}")]
    InvalidIssueSort {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
