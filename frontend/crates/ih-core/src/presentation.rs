//! Status and priority presentation shared by every screen.

use crate::{IssuePriority, IssueStatus};

use serde::Serialize;

/// Neutral color for anything without a dedicated badge color
pub const NEUTRAL_COLOR: &str = "#666666";

/// A colored label rendered next to an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn status_badge(status: IssueStatus) -> Badge {
    let (label, color) = match status {
        IssueStatus::Open => ("Open", "#2196f3"),
        IssueStatus::InProgress => ("In Progress", "#ff9800"),
        IssueStatus::Resolved => ("Resolved", "#4caf50"),
        IssueStatus::Closed => ("Closed", NEUTRAL_COLOR),
    };
    Badge { label, color }
}

pub fn priority_badge(priority: IssuePriority) -> Badge {
    let (label, color) = match priority {
        IssuePriority::Low => ("Low", "#4caf50"),
        IssuePriority::Medium => ("Medium", "#ff9800"),
        IssuePriority::High => ("High", "#f44336"),
        IssuePriority::Critical => ("Critical", "#9c27b0"),
    };
    Badge { label, color }
}

/// Shorten text for list previews, appending `...` when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}
