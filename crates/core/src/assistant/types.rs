use std::fmt;

/// Status of an asynchronous assistant run.
///
/// The wire format is an open string set; everything we do not recognize
/// is carried verbatim in `Other` so callers can fail on it explicitly
/// instead of silently treating it as non-terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    Cancelled,
    Other(String),
}

impl RunStatus {
    /// Parse a wire status string. Total: never fails.
    pub fn parse(s: &str) -> Self {
        match s {
            "queued" => RunStatus::Queued,
            "in_progress" => RunStatus::InProgress,
            "completed" => RunStatus::Completed,
            "failed" => RunStatus::Failed,
            "cancelled" => RunStatus::Cancelled,
            other => RunStatus::Other(other.to_string()),
        }
    }

    /// True for `completed`, `failed` and `cancelled`.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunStatus::Completed | RunStatus::Failed | RunStatus::Cancelled
        )
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Queued => write!(f, "queued"),
            RunStatus::InProgress => write!(f, "in_progress"),
            RunStatus::Completed => write!(f, "completed"),
            RunStatus::Failed => write!(f, "failed"),
            RunStatus::Cancelled => write!(f, "cancelled"),
            RunStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(RunStatus::parse("queued"), RunStatus::Queued);
        assert_eq!(RunStatus::parse("in_progress"), RunStatus::InProgress);
        assert_eq!(RunStatus::parse("completed"), RunStatus::Completed);
        assert_eq!(RunStatus::parse("failed"), RunStatus::Failed);
        assert_eq!(RunStatus::parse("cancelled"), RunStatus::Cancelled);
    }

    #[test]
    fn test_parse_unknown_status_preserved() {
        let status = RunStatus::parse("requires_action");
        assert_eq!(status, RunStatus::Other("requires_action".to_string()));
        assert_eq!(status.to_string(), "requires_action");
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(RunStatus::Completed.is_terminal());
        assert!(RunStatus::Failed.is_terminal());
        assert!(RunStatus::Cancelled.is_terminal());
        assert!(!RunStatus::Queued.is_terminal());
        assert!(!RunStatus::InProgress.is_terminal());
        assert!(!RunStatus::Other("expired".to_string()).is_terminal());
    }
}
