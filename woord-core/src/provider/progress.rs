/// Progress update during retrieval
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMessage {
    /// Requesting a session token
    Authenticating,
    /// Searching official lists for a term
    Searching(String),
    /// Search finished with this many list ids
    Found(usize),
    /// Progress update
    Progress(FetchProgress),
    /// A single list could not be fetched; retrieval continues
    ListFailed { id: String, error: String },
    /// Retrieval completed
    Completed,
    /// Retrieval was cancelled
    Cancelled,
    /// Retrieval aborted (authentication failure)
    Fatal(String),
}

/// Retrieval progress statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchProgress {
    /// Number of list ids to fetch
    pub total: usize,
    /// Lists fetched successfully so far
    pub fetched: usize,
    /// Lists that failed so far
    pub failed: usize,
    /// Id currently being fetched
    pub current: Option<String>,
}

impl FetchProgress {
    pub fn done(&self) -> usize {
        self.fetched + self.failed
    }

    /// Completed share in percent (0 when nothing is queued)
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.done() as f64 / self.total as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        let progress = FetchProgress {
            total: 4,
            fetched: 1,
            failed: 1,
            current: None,
        };
        assert_eq!(progress.done(), 2);
        assert_eq!(progress.percentage(), 50.0);
        assert_eq!(FetchProgress::default().percentage(), 0.0);
    }
}
