use chrono::{DateTime, Utc};

/// Input for the security posture report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskRequest {
    /// Number of highest-risk resources to list
    pub top: usize,
    /// Score from an earlier run, used to derive the trend
    pub previous_score: Option<u8>,
    /// Reference time for exposure ages; `None` means now
    pub as_of: Option<DateTime<Utc>>,
}

impl RiskRequest {
    pub const DEFAULT_TOP: usize = 10;

    pub fn new(top: usize) -> Self {
        Self {
            top,
            ..Self::default()
        }
    }

    pub fn with_previous_score(mut self, previous_score: Option<u8>) -> Self {
        self.previous_score = previous_score;
        self
    }

    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }
}

impl Default for RiskRequest {
    fn default() -> Self {
        Self {
            top: Self::DEFAULT_TOP,
            previous_score: None,
            as_of: None,
        }
    }
}
