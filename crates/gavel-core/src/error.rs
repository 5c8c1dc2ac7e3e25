use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("unknown court: {0}")]
    UnknownCourt(String),

    #[error("unknown tab: {0}")]
    UnknownTab(String),

    #[error("malformed case number {raw:?}: {reason}")]
    MalformedCaseNumber { raw: String, reason: String },

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QueryError {
    pub(crate) fn malformed(raw: &str, reason: impl Into<String>) -> Self {
        QueryError::MalformedCaseNumber {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}
