use serde::{Deserialize, Serialize};

/// Body of every `/analyze` reply: exactly one of `result` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisResponse {
    Result(String),
    Error(String),
}

impl AnalysisResponse {
    pub fn result(text: impl Into<String>) -> Self {
        AnalysisResponse::Result(text.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        AnalysisResponse::Error(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResponse::Result(_))
    }
}
