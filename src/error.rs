use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid series date `{value}`")]
    InvalidDate { value: String },

    #[error("unknown range preset `{0}`")]
    UnknownRange(String),

    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown chart handle: {0}")]
    UnknownChartHandle(u64),
}
