use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("chart data must contain at least one series")]
    EmptyData,

    #[error("unknown category key: {0}")]
    UnknownCategory(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
