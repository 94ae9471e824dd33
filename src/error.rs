use thiserror::Error;

#[derive(Debug, Error)]
pub enum StopwatchError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to schedule tick: {0}")]
    Schedule(String),
    #[error("invalid stopwatch config: {0}")]
    Config(#[from] serde_json::Error),
}
