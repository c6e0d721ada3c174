use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiqError {
    #[error("Invalid suggestion endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
