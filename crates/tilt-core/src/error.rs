use thiserror::Error;

#[derive(Debug, Error)]
pub enum TiltError {
    #[error("no element matches target selector `{selector}`")]
    TargetNotFound { selector: String },
    #[error("invalid tilt options: {0}")]
    InvalidOptions(String),
    #[error("dom call failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, TiltError>;
