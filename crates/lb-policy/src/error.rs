use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("unknown dispatch policy {0:?} (expected one of: {1})")]
    Unknown(String, &'static str),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
