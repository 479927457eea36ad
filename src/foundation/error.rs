pub type WaveprintResult<T> = Result<T, WaveprintError>;

#[derive(thiserror::Error, Debug)]
pub enum WaveprintError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("output error: {0}")]
    Output(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaveprintError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
