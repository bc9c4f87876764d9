/// Application-level errors
///
/// None of these reach the end user: each fallback tier logs the error and
/// hands over to the next tier.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Recipe provider is not configured")]
    NotConfigured,

    #[error("Dataset read error: {0}")]
    DatasetIo(#[from] std::io::Error),

    #[error("Dataset parse error: {0}")]
    DatasetParse(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
