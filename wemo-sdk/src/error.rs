use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    Api(#[from] wemo_api::ApiError),

    /// The `WEMO_HOST` environment variable is unset or empty
    #[error("Missing required env var: WEMO_HOST")]
    MissingHost,
}
