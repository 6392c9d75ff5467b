use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("provider error: {0}")]
    Provider(String),

    #[error("model returned no text")]
    EmptyResponse,

    #[error("malformed model output {raw:?}: {source}")]
    MalformedOutput {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}
