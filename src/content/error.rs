use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid CMS endpoint: {0}")]
    Endpoint(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response for {document}: {source}")]
    Decode {
        document: &'static str,
        source: serde_json::Error,
    },
}
