#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error occurred: {0}")]
    Http(reqwest::Error),

    #[error("Error occurred: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Empty response from {url}")]
    EmptyBody { url: String },

    #[error("Failed to decode JSON response. Path: {path}. Error: {message}")]
    Decode { path: String, message: String },

    #[error("Invalid fetch configuration: {0}")]
    InvalidConfig(String),
}

impl FetchError {
    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Subcategory entry must have exactly one key, found {0}")]
    SubCategoryKeys(usize),
}
