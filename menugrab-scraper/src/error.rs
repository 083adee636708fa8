use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("No element matched selector path: {path}")]
    StructuralMismatch { path: &'static str },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser session error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error("Browser launch failed: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
