use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{file} is not valid UTF-8: {source}")]
    Utf8Error {
        file: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Feed request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Feed shelf '{shelf}' returned HTTP {status}")]
    FeedStatusError { shelf: String, status: u16 },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Template has no {placeholder} placeholder")]
    MissingPlaceholder { placeholder: String },

    #[error("Template contains {placeholder} {count} times, expected exactly once")]
    DuplicatePlaceholder { placeholder: String, count: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// How far an error is allowed to travel. Recoverable errors are absorbed by
/// the content loader; fatal ones abort the build before anything is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Recoverable,
    Fatal,
}

impl SiteError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::HttpError(_) | SiteError::FeedStatusError { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Fatal,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::IoError(_) => "Check that the content directory and template path exist",
            SiteError::JsonError { .. } => "Fix the JSON syntax or field names in the content file",
            SiteError::Utf8Error { .. } => "Re-save the file with UTF-8 encoding",
            SiteError::HttpError(_) | SiteError::FeedStatusError { .. } => {
                "Check the feed user id and base URL; the build continues without that shelf"
            }
            SiteError::UrlError(_) => "Use an absolute http(s) URL for feed.base_url",
            SiteError::MissingPlaceholder { .. } => {
                "Add the placeholder to the template or switch books.source"
            }
            SiteError::DuplicatePlaceholder { .. } => {
                "Keep exactly one copy of each placeholder in the template"
            }
            SiteError::ConfigError { .. } | SiteError::InvalidConfigValueError { .. } => {
                "Review the values in the site configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
