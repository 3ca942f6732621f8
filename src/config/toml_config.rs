use crate::core::loader::DEFAULT_FEED_BASE_URL;
use crate::core::ConfigProvider;
use crate::domain::model::BookSource;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Site configuration, usually read from `site.toml`. Every section and
/// field is optional; the defaults describe the stock project layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: PathsConfig,
    pub books: BooksConfig,
    pub feed: FeedSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub content_dir: String,
    pub template: String,
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content_dir: "site/content".to_string(),
            template: "site/template.html".to_string(),
            output: "index.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BooksConfig {
    pub source: BookSource,
    /// How many of the most recent `read` books get a full card.
    pub recent_limit: usize,
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            source: BookSource::Feed,
            recent_limit: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSection {
    pub user_id: String,
    pub base_url: String,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            base_url: DEFAULT_FEED_BASE_URL.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Reads `path` when it exists, otherwise falls back to the defaults.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "No config at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${NAME}` from the environment. Unknown variables are left as
    /// written so validation can report them.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("site.content_dir", &self.site.content_dir)?;
        validation::validate_path("site.template", &self.site.template)?;
        validation::validate_path("site.output", &self.site.output)?;
        validation::validate_positive_number("books.recent_limit", self.books.recent_limit, 1)?;

        if self.books.source == BookSource::Feed {
            if self.feed.user_id.trim().is_empty() {
                return Err(SiteError::InvalidConfigValueError {
                    field: "feed.user_id".to_string(),
                    value: self.feed.user_id.clone(),
                    reason: "Required when books.source is \"feed\"; set [feed].user_id, \
                             pass --feed-user-id or build with --local-books"
                        .to_string(),
                });
            }
            if ENV_VAR.is_match(&self.feed.user_id) {
                return Err(SiteError::InvalidConfigValueError {
                    field: "feed.user_id".to_string(),
                    value: self.feed.user_id.clone(),
                    reason: "Environment variable is not set".to_string(),
                });
            }
            validation::validate_url("feed.base_url", &self.feed.base_url)?;
        }

        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn content_dir(&self) -> &str {
        &self.site.content_dir
    }

    fn template_path(&self) -> &str {
        &self.site.template
    }

    fn output_path(&self) -> &str {
        &self.site.output
    }

    fn book_source(&self) -> BookSource {
        self.books.source
    }

    fn recent_limit(&self) -> usize {
        self.books.recent_limit
    }

    fn feed_user_id(&self) -> &str {
        &self.feed.user_id
    }

    fn feed_base_url(&self) -> &str {
        &self.feed.base_url
    }
}
