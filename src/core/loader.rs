use crate::core::feed::extract_books;
use crate::core::Storage;
use crate::domain::model::{BlogPost, Book, Contact, Home, Project, ReadingList, Resume};
use crate::utils::error::{ErrorSeverity, Result, SiteError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;
use url::Url;

pub const DEFAULT_FEED_BASE_URL: &str = "https://www.goodreads.com/review/list_rss";

/// Identifies whose reading list to fetch and from where. Shelf URLs are
/// `{base_url}/{user_id}?shelf={shelf}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub user_id: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    CurrentlyReading,
    Read,
}

impl Shelf {
    pub fn as_str(self) -> &'static str {
        match self {
            Shelf::CurrentlyReading => "currently-reading",
            Shelf::Read => "read",
        }
    }
}

impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ContentLoader<'a, S: Storage> {
    storage: &'a S,
    content_dir: &'a str,
    feed: FeedConfig,
    client: Client,
}

impl<'a, S: Storage> ContentLoader<'a, S> {
    pub fn new(storage: &'a S, content_dir: &'a str, feed: FeedConfig) -> Self {
        Self {
            storage,
            content_dir,
            feed,
            client: Client::new(),
        }
    }

    pub async fn read_text(&self, path: &str) -> Result<String> {
        let bytes = self.storage.read_file(path).await?;
        String::from_utf8(bytes).map_err(|source| SiteError::Utf8Error {
            file: path.to_string(),
            source,
        })
    }

    async fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        let path = Path::new(self.content_dir).join(file_name);
        let path = path.to_string_lossy();
        tracing::debug!("Reading {}", path);
        let text = self.read_text(&path).await?;
        serde_json::from_str(&text).map_err(|source| SiteError::JsonError {
            file: path.to_string(),
            source,
        })
    }

    pub async fn home(&self) -> Result<Home> {
        self.read_json("home.json").await
    }

    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.read_json("projects.json").await
    }

    pub async fn resume(&self) -> Result<Resume> {
        self.read_json("resume.json").await
    }

    pub async fn contact(&self) -> Result<Contact> {
        self.read_json("contact.json").await
    }

    pub async fn blog(&self) -> Result<Vec<BlogPost>> {
        self.read_json("blog.json").await
    }

    pub async fn local_books(&self) -> Result<Vec<Book>> {
        self.read_json("books.json").await
    }

    pub fn shelf_url(&self, shelf: Shelf) -> Result<Url> {
        let mut url = Url::parse(&self.feed.base_url)?;
        url.path_segments_mut()
            .map_err(|_| SiteError::ConfigError {
                message: format!("feed base URL '{}' cannot take a path", self.feed.base_url),
            })?
            .pop_if_empty()
            .push(&self.feed.user_id);
        url.query_pairs_mut().append_pair("shelf", shelf.as_str());
        Ok(url)
    }

    async fn try_fetch_shelf(&self, shelf: Shelf) -> Result<Vec<Book>> {
        let url = self.shelf_url(shelf)?;
        tracing::debug!("Fetching shelf '{}' from {}", shelf, url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("Feed response status: {}", response.status());
        if !response.status().is_success() {
            return Err(SiteError::FeedStatusError {
                shelf: shelf.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(extract_books(&body))
    }

    /// Never fails: any problem reaching the feed is logged and the shelf is
    /// treated as empty.
    pub async fn fetch_shelf(&self, shelf: Shelf) -> Vec<Book> {
        match self.try_fetch_shelf(shelf).await {
            Ok(books) => {
                tracing::info!("Shelf '{}': {} books", shelf, books.len());
                books
            }
            Err(e) => {
                match e.severity() {
                    ErrorSeverity::Recoverable => {
                        tracing::warn!("Could not load shelf '{}', leaving it empty: {}", shelf, e)
                    }
                    ErrorSeverity::Fatal => {
                        tracing::error!("Shelf '{}' is misconfigured, leaving it empty: {}", shelf, e)
                    }
                }
                Vec::new()
            }
        }
    }

    pub async fn reading_list(&self) -> ReadingList {
        let currently_reading = self.fetch_shelf(Shelf::CurrentlyReading).await;
        let read = self.fetch_shelf(Shelf::Read).await;
        ReadingList {
            currently_reading,
            read,
        }
    }
}
