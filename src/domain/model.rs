use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Home {
    pub title: String,
    pub intro: String,
}

/// One book, either from the local `books.json` or extracted from a reading
/// list feed. Every field but the title may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub author: String,
    /// 0 to 5; 0 means unrated.
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub pub_date: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub link: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub icon: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub intro: String,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub date: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingList {
    pub currently_reading: Vec<Book>,
    pub read: Vec<Book>,
}

/// Where the book sections of the page come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookSource {
    /// Remote reading-list shelves.
    #[default]
    Feed,
    /// `books.json` plus the `blog.json` section.
    Local,
}

#[derive(Debug, Clone)]
pub enum Books {
    Feed(ReadingList),
    Local { books: Vec<Book>, blog: Vec<BlogPost> },
}

/// Everything read during the extract phase.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub template: String,
    pub home: Home,
    pub projects: Vec<Project>,
    pub resume: Resume,
    pub contact: Contact,
    pub books: Books,
}
