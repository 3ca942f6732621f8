//! Best-effort extraction of [`Book`]s from reading-list RSS.
//!
//! The feed is never parsed as XML. Each `<item>` block is located with a
//! regular expression and every field is pulled out of it independently, so a
//! malformed or partial item still yields a record with empty fields instead
//! of failing the whole feed.

use crate::domain::model::Book;
use regex::Regex;
use std::sync::LazyLock;

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Highest rating a book can carry.
pub const MAX_RATING: u8 = 5;

static ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<item(?:\s[^>]*)?>(.*?)</item>").expect("item pattern is valid")
});

struct FieldPatterns {
    title: Regex,
    link: Regex,
    author: Regex,
    rating: Regex,
    pub_date: Regex,
    /// Cover image tiers, highest resolution first.
    images: [Regex; 3],
}

static FIELDS: LazyLock<FieldPatterns> = LazyLock::new(|| FieldPatterns {
    title: element("title"),
    link: element("link"),
    author: element("author_name"),
    rating: element("user_rating"),
    pub_date: element("pubDate"),
    images: [
        element("book_large_image_url"),
        element("book_medium_image_url"),
        element("book_small_image_url"),
    ],
});

/// Group 1 is the body of a CDATA section, which may itself contain
/// `</tag>`. Group 2 is plain element text.
fn element(tag: &str) -> Regex {
    let tag = regex::escape(tag);
    Regex::new(&format!(
        r"(?s)<{tag}(?:\s[^>]*)?>\s*(?:<!\[CDATA\[(.*?)\]\]>|(.*?))\s*</{tag}>"
    ))
    .expect("element pattern is valid")
}

/// Returns one [`Book`] per `<item>` block, in document order.
pub fn extract_books(feed: &str) -> Vec<Book> {
    ITEM.captures_iter(feed)
        .filter_map(|caps| caps.get(1))
        .map(|item| book_from_item(item.as_str()))
        .collect()
}

fn book_from_item(item: &str) -> Book {
    let fields = &*FIELDS;
    Book {
        title: field(&fields.title, item),
        link: field(&fields.link, item),
        author: field(&fields.author, item),
        rating: parse_rating(&field(&fields.rating, item)),
        pub_date: field(&fields.pub_date, item),
        cover: fields
            .images
            .iter()
            .map(|pattern| field(pattern, item))
            .find(|url| !url.is_empty())
            .unwrap_or_default(),
        description: String::new(),
    }
}

/// First occurrence of the element wins; a missing element is "".
fn field(pattern: &Regex, item: &str) -> String {
    let Some(caps) = pattern.captures(item) else {
        return String::new();
    };
    match (caps.get(1), caps.get(2)) {
        (Some(cdata), _) => cdata.as_str().to_string(),
        (None, Some(text)) => strip_cdata(text.as_str()).to_string(),
        (None, None) => String::new(),
    }
}

pub fn strip_cdata(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(CDATA_OPEN)
        .and_then(|inner| inner.strip_suffix(CDATA_CLOSE))
        .unwrap_or(trimmed)
}

/// Non-numeric or missing ratings are 0; numeric ones are clamped to
/// `0..=MAX_RATING`, however many digits they have.
pub fn parse_rating(raw: &str) -> u8 {
    let raw = raw.trim();
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    // Only overflow can fail here.
    digits
        .parse::<u64>()
        .map(|n| n.min(MAX_RATING as u64) as u8)
        .unwrap_or(MAX_RATING)
}
