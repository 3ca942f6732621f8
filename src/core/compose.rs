//! HTML fragments for each kind of content. Every function here is pure and
//! inserts text verbatim: content comes from the site owner's own files and
//! feed, so nothing is escaped.

use crate::core::feed::MAX_RATING;
use crate::domain::model::{BlogPost, Book, Contact, Education, Experience, Project};

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

pub fn projects_html(projects: &[Project]) -> String {
    projects
        .iter()
        .map(|project| {
            format!(
                r#"
            <div class="project-item">
                <h3><a href="{}" class="project-link" target="_blank" rel="noopener noreferrer">{}</a></h3>
                <p>{}</p>
            </div>"#,
                project.link, project.title, project.description
            )
        })
        .collect()
}

pub fn experience_html(experience: &[Experience]) -> String {
    experience
        .iter()
        .map(|exp| {
            let lines: String = exp
                .description
                .iter()
                .map(|line| format!("<p>{}</p>", line))
                .collect();
            format!(
                r#"
                <div class="resume-item">
                    <div class="resume-title">{}</div>
                    <div class="resume-date">{}</div>
                    {}
                </div>"#,
                exp.title, exp.date, lines
            )
        })
        .collect()
}

pub fn education_html(education: &[Education]) -> String {
    education
        .iter()
        .map(|edu| {
            let details = match edu.details.as_deref() {
                Some(details) if !details.is_empty() => format!("<p>{}</p>", details),
                _ => String::new(),
            };
            format!(
                r#"
                <div class="resume-item">
                    <div class="resume-title">{}</div>
                    <div class="resume-date">{}</div>
                    {}
                </div>"#,
                edu.title, edu.date, details
            )
        })
        .collect()
}

pub fn skills_html(skills: &[String]) -> String {
    skills
        .iter()
        .map(|skill| format!(r#"<span class="skill-tag">{}</span>"#, skill))
        .collect()
}

pub fn blog_html(posts: &[BlogPost]) -> String {
    posts
        .iter()
        .map(|post| {
            format!(
                r#"
            <article class="blog-post">
                <h3>{}</h3>
                <div class="blog-date">{}</div>
                <p>{}</p>
            </article>"#,
                post.title, post.date, post.excerpt
            )
        })
        .collect()
}

pub fn contact_links_html(contact: &Contact) -> String {
    contact
        .links
        .iter()
        .map(|link| {
            format!(
                r#"
                <a target="_blank" rel="noopener noreferrer" class="social-icon" href="{}"><i class="{}"></i></a>"#,
                link.href, link.icon
            )
        })
        .collect()
}

/// Books from the local `books.json`.
pub fn local_books_html(books: &[Book]) -> String {
    books
        .iter()
        .map(|book| {
            format!(
                r#"
            <div class="book-item">
                <h3>{}</h3>
                <p>{}</p>
            </div>"#,
                book.title, book.description
            )
        })
        .collect()
}

/// Always [`MAX_RATING`] glyphs: `rating` filled ones, then empty ones.
pub fn render_rating(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let mut stars = String::with_capacity(MAX_RATING as usize * FILLED_STAR.len_utf8());
    stars.extend(std::iter::repeat(FILLED_STAR).take(filled));
    stars.extend(std::iter::repeat(EMPTY_STAR).take(MAX_RATING as usize - filled));
    stars
}

fn cover_html(book: &Book) -> String {
    if book.cover.is_empty() {
        return String::new();
    }
    format!(
        r#"<img class="book-cover" src="{}" alt="{}" loading="lazy">"#,
        book.cover, book.title
    )
}

fn author_html(book: &Book) -> String {
    if book.author.is_empty() {
        return String::new();
    }
    format!(r#"<div class="book-author">{}</div>"#, book.author)
}

pub fn now_reading_html(books: &[Book]) -> String {
    books
        .iter()
        .map(|book| {
            format!(
                r#"
            <div class="book-card">
                {}
                <h4><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></h4>
                {}
            </div>"#,
                cover_html(book),
                book.link,
                book.title,
                author_html(book)
            )
        })
        .collect()
}

pub fn recently_read_html(books: &[Book]) -> String {
    books
        .iter()
        .map(|book| {
            // 0 is "not rated" in the feed, so no stars at all.
            let rating = if book.rating == 0 {
                String::new()
            } else {
                format!(r#"<div class="book-rating">{}</div>"#, render_rating(book.rating))
            };
            let date = if book.pub_date.is_empty() {
                String::new()
            } else {
                format!(r#"<div class="book-date">{}</div>"#, book.pub_date)
            };
            format!(
                r#"
            <div class="book-card">
                {}
                <h4><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></h4>
                {}
                {}
                {}
            </div>"#,
                cover_html(book),
                book.link,
                book.title,
                author_html(book),
                rating,
                date
            )
        })
        .collect()
}

pub fn read_grid_html(books: &[Book]) -> String {
    books
        .iter()
        .map(|book| {
            let inner = if book.cover.is_empty() {
                format!(r#"<span class="grid-title">{}</span>"#, book.title)
            } else {
                cover_html(book)
            };
            format!(
                r#"
                <a class="grid-item" href="{}" title="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                book.link, book.title, inner
            )
        })
        .collect()
}

/// Wraps `content` in a headed section, or drops the section entirely when
/// there is nothing to show.
pub fn wrap_section(id: &str, heading: &str, content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!(
        r#"
        <section class="reading-section" id="{}">
            <h3>{}</h3>
            <div class="{}-content">{}
            </div>
        </section>"#,
        id, heading, id, content
    )
}
