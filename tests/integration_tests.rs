use anyhow::Result;
use homepage_builder::config::toml_config::{BooksConfig, FeedSection, PathsConfig};
use homepage_builder::domain::model::BookSource;
use homepage_builder::{LocalStorage, SiteConfig, SiteEngine, SiteError, SitePipeline};
use httpmock::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><title>{{HOME_TITLE}}</title></head>
<body>
  <section id="home"><h1>Welcome</h1><p>{{HOME_INTRO}}</p></section>
  <section id="books">
    {{NOW_READING_CONTENT}}
    <div class="recent">{{RECENTLY_READ_CONTENT}}</div>
    {{READ_GRID_CONTENT}}
  </section>
  <section id="projects">{{PROJECTS_CONTENT}}</section>
  <section id="resume">
    <div>{{RESUME_EXPERIENCE}}</div>
    <div>{{RESUME_EDUCATION}}</div>
    <div>{{RESUME_SKILLS}}</div>
  </section>
  <section id="contact"><p>{{CONTACT_INTRO}}</p>{{CONTACT_LINKS}}</section>
</body>
</html>
"#;

const LEGACY_TEMPLATE: &str = r#"<html><head><title>{{HOME_TITLE}}</title></head><body>
<p>{{HOME_INTRO}}</p>
<div id="books">{{BOOKS_CONTENT}}</div>
<div id="projects">{{PROJECTS_CONTENT}}</div>
<div>{{RESUME_EXPERIENCE}}</div><div>{{RESUME_EDUCATION}}</div><div>{{RESUME_SKILLS}}</div>
<div id="blog">{{BLOG_CONTENT}}</div>
<p>{{CONTACT_INTRO}}</p>{{CONTACT_LINKS}}
</body></html>
"#;

const READ_SHELF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
  <title>Ada's bookshelf: read</title>
  <item>
    <title><![CDATA[The Left Hand of Darkness]]></title>
    <link><![CDATA[https://books.example/review/1]]></link>
    <book_small_image_url><![CDATA[https://img.example/1s.jpg]]></book_small_image_url>
    <book_large_image_url><![CDATA[https://img.example/1l.jpg]]></book_large_image_url>
    <author_name>Ursula K. Le Guin</author_name>
    <user_rating>5</user_rating>
    <pubDate><![CDATA[Sat, 01 Jun 2024 09:00:00 -0700]]></pubDate>
  </item>
  <item>
    <title><![CDATA[Untitled Notebook]]></title>
    <link><![CDATA[https://books.example/review/2]]></link>
  </item>
</channel>
</rss>
"#;

fn write_content(root: &Path, template: &str) -> Result<()> {
    let content = root.join("content");
    fs::create_dir_all(&content)?;
    fs::write(root.join("template.html"), template)?;
    fs::write(
        content.join("home.json"),
        r#"{"title": "Ada Lovelace", "intro": "I write <em>programs</em>."}"#,
    )?;
    fs::write(
        content.join("projects.json"),
        r#"[
            {"title": "engine", "link": "https://example.com/engine", "description": "Analytical"},
            {"title": "notes", "link": "https://example.com/notes", "description": "Note G"}
        ]"#,
    )?;
    fs::write(
        content.join("resume.json"),
        r#"{
            "experience": [{"title": "Mathematician", "date": "1842", "description": ["Translated", "Annotated"]}],
            "education": [{"title": "Private tutoring", "date": "1830"}],
            "skills": ["Mathematics", "Poetical science"]
        }"#,
    )?;
    fs::write(
        content.join("contact.json"),
        r#"{"intro": "Write to me.", "links": [{"icon": "fab fa-github", "href": "https://github.com/ada"}]}"#,
    )?;
    Ok(())
}

fn config(source: BookSource, feed_base_url: String) -> SiteConfig {
    SiteConfig {
        site: PathsConfig {
            content_dir: "content".to_string(),
            template: "template.html".to_string(),
            output: "public/index.html".to_string(),
        },
        books: BooksConfig {
            source,
            recent_limit: 5,
        },
        feed: FeedSection {
            user_id: "1815".to_string(),
            base_url: feed_base_url,
        },
    }
}

fn engine(root: &Path, config: SiteConfig) -> SiteEngine<SitePipeline<LocalStorage, SiteConfig>> {
    let storage = LocalStorage::new(root);
    SiteEngine::new(SitePipeline::new(storage, config))
}

#[tokio::test]
async fn test_end_to_end_feed_build() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_content(temp_dir.path(), TEMPLATE)?;

    let server = MockServer::start();
    let current = server.mock(|when, then| {
        when.method(GET)
            .path("/list_rss/1815")
            .query_param("shelf", "currently-reading");
        then.status(200)
            .header("Content-Type", "application/rss+xml")
            .body("<rss><channel><item><title>Ulysses</title><author_name>James Joyce</author_name></item></channel></rss>");
    });
    let read = server.mock(|when, then| {
        when.method(GET)
            .path("/list_rss/1815")
            .query_param("shelf", "read");
        then.status(200)
            .header("Content-Type", "application/rss+xml")
            .body(READ_SHELF);
    });

    let config = config(BookSource::Feed, server.url("/list_rss"));
    let output = engine(temp_dir.path(), config).run().await?;

    current.assert();
    read.assert();
    assert_eq!(output, "public/index.html");

    let html = fs::read_to_string(temp_dir.path().join("public/index.html"))?;
    assert!(html.contains("<title>Ada Lovelace</title>"));
    assert!(html.contains("<p>I write <em>programs</em>.</p>"));
    assert!(html.contains("Currently Reading"));
    assert!(html.contains("Ulysses"));
    assert!(html.contains("All Read"));
    assert!(html.contains("https://img.example/1l.jpg"));
    assert!(!html.contains("https://img.example/1s.jpg"));
    assert!(html.contains("★★★★★"));
    assert!(html.contains("Untitled Notebook"));
    assert!(html.contains(r#"<span class="skill-tag">Poetical science</span>"#));
    assert!(html.find("engine").unwrap() < html.find("notes").unwrap());
    assert!(!html.contains("{{"));
    Ok(())
}

#[tokio::test]
async fn test_feed_failure_still_builds_page() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_content(temp_dir.path(), TEMPLATE)?;

    let server = MockServer::start();
    let current = server.mock(|when, then| {
        when.method(GET)
            .path("/list_rss/1815")
            .query_param("shelf", "currently-reading");
        then.status(500);
    });
    let read = server.mock(|when, then| {
        when.method(GET)
            .path("/list_rss/1815")
            .query_param("shelf", "read");
        then.status(200).body(READ_SHELF);
    });

    let config = config(BookSource::Feed, server.url("/list_rss"));
    let result = engine(temp_dir.path(), config).run().await;

    assert!(result.is_ok());
    current.assert();
    read.assert();

    let html = fs::read_to_string(temp_dir.path().join("public/index.html"))?;
    assert!(!html.contains("Currently Reading"));
    assert!(html.contains("All Read"));
    assert!(html.contains("<title>Ada Lovelace</title>"));
    assert!(html.contains("Write to me."));
    Ok(())
}

#[tokio::test]
async fn test_legacy_local_build() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_content(temp_dir.path(), LEGACY_TEMPLATE)?;
    fs::write(
        temp_dir.path().join("content/books.json"),
        r#"[{"title": "Sketch of the Analytical Engine", "description": "Menabrea"}]"#,
    )?;
    fs::write(
        temp_dir.path().join("content/blog.json"),
        r#"[{"title": "On Note G", "date": "1843-09-01", "excerpt": "Bernoulli numbers"}]"#,
    )?;

    let config = config(BookSource::Local, "http://unused.invalid".to_string());
    engine(temp_dir.path(), config).run().await?;

    let html = fs::read_to_string(temp_dir.path().join("public/index.html"))?;
    assert!(html.contains(r#"<div class="book-item">"#));
    assert!(html.contains("<p>Menabrea</p>"));
    assert!(html.contains(r#"<article class="blog-post">"#));
    assert!(html.contains("<h3>On Note G</h3>"));
    assert!(!html.contains("{{"));
    Ok(())
}

#[tokio::test]
async fn test_missing_content_file_aborts_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_content(temp_dir.path(), LEGACY_TEMPLATE)?;
    fs::remove_file(temp_dir.path().join("content/resume.json"))?;

    let config = config(BookSource::Local, "http://unused.invalid".to_string());
    let err = engine(temp_dir.path(), config).run().await.unwrap_err();

    assert!(matches!(err, SiteError::IoError(_)));
    assert!(!temp_dir.path().join("public/index.html").exists());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_placeholder_aborts_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let template = LEGACY_TEMPLATE.replace("</body>", "<footer>{{CONTACT_INTRO}}</footer></body>");
    write_content(temp_dir.path(), &template)?;
    fs::write(temp_dir.path().join("content/books.json"), "[]")?;
    fs::write(temp_dir.path().join("content/blog.json"), "[]")?;

    let config = config(BookSource::Local, "http://unused.invalid".to_string());
    let err = engine(temp_dir.path(), config).run().await.unwrap_err();

    assert!(matches!(err, SiteError::DuplicatePlaceholder { count: 2, .. }));
    assert!(!temp_dir.path().join("public/index.html").exists());
    Ok(())
}

#[tokio::test]
async fn test_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_content(temp_dir.path(), LEGACY_TEMPLATE)?;
    fs::write(temp_dir.path().join("content/books.json"), "[]")?;
    fs::write(temp_dir.path().join("content/blog.json"), "[]")?;

    let config = config(BookSource::Local, "http://unused.invalid".to_string());
    let bytes = engine(temp_dir.path(), config).dry_run().await?;

    assert!(bytes > 0);
    assert!(!temp_dir.path().join("public/index.html").exists());
    Ok(())
}
