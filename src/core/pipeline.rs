use crate::core::compose;
use crate::core::loader::{ContentLoader, FeedConfig};
use crate::core::template::{self, Bindings, Placeholder};
use crate::core::{ConfigProvider, Pipeline, RenderedSite, SiteContent, Storage};
use crate::domain::model::{BookSource, Books, ReadingList};
use crate::utils::error::Result;

pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn loader(&self) -> ContentLoader<'_, S> {
        ContentLoader::new(
            &self.storage,
            self.config.content_dir(),
            FeedConfig {
                user_id: self.config.feed_user_id().to_string(),
                base_url: self.config.feed_base_url().to_string(),
            },
        )
    }

    fn bind_reading_list(&self, list: &ReadingList, bindings: &mut Bindings) {
        let recent_count = self.config.recent_limit().min(list.read.len());
        bindings.insert(
            Placeholder::NowReadingContent,
            compose::wrap_section(
                "now-reading",
                "Currently Reading",
                &compose::now_reading_html(&list.currently_reading),
            ),
        );
        bindings.insert(
            Placeholder::RecentlyReadContent,
            compose::recently_read_html(&list.read[..recent_count]),
        );
        bindings.insert(
            Placeholder::ReadGridContent,
            compose::wrap_section("read-grid", "All Read", &compose::read_grid_html(&list.read)),
        );
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<SiteContent> {
        let loader = self.loader();

        // Everything local is read before touching the network so that a
        // broken checkout fails fast.
        let template = loader.read_text(self.config.template_path()).await?;
        let home = loader.home().await?;
        let projects = loader.projects().await?;
        let resume = loader.resume().await?;
        let contact = loader.contact().await?;

        let books = match self.config.book_source() {
            BookSource::Local => Books::Local {
                books: loader.local_books().await?,
                blog: loader.blog().await?,
            },
            BookSource::Feed => Books::Feed(loader.reading_list().await),
        };

        tracing::debug!(
            "Loaded {} projects, {} experience entries, {} contact links",
            projects.len(),
            resume.experience.len(),
            contact.links.len()
        );

        Ok(SiteContent {
            template,
            home,
            projects,
            resume,
            contact,
            books,
        })
    }

    async fn transform(&self, content: SiteContent) -> Result<RenderedSite> {
        let mut bindings = Bindings::new();

        bindings.insert(Placeholder::HomeTitle, content.home.title);
        bindings.insert(Placeholder::HomeIntro, content.home.intro);
        bindings.insert(
            Placeholder::ProjectsContent,
            compose::projects_html(&content.projects),
        );
        bindings.insert(
            Placeholder::ResumeExperience,
            compose::experience_html(&content.resume.experience),
        );
        bindings.insert(
            Placeholder::ResumeEducation,
            compose::education_html(&content.resume.education),
        );
        bindings.insert(
            Placeholder::ResumeSkills,
            compose::skills_html(&content.resume.skills),
        );
        bindings.insert(
            Placeholder::ContactLinks,
            compose::contact_links_html(&content.contact),
        );
        bindings.insert(Placeholder::ContactIntro, content.contact.intro);

        match &content.books {
            Books::Feed(list) => self.bind_reading_list(list, &mut bindings),
            Books::Local { books, blog } => {
                bindings.insert(Placeholder::BooksContent, compose::local_books_html(books));
                bindings.insert(Placeholder::BlogContent, compose::blog_html(blog));
            }
        }

        tracing::debug!("Composed {} sections", bindings.len());
        Ok(RenderedSite {
            template: content.template,
            bindings,
        })
    }

    async fn load(&self, site: RenderedSite) -> Result<String> {
        let html = template::bind(&site.template, &site.bindings)?;

        let leftover = template::unresolved(&html);
        if !leftover.is_empty() {
            tracing::warn!(
                "Output still contains placeholders not used by this site variant: {:?}",
                leftover.iter().map(|p| p.name()).collect::<Vec<_>>()
            );
        }

        tracing::debug!("Writing {} bytes to {}", html.len(), self.config.output_path());
        self.storage
            .write_file(self.config.output_path(), html.as_bytes())
            .await?;

        Ok(self.config.output_path().to_string())
    }
}
