use crate::core::template::Bindings;
use crate::domain::model::{BookSource, SiteContent};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn content_dir(&self) -> &str;
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn book_source(&self) -> BookSource;
    fn recent_limit(&self) -> usize;
    fn feed_user_id(&self) -> &str;
    fn feed_base_url(&self) -> &str;
}

/// The template together with the fragments to bind into it.
#[derive(Debug, Clone)]
pub struct RenderedSite {
    pub template: String,
    pub bindings: Bindings,
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SiteContent>;
    async fn transform(&self, content: SiteContent) -> Result<RenderedSite>;
    async fn load(&self, site: RenderedSite) -> Result<String>;
}
