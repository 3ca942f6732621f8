use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Runs a [`Pipeline`] end to end. Output is only written by the final load
/// phase, so any failure before it leaves the previous output untouched.
pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Building site...");

        tracing::debug!("Loading content");
        let content = self.pipeline.extract().await?;

        tracing::debug!("Composing sections");
        let site = self.pipeline.transform(content).await?;

        tracing::debug!("Binding template");
        let output_path = self.pipeline.load(site).await?;

        tracing::info!(
            "Site built at {} in {} ms",
            output_path,
            started.elapsed().as_millis()
        );
        Ok(output_path)
    }

    /// Loads and composes everything but writes nothing. Returns the number of
    /// bytes the page would have.
    pub async fn dry_run(&self) -> Result<usize> {
        let content = self.pipeline.extract().await?;
        let site = self.pipeline.transform(content).await?;
        let html = crate::core::template::bind(&site.template, &site.bindings)?;
        tracing::info!("Dry run: {} sections, {} bytes", site.bindings.len(), html.len());
        Ok(html.len())
    }
}
