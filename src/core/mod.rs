pub mod compose;
pub mod engine;
pub mod feed;
pub mod loader;
pub mod pipeline;
pub mod template;

pub use crate::domain::model::SiteContent;
pub use crate::domain::ports::{ConfigProvider, Pipeline, RenderedSite, Storage};
pub use crate::utils::error::Result;
