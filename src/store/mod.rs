//! Data store abstraction.
//!
//! One contract, two interchangeable backends:
//! - [`memory::MemStorage`]: seeded with fixture data, for development/tests
//! - [`sqlite::SqliteStorage`]: persistent SQLite via SQLx
//!
//! The router only ever sees `Arc<dyn Storage>`, constructed once at startup.

pub mod fixtures;
pub mod memory;
mod models;
pub mod sqlite;

pub use models::{Contact, Initiative, NewContact, NewsArticle, ResearchPaper};

use async_trait::async_trait;
use thiserror::Error;

/// Storage errors.
///
/// The memory backend never produces these; the SQLite backend surfaces
/// connectivity and query failures here. The router maps every variant to a
/// generic 500 response with the detail logged server-side only.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Typed read/write operations over the four record kinds.
///
/// Pagination is 1-indexed; a page past the end yields an empty slice with
/// the correct total, never an error. Absent ids/slugs are `Ok(None)`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create a contact submission, assigning its id and creation timestamp.
    async fn create_contact(&self, input: NewContact) -> Result<Contact, StorageError>;

    /// All contact submissions, most recent first.
    async fn list_contacts(&self) -> Result<Vec<Contact>, StorageError>;

    /// One page of research papers, newest publication first, plus the
    /// unfiltered total.
    async fn list_research_papers(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<ResearchPaper>, u64), StorageError>;

    async fn get_research_paper(&self, id: &str) -> Result<Option<ResearchPaper>, StorageError>;

    /// Bump a paper's view counter by one. Unknown ids are silently ignored.
    async fn increment_research_paper_views(&self, id: &str) -> Result<(), StorageError>;

    /// One page of news articles, newest publication first, plus the
    /// unfiltered total.
    async fn list_news_articles(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<NewsArticle>, u64), StorageError>;

    async fn get_news_article(&self, id: &str) -> Result<Option<NewsArticle>, StorageError>;

    /// The full initiative catalog (small fixed set, unpaginated).
    async fn list_initiatives(&self) -> Result<Vec<Initiative>, StorageError>;

    /// Look up an initiative by its slug, not its id.
    async fn get_initiative(&self, slug: &str) -> Result<Option<Initiative>, StorageError>;
}

/// Row offset for a 1-indexed page. Shared by both backends.
pub(crate) fn page_offset(page: u32, per_page: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(per_page)
}
