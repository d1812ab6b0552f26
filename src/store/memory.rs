//! In-memory store backend.
//!
//! Everything lives behind a single lock; operations cannot fail. This is the
//! development and test backend, constructed pre-seeded with fixture content.

use super::{
    Contact, Initiative, NewContact, NewsArticle, ResearchPaper, Storage, StorageError, fixtures,
    page_offset,
};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

/// In-memory store.
pub struct MemStorage {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    contacts: Vec<Contact>,
    papers: Vec<ResearchPaper>,
    articles: Vec<NewsArticle>,
    initiatives: Vec<Initiative>,
}

impl MemStorage {
    /// Empty store, no seed content.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Store pre-populated with the site's fixture content set.
    pub fn with_fixtures() -> Self {
        Self {
            inner: RwLock::new(Inner {
                contacts: Vec::new(),
                papers: fixtures::research_papers(),
                articles: fixtures::news_articles(),
                initiatives: fixtures::initiatives(),
            }),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Slice a date-descending-sorted set down to one page.
fn paginate<T>(sorted: Vec<T>, page: u32, per_page: u32) -> (Vec<T>, u64) {
    let total = sorted.len() as u64;
    let offset = page_offset(page, per_page) as usize;
    let slice = sorted
        .into_iter()
        .skip(offset)
        .take(per_page as usize)
        .collect();
    (slice, total)
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_contact(&self, input: NewContact) -> Result<Contact, StorageError> {
        let contact = Contact {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            message: input.message,
            created_at: Utc::now(),
        };
        self.inner.write().contacts.push(contact.clone());
        Ok(contact)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        let mut contacts = self.inner.read().contacts.clone();
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(contacts)
    }

    async fn list_research_papers(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<ResearchPaper>, u64), StorageError> {
        let mut papers = self.inner.read().papers.clone();
        papers.sort_by(|a, b| b.published_date.cmp(&a.published_date));
        Ok(paginate(papers, page, per_page))
    }

    async fn get_research_paper(&self, id: &str) -> Result<Option<ResearchPaper>, StorageError> {
        Ok(self.inner.read().papers.iter().find(|p| p.id == id).cloned())
    }

    async fn increment_research_paper_views(&self, id: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.write();
        if let Some(paper) = inner.papers.iter_mut().find(|p| p.id == id) {
            paper.views += 1;
        }
        Ok(())
    }

    async fn list_news_articles(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<NewsArticle>, u64), StorageError> {
        let mut articles = self.inner.read().articles.clone();
        articles.sort_by(|a, b| b.published_date.cmp(&a.published_date));
        Ok(paginate(articles, page, per_page))
    }

    async fn get_news_article(&self, id: &str) -> Result<Option<NewsArticle>, StorageError> {
        Ok(self
            .inner
            .read()
            .articles
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_initiatives(&self) -> Result<Vec<Initiative>, StorageError> {
        Ok(self.inner.read().initiatives.clone())
    }

    async fn get_initiative(&self, slug: &str) -> Result<Option<Initiative>, StorageError> {
        Ok(self
            .inner
            .read()
            .initiatives
            .iter()
            .find(|i| i.slug == slug)
            .cloned())
    }
}
