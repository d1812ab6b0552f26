//! SQLite store backend.
//!
//! Async SQLite access via SQLx with embedded migrations. Pool setup mirrors
//! what the site needs in production: WAL journal, foreign keys on, NORMAL
//! synchronous mode, and an integrity check at startup.

use super::{
    Contact, Initiative, NewContact, NewsArticle, ResearchPaper, Storage, StorageError, fixtures,
    page_offset,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

static MEMDB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistent store backed by a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Connection acquire timeout - prevents connection storms from blocking indefinitely.
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

    /// Maximum time a connection can remain idle before being closed.
    const IDLE_TIMEOUT: Duration = Duration::from_secs(60);

    /// Open (or create) the database at `path`, running migrations if needed.
    ///
    /// `":memory:"` opens a uniquely named shared-cache in-memory database so
    /// parallel tests do not collide.
    pub async fn new(path: &str) -> Result<Self, StorageError> {
        let pool = if path == ":memory:" {
            let id = MEMDB_COUNTER.fetch_add(1, Ordering::Relaxed);
            let memdb_uri = format!(
                "file:cordiad-memdb-{}-{}?mode=memory&cache=shared",
                std::process::id(),
                id
            );

            let options = SqliteConnectOptions::new()
                .filename(&memdb_uri)
                .shared_cache(true)
                .create_if_missing(true);

            SqlitePoolOptions::new()
                .max_connections(1)
                .acquire_timeout(Self::ACQUIRE_TIMEOUT)
                .idle_timeout(Some(Self::IDLE_TIMEOUT))
                .test_before_acquire(true)
                .connect_with(options)
                .await?
        } else {
            if let Some(parent) = Path::new(path).parent()
                && !parent.as_os_str().is_empty()
                && let Err(e) = std::fs::create_dir_all(parent)
            {
                tracing::warn!(path = %parent.display(), error = %e, "Failed to create database directory");
            }

            let options = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true);

            SqlitePoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Self::ACQUIRE_TIMEOUT)
                .idle_timeout(Some(Self::IDLE_TIMEOUT))
                .test_before_acquire(true)
                .connect_with(options)
                .await?
        };

        info!(path = %path, "Database connected");

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations checked/applied");

        // WAL allows reads while a write is in progress.
        sqlx::query("PRAGMA journal_mode=WAL").execute(&pool).await?;
        sqlx::query("PRAGMA foreign_keys=ON").execute(&pool).await?;
        sqlx::query("PRAGMA synchronous=NORMAL")
            .execute(&pool)
            .await?;

        // Catch silent corruption from crashes before serving anything.
        let integrity: String = sqlx::query_scalar("PRAGMA integrity_check")
            .fetch_one(&pool)
            .await?;
        if integrity != "ok" {
            tracing::error!(integrity_check = %integrity, "Database integrity check FAILED");
            return Err(StorageError::Database(sqlx::Error::Io(
                std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("database integrity check failed: {}", integrity),
                ),
            )));
        }

        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert the fixture content set when all content tables are empty.
    ///
    /// Returns whether anything was inserted. Contact submissions are never
    /// seeded; only the administratively populated content kinds are.
    pub async fn seed_if_empty(&self) -> Result<bool, StorageError> {
        let existing: i64 = sqlx::query_scalar(
            r#"
            SELECT (SELECT COUNT(*) FROM research_papers)
                 + (SELECT COUNT(*) FROM news_articles)
                 + (SELECT COUNT(*) FROM initiatives)
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        if existing > 0 {
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;

        for paper in fixtures::research_papers() {
            sqlx::query(
                r#"
                INSERT INTO research_papers
                    (id, title, description, content, published_date, views, downloads, author)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&paper.id)
            .bind(&paper.title)
            .bind(&paper.description)
            .bind(&paper.content)
            .bind(paper.published_date.timestamp())
            .bind(paper.views)
            .bind(paper.downloads)
            .bind(&paper.author)
            .execute(&mut *tx)
            .await?;
        }

        for article in fixtures::news_articles() {
            sqlx::query(
                r#"
                INSERT INTO news_articles
                    (id, title, content, excerpt, published_date, image_url)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&article.id)
            .bind(&article.title)
            .bind(&article.content)
            .bind(&article.excerpt)
            .bind(article.published_date.timestamp())
            .bind(&article.image_url)
            .execute(&mut *tx)
            .await?;
        }

        for initiative in fixtures::initiatives() {
            sqlx::query(
                r#"
                INSERT INTO initiatives
                    (id, slug, title, description, content, image_url, category)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&initiative.id)
            .bind(&initiative.slug)
            .bind(&initiative.title)
            .bind(&initiative.description)
            .bind(&initiative.content)
            .bind(&initiative.image_url)
            .bind(&initiative.category)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}

fn datetime(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

type PaperRow = (String, String, String, String, i64, i64, i64, String);

fn paper_from_row(
    (id, title, description, content, published, views, downloads, author): PaperRow,
) -> ResearchPaper {
    ResearchPaper {
        id,
        title,
        description,
        content,
        published_date: datetime(published),
        views,
        downloads,
        author,
    }
}

type ArticleRow = (String, String, String, String, i64, Option<String>);

fn article_from_row(
    (id, title, content, excerpt, published, image_url): ArticleRow,
) -> NewsArticle {
    NewsArticle {
        id,
        title,
        content,
        excerpt,
        published_date: datetime(published),
        image_url,
    }
}

type InitiativeRow = (String, String, String, String, String, Option<String>, String);

fn initiative_from_row(
    (id, slug, title, description, content, image_url, category): InitiativeRow,
) -> Initiative {
    Initiative {
        id,
        slug,
        title,
        description,
        content,
        image_url,
        category,
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn create_contact(&self, input: NewContact) -> Result<Contact, StorageError> {
        let contact = Contact {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            message: input.message,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO contacts (id, name, email, message, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&contact.id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.message)
        .bind(contact.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        let rows = sqlx::query_as::<_, (String, String, String, String, i64)>(
            r#"
            SELECT id, name, email, message, created_at
            FROM contacts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, email, message, created_at)| Contact {
                id,
                name,
                email,
                message,
                created_at: datetime(created_at),
            })
            .collect())
    }

    async fn list_research_papers(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<ResearchPaper>, u64), StorageError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM research_papers")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, PaperRow>(
            r#"
            SELECT id, title, description, content, published_date, views, downloads, author
            FROM research_papers
            ORDER BY published_date DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(per_page))
        .bind(page_offset(page, per_page) as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok((
            rows.into_iter().map(paper_from_row).collect(),
            total as u64,
        ))
    }

    async fn get_research_paper(&self, id: &str) -> Result<Option<ResearchPaper>, StorageError> {
        let row = sqlx::query_as::<_, PaperRow>(
            r#"
            SELECT id, title, description, content, published_date, views, downloads, author
            FROM research_papers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(paper_from_row))
    }

    async fn increment_research_paper_views(&self, id: &str) -> Result<(), StorageError> {
        // Single atomic update; concurrent increments cannot lose counts.
        // An unknown id affects zero rows and is not an error.
        sqlx::query("UPDATE research_papers SET views = views + 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_news_articles(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<NewsArticle>, u64), StorageError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news_articles")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, content, excerpt, published_date, image_url
            FROM news_articles
            ORDER BY published_date DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(per_page))
        .bind(page_offset(page, per_page) as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok((
            rows.into_iter().map(article_from_row).collect(),
            total as u64,
        ))
    }

    async fn get_news_article(&self, id: &str) -> Result<Option<NewsArticle>, StorageError> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, content, excerpt, published_date, image_url
            FROM news_articles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(article_from_row))
    }

    async fn list_initiatives(&self) -> Result<Vec<Initiative>, StorageError> {
        let rows = sqlx::query_as::<_, InitiativeRow>(
            r#"
            SELECT id, slug, title, description, content, image_url, category
            FROM initiatives
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(initiative_from_row).collect())
    }

    async fn get_initiative(&self, slug: &str) -> Result<Option<Initiative>, StorageError> {
        let row = sqlx::query_as::<_, InitiativeRow>(
            r#"
            SELECT id, slug, title, description, content, image_url, category
            FROM initiatives
            WHERE slug = ?
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(initiative_from_row))
    }
}
