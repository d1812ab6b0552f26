//! Domain records shared by both store backends.
//!
//! Fields serialize in camelCase to match the site client's wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact form submission. Append-only; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Input for contact creation; id and timestamp are server-assigned.
///
/// Fields default to empty strings so that missing JSON keys reach the
/// validator as empty values instead of being rejected by deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A published research paper with view/download counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchPaper {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub published_date: DateTime<Utc>,
    pub views: i64,
    pub downloads: i64,
    pub author: String,
}

/// A news article. Read-only via the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub published_date: DateTime<Utc>,
    pub image_url: Option<String>,
}

/// An initiative, addressable by its unique slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub image_url: Option<String>,
    pub category: String,
}
