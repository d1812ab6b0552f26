//! cordiad - Cordia website backend.
//!
//! A thin JSON API over a swappable data store: contact form submissions,
//! news articles, research papers, and the initiatives catalog.

pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod store;
