//! Lenient pagination query parsing.

use serde::Deserialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Raw `page`/`limit` query parameters.
///
/// Values are parsed leniently: anything that is not a positive integer falls
/// back to the default instead of producing a client error. A typed numeric
/// extractor would reject `?page=abc` with a 400, which this API never does.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Pagination {
    page: Option<String>,
    limit: Option<String>,
}

impl Pagination {
    /// 1-indexed page, defaulting to 1.
    pub fn page(&self) -> u32 {
        parse_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    /// Page size, defaulting to 10.
    pub fn limit(&self) -> u32 {
        parse_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }
}

fn parse_or(raw: Option<&str>, default: u32) -> u32 {
    match raw.and_then(|s| s.parse::<u32>().ok()) {
        Some(n) if n > 0 => n,
        _ => default,
    }
}
