//! Page-number pagination over SeaORM paginators.
//!
//! Page resolution mirrors the classic `get_page` contract: a missing or
//! non-numeric page yields the first page, an out-of-range page (including
//! zero and negatives) yields the last one, and an empty result set still
//! reports a single empty page.

use sea_orm::{ConnectionTrait, DbErr, ItemsAndPagesNumber, Paginator, SelectorTrait};
use serde::{Deserialize, Serialize};

/// `?page=` query parameter, kept raw so junk values degrade to page 1.
///
/// Read from the raw key/value pairs so repeated or unknown keys never
/// reject the request; the last `page` wins.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct PageQuery {
    pub page: Option<String>,
}

impl From<Vec<(String, String)>> for PageQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let page = pairs.into_iter().filter(|(k, _)| k == "page").map(|(_, v)| v).last();
        Self { page }
    }
}

/// Paginated response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub num_pages: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn with_items<U>(self, items: Vec<U>) -> Page<U> {
        Page { items, num_pages: self.num_pages, total: self.total }
    }
}

/// Resolve a raw 1-based page number into a 0-based page index.
pub fn page_index(raw: Option<&str>, num_pages: u64) -> u64 {
    let last = num_pages.max(1);
    let Some(raw) = raw.map(str::trim) else { return 0 };
    match raw.parse::<i64>() {
        Ok(n) if n < 1 || n as u64 > last => last - 1,
        Ok(n) => n as u64 - 1,
        // an integer too wide for i64 is still out of range
        Err(_) if is_integer(raw) => last - 1,
        Err(_) => 0,
    }
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Count the result set and fetch the requested page.
pub async fn fetch<'db, C, S>(paginator: &Paginator<'db, C, S>, raw_page: Option<&str>) -> Result<Page<S::Item>, DbErr>
where
    C: ConnectionTrait,
    S: SelectorTrait + 'db,
{
    let ItemsAndPagesNumber { number_of_items, number_of_pages } = paginator.num_items_and_pages().await?;
    let num_pages = number_of_pages.max(1);
    let items = paginator.fetch_page(page_index(raw_page, num_pages)).await?;
    Ok(Page { items, num_pages, total: number_of_items })
}
