//! Multi-page aggregation for CourtListener list endpoints.
//!
//! List endpoints report the total number of matching items in `count` and
//! serve them [`PAGE_SIZE`] at a time, selected with the `page` query
//! parameter. A paginated fetch reads `count` from page 1, bounds the number
//! of pages by the caller's depth limit, and collects every page's `results`
//! into a [`PageResultSet`] keyed by the URL that served it.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Number of items the server returns per page.
pub const PAGE_SIZE: u64 = 20;

/// Page depth used when the caller does not choose one.
pub const DEFAULT_PAGE_DEPTH: u32 = 10;

/// Query parameter selecting a page.
pub const PAGE_PARAM: &str = "page";

/// Key under which the flattened form stores the server-reported count.
pub const COUNT_KEY: &str = "count";

/// Returns how many pages hold `count` items.
///
/// ```rust
/// use titanium_white::session::num_pages;
///
/// assert_eq!(num_pages(0), 0);
/// assert_eq!(num_pages(20), 1);
/// assert_eq!(num_pages(45), 3);
/// ```
#[must_use]
pub const fn num_pages(count: u64) -> u64 {
    count / PAGE_SIZE + if count % PAGE_SIZE == 0 { 0 } else { 1 }
}

/// Returns the last page index to fetch: `min(page_depth, num_pages(count))`.
#[must_use]
pub fn effective_depth(count: u64, page_depth: u32) -> u32 {
    let pages = u32::try_from(num_pages(count)).unwrap_or(u32::MAX);
    page_depth.min(pages)
}

/// The aggregated result of a paginated fetch.
///
/// Holds the server-reported item count and, for each fetched page, that
/// page's `results` keyed by the URL that served it. Entries are only ever
/// added.
///
/// The flattened form ([`PageResultSet::to_json`] or `Serialize`) is a single
/// JSON object with the `"count"` sentinel next to one key per page URL.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use titanium_white::session::PageResultSet;
///
/// let mut set = PageResultSet::new(1);
/// set.insert("https://example.com/api/people/", json!([{"id": 1}]));
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(
///     set.to_json(),
///     json!({"count": 1, "https://example.com/api/people/": [{"id": 1}]})
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageResultSet {
    count: u64,
    pages: BTreeMap<String, Value>,
}

impl PageResultSet {
    /// Creates an empty result set for a query matching `count` items.
    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self {
            count,
            pages: BTreeMap::new(),
        }
    }

    /// Records the results served by `url`.
    pub fn insert(&mut self, url: impl Into<String>, results: Value) {
        self.pages.insert(url.into(), results);
    }

    /// Returns the server-reported total item count.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Returns the fetched pages, keyed by URL.
    #[must_use]
    pub const fn pages(&self) -> &BTreeMap<String, Value> {
        &self.pages
    }

    /// Returns the results served by `url`, if that page was fetched.
    #[must_use]
    pub fn page(&self, url: &str) -> Option<&Value> {
        self.pages.get(url)
    }

    /// Returns the number of keys in the flattened form: one per page plus
    /// the `"count"` sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len() + 1
    }

    /// Always `false`; the `"count"` sentinel is always present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the keys of the flattened form, `"count"` first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(COUNT_KEY).chain(self.pages.keys().map(String::as_str))
    }

    /// Consumes the set and returns the pages.
    #[must_use]
    pub fn into_pages(self) -> BTreeMap<String, Value> {
        self.pages
    }

    /// Returns the flattened JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::with_capacity(self.len());
        map.insert(COUNT_KEY.to_string(), Value::from(self.count));
        for (url, results) in &self.pages {
            map.insert(url.clone(), results.clone());
        }
        Value::Object(map)
    }
}

impl Serialize for PageResultSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        map.serialize_entry(COUNT_KEY, &self.count)?;
        for (url, results) in &self.pages {
            map.serialize_entry(url, results)?;
        }
        map.end()
    }
}
