//! First-match keyword response selection.
//!
//! A [`ResponseTable`] is an ordered list of guard/response pairs plus a
//! dedicated fallback. The query is lower-cased and trimmed; entries are tried
//! in declaration order and the first entry with any keyword contained in the
//! query wins. There is no scoring: when keyword sets overlap, declaration
//! order decides.

use docent_core::entities::MockResponse;

/// One guard/response pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEntry {
    keywords: Vec<String>,
    response: MockResponse,
}

impl ResponseEntry {
    /// Keywords, already lower-cased.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub const fn response(&self) -> &MockResponse {
        &self.response
    }

    /// Whether any keyword is a substring of an already-normalized query.
    ///
    /// An entry without keywords never matches.
    fn matches(&self, normalized_query: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized_query.contains(keyword.as_str()))
    }
}

/// Ordered response table with an explicit fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    entries: Vec<ResponseEntry>,
    fallback: MockResponse,
}

impl ResponseTable {
    #[must_use]
    pub const fn new(fallback: MockResponse) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Append an entry. Keywords are lower-cased so matching is
    /// case-insensitive on both sides.
    #[must_use]
    pub fn entry<I, S>(mut self, keywords: I, response: MockResponse) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries.push(ResponseEntry {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            response,
        });
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[ResponseEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn fallback(&self) -> &MockResponse {
        &self.fallback
    }

    /// Index and response of the first matching entry, if any.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<(usize, &MockResponse)> {
        let normalized = normalize(query);
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.matches(&normalized))
            .map(|(index, entry)| (index, &entry.response))
    }

    /// The first matching response, or the fallback. Never fails.
    #[must_use]
    pub fn resolve(&self, query: &str) -> &MockResponse {
        match self.find(query) {
            Some((index, response)) => {
                tracing::debug!(entry = index, "matched response entry");
                response
            }
            None => {
                tracing::debug!("no entry matched; using fallback");
                &self.fallback
            }
        }
    }
}

/// Select a response for `query` from `table`.
#[must_use]
pub fn match_response<'a>(query: &str, table: &'a ResponseTable) -> &'a MockResponse {
    table.resolve(query)
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
