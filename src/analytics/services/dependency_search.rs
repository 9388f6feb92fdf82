use crate::analytics::domain::ServiceDependency;
use serde::Serialize;

/// Fuzzy matches may spread over at most this many characters per query character
const MAX_FUZZY_SPREAD: usize = 3;

/// A dependency that survived the search, with its match quality
///
/// `score` ranges from 0.0 (best) to 1.0 and is `None` when no query was applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    pub item: &'a ServiceDependency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl<'a> SearchResult<'a> {
    pub fn unscored(item: &'a ServiceDependency) -> Self {
        Self { item, score: None }
    }
}

/// Searches source and target service names of each dependency
///
/// An empty query returns every item unscored, in input order.
pub fn search<'a>(items: &'a [ServiceDependency], query: &str) -> Vec<SearchResult<'a>> {
    DependencySearchIndex::new(items).search(query)
}

/// In-memory search index over a dependency list
///
/// Lowercased haystacks are computed once so repeated keystrokes only pay
/// for matching.
#[derive(Debug, Clone)]
pub struct DependencySearchIndex<'a> {
    entries: Vec<IndexEntry<'a>>,
}

#[derive(Debug, Clone)]
struct IndexEntry<'a> {
    item: &'a ServiceDependency,
    haystack: Vec<char>,
    haystack_text: String,
}

impl<'a> DependencySearchIndex<'a> {
    pub fn new(items: &'a [ServiceDependency]) -> Self {
        let entries = items
            .iter()
            .map(|item| {
                let haystack_text = format!(
                    "{} {}",
                    item.source_service_name, item.target_service_name
                )
                .to_lowercase();
                IndexEntry {
                    item,
                    haystack: haystack_text.chars().collect(),
                    haystack_text,
                }
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every indexed item, unscored, in input order
    pub fn all(&self) -> Vec<SearchResult<'a>> {
        self.entries
            .iter()
            .map(|entry| SearchResult::unscored(entry.item))
            .collect()
    }

    /// Ranked matches for `query`, best first
    ///
    /// Matching is case-insensitive. Substring hits always outrank fuzzy
    /// subsequence hits; ties keep input order.
    pub fn search(&self, query: &str) -> Vec<SearchResult<'a>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.all();
        }
        let needle_chars: Vec<char> = needle.chars().collect();

        let mut results: Vec<SearchResult<'a>> = self
            .entries
            .iter()
            .filter_map(|entry| {
                match_score(entry, &needle, &needle_chars).map(|score| SearchResult {
                    item: entry.item,
                    score: Some(score),
                })
            })
            .collect();

        results.sort_by(|a, b| {
            a.score
                .unwrap_or(1.0)
                .total_cmp(&b.score.unwrap_or(1.0))
        });
        results
    }
}

fn match_score(entry: &IndexEntry<'_>, needle: &str, needle_chars: &[char]) -> Option<f64> {
    if let Some(byte_pos) = entry.haystack_text.find(needle) {
        let position = entry.haystack_text[..byte_pos].chars().count();
        return Some(0.5 * position as f64 / entry.haystack.len() as f64);
    }

    let span = shortest_subsequence_span(&entry.haystack, needle_chars)?;
    if span > needle_chars.len() * MAX_FUZZY_SPREAD {
        return None;
    }
    Some(0.5 + 0.5 * (1.0 - needle_chars.len() as f64 / span as f64))
}

/// Length of the shortest window of `haystack` containing `needle` as a subsequence
fn shortest_subsequence_span(haystack: &[char], needle: &[char]) -> Option<usize> {
    let first = *needle.first()?;
    let mut best: Option<usize> = None;

    for start in (0..haystack.len()).filter(|&i| haystack[i] == first) {
        let mut matched = 1;
        let mut end = start;
        for (offset, &c) in haystack[start + 1..].iter().enumerate() {
            if matched == needle.len() {
                break;
            }
            if c == needle[matched] {
                matched += 1;
                end = start + 1 + offset;
            }
        }

        if matched == needle.len() {
            let span = end - start + 1;
            best = Some(best.map_or(span, |b| b.min(span)));
        }
    }

    best
}

/// Query state around a search index
///
/// Keeps the current query and its results together so callers can
/// re-render after each keystroke without recomputing anything else.
#[derive(Debug, Clone)]
pub struct DependencySearch<'a> {
    index: DependencySearchIndex<'a>,
    query: String,
    results: Vec<SearchResult<'a>>,
}

impl<'a> DependencySearch<'a> {
    pub fn new(dependencies: &'a [ServiceDependency]) -> Self {
        let index = DependencySearchIndex::new(dependencies);
        let results = index.all();
        Self {
            index,
            query: String::new(),
            results,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results = self.index.search(&self.query);
    }

    pub fn results(&self) -> &[SearchResult<'a>] {
        &self.results
    }

    pub fn into_results(self) -> Vec<SearchResult<'a>> {
        self.results
    }

    /// True while a non-empty query is filtering a non-empty list
    pub fn is_searching(&self) -> bool {
        self.has_active_search() && !self.index.is_empty()
    }

    pub fn has_active_search(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Resets the query and restores the full, unscored list
    pub fn clear_search(&mut self) {
        self.query.clear();
        self.results = self.index.all();
    }
}
