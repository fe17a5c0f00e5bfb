//! Render helpers shared by the chat log and the error paths.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A citation as returned by the unified chat endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// A citation ready to display as a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLink {
    pub title: String,
    pub url: String,
}

/// Turn raw citations into display links.
///
/// Entries without a URL are dropped, repeated URLs keep their first
/// occurrence, and a blank title falls back to the URL.
pub fn source_links(sources: &[Source]) -> Vec<SourceLink> {
    let mut seen = HashSet::new();
    sources
        .iter()
        .filter_map(|s| {
            let url = s.url.trim();
            if url.is_empty() || !seen.insert(url.to_string()) {
                return None;
            }
            let title = match s.title.trim() {
                "" => url,
                t => t,
            };
            Some(SourceLink {
                title: title.to_string(),
                url: url.to_string(),
            })
        })
        .collect()
}

/// Render a key/value table as `key: value` lines.
pub fn table_lines<'a, I>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    rows.into_iter().map(|(k, v)| format!("{k}: {v}")).collect()
}
