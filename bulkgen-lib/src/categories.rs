//! Naming-convention heuristics: which kind of campaign a name describes,
//! which category fragments a column header carries, and how a campaign is
//! matched to its keyword column.

use std::collections::BTreeSet;

/// Suffixes marking a keyword column header, checked longest first
const KEYWORD_SUFFIXES: [&str; 4] = ["精准词", "广泛词", "精准", "广泛"];

/// Categories that exist regardless of what the headers mention
pub const BUILTIN_CATEGORIES: [&str; 6] = ["suzhu", "host", "宿主", "case", "包", "tape"];

/// Categories identifying a host campaign (extra negative keywords apply)
pub const HOST_CATEGORIES: [&str; 3] = ["suzhu", "host", "宿主"];

/// Keyword matching mode encoded in campaign names and column headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Broad,
    ProductTargeting,
}

impl MatchKind {
    /// Classify a campaign by its name. Returns `None` when the name follows
    /// no known convention; such campaigns are skipped with a warning.
    pub fn of_campaign(name: &str) -> Option<MatchKind> {
        let lower = name.to_lowercase();
        if lower.contains("精准") || lower.contains("exact") {
            Some(MatchKind::Exact)
        } else if lower.contains("广泛") || lower.contains("broad") {
            Some(MatchKind::Broad)
        } else if lower.contains("asin") {
            Some(MatchKind::ProductTargeting)
        } else {
            None
        }
    }

    /// Classify a keyword column by its header. Negative columns never hold
    /// positive keywords and classify as `None`.
    pub fn of_header(header: &str) -> Option<MatchKind> {
        let lower = header.to_lowercase();
        if lower.contains("否定") {
            return None;
        }
        if lower.contains("精准") {
            Some(MatchKind::Exact)
        } else if lower.contains("广泛") {
            Some(MatchKind::Broad)
        } else if lower.contains("asin") {
            Some(MatchKind::ProductTargeting)
        } else {
            None
        }
    }
}

fn push_fragments(text: &str, out: &mut BTreeSet<String>) {
    for part in text.split(|c: char| c.is_whitespace() || matches!(c, '/' | '-' | '_' | '.')) {
        let part = part.trim();
        // Single characters are too noisy to act as categories
        if part.chars().count() > 1 {
            out.insert(part.to_string());
        }
    }
}

fn header_fragments(header: &str, out: &mut BTreeSet<String>) {
    let lower = header.to_lowercase();
    if KEYWORD_SUFFIXES.iter().any(|s| lower.contains(s)) {
        for suffix in KEYWORD_SUFFIXES {
            if let Some(prefix) = lower.strip_suffix(suffix) {
                push_fragments(prefix, out);
                break;
            }
        }
    } else if lower.contains("asin") && !lower.contains("否定") {
        push_fragments(&lower.replace("asin", ""), out);
    }
}

/// Collect every category fragment mentioned by the survey headers, plus the
/// built-in set.
pub fn extract_categories(headers: &[String]) -> BTreeSet<String> {
    let mut categories = BTreeSet::new();
    for header in headers {
        header_fragments(header, &mut categories);
    }
    for builtin in BUILTIN_CATEGORIES {
        categories.insert(builtin.to_string());
    }
    categories
}

/// Category fragments of a single column header: its own prefix fragments
/// plus any built-in category the header mentions.
pub fn column_categories(header: &str) -> Vec<String> {
    let lower = header.to_lowercase();
    let mut categories = BTreeSet::new();
    header_fragments(header, &mut categories);
    for builtin in BUILTIN_CATEGORIES {
        if lower.contains(builtin) {
            categories.insert(builtin.to_string());
        }
    }
    categories.into_iter().collect()
}

/// Whether the campaign belongs to the host product line
pub fn is_host_campaign(name: &str) -> bool {
    let lower = name.to_lowercase();
    HOST_CATEGORIES.iter().any(|c| lower.contains(c))
}

/// Match a campaign to one of the candidate keyword columns.
///
/// A column qualifies when its header classifies as the campaign's kind and
/// shares a category fragment with the campaign name. When no fragment
/// matches, the first column of the right kind is used. Returns the column
/// index and the fragment that matched (if any).
pub fn match_column(
    campaign: &str,
    kind: MatchKind,
    headers: &[String],
    candidates: &[usize],
) -> Option<(usize, Option<String>)> {
    let campaign_lower = campaign.to_lowercase();

    for &idx in candidates {
        let header = match headers.get(idx) {
            Some(h) => h,
            None => continue,
        };
        if MatchKind::of_header(header) != Some(kind) {
            continue;
        }
        for category in column_categories(header) {
            if campaign_lower.contains(&category) {
                return Some((idx, Some(category)));
            }
        }
    }

    candidates
        .iter()
        .copied()
        .find(|&idx| {
            headers
                .get(idx)
                .is_some_and(|h| MatchKind::of_header(h) == Some(kind))
        })
        .map(|idx| (idx, None))
}
