//! Near-miss suggestions for county names that fell through to the default.
//!
//! Routing stays exact and case-sensitive; this module only helps explain a
//! fallback, e.g. `"sacramento"` or `"Sacremento"` both point at `"Sacramento"`.

use crate::routing::table::{Region, RoutingTable};

/// Maximum edit distance, relative to the longer name, still treated as a near miss.
const MAX_RELATIVE_DISTANCE: f64 = 0.34;

impl RoutingTable {
    /// Known counties closest to `query`, best first, at most `limit`.
    ///
    /// Comparison ignores case and collapses whitespace. A query that already
    /// routes exactly yields no suggestions.
    pub fn suggest_counties(&self, query: &str, limit: usize) -> Vec<String> {
        let trimmed = query.trim();
        if trimmed.is_empty() || self.region_of(trimmed).is_some() {
            return Vec::new();
        }

        let needle = normalize_name(trimmed);
        let mut scored: Vec<(usize, &str)> = Region::ALL
            .iter()
            .flat_map(|region| self.members(*region))
            .filter_map(|county| {
                let candidate = normalize_name(county);
                let distance = levenshtein_distance(&needle, &candidate);
                let max_len = needle.chars().count().max(candidate.chars().count());

                if max_len == 0 || distance as f64 / max_len as f64 > MAX_RELATIVE_DISTANCE {
                    return None;
                }
                Some((distance, county))
            })
            .collect();

        scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, county)| county.to_string())
            .collect()
    }
}

/// Lowercase and collapse internal whitespace.
fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two rolling rows are enough
    let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut current = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        current[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[s2_chars.len()]
}
