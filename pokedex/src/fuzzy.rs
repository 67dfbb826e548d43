//! Approximate name matching.

/// A possibility that is similar enough to the requested word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// Position of the possibility in the input sequence.
    pub index: usize,
    /// Similarity ratio between 0 and 1, where 1 is an exact match.
    pub score: f64,
}

/// Similarity ratio between two names.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Finds the possibilities closest to `word`.
///
/// Only possibilities with a similarity of at least `cutoff` are considered. At most `limit`
/// matches are returned, best first. Ties keep the order the possibilities were given in.
pub fn closest_matches<'a, I>(word: &str, possibilities: I, limit: usize, cutoff: f64) -> Vec<Match>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut matches = possibilities
        .into_iter()
        .enumerate()
        .map(|(index, possibility)| Match {
            index,
            score: similarity(word, possibility),
        })
        .filter(|m| m.score >= cutoff)
        .collect::<Vec<_>>();
    // Stable, so equal scores stay in input order.
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(limit);
    matches
}
