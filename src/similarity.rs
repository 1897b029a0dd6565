use std::collections::HashMap;

/// The candidate closest to a query
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    pub target: String,
    pub rating: f64,
}

/// Similarity of two strings in `[0, 1]`
///
/// Sørensen–Dice coefficient over character bigrams, ignoring whitespace.
/// Identical strings score 1; a string shorter than two characters scores 0
/// against anything but itself.
pub fn compare(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().filter(|c| !c.is_whitespace()).collect();
    let b: Vec<char> = b.chars().filter(|c| !c.is_whitespace()).collect();

    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
    for pair in a.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut shared = 0usize;
    for pair in b.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }

    (2 * shared) as f64 / (a.len() + b.len() - 2) as f64
}

/// Find the candidate most similar to `query`
///
/// Ties go to the earliest candidate. With no candidates the match is empty
/// with a rating of 0.
pub fn find_best_match<I, S>(query: &str, candidates: I) -> BestMatch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: Option<BestMatch> = None;
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let rating = compare(query, candidate);
        if best.as_ref().is_none_or(|current| rating > current.rating) {
            best = Some(BestMatch {
                target: candidate.to_string(),
                rating,
            });
        }
    }

    best.unwrap_or(BestMatch {
        target: String::new(),
        rating: 0.0,
    })
}
