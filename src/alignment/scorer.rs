use std::collections::HashSet;

/// Punctuation stripped before word comparison, straight and curly variants
const STRIPPED: [char; 9] = ['.', ',', '\'', ':', '?', '"', '\u{201c}', '\u{201d}', '\u{2019}'];

/// Normalize text and split it into lowercase words
pub fn normalize_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered.chars().filter(|c| !STRIPPED.contains(c)).collect();
    cleaned.split_whitespace().map(|w| w.to_string()).collect()
}

/// Jaccard similarity of two word lists, duplicates collapsed
pub fn jaccard_similarity(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(|w| w.as_str()).collect();
    let set_b: HashSet<&str> = b.iter().map(|w| w.as_str()).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

/// Penalty for candidate windows much shorter or longer than the narration.
/// Sequence lengths, not set sizes: repeated words still count toward length.
pub fn length_ratio(a: &[String], b: &[String]) -> f64 {
    let (la, lb) = (a.len(), b.len());
    if la == 0 || lb == 0 {
        return 0.0;
    }
    la.min(lb) as f64 / la.max(lb) as f64
}

/// Combined window score: vocabulary overlap discounted by length mismatch
pub fn window_score(narration: &[String], candidate: &[String]) -> f64 {
    jaccard_similarity(narration, candidate) * length_ratio(narration, candidate)
}
