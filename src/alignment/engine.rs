use super::scorer::{normalize_words, window_score};
use super::types::{AlignedWindow, AlignmentConfig, TranscriptSegment};
use log::debug;

/// Find the contiguous run of transcript segments that best matches one
/// narration block. Returns `None` when no window clears the acceptance
/// threshold, or when the narration normalizes to nothing.
pub fn find_block_window(
    narration: &str,
    segments: &[TranscriptSegment],
    config: &AlignmentConfig,
) -> Option<AlignedWindow> {
    let narration_words = normalize_words(narration);
    if narration_words.is_empty() {
        return None;
    }

    // Pre-normalize each segment once; the O(n^2) scan below reuses these.
    let segment_words: Vec<Vec<String>> = segments
        .iter()
        .map(|s| normalize_words(&s.text))
        .collect();

    let mut best_score = 0.0;
    let mut best: Option<AlignedWindow> = None;

    for i in 0..segments.len() {
        let mut candidate_words: Vec<String> = Vec::new();
        for j in i..segments.len() {
            candidate_words.extend(segment_words[j].iter().cloned());
            if candidate_words.is_empty() {
                continue;
            }

            let score = window_score(&narration_words, &candidate_words);
            // Strictly greater keeps the earliest window on ties
            if score > best_score {
                best_score = score;
                best = Some(AlignedWindow {
                    start: segments[i].start,
                    end: segments[j].end,
                });
            }
        }
    }

    if best_score > config.acceptance_threshold {
        debug!(
            "Best window scored {:.3}, accepted at {:?}",
            best_score, best
        );
        best
    } else {
        debug!("Best window scored {:.3}, below threshold", best_score);
        None
    }
}
