use super::types::{SegmenterConfig, SubtitleCue};
use crate::alignment::AlignedWindow;

/// Sentence terminators that end a cue-sized fragment
const TERMINATORS: [char; 4] = ['.', '!', '?', '\u{2026}'];

/// Text fragment together with the display time it wants
struct Fragment {
    text: String,
    need: f64,
}

/// Normalize line breaks, collapse whitespace, and split into sentence-like
/// units at terminator-then-whitespace boundaries. The terminator stays with
/// the preceding unit.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut units = Vec::new();
    let mut current = String::new();
    let mut chars = collapsed.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if TERMINATORS.contains(&c) && chars.peek() == Some(&' ') {
            chars.next(); // consume the separator
            units.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        units.push(current);
    }
    units
}

/// Split a unit longer than `max_chars` at the last whitespace boundary at or
/// before the cap, repeatedly. A run with no usable boundary is hard-split at
/// the cap so reading length stays bounded.
pub(crate) fn split_by_max_chars(sentence: &str, max_chars: usize) -> Vec<String> {
    if sentence.chars().count() <= max_chars {
        return vec![sentence.to_string()];
    }

    let mut parts = Vec::new();
    let mut cur: Vec<char> = sentence.trim().chars().collect();

    while cur.len() > max_chars {
        let mut idx = cur[..=max_chars]
            .iter()
            .rposition(|c| *c == ' ')
            .unwrap_or(0);
        if idx == 0 {
            idx = max_chars;
        }
        let head: String = cur[..idx].iter().collect();
        parts.push(head.trim().to_string());
        cur.drain(..idx);
        while cur.first() == Some(&' ') {
            cur.remove(0);
        }
    }
    if !cur.is_empty() {
        let tail: String = cur.iter().collect();
        parts.push(tail.trim().to_string());
    }
    parts
}

fn fragments_for(text: &str, config: &SegmenterConfig) -> Vec<Fragment> {
    split_sentences(text)
        .iter()
        .flat_map(|s| split_by_max_chars(s, config.max_chars))
        .filter(|s| !s.is_empty())
        .map(|s| {
            let chars = s.chars().count() as f64;
            let need = (chars / config.chars_per_sec)
                .min(config.max_duration)
                .max(config.min_duration);
            Fragment { text: s, need }
        })
        .collect()
}

/// Split narration text into cues packed inside `[window.start, window.end)`.
///
/// Needed durations are proportional to text length; when they exceed the
/// window, one compression factor scales them all, floored at
/// `min_duration`. Fragments that still cannot fit after the tail margin are
/// dropped, so a too-small window yields an empty list.
pub fn segment_window(
    text: &str,
    window: AlignedWindow,
    config: &SegmenterConfig,
) -> Vec<SubtitleCue> {
    let fragments = fragments_for(text, config);
    if fragments.is_empty() {
        return Vec::new();
    }

    let available = window.duration().max(0.001);
    let needed: f64 = fragments.iter().map(|f| f.need).sum();
    let factor = if needed > available && needed > 0.0 {
        available / needed
    } else {
        1.0
    };

    let limit = window.end - config.tail;
    let mut cues = Vec::new();
    let mut t = window.start + config.lead;

    for fragment in fragments {
        let mut duration = (fragment.need * factor).max(config.min_duration);
        if t + duration > limit {
            let room = limit - t;
            if room <= 0.0 {
                break;
            }
            duration = room;
        }
        cues.push(SubtitleCue {
            start: t,
            end: t + duration,
            text: fragment.text,
        });
        t += duration + config.gap;
    }

    cues
}
