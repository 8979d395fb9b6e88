use proptest::prelude::*;
use scenealign::{find_block_window, AlignmentConfig, TranscriptSegment};

fn seg(start: f64, end: f64, text: &str) -> TranscriptSegment {
    TranscriptSegment {
        start,
        end,
        text: text.to_string(),
    }
}

#[test]
fn test_accepts_narration_spanning_two_segments() {
    let segments = vec![seg(0.0, 2.0, "the cat sat"), seg(2.0, 4.0, "on the mat today")];

    let window = find_block_window(
        "the cat sat on the mat",
        &segments,
        &AlignmentConfig::default(),
    )
    .expect("should align");

    assert_eq!(window.start, 0.0);
    assert_eq!(window.end, 4.0);
}

#[test]
fn test_rejects_unrelated_narration() {
    let segments = vec![seg(0.0, 2.0, "the cat sat"), seg(2.0, 4.0, "on the mat today")];

    assert!(find_block_window(
        "completely unrelated content here",
        &segments,
        &AlignmentConfig::default()
    )
    .is_none());
}

#[test]
fn test_picks_best_window_not_whole_transcript() {
    let segments = vec![
        seg(0.0, 3.0, "a long introduction about nothing in particular"),
        seg(3.0, 5.0, "the mountain stood silent"),
        seg(5.0, 8.0, "and then many other things happened after that moment"),
    ];

    let window = find_block_window(
        "the mountain stood silent",
        &segments,
        &AlignmentConfig::default(),
    )
    .expect("should align to the middle segment");
    assert_eq!(window.start, 3.0);
    assert_eq!(window.end, 5.0);
}

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "river", "stone", "wind", "cloud", "moon", "pine", "mist", "lake",
    ])
}

fn transcript() -> impl Strategy<Value = Vec<TranscriptSegment>> {
    prop::collection::vec(prop::collection::vec(word(), 1..5), 1..7).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, words)| seg(i as f64, (i + 1) as f64, &words.join(" ")))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_alignment_is_deterministic(
        narration in prop::collection::vec(word(), 0..12),
        segments in transcript(),
    ) {
        let narration = narration.join(" ");
        let config = AlignmentConfig::default();
        let first = find_block_window(&narration, &segments, &config);
        let second = find_block_window(&narration, &segments, &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_accepted_window_is_a_contiguous_span(
        narration in prop::collection::vec(word(), 1..12),
        segments in transcript(),
    ) {
        let narration = narration.join(" ");
        if let Some(w) = find_block_window(&narration, &segments, &AlignmentConfig::default()) {
            // Bounds must come from the first/last segment of one contiguous run
            let found = (0..segments.len()).any(|i| {
                (i..segments.len()).any(|j| {
                    segments[i].start == w.start && segments[j].end == w.end
                })
            });
            prop_assert!(found, "window {:?} does not map to a contiguous span", w);
            prop_assert!(w.end >= w.start);
        }
    }

    #[test]
    fn prop_unreachable_threshold_rejects_everything(
        narration in prop::collection::vec(word(), 0..12),
        segments in transcript(),
    ) {
        // Scores are capped at 1.0, so nothing can clear this bar
        let config = AlignmentConfig { acceptance_threshold: 1.0 };
        let narration = narration.join(" ");
        // A perfect score of exactly 1.0 still fails a strictly-greater check
        let result = find_block_window(&narration, &segments, &config);
        prop_assert!(result.is_none());
    }
}
