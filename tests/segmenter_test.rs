use proptest::prelude::*;
use regex::Regex;
use scenealign::{render_srt, segment_window, AlignedWindow, SegmenterConfig};

fn window(start: f64, end: f64) -> AlignedWindow {
    AlignedWindow { start, end }
}

#[test]
fn test_overfull_window_compresses_and_stays_packed() {
    // ~200 chars want ~16.7s of display at 12 chars/sec, the window has 5
    let config = SegmenterConfig::default();
    let text = "In the stillness of the early morning the lake held the sky \
                without effort, and every ripple that crossed it carried the \
                light a little further toward the far pine shore.";
    let cues = segment_window(text, window(0.0, 5.0), &config);

    assert!(!cues.is_empty());
    let limit = 5.0 - config.tail;
    for (i, cue) in cues.iter().enumerate() {
        assert!(cue.start >= config.lead - 1e-9);
        assert!(cue.end <= limit + 1e-9);
        if i > 0 {
            assert!(cues[i - 1].end <= cue.start, "cues must not overlap");
        }
        // Only the final, clamped cue may dip under the floor
        if i + 1 < cues.len() {
            assert!(cue.end - cue.start >= config.min_duration - 1e-9);
        }
    }
}

#[test]
fn test_srt_timecode_shape() {
    let config = SegmenterConfig::default();
    let cues = segment_window(
        "One thing happened. Then another thing happened after it.",
        window(12.0, 30.0),
        &config,
    );
    let srt = render_srt(&cues);

    let timeline = Regex::new(
        r"^\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3}$",
    )
    .unwrap();

    let mut time_lines = 0;
    for line in srt.lines() {
        if line.contains("-->") {
            assert!(timeline.is_match(line), "malformed time line: {}", line);
            time_lines += 1;
        }
    }
    assert_eq!(time_lines, cues.len());
}

proptest! {
    #[test]
    fn prop_cues_are_contained_and_ordered(
        words in prop::collection::vec("[a-z]{1,10}", 0..60),
        length in 0.5f64..120.0,
    ) {
        let config = SegmenterConfig::default();
        let text = words.join(" ");
        let cues = segment_window(&text, window(0.0, length), &config);

        let limit = length - config.tail;
        let mut prev_end = f64::NEG_INFINITY;
        for cue in &cues {
            prop_assert!(cue.start >= config.lead - 1e-9);
            prop_assert!(cue.end <= limit + 1e-9);
            prop_assert!(cue.end > cue.start);
            prop_assert!(cue.start >= prev_end);
            prop_assert!(!cue.text.is_empty());
            prop_assert!(cue.text.chars().count() <= config.max_chars);
            prev_end = cue.end;
        }
    }

    #[test]
    fn prop_segmentation_is_deterministic(
        words in prop::collection::vec("[a-z]{1,10}", 0..40),
        length in 0.5f64..60.0,
    ) {
        let config = SegmenterConfig::default();
        let text = words.join(" ");
        let first = segment_window(&text, window(0.0, length), &config);
        let second = segment_window(&text, window(0.0, length), &config);
        prop_assert_eq!(first, second);
    }
}
