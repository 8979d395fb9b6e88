use serde::Serialize;

/// Single timed subtitle display unit
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SubtitleCue {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Tuning knobs for cue splitting and duration packing
#[derive(Debug, Clone, Copy)]
pub struct SegmenterConfig {
    /// Longest cue text before it is split at a whitespace boundary
    pub max_chars: usize,
    /// Reading speed used to derive a cue's needed duration
    pub chars_per_sec: f64,
    pub min_duration: f64,
    pub max_duration: f64,
    /// Silence kept after the window start before the first cue
    pub lead: f64,
    /// Silence between consecutive cues
    pub gap: f64,
    /// Silence kept before the window end
    pub tail: f64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_chars: 84,
            chars_per_sec: 12.0,
            min_duration: 1.0,
            max_duration: 7.0,
            lead: 0.15,
            gap: 0.05,
            tail: 0.05,
        }
    }
}
