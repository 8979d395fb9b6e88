use serde::{Deserialize, Serialize};

/// Timestamped span of recognized speech produced by the external ASR process
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub text: String,
}

/// Time window a narration block was matched to, in seconds from episode start
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct AlignedWindow {
    pub start: f64,
    pub end: f64,
}

impl AlignedWindow {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Tuning knobs for the window search
#[derive(Debug, Clone, Copy)]
pub struct AlignmentConfig {
    /// Minimum Jaccard-times-length-ratio score to accept a window
    pub acceptance_threshold: f64,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            acceptance_threshold: 0.5,
        }
    }
}
