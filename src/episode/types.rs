use crate::alignment::TranscriptSegment;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One scene record from an episode script. The pipeline owns these files,
/// so fields this library does not understand are carried through untouched.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Scene {
    #[serde(default)]
    pub narration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Scene {
    /// Scene ordinal used to order cues in the rendered subtitle file.
    /// Falls back to 0 when absent, matching the source pipeline.
    pub fn ordinal(&self) -> i64 {
        self.extra
            .get("scene")
            .and_then(Value::as_i64)
            .unwrap_or(0)
    }

    pub fn has_timing(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Text rendered as subtitles: an inline `text` field when the pipeline
    /// provides one, otherwise the narration itself.
    pub fn subtitle_source(&self) -> &str {
        self.extra
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or(&self.narration)
    }
}

/// Episode script file: the scene list plus whatever else the pipeline keeps
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EpisodeScript {
    #[serde(default)]
    pub scenes: Vec<Scene>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Transcript file emitted by the external ASR process
#[derive(Deserialize, Debug, Clone)]
pub struct TranscriptFile {
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

/// Outcome of aligning one episode's scenes against its transcript
#[derive(Debug, Clone)]
pub struct AlignmentReport {
    /// Per-scene window, in scene order; `None` marks an unaligned scene
    pub windows: Vec<Option<crate::alignment::AlignedWindow>>,
    /// Number of scenes that found no acceptable window
    pub unaligned: usize,
}
