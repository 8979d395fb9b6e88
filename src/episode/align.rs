use super::types::{AlignmentReport, EpisodeScript, Scene, TranscriptFile};
use crate::alignment::{find_block_window, AlignedWindow, AlignmentConfig, TranscriptSegment};
use crate::errors::{ScenealignResult, ScriptError, TranscriptError};
use crate::subtitles::{render_srt, segment_window, SegmenterConfig, SubtitleCue};
use log::{debug, info, warn};

/// Idempotency guard: true when every scene already carries numeric timings,
/// in which case the caller should skip alignment for the episode.
pub fn has_complete_timings(scenes: &[Scene]) -> bool {
    !scenes.is_empty() && scenes.iter().all(Scene::has_timing)
}

/// Align every scene's narration against the episode transcript.
///
/// Pure transform: the scene records are not touched; the caller merges the
/// returned windows back with [`apply_windows`]. Scenes that match nothing
/// get `None` and are counted, never treated as an error.
pub fn align_scenes(
    scenes: &[Scene],
    segments: &[TranscriptSegment],
    config: &AlignmentConfig,
) -> AlignmentReport {
    info!(
        "Aligning {} scenes against {} transcript segments",
        scenes.len(),
        segments.len()
    );

    let mut windows = Vec::with_capacity(scenes.len());
    let mut unaligned = 0;

    for (index, scene) in scenes.iter().enumerate() {
        let window = find_block_window(&scene.narration, segments, config);
        if window.is_none() {
            unaligned += 1;
            debug!("Scene {} could not be aligned", index + 1);
        }
        windows.push(window);
    }

    if unaligned > 0 {
        warn!("{} scene(s) could not be aligned and were left unset", unaligned);
    }

    AlignmentReport { windows, unaligned }
}

/// Merge alignment results back into the caller's scene records. Windows and
/// scenes are matched by position; a missing window clears the timing so a
/// stale value never survives a re-run.
pub fn apply_windows(scenes: &mut [Scene], windows: &[Option<AlignedWindow>]) {
    for (scene, window) in scenes.iter_mut().zip(windows) {
        match window {
            Some(w) => {
                scene.start = Some(w.start);
                scene.end = Some(w.end);
            }
            None => {
                scene.start = None;
                scene.end = None;
            }
        }
    }
}

/// Build cues for every scene that carries a usable window and inline text,
/// ordered by scene ordinal. Scenes without timing contribute nothing.
pub fn cues_from_scenes(scenes: &[Scene], config: &SegmenterConfig) -> Vec<SubtitleCue> {
    let mut ordered: Vec<&Scene> = scenes.iter().collect();
    ordered.sort_by_key(|s| s.ordinal());

    let mut cues = Vec::new();
    for scene in ordered {
        let (Some(start), Some(end)) = (scene.start, scene.end) else {
            continue;
        };
        let window = AlignedWindow { start, end };
        cues.extend(segment_window(scene.subtitle_source(), window, config));
    }
    cues
}

/// Render one SRT document for an episode's timed scenes.
pub fn srt_from_scenes(scenes: &[Scene], config: &SegmenterConfig) -> String {
    render_srt(&cues_from_scenes(scenes, config))
}

/// Parse an episode script JSON document
pub fn parse_episode_script(json: &str) -> ScenealignResult<EpisodeScript> {
    serde_json::from_str(json)
        .map_err(|e| ScriptError::new(format!("invalid episode script: {}", e)).into())
}

/// Serialize an episode script back to pretty-printed JSON, the layout the
/// rest of the pipeline expects on disk
pub fn write_episode_script(script: &EpisodeScript) -> ScenealignResult<String> {
    serde_json::to_string_pretty(script)
        .map_err(|e| ScriptError::new(format!("could not serialize episode script: {}", e)).into())
}

/// Parse a transcript JSON document; segments with missing fields are kept
/// with zeroed values rather than rejected, ASR output is noisy
pub fn parse_transcript(json: &str) -> ScenealignResult<Vec<TranscriptSegment>> {
    let file: TranscriptFile = serde_json::from_str(json)
        .map_err(|e| TranscriptError::new(format!("invalid transcript: {}", e)))?;
    Ok(file.segments)
}
