pub mod alignment;
pub use alignment::{find_block_window, AlignedWindow, AlignmentConfig, TranscriptSegment};

pub mod subtitles;
pub use subtitles::{format_timestamp, render_srt, segment_window, SegmenterConfig, SubtitleCue};

pub mod episode;
pub use episode::{
    align_scenes, apply_windows, has_complete_timings, srt_from_scenes, AlignmentReport,
    EpisodeScript, Scene,
};

pub mod errors;
pub use errors::{ScenealignError, ScenealignResult, ScriptError, TranscriptError};
