mod align;
mod types;

pub use align::{
    align_scenes, apply_windows, cues_from_scenes, has_complete_timings, parse_episode_script,
    parse_transcript, srt_from_scenes, write_episode_script,
};
pub use types::{AlignmentReport, EpisodeScript, Scene, TranscriptFile};
