mod segmenter;
mod types;
mod writer;

pub use segmenter::segment_window;
pub use types::{SegmenterConfig, SubtitleCue};
pub use writer::{format_timestamp, render_srt};
