mod engine;
mod scorer;
mod types;

pub use engine::find_block_window;
pub use types::{AlignedWindow, AlignmentConfig, TranscriptSegment};

// Exports for testing
pub use scorer::{jaccard_similarity, length_ratio, normalize_words, window_score};
