use super::types::SubtitleCue;

/// Format a timestamp in SRT format
pub fn format_timestamp(seconds: f64) -> String {
    if seconds.is_nan() || seconds.is_infinite() || seconds < 0.0 {
        return "00:00:00,000".to_string();
    }

    let total_millis = (seconds * 1000.0) as u64;
    let millis = total_millis % 1000;
    let total_seconds = total_millis / 1000;
    let secs = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Render an ordered cue list as SRT text: `index`, `start --> end`, text,
/// blank-line separated, numbered from 1, no trailing newline.
pub fn render_srt(cues: &[SubtitleCue]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (i, cue) in cues.iter().enumerate() {
        lines.push((i + 1).to_string());
        lines.push(format!(
            "{} --> {}",
            format_timestamp(cue.start),
            format_timestamp(cue.end)
        ));
        lines.push(cue.text.clone());
        lines.push(String::new());
    }

    lines.join("\n").trim().to_string()
}
