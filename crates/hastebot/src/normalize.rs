//! Flattening received segments into command text.

use signal_client::MessageSegment;

/// Concatenate text segments, turning line breaks into `'\n'`.
///
/// Segments without literal text contribute nothing.
pub fn normalize(segments: &[MessageSegment]) -> String {
    segments
        .iter()
        .fold(String::new(), |mut text, segment| {
            match segment {
                MessageSegment::Text(t) => text.push_str(t),
                MessageSegment::LineBreak => text.push('\n'),
                MessageSegment::Other => {}
            }
            text
        })
}
