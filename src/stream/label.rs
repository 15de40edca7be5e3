//! Parsing of the free-text labels the upstream server attaches to streams.
//!
//! Labels look like `DASH (720p)`, `(1080p)(DASH)` or `Direct stream`.

use super::container::Container;

/// MIME type of an MPEG-DASH manifest.
pub const DASH_MIME_TYPE: &str = "application/dash+xml";

/// Label of the upstream entry that mirrors the direct stream.
pub const DIRECT_STREAM_LABEL: &str = "Direct stream";

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// Find a resolution like `(720p)` in the label.
///
/// Returns None when there is no such group, or the digits do not fit.
pub fn parse_resolution(label: &str) -> Option<u64> {
    // ASCII digits only; `\d` would also match other scripts.
    let caps = regex!(r"\(([0-9]+)p\)").captures(label)?;
    caps[1].parse().ok()
}

/// Find an explicit container token like `(DASH)` in the label.
pub fn parse_container(label: &str) -> Option<Container> {
    let caps = regex!(r"\((MP4|WebM|HLS|DASH)\)").captures(label)?;
    Container::from_token(&caps[1])
}

/// Whether a stream is delivered as DASH, going by MIME type or label.
pub fn is_dash(label: &str, mime_type: &str) -> bool {
    mime_type == DASH_MIME_TYPE || label.to_uppercase().contains("DASH")
}
