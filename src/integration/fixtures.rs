//! Test fixtures for integration tests
//!
//! Scene payloads shaped like the media-library server's scene query result.

/// Test scene payload
#[derive(Debug, Clone)]
pub struct TestScene {
    pub name: &'static str,
    pub description: &'static str,
    pub json: &'static str,
}

impl TestScene {
    /// The full set of streams a server with DASH enabled reports.
    pub fn typical() -> Self {
        Self {
            name: "typical",
            description: "Direct, MP4, WebM, HLS and DASH entries at several resolutions",
            json: r#"{
                "files": [{"height": 1080}],
                "paths": {"stream": "http://stash:9999/scene/42/stream"},
                "sceneStreams": [
                    {"url": "http://stash:9999/scene/42/stream", "mime_type": "video/mp4", "label": "Direct stream"},
                    {"url": "http://stash:9999/scene/42/stream.mp4?resolution=STANDARD", "mime_type": "video/mp4", "label": "MP4 Standard (480p)"},
                    {"url": "http://stash:9999/scene/42/stream.webm?resolution=STANDARD_HD", "mime_type": "video/webm", "label": "WEBM HD (720p)"},
                    {"url": "http://stash:9999/scene/42/stream.m3u8", "mime_type": "application/vnd.apple.mpegurl", "label": "HLS"},
                    {"url": "http://stash:9999/scene/42/stream.mpd?resolution=STANDARD", "mime_type": "application/dash+xml", "label": "DASH Standard (480p)"},
                    {"url": "http://stash:9999/scene/42/stream.mpd", "mime_type": "application/dash+xml", "label": "DASH"},
                    {"url": "http://stash:9999/scene/42/stream.mpd?resolution=STANDARD_HD", "mime_type": "application/dash+xml", "label": "DASH HD (720p)"}
                ]
            }"#,
        }
    }

    /// Labels carrying explicit container tokens.
    pub fn tagged_containers() -> Self {
        Self {
            name: "tagged_containers",
            description: "DASH entries whose labels name a container in parentheses",
            json: r#"{
                "files": [{"height": 2160}, {"height": 1080}],
                "paths": {"stream": "http://stash/scene/7/stream"},
                "sceneStreams": [
                    {"url": "http://stash/scene/7/hls-dash.m3u8", "label": "(HLS) via DASH (720p)"},
                    {"url": "http://stash/scene/7/a.mpd", "label": "(1080p)(DASH)"},
                    {"url": "http://stash/scene/7/b.mpd", "mime_type": "application/dash+xml", "label": "(2160p)"},
                    {"url": "http://stash/scene/7/c.mpd", "mime_type": "application/dash+xml", "label": null}
                ]
            }"#,
        }
    }

    /// A scene without any transcoding entries.
    pub fn direct_only() -> Self {
        Self {
            name: "direct_only",
            description: "Only the direct stream is reported",
            json: r#"{
                "files": [{"height": 360}],
                "paths": {"stream": "http://stash/scene/3/stream"},
                "sceneStreams": [
                    {"url": "http://stash/scene/3/stream", "mime_type": "video/mp4", "label": "Direct stream"}
                ]
            }"#,
        }
    }

    /// A scene record with no files.
    pub fn no_files() -> Self {
        Self {
            name: "no_files",
            description: "Scene whose file list is empty",
            json: r#"{"files": [], "paths": {"stream": "http://stash/scene/9/stream"}, "sceneStreams": []}"#,
        }
    }

    /// All valid fixtures
    pub fn valid() -> Vec<Self> {
        vec![Self::typical(), Self::tagged_containers(), Self::direct_only()]
    }
}
