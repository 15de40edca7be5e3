//! Scene records as delivered by the upstream media-library service.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StreamError};

//
// First, the raw shape of the scene query result.
//
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SceneParts {
    /// Media files backing this scene. The first one is the primary file.
    #[serde(default)]
    pub files: Vec<VideoFile>,
    /// Server-side paths for this scene.
    #[serde(default)]
    pub paths: ScenePaths,
    /// Candidate streams offered by the upstream server.
    #[serde(default)]
    pub scene_streams: Vec<StreamDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VideoFile {
    /// Vertical resolution in pixels.
    pub height: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScenePaths {
    /// URL for playing the unmodified file.
    #[serde(default)]
    pub stream: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StreamDescriptor {
    pub url: String,
    // The upstream schema really does spell this one in snake case.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Free-text label, e.g. "DASH (720p)".
    #[serde(default)]
    pub label: Option<String>,
}

//
// Then the validated scene the deriver works on.
//

/// A scene with at least one file and a direct-stream URL.
#[derive(Debug, Clone)]
pub struct Scene {
    files: Vec<VideoFile>,
    direct_stream_url: String,
    stream_descriptors: Vec<StreamDescriptor>,
}

impl Scene {
    /// Decode and validate a scene from the upstream JSON payload.
    pub fn from_json(data: &[u8]) -> Result<Scene> {
        let parts: SceneParts = serde_json::from_slice(data)?;
        Scene::try_from(parts)
    }

    /// The first file. Its height is the scene's reference resolution.
    pub fn primary_file(&self) -> &VideoFile {
        &self.files[0]
    }

    pub fn files(&self) -> &[VideoFile] {
        &self.files
    }

    pub fn direct_stream_url(&self) -> &str {
        &self.direct_stream_url
    }

    pub fn stream_descriptors(&self) -> &[StreamDescriptor] {
        &self.stream_descriptors
    }
}

impl TryFrom<SceneParts> for Scene {
    type Error = StreamError;

    fn try_from(parts: SceneParts) -> Result<Scene> {
        if parts.files.is_empty() {
            return Err(StreamError::NoFiles);
        }
        let direct_stream_url = parts.paths.stream.ok_or(StreamError::MissingStreamUrl)?;
        Ok(Scene {
            files: parts.files,
            direct_stream_url,
            stream_descriptors: parts.scene_streams,
        })
    }
}
