//! Playback stream derivation
//!
//! Turns a [`Scene`] into the list of streams a player can offer: one direct
//! stream for the original file, and DASH transcoding streams grouped by
//! container.

pub mod container;
pub mod label;

use std::collections::HashMap;

use serde::Serialize;

pub use container::Container;

use label::{is_dash, parse_container, parse_resolution, DIRECT_STREAM_LABEL};

use crate::scene::Scene;

/// A named group of playable sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stream {
    pub name: String,
    pub sources: Vec<Source>,
}

/// One playable URL at a given resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    /// Height in pixels.
    pub resolution: u64,
    pub url: String,
    /// Display label, e.g. "DASH-720p".
    pub label: String,
}

/// All streams for one scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneStreams {
    pub direct: Stream,
    pub transcoding: Vec<Stream>,
}

impl SceneStreams {
    /// Direct stream first, then the transcoding streams in name order.
    pub fn all(&self) -> impl Iterator<Item = &Stream> {
        std::iter::once(&self.direct).chain(self.transcoding.iter())
    }
}

/// Build the direct and transcoding streams for a scene.
pub fn get_streams(scene: &Scene) -> SceneStreams {
    SceneStreams {
        direct: get_direct_stream(scene),
        transcoding: get_transcoding_streams(scene),
    }
}

/// The stream playing the original file, at the first file's height.
pub fn get_direct_stream(scene: &Scene) -> Stream {
    let resolution = scene.primary_file().height;
    Stream {
        name: "direct".to_string(),
        sources: vec![Source {
            resolution,
            url: scene.direct_stream_url().to_string(),
            label: format!("Direct-{}p", resolution),
        }],
    }
}

/// The DASH streams offered by the upstream server, one per container.
///
/// Sources within a stream are ordered from highest to lowest resolution,
/// and streams are ordered by name. Entries that are not DASH, or that
/// duplicate the direct stream, are dropped.
pub fn get_transcoding_streams(scene: &Scene) -> Vec<Stream> {
    let mut by_container: HashMap<Option<Container>, Vec<Source>> = HashMap::new();

    for descriptor in scene.stream_descriptors() {
        let label = descriptor.label.as_deref().unwrap_or("");
        if label == DIRECT_STREAM_LABEL {
            tracing::debug!("Skipping direct stream duplicate: {}", descriptor.url);
            continue;
        }

        let resolution = parse_resolution(label).unwrap_or_else(|| {
            let height = scene.primary_file().height;
            tracing::debug!(
                "No resolution in label {:?}, using file height {}",
                label,
                height
            );
            height
        });

        let mime_type = descriptor.mime_type.as_deref().unwrap_or("");
        let mut container = parse_container(label);

        if !is_dash(label, mime_type) {
            tracing::debug!(
                "Skipping non-DASH stream {:?} ({}): {}",
                label,
                mime_type,
                descriptor.url
            );
            continue;
        }

        // Matched by mime type or a bare "DASH" in the label.
        if container.is_none() {
            container = Some(Container::Dash);
        }

        let source_label = match container {
            Some(c) => format!("{}-{}p", c, resolution),
            None => format!("{}p", resolution),
        };
        tracing::trace!("Accepted source {} -> {}", source_label, descriptor.url);

        by_container.entry(container).or_default().push(Source {
            resolution,
            url: descriptor.url.clone(),
            label: source_label,
        });
    }

    let mut streams: Vec<Stream> = by_container
        .into_iter()
        .map(|(container, mut sources)| {
            // Stable, so equal resolutions keep their input order.
            sources.sort_by(|a, b| b.resolution.cmp(&a.resolution));
            let name = match container {
                Some(c) => format!("transcoding ({})", c),
                None => "transcoding".to_string(),
            };
            Stream { name, sources }
        })
        .collect();

    streams.sort_by(|a, b| a.name.cmp(&b.name));
    streams
}
