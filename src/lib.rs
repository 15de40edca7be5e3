//! Scene stream derivation
//!
//! Shapes the stream metadata a media-library server reports for a scene
//! into playback options: a direct stream for the original file and DASH
//! transcoding streams grouped by container.

pub mod config;
pub mod config_file;
pub mod error;
pub mod scene;
pub mod stream;


pub use error::{Result, StreamError};
pub use scene::{Scene, SceneParts, ScenePaths, StreamDescriptor, VideoFile};
pub use stream::{
    get_direct_stream, get_streams, get_transcoding_streams, Container, SceneStreams, Source,
    Stream,
};
