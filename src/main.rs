//! Scene stream deriver
//!
//! Reads a scene record as returned by the media-library server, and prints
//! the direct and DASH transcoding playback streams for it as JSON.

use clap::Parser;
use std::io::{Read, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scene_streams::config::{Args, Config};
use scene_streams::config_file::ConfigFile;
use scene_streams::{get_streams, Result, Scene};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "scene-streams";

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let (config, load_error) = if args.config.exists() {
        match ConfigFile::from_file(&args.config) {
            Ok(cf) => (cf.into_config(), None),
            Err(e) => (Config::default(), Some(e)),
        }
    } else {
        (Config::default(), None)
    };
    let config = config.with_args(&args);
    config.validate()?;

    // Initialize logging
    init_logging(&config);

    tracing::debug!("{} v{} starting", APP_NAME, VERSION);
    if let Some(e) = load_error {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            args.config.display(),
            e
        );
    }
    tracing::debug!("Configuration loaded: {:?}", config);

    let stdout = std::io::stdout().lock();
    match &args.input {
        Some(path) if !args.reads_stdin() => {
            tracing::debug!("Reading scene from {}", path.display());
            run(&config, std::fs::File::open(path)?, stdout)
        }
        _ => {
            tracing::debug!("Reading scene from stdin");
            run(&config, std::io::stdin().lock(), stdout)
        }
    }
}

/// Read one scene from `input`, and write its streams as JSON to `out`.
fn run<R: Read, W: Write>(config: &Config, mut input: R, mut out: W) -> Result<()> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let scene = Scene::from_json(&data).map_err(|e| {
        tracing::error!("Invalid scene: {}", e);
        e
    })?;
    let streams = get_streams(&scene);
    tracing::info!(
        "Derived {} transcoding stream(s) for {}",
        streams.transcoding.len(),
        scene.direct_stream_url()
    );

    if config.pretty_output {
        serde_json::to_writer_pretty(&mut out, &streams)?;
    } else {
        serde_json::to_writer(&mut out, &streams)?;
    }
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

/// Initialize logging with tracing. Logs go to stderr, the result to stdout.
fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("scene_streams={}", config.log_level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
