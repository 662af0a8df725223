use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use nalgebra::Vector3;
use plotvr_core::Transform3D;
use plotvr_io::{Endpoint, FileSource, Loader, LoaderConfig};
use plotvr_navigation::{HeadTransform, NavigationConfig};
use plotvr_remote::{submit_message, CommandSender};
use plotvr_viewer::{RecordingBackend, RenderConfig, Session};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "plotvr",
    about = "Headless plotvr session driven by remote control commands"
)]
struct Args {
    /// Data endpoint, file:// URL or path to a data.json file
    #[arg(long)]
    endpoint: Option<String>,
    /// Frames to render before exiting
    #[arg(long, default_value_t = 120)]
    frames: u64,
    /// Milliseconds between frames
    #[arg(long, default_value_t = 16)]
    frame_interval_ms: u64,
    /// Read commands from this file, one per line, instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
    /// Head yaw per frame in radians
    #[arg(long, default_value_t = 0.0)]
    head_yaw_rate: f32,
    /// Render one centered view instead of two eyes
    #[arg(long)]
    mono: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let render_config = RenderConfig {
        stereo: !args.mono,
        ..RenderConfig::default()
    };
    let loader = Loader::new(Arc::new(FileSource::new()));
    let mut session = Session::new(NavigationConfig::default(), render_config, loader);

    if let Some(raw) = args.endpoint.as_deref() {
        let location = data_location(raw, &LoaderConfig::default())?;
        session.open(location)?;
    }

    spawn_listener(args.script.clone(), session.command_sender())?;

    let mut backend = RecordingBackend::new();
    let mut draws = 0usize;
    let interval = Duration::from_millis(args.frame_interval_ms);
    for frame in 0..args.frames {
        let yaw = args.head_yaw_rate * frame as f32;
        let head = HeadTransform::new(Transform3D::rotation(&Vector3::y(), yaw));
        let stats = session.frame(&mut backend, &head)?;
        draws += stats.cube_draws + stats.floor_draws;
        backend.clear_log();
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }

    let nav = session.navigation();
    info!(
        "rendered {} frames with {draws} draws; {} on screen; mode {:?}, walking={}, floor={}",
        session.frame_count(),
        session.scene().dataset(),
        nav.mode(),
        nav.is_walking(),
        nav.draws_floor()
    );
    info!("camera translation {:?}", nav.camera().translation_part());
    Ok(())
}

/// Paths that exist are read directly; anything else is normalized as an endpoint
fn data_location(raw: &str, config: &LoaderConfig) -> Result<String> {
    if Path::new(raw).exists() {
        return Ok(raw.to_string());
    }
    let endpoint = Endpoint::resolve(raw, config)
        .with_context(|| format!("cannot resolve endpoint {raw}"))?;
    if let Some(control) = endpoint.control_address() {
        info!("control channel at {control}");
    }
    Ok(endpoint.to_string())
}

fn spawn_listener(script: Option<PathBuf>, sender: CommandSender) -> Result<()> {
    let reader: Box<dyn BufRead + Send> = match &script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open script {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    thread::Builder::new()
        .name("plotvr-control".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let Ok(line) = line else { break };
                let message = line.trim();
                if message.is_empty() {
                    continue;
                }
                if !submit_message(&sender, message) {
                    debug!("control message {message:?} not queued");
                }
            }
        })
        .context("cannot start control listener")?;
    Ok(())
}
