//! Session wiring: render loop, loader and control listeners
//!
//! The session owns the navigation state and is the only thing that
//! mutates it. Control listeners hold a [`CommandSender`] and enqueue parsed
//! commands; [`Session::frame`] applies them at the start of each frame,
//! then picks up finished loads, then draws.

use crate::backend::GraphicsBackend;
use crate::config::RenderConfig;
use crate::renderer::{FrameRenderer, FrameStats};
use crate::scene::Scene;
use crate::trigger::{TriggerOutcome, TriggerState};
use log::{error, info, warn};
use plotvr_core::{MeshBuilder, Result};
use plotvr_io::{sample_dataset, Endpoint, Loader, LoaderConfig};
use plotvr_navigation::{HeadTransform, NavigationConfig, NavigationState, Relocation};
use plotvr_remote::{create_command_bus, drain_pending_commands, CommandReceiver, CommandSender, LoadRequest};
use rand::Rng;
use std::time::Instant;

/// Commands a listener may queue ahead of the render loop
pub const COMMAND_QUEUE_CAPACITY: usize = 64;

pub struct Session {
    nav: NavigationState,
    scene: Scene,
    renderer: FrameRenderer,
    loader: Loader,
    loader_config: LoaderConfig,
    trigger: TriggerState,
    commands: CommandReceiver,
    command_sender: CommandSender,
    data_location: Option<String>,
    frames: u64,
}

impl Session {
    /// Create a session showing the sample dataset
    pub fn new(nav_config: NavigationConfig, render_config: RenderConfig, loader: Loader) -> Self {
        let (command_sender, commands) = create_command_bus(COMMAND_QUEUE_CAPACITY);
        let mut scene = Scene::new(MeshBuilder::default());
        scene.set_dataset(sample_dataset());
        Self {
            nav: NavigationState::new(nav_config),
            scene,
            renderer: FrameRenderer::new(render_config),
            loader,
            loader_config: LoaderConfig::default(),
            trigger: TriggerState::new(),
            commands,
            command_sender,
            data_location: None,
            frames: 0,
        }
    }

    /// Use `config` to build the default endpoint
    pub fn with_loader_config(mut self, config: LoaderConfig) -> Self {
        self.loader_config = config;
        self
    }

    /// Point the session at a data location and start loading it
    pub fn open(&mut self, location: impl Into<String>) -> Result<u64> {
        let location = location.into();
        info!("opening {location}");
        self.data_location = Some(location.clone());
        self.loader.request(location)
    }

    /// Re-fetch the current location, or the default endpoint when none
    /// was opened
    pub fn refresh_data(&mut self) -> Result<u64> {
        let location = match &self.data_location {
            Some(location) => location.clone(),
            None => {
                let endpoint = Endpoint::default_for(&self.loader_config)?;
                info!("no data location; fetching {endpoint}");
                endpoint.to_string()
            }
        };
        self.loader.request(location)
    }

    /// A sender for a control listener
    pub fn command_sender(&self) -> CommandSender {
        self.command_sender.clone()
    }

    /// Run one frame: apply queued commands, apply a finished load, draw
    pub fn frame<B: GraphicsBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        head: &HeadTransform,
    ) -> Result<FrameStats> {
        for request in drain_pending_commands(&self.commands, &mut self.nav) {
            if let Err(err) = self.handle_load_request(request) {
                error!("cannot start {request:?}: {err}");
            }
        }

        if let Some(outcome) = self.loader.poll() {
            if outcome.fell_back {
                warn!("showing sample data in place of {}", outcome.location);
            }
            self.scene.set_dataset(outcome.dataset);
        }

        let stats = self
            .renderer
            .draw_frame(backend, &mut self.nav, head, &self.scene)?;
        self.frames += 1;
        Ok(stats)
    }

    fn handle_load_request(&mut self, request: LoadRequest) -> Result<()> {
        if request == LoadRequest::SessionReload {
            warn!("full session reload requested; refreshing data only");
        }
        self.refresh_data()?;
        Ok(())
    }

    /// Headset trigger press
    pub fn trigger(&mut self, now: Instant) -> TriggerOutcome {
        self.trigger.on_trigger(now, &mut self.nav)
    }

    /// Move the focus object somewhere new around the user
    pub fn relocate_focus<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Relocation {
        let relocation = self.nav.relocate_focus_object(rng);
        info!(
            "focus object moved to ({:.2}, {:.2}, {:.2})",
            relocation.position.x, relocation.position.y, relocation.position.z
        );
        relocation
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    pub fn data_location(&self) -> Option<&str> {
        self.data_location.as_deref()
    }

    /// Frames drawn so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
