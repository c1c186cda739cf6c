//! Top-level application controller.
//!
//! Owns the configuration and the scene manager, bridges eframe's update
//! callback to whichever scene is active, and persists settings when the
//! window closes.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::scene::{
    HomeScene, InformationScene, SceneAction, SceneContext, SceneId, SceneManager, SettingsScene,
    SimulationScene,
};

pub struct PendulumApp {
    config: AppConfig,
    config_path: PathBuf,
    scenes: SceneManager,
}

impl PendulumApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        let config = AppConfig::load(&config_path).unwrap_or_else(|e| {
            warn!("failed to load configuration, using defaults: {e}");
            AppConfig::default()
        });
        cc.egui_ctx.set_visuals(config.theme.visuals());

        let mut scenes = SceneManager::new();
        scenes.register(SceneId::Home, Box::new(HomeScene::new()));
        scenes.register(SceneId::Simulation, Box::new(SimulationScene::new()));
        scenes.register(SceneId::Settings, Box::new(SettingsScene::new()));
        scenes.register(SceneId::Information, Box::new(InformationScene::new()));
        info!("registered scenes, starting at home");

        Self {
            config,
            config_path,
            scenes,
        }
    }

    fn persist_config(&self) {
        match self.config.save(&self.config_path) {
            Ok(()) => info!("configuration saved"),
            Err(e) => warn!("failed to save configuration: {e}"),
        }
    }
}

impl eframe::App for PendulumApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let mut shared = SceneContext {
            config: &mut self.config,
            render_state: frame.wgpu_render_state(),
        };

        match self.scenes.ui(ctx, &mut shared) {
            SceneAction::None => {}
            SceneAction::Switch(id) => {
                self.scenes.switch(id, &mut shared);
            }
            SceneAction::Exit => {
                drop(shared);
                self.persist_config();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.persist_config();
        }
    }
}
