//! Application scenes and transitions between them.
//!
//! Each screen of the application is a [`Scene`]. The [`SceneManager`] owns
//! them all and dispatches the per-frame `ui` call to whichever is active;
//! scenes request transitions by returning a [`SceneAction`] instead of
//! reaching into the manager.

mod home;
mod information;
mod settings;
mod simulation;

pub use home::HomeScene;
pub use information::InformationScene;
pub use settings::SettingsScene;
pub use simulation::SimulationScene;

use std::collections::HashMap;

use tracing::{info, warn};

use crate::config::AppConfig;

/// Identifies a registered scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneId {
    Home,
    Simulation,
    Settings,
    Information,
}

/// What a scene wants to happen after its frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneAction {
    /// Keep showing this scene.
    None,
    /// Switch to another scene.
    Switch(SceneId),
    /// Close the application.
    Exit,
}

/// State shared across scenes for the duration of one frame.
pub struct SceneContext<'a> {
    pub config: &'a mut AppConfig,
    pub render_state: Option<&'a egui_wgpu::RenderState>,
}

/// One screen of the application.
pub trait Scene {
    /// Build this scene's UI for the frame and report the desired action.
    fn ui(&mut self, ctx: &egui::Context, shared: &mut SceneContext<'_>) -> SceneAction;

    /// Called when the scene becomes active.
    fn on_enter(&mut self, _shared: &mut SceneContext<'_>) {}

    /// Called when the scene is left.
    fn on_exit(&mut self) {}
}

/// Owns all scenes and tracks which one is active.
pub struct SceneManager {
    scenes: HashMap<SceneId, Box<dyn Scene>>,
    current: SceneId,
}

impl SceneManager {
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            current: SceneId::Home,
        }
    }

    pub fn register(&mut self, id: SceneId, scene: Box<dyn Scene>) {
        self.scenes.insert(id, scene);
    }

    pub fn current(&self) -> SceneId {
        self.current
    }

    /// Switch the active scene, running exit/enter hooks.
    /// Returns whether the target scene exists.
    pub fn switch(&mut self, id: SceneId, shared: &mut SceneContext<'_>) -> bool {
        if !self.scenes.contains_key(&id) {
            warn!(?id, "scene not registered");
            return false;
        }
        if let Some(scene) = self.scenes.get_mut(&self.current) {
            scene.on_exit();
        }
        info!(from = ?self.current, to = ?id, "scene change");
        self.current = id;
        if let Some(scene) = self.scenes.get_mut(&id) {
            scene.on_enter(shared);
        }
        true
    }

    /// Run the active scene's frame.
    pub fn ui(&mut self, ctx: &egui::Context, shared: &mut SceneContext<'_>) -> SceneAction {
        match self.scenes.get_mut(&self.current) {
            Some(scene) => scene.ui(ctx, shared),
            None => SceneAction::None,
        }
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Counters {
        entered: Rc<Cell<u32>>,
        exited: Rc<Cell<u32>>,
    }

    struct CountingScene {
        counters: Counters,
    }

    impl Scene for CountingScene {
        fn ui(&mut self, _ctx: &egui::Context, _shared: &mut SceneContext<'_>) -> SceneAction {
            SceneAction::None
        }

        fn on_enter(&mut self, _shared: &mut SceneContext<'_>) {
            self.counters.entered.set(self.counters.entered.get() + 1);
        }

        fn on_exit(&mut self) {
            self.counters.exited.set(self.counters.exited.get() + 1);
        }
    }

    #[test]
    fn test_switch_runs_exit_and_enter_hooks() {
        let home = Counters::default();
        let settings = Counters::default();

        let mut manager = SceneManager::new();
        manager.register(
            SceneId::Home,
            Box::new(CountingScene {
                counters: home.clone(),
            }),
        );
        manager.register(
            SceneId::Settings,
            Box::new(CountingScene {
                counters: settings.clone(),
            }),
        );

        let mut config = AppConfig::default();
        let mut shared = SceneContext {
            config: &mut config,
            render_state: None,
        };

        assert_eq!(manager.current(), SceneId::Home);
        assert!(manager.switch(SceneId::Settings, &mut shared));
        assert_eq!(manager.current(), SceneId::Settings);
        assert_eq!(home.exited.get(), 1);
        assert_eq!(settings.entered.get(), 1);
    }

    #[test]
    fn test_switch_to_unregistered_scene_is_rejected() {
        let home = Counters::default();
        let mut manager = SceneManager::new();
        manager.register(
            SceneId::Home,
            Box::new(CountingScene {
                counters: home.clone(),
            }),
        );

        let mut config = AppConfig::default();
        let mut shared = SceneContext {
            config: &mut config,
            render_state: None,
        };

        assert!(!manager.switch(SceneId::Information, &mut shared));
        assert_eq!(manager.current(), SceneId::Home);
        assert_eq!(home.exited.get(), 0);
    }
}
