//! Main menu.

use super::{Scene, SceneAction, SceneContext, SceneId};

const BUTTON_SIZE: egui::Vec2 = egui::Vec2::new(250.0, 60.0);
const BUTTON_GAP: f32 = 20.0;

pub struct HomeScene;

impl HomeScene {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HomeScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for HomeScene {
    fn ui(&mut self, ctx: &egui::Context, shared: &mut SceneContext<'_>) -> SceneAction {
        let palette = shared.config.theme.palette();
        let mut action = SceneAction::None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(palette.background))
            .show(ctx, |ui| {
                let height = ui.available_height();
                ui.vertical_centered(|ui| {
                    ui.add_space(height * 0.22);
                    ui.label(
                        egui::RichText::new("Double Pendulum")
                            .size(64.0)
                            .strong()
                            .color(palette.text),
                    );
                    ui.label(
                        egui::RichText::new("A Physics Simulation")
                            .size(24.0)
                            .color(palette.text),
                    );
                    ui.add_space(40.0);

                    let menu_button = |text: &str| {
                        egui::Button::new(egui::RichText::new(text).size(20.0))
                            .min_size(BUTTON_SIZE)
                    };

                    if ui.add(menu_button("Start Simulation")).clicked() {
                        action = SceneAction::Switch(SceneId::Simulation);
                    }
                    ui.add_space(BUTTON_GAP);
                    if ui.add(menu_button("Settings")).clicked() {
                        action = SceneAction::Switch(SceneId::Settings);
                    }
                    ui.add_space(BUTTON_GAP);
                    if ui.add(menu_button("Information")).clicked() {
                        action = SceneAction::Switch(SceneId::Information);
                    }
                    ui.add_space(BUTTON_GAP);
                    if ui.add(menu_button("Exit")).clicked() {
                        action = SceneAction::Exit;
                    }
                });
            });

        action
    }
}
