//! Application preferences: theme, defaults, frame pacing.

use std::time::Instant;

use tracing::warn;

use super::{Scene, SceneAction, SceneContext, SceneId};
use crate::config::{Theme, DEFAULT_CONFIG_PATH};

/// How long status messages stay visible.
const STATUS_SECS: u64 = 5;

pub struct SettingsScene {
    status: Option<(String, Instant)>,
}

impl SettingsScene {
    pub fn new() -> Self {
        Self { status: None }
    }

    fn show_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }
}

impl Default for SettingsScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SettingsScene {
    fn ui(&mut self, ctx: &egui::Context, shared: &mut SceneContext<'_>) -> SceneAction {
        let palette = shared.config.theme.palette();
        let mut action = SceneAction::None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(palette.background))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    egui::Frame::group(ui.style())
                        .inner_margin(20.0)
                        .show(ui, |ui| {
                            ui.set_width(460.0);
                            ui.vertical_centered(|ui| {
                                ui.heading("Settings");
                            });
                            ui.separator();

                            ui.label(egui::RichText::new("Theme").strong());
                            let mut theme = shared.config.theme;
                            ui.horizontal(|ui| {
                                ui.selectable_value(&mut theme, Theme::Light, "Light");
                                ui.selectable_value(&mut theme, Theme::Dark, "Dark");
                            });
                            if theme != shared.config.theme {
                                shared.config.theme = theme;
                                ctx.set_visuals(theme.visuals());
                            }

                            ui.add_space(12.0);
                            ui.label(egui::RichText::new("Default Simulation Settings").strong());
                            ui.add(
                                egui::Slider::new(&mut shared.config.gravity, 1.0..=20.0)
                                    .text("Gravity (m/s\u{b2})"),
                            );
                            ui.add(
                                egui::Slider::new(&mut shared.config.fps_limit, 30..=120)
                                    .text("FPS Limit"),
                            );
                            ui.add(
                                egui::Slider::new(&mut shared.config.path_duration, 0.5..=10.0)
                                    .text("Path Duration (s)"),
                            );
                            ui.checkbox(&mut shared.config.show_wire, "Show pendulum wire");

                            ui.add_space(12.0);
                            ui.label(egui::RichText::new("About").strong());
                            ui.label(
                                "Double Pendulum Simulation\n\
                                 Version 1.0\n\n\
                                 Educational software for physics simulation.\n\
                                 Designed to stay responsive on low-end hardware.",
                            );

                            ui.add_space(16.0);
                            ui.horizontal(|ui| {
                                if ui.button("Save Settings").clicked() {
                                    match shared.config.save(DEFAULT_CONFIG_PATH) {
                                        Ok(()) => self.show_status("Settings saved"),
                                        Err(e) => {
                                            warn!("failed to save settings: {e}");
                                            self.show_status(format!("Save failed: {e}"));
                                        }
                                    }
                                }
                                if ui.button("Back").clicked() {
                                    action = SceneAction::Switch(SceneId::Home);
                                }
                            });

                            let expired = self
                                .status
                                .as_ref()
                                .is_some_and(|(_, since)| since.elapsed().as_secs() >= STATUS_SECS);
                            if expired {
                                self.status = None;
                            }
                            if let Some((message, _)) = &self.status {
                                ui.add_space(8.0);
                                ui.label(egui::RichText::new(message).weak());
                            }
                        });
                });
            });

        action
    }
}
