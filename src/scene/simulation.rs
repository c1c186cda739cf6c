//! The simulation scene: viewport, control panel and status bar.

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use glam::Vec2;

use super::{Scene, SceneAction, SceneContext, SceneId};
use crate::physics::PhysicsEngine;
use crate::render::SimulationView;
use crate::time::Time;

/// Width of the right-hand control panel in pixels.
const PANEL_WIDTH: f32 = 250.0;

pub struct SimulationScene {
    engine: PhysicsEngine,
    view: SimulationView,
    time: Time,
    /// Simulated seconds elapsed (scaled by simulation speed).
    sim_time: f32,
    show_grid: bool,
    viewport_size: Vec2,
    spawned_default: bool,
}

impl SimulationScene {
    pub fn new() -> Self {
        let mut engine = PhysicsEngine::new();
        // The demo pendulum starts with the outer arm raised to horizontal
        engine.defaults_mut().angle2 = FRAC_PI_2;

        Self {
            engine,
            view: SimulationView::new(),
            time: Time::new(),
            sim_time: 0.0,
            show_grid: true,
            viewport_size: Vec2::new(950.0, 800.0),
            spawned_default: false,
        }
    }

    fn spawn_anchor(&self) -> Vec2 {
        Vec2::new(self.viewport_size.x * 0.5, self.viewport_size.y / 3.0)
    }

    /// Copy the config-backed defaults into the spawn template.
    fn sync_defaults(&mut self, config: &crate::config::AppConfig) {
        let defaults = self.engine.defaults_mut();
        defaults.path_color = config.path_color;
        defaults.path_duration = config.path_duration;
        defaults.show_wire = config.show_wire;
    }
}

impl Default for SimulationScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SimulationScene {
    fn on_enter(&mut self, shared: &mut SceneContext<'_>) {
        let config = shared.config.clone();
        self.sync_defaults(&config);
        let system = self.engine.system_mut();
        system.set_gravity(config.gravity);
        system.set_time_scale(config.simulation_speed);

        if let Some(render_state) = shared.render_state {
            self.view.ensure_initialized(render_state);
        }
    }

    fn ui(&mut self, ctx: &egui::Context, shared: &mut SceneContext<'_>) -> SceneAction {
        let Some(render_state) = shared.render_state else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label("wgpu not available - the simulation requires a GPU");
                });
            });
            return SceneAction::None;
        };
        self.view.ensure_initialized(render_state);

        let palette = shared.config.theme.palette();
        let mut action = SceneAction::None;

        self.time.update();
        let dt = ctx.input(|i| i.stable_dt);
        self.engine.update(dt);
        if !self.engine.system().is_paused() {
            self.sim_time += dt.min(0.1) * self.engine.system().time_scale();
        }

        egui::SidePanel::right("controls")
            .exact_width(PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Simulation Controls");
                });
                ui.separator();

                let paused = self.engine.system().is_paused();
                let toggle_label = if !paused {
                    "Pause Simulation"
                } else if self.sim_time == 0.0 {
                    "Start Simulation"
                } else {
                    "Resume Simulation"
                };
                if ui
                    .add_sized([ui.available_width(), 32.0], egui::Button::new(toggle_label))
                    .clicked()
                {
                    self.engine.system_mut().toggle_paused();
                }
                if ui
                    .add_sized(
                        [ui.available_width(), 32.0],
                        egui::Button::new("Reset Simulation"),
                    )
                    .clicked()
                {
                    self.engine.system_mut().reset_all();
                    self.sim_time = 0.0;
                }

                ui.add_space(8.0);
                ui.add(
                    egui::Slider::new(&mut shared.config.simulation_speed, 0.1..=3.0)
                        .text("Speed")
                        .suffix("x"),
                );
                ui.add(
                    egui::Slider::new(&mut shared.config.gravity, 1.0..=20.0)
                        .text("Gravity")
                        .suffix(" m/s\u{b2}"),
                );

                ui.add_space(8.0);
                ui.separator();
                ui.label(egui::RichText::new("Pendulums").strong());

                if ui
                    .add_sized([ui.available_width(), 28.0], egui::Button::new("Add Pendulum"))
                    .clicked()
                {
                    let config = shared.config.clone();
                    self.sync_defaults(&config);
                    let anchor = self.spawn_anchor();
                    self.engine.add_randomized_pendulum(anchor);
                }

                let can_remove =
                    self.engine.system().len() > 1 && self.engine.system().selected().is_some();
                if ui
                    .add_enabled(
                        can_remove,
                        egui::Button::new("Remove Selected")
                            .min_size(egui::vec2(ui.available_width(), 28.0)),
                    )
                    .clicked()
                {
                    if let Some(id) = self.engine.system().selected() {
                        self.engine.system_mut().remove(id);
                    }
                }

                if ui
                    .add_sized([ui.available_width(), 28.0], egui::Button::new("Toggle Wire"))
                    .clicked()
                {
                    if let Some(pendulum) = self.engine.system_mut().selected_pendulum_mut() {
                        pendulum.toggle_wire();
                        shared.config.show_wire = pendulum.show_wire();
                    }
                }

                ui.add_space(8.0);
                ui.separator();
                ui.label(egui::RichText::new("Path Trace").strong());

                if ui
                    .add(
                        egui::Slider::new(&mut shared.config.path_duration, 0.5..=10.0)
                            .text("Duration")
                            .suffix(" s"),
                    )
                    .changed()
                {
                    self.engine
                        .system_mut()
                        .set_path_duration(shared.config.path_duration);
                }

                ui.horizontal(|ui| {
                    ui.label("Color:");
                    if ui
                        .color_edit_button_srgb(&mut shared.config.path_color)
                        .changed()
                    {
                        let color = shared.config.path_color;
                        if let Some(pendulum) = self.engine.system_mut().selected_pendulum_mut() {
                            pendulum.tracer_mut().set_color(color);
                        }
                    }
                });

                let mut rainbow = self
                    .engine
                    .system()
                    .selected()
                    .and_then(|id| self.engine.system().get(id))
                    .map(|p| p.tracer().rainbow())
                    .unwrap_or(false);
                if ui.checkbox(&mut rainbow, "Rainbow trail").changed() {
                    if let Some(pendulum) = self.engine.system_mut().selected_pendulum_mut() {
                        pendulum.tracer_mut().toggle_rainbow();
                    }
                }

                ui.checkbox(&mut self.show_grid, "Show grid");

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(10.0);
                    if ui
                        .add_sized([ui.available_width(), 32.0], egui::Button::new("Back to Menu"))
                        .clicked()
                    {
                        action = SceneAction::Switch(SceneId::Home);
                    }
                });
            });

        // Sliders write straight into the config; push the values through
        {
            let system = self.engine.system_mut();
            system.set_time_scale(shared.config.simulation_speed);
            system.set_gravity(shared.config.gravity);
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{:.0} FPS", self.time.fps()));
                ui.separator();
                ui.label(format!("t = {:.1} s", self.sim_time));
                ui.separator();
                ui.label(format!("{} pendulum(s)", self.engine.system().len()));
                if self.engine.system().is_paused() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new("paused").weak());
                    });
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(palette.background))
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                self.viewport_size = Vec2::new(rect.width(), rect.height());

                // The first frame knows the viewport size; spawn the demo
                // pendulum centered in it
                if !self.spawned_default && rect.width() > 1.0 {
                    let config = shared.config.clone();
                    self.sync_defaults(&config);
                    let anchor = self.spawn_anchor();
                    self.engine.add_pendulum(anchor);
                    self.spawned_default = true;
                }

                self.view
                    .show(ui, self.engine.system_mut(), &palette, self.show_grid);
            });

        // Keep animating, but no faster than the configured cap
        ctx.request_repaint_after(Duration::from_secs_f32(
            1.0 / shared.config.fps_limit.max(1) as f32,
        ));

        action
    }
}
