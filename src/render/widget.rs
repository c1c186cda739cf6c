//! egui widget hosting the simulation viewport.
//!
//! Allocates the central rect, routes pointer input into the pendulum
//! system (in viewport pixel coordinates), tessellates the scene and hands
//! it to the wgpu paint callback.

use glam::Vec2;

use super::geometry::GeometryBuffer;
use super::{ViewportCallback, ViewportResources};
use crate::config::Palette;
use crate::physics::{DragTarget, PendulumSystem, BOB_RADIUS};

/// Fill color of the inner bob.
const INNER_BOB_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
/// Fill color of the outer bob.
const OUTER_BOB_COLOR: egui::Color32 = egui::Color32::from_rgb(50, 50, 220);
/// Highlight while a bob is grabbed.
const GRABBED_BOB_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 255, 150);

const WIRE_WIDTH: f32 = 2.0;
const TRACE_WIDTH: f32 = 2.0;
const GRID_SPACING: f32 = 50.0;
const ANCHOR_RADIUS: f32 = 4.0;

fn rgba(color: egui::Color32, alpha: f32) -> [f32; 4] {
    [
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
        alpha,
    ]
}

/// Hosts the wgpu-painted simulation view inside an egui panel.
pub struct SimulationView {
    initialized: bool,
    scratch: GeometryBuffer,
}

impl SimulationView {
    pub fn new() -> Self {
        Self {
            initialized: false,
            scratch: GeometryBuffer::new(),
        }
    }

    /// Install the GPU resources into egui's callback resources.
    /// Call once when the wgpu render state is available.
    pub fn ensure_initialized(&mut self, render_state: &egui_wgpu::RenderState) {
        if self.initialized {
            return;
        }
        let resources = ViewportResources::new(&render_state.device, render_state.target_format);
        render_state
            .renderer
            .write()
            .callback_resources
            .insert(resources);
        self.initialized = true;
    }

    /// Lay out the viewport in `ui`, handle bob dragging and queue the
    /// paint callback.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        system: &mut PendulumSystem,
        palette: &Palette,
        show_grid: bool,
    ) {
        let rect = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        let to_sim = |pos: egui::Pos2| Vec2::new(pos.x - rect.left(), pos.y - rect.top());

        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                system.handle_press(to_sim(pos));
            }
        }
        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                system.handle_move(to_sim(pos));
            }
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            system.handle_release();
        }
        // A plain click (no drag) still selects the pendulum under the cursor
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if system.handle_press(to_sim(pos)) {
                    system.handle_release();
                }
            }
        }

        self.build_geometry(system, palette, rect.size(), show_grid);

        ui.painter().add(egui_wgpu::Callback::new_paint_callback(
            rect,
            ViewportCallback {
                vertices: self.scratch.take(),
                viewport_size: (rect.width(), rect.height()),
            },
        ));
    }

    fn build_geometry(
        &mut self,
        system: &PendulumSystem,
        palette: &Palette,
        size: egui::Vec2,
        show_grid: bool,
    ) {
        let geo = &mut self.scratch;
        geo.clear();

        if show_grid {
            geo.push_grid(
                Vec2::new(size.x, size.y),
                GRID_SPACING,
                rgba(palette.grid, 1.0),
            );
        }

        // Traces go under everything else
        let mut trace_points: Vec<(Vec2, [f32; 4])> = Vec::new();
        for pendulum in system.pendulums() {
            let tracer = pendulum.tracer();
            if tracer.len() < 2 {
                continue;
            }
            trace_points.clear();
            trace_points.extend(tracer.points().map(|p| {
                let [r, g, b] = p.color;
                (p.position, [r, g, b, p.alpha(tracer.duration())])
            }));
            geo.push_polyline(&trace_points, TRACE_WIDTH);
        }

        for pendulum in system.pendulums() {
            let anchor = pendulum.anchor();
            let inner = pendulum.inner_bob();
            let outer = pendulum.outer_bob();

            if pendulum.show_wire() {
                let wire = rgba(palette.pendulum_wire, 1.0);
                geo.push_line(anchor, inner, WIRE_WIDTH, wire);
                geo.push_line(inner, outer, WIRE_WIDTH, wire);
            }

            geo.push_circle(anchor, ANCHOR_RADIUS, rgba(palette.pendulum_bob, 1.0));

            let inner_color = if pendulum.drag_target() == Some(DragTarget::Inner) {
                GRABBED_BOB_COLOR
            } else {
                INNER_BOB_COLOR
            };
            let outer_color = if pendulum.drag_target() == Some(DragTarget::Outer) {
                GRABBED_BOB_COLOR
            } else {
                OUTER_BOB_COLOR
            };
            geo.push_circle(inner, BOB_RADIUS, rgba(inner_color, 1.0));
            geo.push_circle(outer, BOB_RADIUS, rgba(outer_color, 1.0));
        }
    }
}

impl Default for SimulationView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::physics::PendulumParams;
    use crate::render::CIRCLE_SEGMENTS;

    #[test]
    fn test_geometry_contains_all_parts() {
        let mut view = SimulationView::new();
        let mut system = PendulumSystem::new();
        system.create(PendulumParams::default());

        let palette = Theme::Dark.palette();
        view.build_geometry(&system, &palette, egui::vec2(800.0, 600.0), false);

        // Two wires + anchor dot + two bobs, no grid, no trace yet
        let expected = 2 * 6 + 3 * (CIRCLE_SEGMENTS as usize * 3);
        assert_eq!(view.scratch.len(), expected);
    }

    #[test]
    fn test_hidden_wire_drops_line_quads() {
        let mut view = SimulationView::new();
        let mut system = PendulumSystem::new();
        let params = PendulumParams {
            show_wire: false,
            ..PendulumParams::default()
        };
        system.create(params);

        let palette = Theme::Light.palette();
        view.build_geometry(&system, &palette, egui::vec2(800.0, 600.0), false);
        assert_eq!(view.scratch.len(), 3 * (CIRCLE_SEGMENTS as usize * 3));
    }

    #[test]
    fn test_grid_adds_geometry() {
        let mut view = SimulationView::new();
        let system = PendulumSystem::new();
        let palette = Theme::Light.palette();

        view.build_geometry(&system, &palette, egui::vec2(100.0, 100.0), false);
        let without = view.scratch.len();
        view.build_geometry(&system, &palette, egui::vec2(100.0, 100.0), true);
        assert!(view.scratch.len() > without);
    }
}
