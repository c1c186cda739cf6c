//! A collection of pendulums under shared simulation settings.

use glam::Vec2;
use tracing::debug;

use super::params::PendulumParams;
use super::pendulum::Pendulum;

/// Identifier for a pendulum within a [`PendulumSystem`].
///
/// Ids are unique for the lifetime of the system and never reused.
pub type PendulumId = u32;

/// Owns all pendulums plus the settings they share: gravity, time scale
/// and the paused flag. Mouse interaction is routed through here so the
/// topmost (most recently added) pendulum wins a contested grab.
#[derive(Debug)]
pub struct PendulumSystem {
    pendulums: Vec<Pendulum>,
    next_id: PendulumId,
    dragging: Option<PendulumId>,
    selected: Option<PendulumId>,
    gravity: f32,
    time_scale: f32,
    paused: bool,
}

impl PendulumSystem {
    /// Create an empty system. Simulation starts paused.
    pub fn new() -> Self {
        Self {
            pendulums: Vec::new(),
            next_id: 0,
            dragging: None,
            selected: None,
            gravity: 9.81,
            time_scale: 1.0,
            paused: true,
        }
    }

    /// Spawn a pendulum and return its id. The newest pendulum becomes the
    /// selected one.
    pub fn create(&mut self, params: PendulumParams) -> PendulumId {
        let id = self.next_id;
        self.next_id += 1;
        self.pendulums.push(Pendulum::new(id, params));
        self.selected = Some(id);
        debug!(id, total = self.pendulums.len(), "created pendulum");
        id
    }

    /// Remove a pendulum by id. Returns whether it existed.
    pub fn remove(&mut self, id: PendulumId) -> bool {
        let Some(index) = self.pendulums.iter().position(|p| p.id() == id) else {
            return false;
        };
        self.pendulums.remove(index);
        if self.dragging == Some(id) {
            self.dragging = None;
        }
        if self.selected == Some(id) {
            self.selected = self.pendulums.last().map(|p| p.id());
        }
        true
    }

    pub fn get(&self, id: PendulumId) -> Option<&Pendulum> {
        self.pendulums.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: PendulumId) -> Option<&mut Pendulum> {
        self.pendulums.iter_mut().find(|p| p.id() == id)
    }

    pub fn pendulums(&self) -> &[Pendulum] {
        &self.pendulums
    }

    pub fn pendulums_mut(&mut self) -> impl Iterator<Item = &mut Pendulum> {
        self.pendulums.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.pendulums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pendulums.is_empty()
    }

    /// The most recently created or grabbed pendulum, if any.
    pub fn selected(&self) -> Option<PendulumId> {
        self.selected
    }

    pub fn selected_pendulum_mut(&mut self) -> Option<&mut Pendulum> {
        let id = self.selected?;
        self.get_mut(id)
    }

    /// Advance every pendulum by `dt * time_scale`. No-op while paused.
    pub fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        let dt = dt * self.time_scale;
        for pendulum in &mut self.pendulums {
            pendulum.step(dt, self.gravity);
        }
    }

    /// Try to grab a bob. Pendulums are tested newest-first so whatever is
    /// drawn on top is what the user picks up. A successful grab also
    /// selects that pendulum.
    pub fn handle_press(&mut self, point: Vec2) -> bool {
        for pendulum in self.pendulums.iter_mut().rev() {
            if pendulum.start_drag(point) {
                self.dragging = Some(pendulum.id());
                self.selected = Some(pendulum.id());
                return true;
            }
        }
        false
    }

    /// Route pointer motion to the active drag, if any.
    pub fn handle_move(&mut self, point: Vec2) {
        if let Some(id) = self.dragging {
            if let Some(pendulum) = self.get_mut(id) {
                pendulum.update_drag(point);
            }
        }
    }

    /// Finish the active drag.
    pub fn handle_release(&mut self) {
        if let Some(id) = self.dragging.take() {
            if let Some(pendulum) = self.get_mut(id) {
                pendulum.end_drag();
            }
        }
    }

    /// Reset every pendulum to its initial pose.
    pub fn reset_all(&mut self) {
        for pendulum in &mut self.pendulums {
            pendulum.reset();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Apply a new trace duration to every pendulum.
    pub fn set_path_duration(&mut self, duration: f32) {
        for pendulum in &mut self.pendulums {
            pendulum.tracer_mut().set_duration(duration);
        }
    }
}

impl Default for PendulumSystem {
    fn default() -> Self {
        Self::new()
    }
}
