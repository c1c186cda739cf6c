//! Fixed-timestep driver for the pendulum system.
//!
//! Frame times vary; the equations of motion should not care. The engine
//! accumulates wall-clock delta time and advances the system in fixed
//! increments, carrying any remainder into the next frame. This keeps the
//! integration deterministic for a given sequence of frame deltas.

use glam::Vec2;

use super::params::PendulumParams;
use super::system::{PendulumId, PendulumSystem};

/// Length of one physics step in seconds (240 Hz).
pub const PHYSICS_STEP: f32 = 1.0 / 240.0;

/// Largest frame delta fed into the accumulator. Anything longer (debugger
/// pause, window drag on some platforms) is truncated instead of producing
/// a burst of hundreds of steps.
const MAX_FRAME_DELTA: f32 = 0.1;

/// High-level facade over [`PendulumSystem`] that owns the step accumulator
/// and the template parameters used when spawning pendulums.
#[derive(Debug)]
pub struct PhysicsEngine {
    system: PendulumSystem,
    accumulator: f32,
    defaults: PendulumParams,
}

impl PhysicsEngine {
    pub fn new() -> Self {
        Self {
            system: PendulumSystem::new(),
            accumulator: 0.0,
            defaults: PendulumParams::default(),
        }
    }

    pub fn system(&self) -> &PendulumSystem {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut PendulumSystem {
        &mut self.system
    }

    /// Template used by [`add_pendulum`](Self::add_pendulum) and
    /// [`add_randomized_pendulum`](Self::add_randomized_pendulum).
    pub fn defaults_mut(&mut self) -> &mut PendulumParams {
        &mut self.defaults
    }

    /// Feed one frame's delta time and run as many fixed steps as fit.
    ///
    /// Returns the number of steps taken. While the system is paused the
    /// accumulator is drained so unpausing does not replay the idle time.
    pub fn update(&mut self, delta: f32) -> u32 {
        if self.system.is_paused() {
            self.accumulator = 0.0;
            return 0;
        }

        self.accumulator += delta.clamp(0.0, MAX_FRAME_DELTA);
        let mut steps = 0;
        while self.accumulator >= PHYSICS_STEP {
            self.system.update(PHYSICS_STEP);
            self.accumulator -= PHYSICS_STEP;
            steps += 1;
        }
        steps
    }

    /// Spawn a pendulum from the default template at the given anchor.
    pub fn add_pendulum(&mut self, anchor: Vec2) -> PendulumId {
        let mut params = self.defaults.clone();
        params.anchor = anchor;
        self.system.create(params)
    }

    /// Spawn a randomized variation of the default template.
    pub fn add_randomized_pendulum(&mut self, anchor: Vec2) -> PendulumId {
        let mut params = self.defaults.clone();
        params.anchor = anchor;
        params.randomize();
        self.system.create(params)
    }
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_engine() -> PhysicsEngine {
        let mut engine = PhysicsEngine::new();
        engine.add_pendulum(Vec2::new(400.0, 100.0));
        engine.system_mut().set_paused(false);
        engine
    }

    #[test]
    fn test_step_count_for_one_frame() {
        let mut engine = running_engine();
        // 0.1s at 240 Hz is 24 steps (allow one step of float slack)
        let steps = engine.update(0.1);
        assert!((23..=24).contains(&steps), "took {} steps", steps);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut engine = running_engine();
        // Half a step per frame: steps land on every other frame
        let half = PHYSICS_STEP / 2.0;
        assert_eq!(engine.update(half), 0);
        assert_eq!(engine.update(half), 1);
        assert_eq!(engine.update(half), 0);
        assert_eq!(engine.update(half), 1);
    }

    #[test]
    fn test_large_delta_is_clamped() {
        let mut engine = running_engine();
        // A 10s hiccup is truncated to MAX_FRAME_DELTA, not replayed
        let steps = engine.update(10.0);
        assert!(steps <= 24, "took {} steps", steps);
    }

    #[test]
    fn test_paused_engine_takes_no_steps_and_drains() {
        let mut engine = PhysicsEngine::new();
        engine.add_pendulum(Vec2::new(400.0, 100.0));
        assert_eq!(engine.update(1.0), 0);

        // Unpausing after idling must not replay the idle time
        engine.system_mut().set_paused(false);
        assert_eq!(engine.update(0.0), 0);
    }

    #[test]
    fn test_add_randomized_pendulum_uses_anchor() {
        let mut engine = PhysicsEngine::new();
        let anchor = Vec2::new(321.0, 123.0);
        let id = engine.add_randomized_pendulum(anchor);
        assert_eq!(engine.system().get(id).unwrap().anchor(), anchor);
    }

    #[test]
    fn test_defaults_template_feeds_new_pendulums() {
        let mut engine = PhysicsEngine::new();
        engine.defaults_mut().path_color = [1, 2, 3];
        engine.defaults_mut().show_wire = false;
        let id = engine.add_pendulum(Vec2::ZERO);
        assert!(!engine.system().get(id).unwrap().show_wire());
    }
}
