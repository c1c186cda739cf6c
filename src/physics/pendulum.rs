//! A single double pendulum: state, equations of motion, interaction.
//!
//! Angles are measured from the downward vertical in a y-down coordinate
//! system, so a bob at angle `a` on an arm of length `l` sits at
//! `pivot + l * (sin a, cos a)`. That convention makes angle 0 the resting
//! pose and keeps screen mapping trivial.

use glam::Vec2;

use super::params::PendulumParams;
use super::system::PendulumId;
use crate::trace::PathTracer;

/// Bob radius in pixels, for drawing and hit-testing.
pub const BOB_RADIUS: f32 = 10.0;

/// Which bob the user has grabbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    /// The bob at the end of the first arm.
    Inner,
    /// The bob at the end of the second arm.
    Outer,
}

/// State of one double pendulum.
#[derive(Clone, Debug)]
pub struct Pendulum {
    id: PendulumId,
    anchor: Vec2,
    length1: f32,
    length2: f32,
    mass1: f32,
    mass2: f32,
    angle1: f32,
    angle2: f32,
    vel1: f32,
    vel2: f32,
    initial_angle1: f32,
    initial_angle2: f32,
    show_wire: bool,
    dragging: Option<DragTarget>,
    tracer: PathTracer,
}

impl Pendulum {
    pub fn new(id: PendulumId, params: PendulumParams) -> Self {
        Self {
            id,
            anchor: params.anchor,
            length1: params.length1,
            length2: params.length2,
            mass1: params.mass1,
            mass2: params.mass2,
            angle1: params.angle1,
            angle2: params.angle2,
            vel1: params.velocity1,
            vel2: params.velocity2,
            initial_angle1: params.angle1,
            initial_angle2: params.angle2,
            show_wire: params.show_wire,
            dragging: None,
            tracer: PathTracer::new(params.path_color, params.path_duration),
        }
    }

    #[inline]
    pub fn id(&self) -> PendulumId {
        self.id
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    #[inline]
    pub fn angles(&self) -> (f32, f32) {
        (self.angle1, self.angle2)
    }

    #[inline]
    pub fn velocities(&self) -> (f32, f32) {
        (self.vel1, self.vel2)
    }

    #[inline]
    pub fn show_wire(&self) -> bool {
        self.show_wire
    }

    pub fn toggle_wire(&mut self) {
        self.show_wire = !self.show_wire;
    }

    #[inline]
    pub fn drag_target(&self) -> Option<DragTarget> {
        self.dragging
    }

    pub fn tracer(&self) -> &PathTracer {
        &self.tracer
    }

    pub fn tracer_mut(&mut self) -> &mut PathTracer {
        &mut self.tracer
    }

    /// Position of the inner bob in viewport pixels.
    pub fn inner_bob(&self) -> Vec2 {
        self.anchor + self.length1 * Vec2::new(self.angle1.sin(), self.angle1.cos())
    }

    /// Position of the outer bob in viewport pixels.
    pub fn outer_bob(&self) -> Vec2 {
        self.inner_bob() + self.length2 * Vec2::new(self.angle2.sin(), self.angle2.cos())
    }

    /// Restore the initial pose, drop all momentum and clear the trace.
    pub fn reset(&mut self) {
        self.angle1 = self.initial_angle1;
        self.angle2 = self.initial_angle2;
        self.vel1 = 0.0;
        self.vel2 = 0.0;
        self.tracer.clear();
    }

    /// Advance the pendulum by `dt` seconds under the given gravity.
    ///
    /// Velocities are integrated before angles (semi-implicit Euler). While
    /// a bob is being dragged the equations are suspended entirely; the user
    /// owns the state.
    pub fn step(&mut self, dt: f32, gravity: f32) {
        if self.dragging.is_some() {
            return;
        }

        let (acc1, acc2) = self.accelerations(gravity);
        self.vel1 += acc1 * dt;
        self.vel2 += acc2 * dt;
        self.angle1 += self.vel1 * dt;
        self.angle2 += self.vel2 * dt;

        let outer = self.outer_bob();
        self.tracer.push(outer, dt);
    }

    /// Angular accelerations from the Lagrangian equations of motion.
    fn accelerations(&self, gravity: f32) -> (f32, f32) {
        let (m1, m2) = (self.mass1, self.mass2);
        let (l1, l2) = (self.length1, self.length2);
        let (th1, th2) = (self.angle1, self.angle2);
        let (w1, w2) = (self.vel1, self.vel2);

        let sin12 = (th1 - th2).sin();
        let cos12 = (th1 - th2).cos();

        // Shared denominator; strictly positive for positive masses/lengths
        let den = l1 * (2.0 * m1 + m2 - m2 * (2.0 * (th1 - th2)).cos());

        let num1 = -gravity * (2.0 * m1 + m2) * th1.sin()
            - m2 * gravity * (th1 - 2.0 * th2).sin()
            - 2.0 * sin12 * m2 * (w2 * w2 * l2 + w1 * w1 * l1 * cos12);

        let num2 = 2.0
            * sin12
            * (w1 * w1 * l1 * (m1 + m2)
                + gravity * (m1 + m2) * th1.cos()
                + w2 * w2 * l2 * m2 * cos12);

        (num1 / den, num2 / (l2 * den))
    }

    /// Try to grab a bob at `point`. The outer bob wins when both overlap,
    /// since it is drawn on top. Returns whether a drag started.
    pub fn start_drag(&mut self, point: Vec2) -> bool {
        if point.distance(self.outer_bob()) <= BOB_RADIUS {
            self.dragging = Some(DragTarget::Outer);
            return true;
        }
        if point.distance(self.inner_bob()) <= BOB_RADIUS {
            self.dragging = Some(DragTarget::Inner);
            return true;
        }
        false
    }

    /// Move the grabbed bob toward `point`.
    ///
    /// The arm keeps its length; only the angle follows the pointer. Angular
    /// velocity is zeroed so releasing the bob starts it from rest.
    pub fn update_drag(&mut self, point: Vec2) {
        match self.dragging {
            Some(DragTarget::Inner) => {
                let d = point - self.anchor;
                self.angle1 = d.x.atan2(d.y);
                self.vel1 = 0.0;
            }
            Some(DragTarget::Outer) => {
                let d = point - self.inner_bob();
                self.angle2 = d.x.atan2(d.y);
                self.vel2 = 0.0;
            }
            None => {}
        }
    }

    /// Release the grabbed bob, letting physics take over again.
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn pendulum_at(angle1: f32, angle2: f32) -> Pendulum {
        let params = PendulumParams {
            anchor: Vec2::new(400.0, 100.0),
            angle1,
            angle2,
            ..PendulumParams::default()
        };
        Pendulum::new(0, params)
    }

    #[test]
    fn test_bob_positions_hanging_straight_down() {
        let p = pendulum_at(0.0, 0.0);
        assert!((p.inner_bob() - Vec2::new(400.0, 220.0)).length() < 1e-4);
        assert!((p.outer_bob() - Vec2::new(400.0, 340.0)).length() < 1e-4);
    }

    #[test]
    fn test_bob_positions_horizontal() {
        let p = pendulum_at(FRAC_PI_2, FRAC_PI_2);
        assert!((p.inner_bob() - Vec2::new(520.0, 100.0)).length() < 1e-3);
        assert!((p.outer_bob() - Vec2::new(640.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn test_equilibrium_is_stationary() {
        let mut p = pendulum_at(0.0, 0.0);
        for _ in 0..100 {
            p.step(1.0 / 240.0, 9.81);
        }
        let (a1, a2) = p.angles();
        assert!(a1.abs() < 1e-6);
        assert!(a2.abs() < 1e-6);
    }

    #[test]
    fn test_displaced_pendulum_accelerates_toward_rest() {
        let mut p = pendulum_at(0.5, 0.5);
        p.step(1.0 / 240.0, 9.81);
        let (w1, _) = p.velocities();
        // Gravity pulls the raised inner bob back toward vertical
        assert!(w1 < 0.0);
    }

    #[test]
    fn test_mirror_symmetry() {
        let mut a = pendulum_at(0.4, 0.7);
        let mut b = pendulum_at(-0.4, -0.7);
        for _ in 0..500 {
            a.step(1.0 / 240.0, 9.81);
            b.step(1.0 / 240.0, 9.81);
        }
        let (a1, a2) = a.angles();
        let (b1, b2) = b.angles();
        assert!((a1 + b1).abs() < 1e-3);
        assert!((a2 + b2).abs() < 1e-3);
    }

    #[test]
    fn test_step_is_deterministic() {
        let mut a = pendulum_at(0.9, 1.3);
        let mut b = pendulum_at(0.9, 1.3);
        for _ in 0..1000 {
            a.step(1.0 / 240.0, 9.81);
            b.step(1.0 / 240.0, 9.81);
        }
        assert_eq!(a.angles(), b.angles());
        assert_eq!(a.velocities(), b.velocities());
    }

    #[test]
    fn test_drag_suspends_physics() {
        let mut p = pendulum_at(0.5, 0.5);
        let outer = p.outer_bob();
        assert!(p.start_drag(outer));
        assert_eq!(p.drag_target(), Some(DragTarget::Outer));

        let before = p.angles();
        p.step(1.0 / 240.0, 9.81);
        assert_eq!(p.angles(), before);

        p.end_drag();
        p.step(1.0 / 240.0, 9.81);
        assert_ne!(p.angles(), before);
    }

    #[test]
    fn test_drag_outer_takes_precedence_over_inner() {
        // Fold the second arm back onto the inner bob so both overlap
        let params = PendulumParams {
            length2: 0.5,
            ..PendulumParams::default()
        };
        let mut p = Pendulum::new(0, params);
        let point = p.inner_bob();
        assert!(p.start_drag(point));
        assert_eq!(p.drag_target(), Some(DragTarget::Outer));
    }

    #[test]
    fn test_update_drag_follows_pointer_angle() {
        let mut p = pendulum_at(0.0, 0.0);
        assert!(p.start_drag(p.inner_bob()));

        // Pointer directly to the right of the anchor: angle pi/2
        p.update_drag(p.anchor() + Vec2::new(50.0, 0.0));
        let (a1, _) = p.angles();
        assert!((a1 - FRAC_PI_2).abs() < 1e-5);
        assert_eq!(p.velocities().0, 0.0);
    }

    #[test]
    fn test_drag_misses_empty_space() {
        let mut p = pendulum_at(0.0, 0.0);
        assert!(!p.start_drag(Vec2::new(0.0, 0.0)));
        assert_eq!(p.drag_target(), None);
    }

    #[test]
    fn test_reset_restores_initial_pose() {
        let mut p = pendulum_at(0.8, 1.1);
        for _ in 0..200 {
            p.step(1.0 / 240.0, 9.81);
        }
        assert!(!p.tracer().is_empty());

        p.reset();
        assert_eq!(p.angles(), (0.8, 1.1));
        assert_eq!(p.velocities(), (0.0, 0.0));
        assert!(p.tracer().is_empty());
    }

    #[test]
    fn test_step_records_trace() {
        let mut p = pendulum_at(0.5, 0.5);
        p.step(1.0 / 240.0, 9.81);
        assert_eq!(p.tracer().len(), 1);
        let point = p.tracer().points().next().unwrap();
        assert!((point.position - p.outer_bob()).length() < 1e-6);
    }
}
