//! Path tracing for pendulum bobs.
//!
//! Each pendulum owns a [`PathTracer`] that records where its outer bob has
//! been. Points age as the simulation advances and are dropped once they
//! outlive the configured duration; the renderer fades them out linearly so
//! the tail dissolves instead of being clipped.

use std::collections::VecDeque;

use glam::Vec2;

/// Hard cap on stored points, independent of the duration setting.
pub const MAX_TRACE_POINTS: usize = 1000;

/// Hue advance per appended point in rainbow mode (fraction of a full turn).
const HUE_STEP: f32 = 0.01;

/// One recorded bob position.
#[derive(Clone, Copy, Debug)]
pub struct TracePoint {
    /// Position in viewport pixels.
    pub position: Vec2,
    /// Linear RGB color the point was recorded with.
    pub color: [f32; 3],
    /// Seconds since the point was recorded.
    pub age: f32,
}

impl TracePoint {
    /// Opacity of this point for a trace of the given duration: 1.0 when
    /// fresh, fading linearly to 0.0 at expiry.
    pub fn alpha(&self, duration: f32) -> f32 {
        if duration <= f32::EPSILON {
            return 0.0;
        }
        (1.0 - self.age / duration).clamp(0.0, 1.0)
    }
}

/// Records and ages the path of a single bob.
#[derive(Clone, Debug)]
pub struct PathTracer {
    points: VecDeque<TracePoint>,
    enabled: bool,
    color: [u8; 3],
    duration: f32,
    rainbow: bool,
    hue: f32,
}

impl PathTracer {
    pub fn new(color: [u8; 3], duration: f32) -> Self {
        Self {
            points: VecDeque::with_capacity(MAX_TRACE_POINTS),
            enabled: true,
            color,
            duration,
            rainbow: false,
            hue: 0.0,
        }
    }

    /// Age existing points by `dt` and append a new one.
    ///
    /// Points past the duration are dropped from the tail, and the total is
    /// capped at [`MAX_TRACE_POINTS`]. Does nothing while disabled.
    pub fn push(&mut self, position: Vec2, dt: f32) {
        if !self.enabled {
            return;
        }

        for point in &mut self.points {
            point.age += dt;
        }
        while self
            .points
            .front()
            .is_some_and(|p| p.age >= self.duration)
        {
            self.points.pop_front();
        }

        let color = if self.rainbow {
            let rgb = hsv_to_rgb(self.hue, 1.0, 1.0);
            self.hue = (self.hue + HUE_STEP) % 1.0;
            rgb
        } else {
            [
                self.color[0] as f32 / 255.0,
                self.color[1] as f32 / 255.0,
                self.color[2] as f32 / 255.0,
            ]
        };

        if self.points.len() == MAX_TRACE_POINTS {
            self.points.pop_front();
        }
        self.points.push_back(TracePoint {
            position,
            color,
            age: 0.0,
        });
    }

    /// Recorded points, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &TracePoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: f32) {
        self.duration = duration.max(0.0);
    }

    pub fn set_color(&mut self, color: [u8; 3]) {
        self.color = color;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable recording. Disabling clears stored points.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear();
        }
    }

    pub fn rainbow(&self) -> bool {
        self.rainbow
    }

    /// Toggle the cycling-hue trail effect.
    pub fn toggle_rainbow(&mut self) {
        self.rainbow = !self.rainbow;
    }
}

/// Convert HSV (all components in 0..=1) to linear RGB.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h = (h.rem_euclid(1.0)) * 6.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i as u32 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_records_points() {
        let mut tracer = PathTracer::new([255, 0, 0], 2.0);
        tracer.push(Vec2::new(1.0, 2.0), 0.016);
        tracer.push(Vec2::new(1.5, 2.5), 0.016);

        assert_eq!(tracer.len(), 2);
        let newest = tracer.points().last().unwrap();
        assert_eq!(newest.age, 0.0);
        assert_eq!(newest.color, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_points_expire_after_duration() {
        let mut tracer = PathTracer::new([0, 0, 0], 0.1);
        tracer.push(Vec2::ZERO, 0.0);
        // Age the first point far past the duration
        tracer.push(Vec2::ONE, 0.5);

        assert_eq!(tracer.len(), 1);
        assert_eq!(tracer.points().next().unwrap().position, Vec2::ONE);
    }

    #[test]
    fn test_point_cap() {
        let mut tracer = PathTracer::new([0, 0, 0], f32::MAX);
        for i in 0..(MAX_TRACE_POINTS + 10) {
            tracer.push(Vec2::new(i as f32, 0.0), 0.0);
        }
        assert_eq!(tracer.len(), MAX_TRACE_POINTS);
    }

    #[test]
    fn test_alpha_fades_with_age() {
        let point = TracePoint {
            position: Vec2::ZERO,
            color: [1.0; 3],
            age: 1.0,
        };
        assert!((point.alpha(2.0) - 0.5).abs() < 1e-6);
        assert_eq!(point.alpha(0.5), 0.0);

        let fresh = TracePoint { age: 0.0, ..point };
        assert_eq!(fresh.alpha(2.0), 1.0);
    }

    #[test]
    fn test_disable_clears_points() {
        let mut tracer = PathTracer::new([0, 0, 0], 2.0);
        tracer.push(Vec2::ZERO, 0.016);
        tracer.set_enabled(false);

        assert!(tracer.is_empty());
        tracer.push(Vec2::ONE, 0.016);
        assert!(tracer.is_empty());
    }

    #[test]
    fn test_rainbow_varies_colors() {
        let mut tracer = PathTracer::new([0, 0, 0], 10.0);
        tracer.toggle_rainbow();
        assert!(tracer.rainbow());

        tracer.push(Vec2::ZERO, 0.0);
        for _ in 0..30 {
            tracer.push(Vec2::ZERO, 0.0);
        }
        let first = tracer.points().next().unwrap().color;
        let last = tracer.points().last().unwrap().color;
        assert_ne!(first, last);
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        let green = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!(green[1] > 0.99 && green[0] < 0.01);
        let blue = hsv_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert!(blue[2] > 0.99 && blue[1] < 0.01);
    }
}
