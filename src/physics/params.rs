//! Initialization parameters for pendulums.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::Vec2;
use rand::Rng;

/// Everything needed to spawn a pendulum.
///
/// The defaults describe the classic demo setup: equal arms, equal masses,
/// both links raised 45 degrees from vertical and released from rest.
#[derive(Clone, Debug, PartialEq)]
pub struct PendulumParams {
    /// Anchor point in viewport pixels.
    pub anchor: Vec2,
    /// Length of the first arm in pixels.
    pub length1: f32,
    /// Length of the second arm in pixels.
    pub length2: f32,
    /// Mass of the inner bob.
    pub mass1: f32,
    /// Mass of the outer bob.
    pub mass2: f32,
    /// Initial angle of the first link, radians from downward vertical.
    pub angle1: f32,
    /// Initial angle of the second link, radians from downward vertical.
    pub angle2: f32,
    /// Initial angular velocity of the first link.
    pub velocity1: f32,
    /// Initial angular velocity of the second link.
    pub velocity2: f32,
    /// Whether the connecting wires are drawn.
    pub show_wire: bool,
    /// Trace color as sRGB bytes.
    pub path_color: [u8; 3],
    /// Trace point lifetime in seconds.
    pub path_duration: f32,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            anchor: Vec2::new(400.0, 100.0),
            length1: 120.0,
            length2: 120.0,
            mass1: 10.0,
            mass2: 10.0,
            angle1: FRAC_PI_4,
            angle2: FRAC_PI_4,
            velocity1: 0.0,
            velocity2: 0.0,
            show_wire: true,
            path_color: [80, 180, 255],
            path_duration: 5.0,
        }
    }
}

impl PendulumParams {
    /// Scramble angles, arm lengths, masses and trace color for variety.
    ///
    /// Angles stay within +-90 degrees of vertical so new pendulums start
    /// in a visually sensible pose; color components stay above 20 so the
    /// trace never vanishes into a dark background.
    pub fn randomize(&mut self) {
        let mut rng = rand::thread_rng();
        self.angle1 = rng.gen_range(-FRAC_PI_2..FRAC_PI_2);
        self.angle2 = rng.gen_range(-FRAC_PI_2..FRAC_PI_2);
        self.length1 = rng.gen_range(80..=150) as f32;
        self.length2 = rng.gen_range(80..=150) as f32;
        self.mass1 = rng.gen_range(5..=15) as f32;
        self.mass2 = rng.gen_range(5..=15) as f32;
        self.path_color = [
            rng.gen_range(20..=255u8),
            rng.gen_range(20..=255u8),
            rng.gen_range(20..=255u8),
        ];
    }
}
