//! Double pendulum physics.
//!
//! The heart of the crate: a two-link pendulum integrated with the full
//! Lagrangian equations of motion. [`Pendulum`] holds one system's state,
//! [`PendulumSystem`] manages any number of them under shared gravity and
//! time-scale settings, and [`PhysicsEngine`] drives everything with a
//! fixed 240 Hz timestep decoupled from the frame rate.

mod engine;
mod params;
mod pendulum;
mod system;

pub use engine::{PhysicsEngine, PHYSICS_STEP};
pub use params::PendulumParams;
pub use pendulum::{DragTarget, Pendulum, BOB_RADIUS};
pub use system::{PendulumId, PendulumSystem};
