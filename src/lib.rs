//! # Pendlab - Interactive Double Pendulum Laboratory
//!
//! A desktop sandbox for exploring the chaotic motion of a double pendulum.
//! Pendulums are integrated on the CPU with a fixed timestep and drawn
//! through a wgpu viewport embedded in an egui interface.
//!
//! ## What you get
//!
//! - A two-link pendulum integrated with the full Lagrangian equations of
//!   motion, steppable at a deterministic 240 Hz
//! - Click-and-drag repositioning of either bob, live gravity and speed
//!   sliders, and any number of simultaneous pendulums
//! - Fading path traces of the outer bob (with an optional rainbow mode)
//! - Light/dark themes and a JSON configuration persisted between runs
//!
//! ## Crate layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`physics`] | Pendulum state, parameters, collection, fixed-step driver |
//! | [`trace`] | Bounded, fading position history for each outer bob |
//! | [`render`] | Embedded wgpu viewport: tessellation, pipeline, paint callback |
//! | [`scene`] | Home / simulation / settings / information screens |
//! | [`config`] | Persisted settings and theme palettes |
//! | [`app`] | Top-level [`eframe::App`] wiring it all together |
//!
//! The binary entry point lives in `src/main.rs` and simply boots the
//! application with an eframe wgpu window.

pub mod app;
pub mod config;
pub mod error;
pub mod physics;
pub mod render;
pub mod scene;
pub mod time;
pub mod trace;

pub use config::{AppConfig, Palette, Theme};
pub use error::ConfigError;
pub use physics::{Pendulum, PendulumParams, PendulumSystem, PhysicsEngine};
pub use time::Time;
pub use trace::PathTracer;
