//! Frame timing for the simulation scene.
//!
//! Tracks wall-clock elapsed time, per-frame delta and a smoothed FPS
//! estimate, with pause support that freezes the elapsed counter.

use std::time::{Duration, Instant};

/// Smoothing factor for the exponential moving average of the FPS estimate.
const FPS_SMOOTHING: f32 = 0.1;

/// Wall-clock time tracking with pause support.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    paused: bool,
    pause_elapsed: Duration,
}

impl Time {
    /// Create a new tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            paused: false,
            pause_elapsed: Duration::ZERO,
        }
    }

    /// Advance the clock by one frame. Call once per rendered frame.
    ///
    /// Returns `(elapsed, delta)` in seconds.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();

        if self.paused {
            self.delta_secs = 0.0;
            return (self.elapsed_secs, 0.0);
        }

        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.elapsed_secs = (now.duration_since(self.start) - self.pause_elapsed).as_secs_f32();
        self.frame_count += 1;

        if self.delta_secs > f32::EPSILON {
            let instantaneous = 1.0 / self.delta_secs;
            self.fps = if self.frame_count <= 1 {
                instantaneous
            } else {
                self.fps + (instantaneous - self.fps) * FPS_SMOOTHING
            };
        }

        (self.elapsed_secs, self.delta_secs)
    }

    /// Seconds since creation, excluding time spent paused.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Seconds since the previous frame (0 while paused).
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames counted so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Smoothed frames-per-second estimate.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze the elapsed counter; `delta()` reports 0 until resumed.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after a pause. The paused interval is excluded from `elapsed()`.
    pub fn resume(&mut self) {
        if self.paused {
            let now = Instant::now();
            self.pause_elapsed += now.duration_since(self.last_frame);
            self.last_frame = now;
            self.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Restart the clock from zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_starts_at_zero() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert_eq!(time.elapsed(), 0.0);
        assert!(!time.is_paused());
    }

    #[test]
    fn test_update_advances() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(10));
        let (elapsed, delta) = time.update();

        assert!(elapsed > 0.0);
        assert!(delta > 0.0);
        assert_eq!(time.frame(), 1);
        assert!(time.fps() > 0.0);
    }

    #[test]
    fn test_pause_freezes_elapsed() {
        let mut time = Time::new();
        time.update();
        time.pause();

        let before = time.elapsed();
        thread::sleep(Duration::from_millis(10));
        time.update();

        assert_eq!(time.elapsed(), before);
        assert_eq!(time.delta(), 0.0);
    }

    #[test]
    fn test_resume_excludes_paused_interval() {
        let mut time = Time::new();
        time.update();
        time.pause();
        thread::sleep(Duration::from_millis(20));
        time.resume();
        time.update();

        // Elapsed should be well below the 20ms spent paused
        assert!(time.elapsed() < 0.015);
    }

    #[test]
    fn test_reset() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(5));
        time.update();
        time.reset();
        assert_eq!(time.frame(), 0);
        assert_eq!(time.elapsed(), 0.0);
    }
}
