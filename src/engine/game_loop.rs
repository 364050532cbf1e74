/// Frame pacing and the game's monotonic clock
///
/// Game logic runs one tick per rendered frame at a capped frame rate.
/// Movement speeds are expressed per tick, so there is no accumulator and no
/// catch-up: a slow frame simply produces one late tick.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::clock::Clock;

/// FPS tracking window (average over last N ticks)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame pacing state
pub struct GameLoop {
    /// Minimum time between two ticks
    frame_interval: Duration,

    /// Time of the last tick
    last_tick_time: Instant,

    /// Time when the game loop started (origin of `now_ms`)
    start_time: Instant,

    /// Whether ticks are suspended
    paused: bool,

    /// Tick spacing history for FPS calculation
    tick_spacing: VecDeque<Duration>,

    /// Number of logical ticks granted
    tick_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a game loop capped at `target_fps` ticks per second
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            frame_interval: Duration::from_secs(1) / target_fps.max(1),
            last_tick_time: now,
            start_time: now,
            paused: false,
            tick_spacing: VecDeque::with_capacity(FPS_WINDOW_SIZE),
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame; returns true when a game tick should run now
    pub fn begin_frame(&mut self) -> bool {
        if self.paused {
            return false;
        }

        let now = Instant::now();
        let spacing = now.duration_since(self.last_tick_time);
        if spacing < self.frame_interval {
            return false;
        }

        self.last_tick_time = now;
        self.tick_count += 1;

        self.tick_spacing.push_back(spacing);
        if self.tick_spacing.len() > FPS_WINDOW_SIZE {
            self.tick_spacing.pop_front();
        }

        if self.tick_count % 10 == 0 {
            self.update_fps();
        }

        true
    }

    /// Time remaining until the next tick is due
    pub fn time_until_next_tick(&self) -> Duration {
        self.frame_interval
            .saturating_sub(Instant::now().duration_since(self.last_tick_time))
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of ticks granted
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.last_tick_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        if self.tick_spacing.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.tick_spacing.iter().sum();
        let average = total / self.tick_spacing.len() as u32;

        self.current_fps = if average.as_secs_f32() > 0.0 {
            1.0 / average.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Clock for GameLoop {
    fn now_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }
}
