use std::thread;
use std::time::{Duration, Instant};

/// Polling gate that opens at most once per interval.
///
/// The gate restarts from the instant it was observed open, so a late poll
/// pushes the next opening back instead of firing twice to catch up.
pub struct IntervalGate {
    interval: Duration,
    last_fire: Instant,
}

impl IntervalGate {
    pub fn new(interval: Duration, now: Instant) -> IntervalGate {
        IntervalGate {
            interval,
            last_fire: now,
        }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fire) < self.interval {
            return false;
        }

        self.last_fire = now;
        true
    }
}

/// Paces a loop to a fixed frame rate and reports the achieved rate once
/// per second.
pub struct IntervalTimer {
    frame: Duration,
    deadline: Instant,
    frames: u32,
    window_start: Instant,
}

impl IntervalTimer {
    pub fn new(frames_per_second: f32) -> IntervalTimer {
        let now = Instant::now();

        IntervalTimer {
            frame: Duration::from_secs_f32(1.0 / frames_per_second),
            deadline: now,
            frames: 0,
            window_start: now,
        }
    }

    pub fn sleep_until_next_tick(&mut self) {
        self.count_frame();

        let now = Instant::now();
        self.deadline += self.frame;
        if self.deadline <= now {
            log::warn!("Preview fell behind, skipping a frame");
            self.deadline = now + self.frame;
        }

        thread::sleep(self.deadline.saturating_duration_since(now));
    }

    fn count_frame(&mut self) {
        self.frames += 1;

        let elapsed = self.window_start.elapsed();
        if elapsed >= Duration::from_secs(1) {
            log::debug!("{:.1} FPS", f64::from(self.frames) / elapsed.as_secs_f64());
            self.frames = 0;
            self.window_start = Instant::now();
        }
    }
}
