use crate::config::AnimationConfig;
use std::fmt;
use std::time::{Duration, Instant};

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// HSV to RGB with all components in 0..=1
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Continuously cycling pastel title colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleAnimation {
    /// Hue turns per second
    pub speed: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Default for TitleAnimation {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl TitleAnimation {
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            speed: config.speed,
            saturation: config.saturation,
            value: config.value,
        }
    }

    /// Hue in 0..1 after `elapsed`
    pub fn hue_at(&self, elapsed: Duration) -> f64 {
        (elapsed.as_secs_f64() * self.speed).rem_euclid(1.0)
    }

    pub fn color_at(&self, elapsed: Duration) -> Rgb {
        let (r, g, b) = hsv_to_rgb(self.hue_at(elapsed), self.saturation, self.value);
        Rgb {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

fn channel(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0) as u8
}

/// Fixed-interval frame schedule owned by the shell
///
/// Deadlines are anchored to the start instant, so a slow frame does not push
/// every later frame back. Frames that were missed entirely are skipped.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    start: Instant,
    frame: u64,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            start,
            frame: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    /// When the frame after the current one is due
    pub fn next_deadline(&self) -> Instant {
        self.start + self.interval_times(self.frame + 1)
    }

    /// Move to the next frame that is not already in the past at `now`
    pub fn advance_at(&mut self, now: Instant) -> Instant {
        let elapsed = self.elapsed_at(now);
        let due = (elapsed.as_nanos() / self.interval.as_nanos()) as u64;
        self.frame = (self.frame + 1).max(due);
        self.start + self.interval_times(self.frame)
    }

    /// Sleep until the next frame is due and return its elapsed time
    pub fn wait_next(&mut self) -> Duration {
        let now = Instant::now();
        let deadline = self.next_deadline();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        let at = self.advance_at(Instant::now());
        at.saturating_duration_since(self.start)
    }

    fn interval_times(&self, frames: u64) -> Duration {
        let nanos = self.interval.as_nanos().saturating_mul(u128::from(frames));
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}
