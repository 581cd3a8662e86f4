use crate::constants::MAX_FRAME_DT_MS;

/// One frame's worth of timing handed to an animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tick {
    /// Milliseconds since the first tick this clock delivered. Keeps running
    /// across stop/start so wall-clock driven phases resume without a jump.
    pub elapsed_ms: f64,
    /// Milliseconds since the previous tick, already clamped.
    pub delta_ms: f64,
}

impl Tick {
    #[inline]
    pub fn delta_sec(&self) -> f32 {
        (self.delta_ms / 1000.0) as f32
    }

    #[inline]
    pub fn elapsed_sec(&self) -> f32 {
        (self.elapsed_ms / 1000.0) as f32
    }
}

/// Turns raw host timestamps into uniform [`Tick`]s for one subscriber.
///
/// The host drives [`FrameClock::advance`] from its display-refresh callback.
/// While stopped every call yields `None`. Restarting does not carry the old
/// timestamp over, so a long pause never shows up as one huge delta.
#[derive(Clone, Debug)]
pub struct FrameClock {
    running: bool,
    origin_ms: Option<f64>,
    last_ms: Option<f64>,
    max_dt_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT_MS)
    }
}

impl FrameClock {
    pub fn new(max_dt_ms: f64) -> Self {
        Self {
            running: false,
            origin_ms: None,
            last_ms: None,
            max_dt_ms: max_dt_ms.max(0.0),
        }
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_ms = None;
    }

    /// Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_ms = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn advance(&mut self, now_ms: f64) -> Option<Tick> {
        if !self.running || !now_ms.is_finite() {
            return None;
        }
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let delta_ms = match self.last_ms {
            // timestamps can repeat or step backwards across host hiccups
            Some(last) => (now_ms - last).clamp(0.0, self.max_dt_ms),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        Some(Tick {
            elapsed_ms: (now_ms - origin).max(0.0),
            delta_ms,
        })
    }
}

/// Lets work through at most once per `min_interval_ms`.
#[derive(Clone, Debug)]
pub struct Throttle {
    min_interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms,
            last_ms: None,
        }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last <= self.min_interval_ms && now_ms >= last => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
