/// Fixed-timestep pacing: frame times accumulate and whole intervals are
/// paid out as simulation ticks, independent of how long a frame took.
#[derive(Clone, Debug)]
pub struct FixedStep {
    interval: f32,
    max_catch_up: u32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(interval: f32, max_catch_up: u32) -> Self {
        Self { interval, max_catch_up, accumulator: 0.0 }
    }

    /// Adds `dt` seconds and returns how many ticks are due. A backlog
    /// beyond `max_catch_up` ticks is dropped.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }
        let due = (self.accumulator / self.interval).floor();
        if due < 1.0 {
            return 0;
        }
        self.accumulator %= self.interval;
        due.min(self.max_catch_up as f32) as u32
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
