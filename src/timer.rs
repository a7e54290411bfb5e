// Frame-driven deferred actions. Cancelling one is dropping it.

/// Smallest accepted interval period, keeps `Interval::tick` bounded.
const MIN_PERIOD: f32 = 1.0e-3;

/// Fires exactly once after `delay` seconds.
#[derive(Debug, Clone)]
pub struct Timeout {
    delay: f32,
    elapsed: f32,
    fired: bool,
}

impl Timeout {
    pub fn new(delay: f32) -> Self {
        Self {
            delay: delay.max(0.0),
            elapsed: 0.0,
            fired: false,
        }
    }

    /// Returns true on the tick where the delay is reached, false on every other tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.fired {
            return false;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.delay {
            self.fired = true;
            return true;
        }
        false
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.fired
    }
}

/// Fires every `period` seconds until dropped.
#[derive(Debug, Clone)]
pub struct Interval {
    period: f32,
    elapsed: f32,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            elapsed: 0.0,
        }
    }

    /// Number of whole periods completed during this tick. The remainder carries over.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.elapsed += dt.max(0.0);
        if self.elapsed < self.period {
            return 0;
        }
        let fired = (self.elapsed / self.period).floor().min(u32::MAX as f32);
        self.elapsed = (self.elapsed - fired * self.period).clamp(0.0, self.period);
        if self.elapsed >= self.period {
            self.elapsed = 0.0;
        }
        fired as u32
    }

    #[cfg(test)]
    pub fn period(&self) -> f32 {
        self.period
    }
}
