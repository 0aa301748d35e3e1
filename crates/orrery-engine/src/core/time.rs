/// Fixed timestep accumulator.
/// Keeps game logic ticking at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps
    /// to run. Capped at 10 steps per frame to avoid a catch-up spiral after
    /// a long stall (e.g. a backgrounded tab).
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_full_frame_is_one_step() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn partial_frames_accumulate() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.006), 0);
        assert_eq!(ts.accumulate(0.012), 1);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(2.0), 10);
    }

    #[test]
    fn alpha_stays_normalized() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        ts.accumulate(0.009);
        let a = ts.alpha();
        assert!((0.0..=1.0).contains(&a), "alpha was {a}");
    }
}
