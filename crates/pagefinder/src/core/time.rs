/// Variable-timestep frame clock.
/// Hands the simulation the real elapsed time, clamped so one long hitch
/// can't launch the actor through a platform in a single tick.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Longest delta passed on to the simulation.
    max_dt: f32,
    /// Delta of the most recent frame, after clamping.
    dt: f32,
    /// Total simulated time.
    now: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            dt: 0.0,
            now: 0.0,
        }
    }

    /// Record a frame's elapsed seconds. Returns the delta to simulate.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        // NaN and negative deltas collapse to a zero-length tick
        self.dt = if frame_dt > 0.0 {
            frame_dt.min(self.max_dt)
        } else {
            0.0
        };
        self.now += self.dt;
        self.dt
    }

    /// The clamped delta of the last frame.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Total simulated seconds.
    pub fn now(&self) -> f32 {
        self.now
    }
}
