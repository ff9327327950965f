use bevy_ecs::prelude::Resource;

/// Simulation clock plus the host's wall clock.
///
/// `elapsed`/`delta` are scaled simulation seconds and drive movement and
/// the scheduler. `wall_ms` is the host's wall-clock timestamp in
/// milliseconds and drives the walk cycle, so its cadence does not depend on
/// frame rate.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
    pub wall_ms: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
            wall_ms: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
