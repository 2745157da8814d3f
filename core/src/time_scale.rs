use std::time::Duration;

/// Describes the time scale of a single scheduled [`Animation`](crate::scheduler::Animation).
///
/// Time scales handle the conversion between elapsed (since the animation started) times and the
/// normalized positions fed to an easing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    duration: f32,
}

impl TimeScale {
    /// Creates a time scale spanning `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration: duration.as_secs_f32(),
        }
    }

    /// Computes the normalized time or "timeline position" for some real time.
    ///
    /// # Arguments
    ///
    /// * `time` - Elapsed time in seconds.
    ///
    /// # Returns
    ///
    /// The normalized time between `0.0` and `1.0`, which is `1.0` exactly at the end of the
    /// duration. A zero-length time scale is at `1.0` as soon as it starts.
    ///
    /// If the `time` is nowhere on the timeline, returns a [`TimeScaleOutOfBounds`] error.
    pub fn normalized_time(&self, time: f32) -> Result<f32, TimeScaleOutOfBounds> {
        if time < 0.0 {
            return Err(TimeScaleOutOfBounds::NotStarted);
        }
        if time > self.duration {
            return Err(TimeScaleOutOfBounds::Ended);
        }
        if self.duration <= 0.0 {
            return Ok(1.0);
        }
        Ok(time / self.duration)
    }

    /// Same as [`normalized_time`](Self::normalized_time), but clamps out-of-bounds times to the
    /// nearest end of the scale.
    pub fn clamped_time(&self, time: f32) -> f32 {
        match self.normalized_time(time) {
            Ok(t) => t,
            Err(TimeScaleOutOfBounds::NotStarted) => 0.0,
            Err(TimeScaleOutOfBounds::Ended) => 1.0,
        }
    }
}

/// Error produced by [`TimeScale::normalized_time`], specifying which boundary is exceeded by a
/// given time.
#[derive(Debug, Eq, PartialEq)]
pub enum TimeScaleOutOfBounds {
    /// The time was negative. When determining animated values, this can be considered equivalent
    /// to a normalized time of `0.0`.
    NotStarted,
    /// The time is past the end of the scale. When determining animated values, this can be
    /// considered equivalent to a normalized time of `1.0`.
    Ended,
}
