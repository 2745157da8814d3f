//! Scheduling of property animations, and the events they report back.
//!
//! The [`Scheduler`] trait is the seam between the loading cycle and whatever drives frames. A UI
//! binding can implement it on top of its own animation engine; [`FrameScheduler`] is a headless
//! implementation that interpolates [`Stage`] fields directly and is advanced by elapsed time.

use crate::easing::Easing;
use crate::time_scale::TimeScale;
use crate::tween::{Property, Stage, Target, Track};
use std::collections::VecDeque;
use std::time::Duration;

/// Identifies one scheduled [`Animation`]. Ids are never reused by the same scheduler.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AnimationId(u64);

/// Lifecycle notification for a scheduled animation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationEvent {
    /// The animation has begun. Reported before any time elapses on it.
    Started(AnimationId),
    /// The animation reached its end and its final values have been written.
    Completed(AnimationId),
}

/// One or more property [`Track`]s that run together over the same duration and easing, and
/// complete as a unit.
#[derive(Clone, Debug)]
pub struct Animation {
    duration: Duration,
    easing: Easing,
    tracks: Vec<Track>,
}

impl Animation {
    /// Creates an animation with no tracks.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            tracks: Vec::new(),
        }
    }

    /// Adds a track animating `property` from `from` to `to`.
    pub fn track(mut self, property: Property, from: f32, to: f32) -> Self {
        self.tracks.push(Track::new(property, from, to));
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> &Easing {
        &self.easing
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Whether any track of this animation writes to `target`.
    pub fn touches(&self, target: Target) -> bool {
        self.tracks.iter().any(|t| t.property.target() == target)
    }

    /// The target value of `property`, if this animation animates it.
    pub fn end_value(&self, property: Property) -> Option<f32> {
        self.tracks
            .iter()
            .rev()
            .find(|t| t.property == property)
            .map(|t| t.tween.to)
    }

    fn update(&self, stage: &mut Stage, t: f32) {
        for track in &self.tracks {
            track.update(stage, t, &self.easing);
        }
    }
}

/// Runs [`Animation`]s against a [`Stage`] and reports their lifecycle.
pub trait Scheduler {
    /// Starts `animation`. A [`AnimationEvent::Started`] event for it is queued immediately.
    fn schedule(&mut self, animation: Animation) -> AnimationId;

    /// Cancels every running animation that touches `target`. Cancelled animations leave their
    /// properties at whatever values they last wrote and produce no further events.
    fn clear(&mut self, target: Target);

    /// Removes and returns the oldest queued event, if any.
    fn poll_event(&mut self) -> Option<AnimationEvent>;
}

#[derive(Debug)]
struct Running {
    id: AnimationId,
    animation: Animation,
    timescale: TimeScale,
    elapsed: Duration,
}

/// Deterministic [`Scheduler`] driven by explicit elapsed time.
///
/// Each [`tick`](Self::tick) advances every running animation by the same amount, writes the
/// interpolated values into the stage in scheduling order, and queues a completion event for each
/// animation that reached its end. Time remaining after an animation completes is discarded.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    running: Vec<Running>,
    events: VecDeque<AnimationEvent>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances all running animations by `elapsed` and updates `stage`.
    pub fn tick(&mut self, elapsed: Duration, stage: &mut Stage) {
        let mut completed = Vec::new();
        for running in self.running.iter_mut() {
            running.elapsed = running.elapsed.saturating_add(elapsed);
            let finished = running.elapsed >= running.animation.duration;
            let t = if finished {
                1.0
            } else {
                running.timescale.clamped_time(running.elapsed.as_secs_f32())
            };
            running.animation.update(stage, t);
            if finished {
                completed.push(running.id);
            }
        }
        self.running.retain(|r| !completed.contains(&r.id));
        self.events
            .extend(completed.into_iter().map(AnimationEvent::Completed));
    }

    /// Whether `id` is still running.
    pub fn is_running(&self, id: AnimationId) -> bool {
        self.running.iter().any(|r| r.id == id)
    }

    /// Number of animations currently running.
    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// The running animations, in scheduling order.
    pub fn running(&self) -> impl Iterator<Item = (AnimationId, &Animation)> {
        self.running.iter().map(|r| (r.id, &r.animation))
    }
}

impl Scheduler for FrameScheduler {
    fn schedule(&mut self, animation: Animation) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.running.push(Running {
            id,
            timescale: TimeScale::new(animation.duration),
            animation,
            elapsed: Duration::ZERO,
        });
        self.events.push_back(AnimationEvent::Started(id));
        id
    }

    fn clear(&mut self, target: Target) {
        self.running.retain(|r| !r.animation.touches(target));
    }

    fn poll_event(&mut self) -> Option<AnimationEvent> {
        self.events.pop_front()
    }
}
