//! The fall/rise/rotate cycle of the loading indicator.

use crate::config::CycleConfig;
use crate::easing::Easing;
use crate::scheduler::{Animation, AnimationEvent, AnimationId, Scheduler};
use crate::shape::Shape;
use crate::tween::{Property, Stage, Target};
use log::{debug, trace};

/// Top-level phase of the cycle.
///
/// Rotation is not a state of its own; it runs alongside [`Rising`](Self::Rising).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AnimationCycleState {
    /// Waiting for the host to finish its first layout.
    #[default]
    Pending,
    /// The shape is dropping toward the shadow.
    Falling,
    /// The shape is bouncing back up, and rotating.
    Rising,
    /// Stopped for good; no further phases will be scheduled.
    Stopped,
}

/// Drives the loading cycle: fall, morph, rise while rotating, repeat.
///
/// The controller never touches time itself. It schedules [`Animation`]s on a [`Scheduler`] and
/// reacts to the [`AnimationEvent`]s that come back through [`handle`](Self::handle). Only one
/// phase animation is in flight at a time; the rotation is the only animation that overlaps it.
///
/// Once [`stop`](Self::stop) has been called, every subsequent call is a no-op. There is no way to
/// restart a stopped controller; create a new one instead.
#[derive(Debug)]
pub struct AnimationCycleController {
    config: CycleConfig,
    state: AnimationCycleState,
    stopped: bool,
    phase: Option<AnimationId>,
    rotation: Option<AnimationId>,
    shape_advances: u64,
}

impl AnimationCycleController {
    pub fn new(config: CycleConfig) -> Self {
        Self {
            config,
            state: AnimationCycleState::Pending,
            stopped: false,
            phase: None,
            rotation: None,
            shape_advances: 0,
        }
    }

    /// Starts the cycle by scheduling the first fall.
    ///
    /// Must only be called once the host has been laid out, since the fall distance depends on it.
    /// Has no effect if the cycle is already running or has been stopped.
    pub fn start<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.state != AnimationCycleState::Pending {
            trace!("Ignoring start in state {:?}", self.state);
            return;
        }
        self.start_falling(scheduler);
    }

    /// Reacts to an event reported by the scheduler.
    ///
    /// Events for animations this controller did not schedule, and all events after a stop, are
    /// ignored.
    pub fn handle<S: Scheduler + ?Sized>(
        &mut self,
        event: AnimationEvent,
        stage: &mut Stage,
        scheduler: &mut S,
    ) {
        if self.stopped {
            trace!("Ignoring {:?} after stop", event);
            return;
        }
        match event {
            AnimationEvent::Started(id)
                if self.phase == Some(id) && self.state == AnimationCycleState::Rising =>
            {
                self.start_rotation(stage.shape.current_shape(), scheduler);
            }
            AnimationEvent::Completed(id) if self.phase == Some(id) => {
                self.phase = None;
                match self.state {
                    AnimationCycleState::Falling => {
                        stage.shape.advance();
                        self.shape_advances += 1;
                        self.start_rising(scheduler);
                    }
                    AnimationCycleState::Rising => self.start_falling(scheduler),
                    AnimationCycleState::Pending | AnimationCycleState::Stopped => {}
                }
            }
            AnimationEvent::Completed(id) if self.rotation == Some(id) => {
                self.rotation = None;
            }
            _ => {}
        }
    }

    /// Stops the cycle immediately.
    ///
    /// In-flight animations on both the shape and the shadow are cleared where they stand, without
    /// completing. Calling this more than once has no additional effect.
    pub fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if !self.stopped {
            debug!("Stopping loading cycle in state {:?}", self.state);
        }
        self.stopped = true;
        self.state = AnimationCycleState::Stopped;
        self.phase = None;
        self.rotation = None;
        scheduler.clear(Target::Shape);
        scheduler.clear(Target::Shadow);
    }

    pub fn state(&self) -> AnimationCycleState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Whether the rotation that accompanies a rise is still in flight.
    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }

    /// Number of falls that completed and morphed the shape.
    pub fn shape_advances(&self) -> u64 {
        self.shape_advances
    }

    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    fn start_falling<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.stopped {
            return;
        }
        debug!("Falling {}px", self.config.fall_distance());
        let animation = Animation::new(self.config.phase_duration(), Easing::Accelerate)
            .track(Property::ShapeOffsetY, 0.0, self.config.fall_distance())
            .track(
                Property::ShadowScaleX,
                self.config.shadow_max_scale(),
                self.config.shadow_min_scale(),
            );
        self.state = AnimationCycleState::Falling;
        self.phase = Some(scheduler.schedule(animation));
    }

    fn start_rising<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.stopped {
            return;
        }
        debug!("Rising");
        let animation = Animation::new(self.config.phase_duration(), Easing::Decelerate)
            .track(Property::ShapeOffsetY, self.config.fall_distance(), 0.0)
            .track(
                Property::ShadowScaleX,
                self.config.shadow_min_scale(),
                self.config.shadow_max_scale(),
            );
        self.state = AnimationCycleState::Rising;
        self.phase = Some(scheduler.schedule(animation));
    }

    fn start_rotation<S: Scheduler + ?Sized>(&mut self, shape: Shape, scheduler: &mut S) {
        let target = self.config.rotation_target(shape);
        trace!("Rotating {:?} to {}°", shape, target);
        let animation = Animation::new(self.config.phase_duration(), Easing::Decelerate)
            .track(Property::ShapeRotation, 0.0, target);
        self.rotation = Some(scheduler.schedule(animation));
    }
}
