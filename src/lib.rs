//! A framework-independent loading indicator: a shape that falls, morphs into the next shape,
//! bounces back up while rotating, and loops until it is hidden.
//!
//! Start with [`LoadingIndicator`], or import everything from the [`prelude`].

mod indicator;
pub mod prelude;

pub use indicator::{HostView, LoadingIndicator, NullHost, Visibility};
pub use tumble_core::{
    config::{ConfigError, CycleConfig, CycleConfiguration},
    cycle::{AnimationCycleController, AnimationCycleState},
    easing::{Easing, EasingFunction},
    interpolation::Lerp,
    scheduler::{Animation, AnimationEvent, AnimationId, FrameScheduler, Scheduler},
    shape::{Outline, ShadowElement, Shape, ShapeElement},
    tween::{Property, Stage, Target},
};
