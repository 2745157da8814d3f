//! The loading indicator widget and the host view it lives in.

use log::debug;
use std::time::Duration;
use tumble_core::config::CycleConfig;
use tumble_core::cycle::{AnimationCycleController, AnimationCycleState};
use tumble_core::scheduler::{FrameScheduler, Scheduler};
use tumble_core::shape::{ShadowElement, ShapeElement};
use tumble_core::tween::Stage;

/// Visibility of a host view.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Visibility {
    #[default]
    Visible,
    /// Hidden, but still taking up space in layout.
    Invisible,
    /// Hidden and removed from layout.
    Gone,
}

/// The container view that hosts a [`LoadingIndicator`] in some UI toolkit.
///
/// The indicator only talks to its host when it stops: it hides the view, detaches it from its
/// parent, and drops its children.
pub trait HostView {
    /// Removes this view from its parent container.
    ///
    /// Returns `false` if the view had no parent, which is not an error.
    fn detach_from_parent(&mut self) -> bool;

    /// Removes every child of this view.
    fn remove_all_children(&mut self);

    /// Changes the visibility of this view.
    fn set_visibility(&mut self, visibility: Visibility);
}

/// [`HostView`] that does nothing, for running the indicator headless.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl HostView for NullHost {
    fn detach_from_parent(&mut self) -> bool {
        false
    }

    fn remove_all_children(&mut self) {}

    fn set_visibility(&mut self, _visibility: Visibility) {}
}

/// A shape that falls, morphs, bounces back up while rotating, and repeats until hidden.
///
/// The host drives the indicator in two ways:
///
/// - [`on_layout`](Self::on_layout) once its first layout pass is done, which starts the cycle;
/// - [`advance`](Self::advance) once per frame with the time since the previous frame.
///
/// After each frame, [`shape`](Self::shape) and [`shadow`](Self::shadow) hold the values to draw.
/// Any call to [`set_visibility`](Self::set_visibility) (or [`stop`](Self::stop)) ends the cycle
/// for good and removes the indicator from its parent.
///
/// # Example
///
/// ```
/// use tumble::prelude::*;
///
/// let mut indicator = LoadingIndicator::new(NullHost, CycleConfig::default());
/// indicator.on_layout();
/// indicator.advance(0.5);
///
/// assert_eq!(indicator.shape().current_shape(), Shape::Square);
/// assert_eq!(indicator.shape().offset_y(), 80.0);
///
/// indicator.stop();
/// assert!(indicator.is_stopped());
/// ```
pub struct LoadingIndicator<H: HostView> {
    host: H,
    controller: AnimationCycleController,
    scheduler: FrameScheduler,
    stage: Stage,
    laid_out: bool,
}

impl<H: HostView> LoadingIndicator<H> {
    /// Creates an indicator showing a circle at rest, waiting for [`on_layout`](Self::on_layout).
    pub fn new(host: H, config: CycleConfig) -> Self {
        Self {
            host,
            controller: AnimationCycleController::new(config),
            scheduler: FrameScheduler::new(),
            stage: Stage::default(),
            laid_out: false,
        }
    }

    /// Notifies the indicator that the host finished laying it out. Only the first call has any
    /// effect; it starts the cycle.
    pub fn on_layout(&mut self) {
        if std::mem::replace(&mut self.laid_out, true) {
            return;
        }
        debug!("Laid out; starting loading cycle");
        self.controller.start(&mut self.scheduler);
        self.dispatch();
    }

    /// Advances the animation by `elapsed_seconds` (time since the most recent update).
    ///
    /// Negative or non-finite values are treated as zero. Positive values too large for a
    /// [`Duration`] are treated as [`Duration::MAX`].
    pub fn advance(&mut self, elapsed_seconds: f32) {
        let elapsed = match Duration::try_from_secs_f32(elapsed_seconds) {
            Ok(elapsed) => elapsed,
            Err(_) if elapsed_seconds > 0.0 && elapsed_seconds.is_finite() => Duration::MAX,
            Err(_) => Duration::ZERO,
        };
        self.advance_by(elapsed);
    }

    /// Same as [`advance`](Self::advance), with the elapsed time as a [`Duration`].
    pub fn advance_by(&mut self, elapsed: Duration) {
        self.scheduler.tick(elapsed, &mut self.stage);
        self.dispatch();
    }

    /// Hides the indicator and stops it permanently.
    ///
    /// The requested `visibility` is not honored: the host is always made
    /// [`Invisible`](Visibility::Invisible), so it is skipped by layout passes while it is being
    /// detached. Animations are cleared where they stand, the host is removed from its parent and
    /// emptied, and no further phase will ever be scheduled.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        debug!("Visibility changed to {:?}; stopping", visibility);
        self.host.set_visibility(Visibility::Invisible);
        self.controller.stop(&mut self.scheduler);
        if !self.host.detach_from_parent() {
            debug!("Host was already detached");
        }
        self.host.remove_all_children();
    }

    /// Stops the indicator; same as hiding it. Safe to call more than once.
    pub fn stop(&mut self) {
        self.set_visibility(Visibility::Invisible);
    }

    pub fn is_stopped(&self) -> bool {
        self.controller.is_stopped()
    }

    pub fn state(&self) -> AnimationCycleState {
        self.controller.state()
    }

    /// The shape element, with its current transform.
    pub fn shape(&self) -> &ShapeElement {
        &self.stage.shape
    }

    /// Mutable access to the shape element, e.g. for
    /// [`take_redraw`](ShapeElement::take_redraw).
    pub fn shape_mut(&mut self) -> &mut ShapeElement {
        &mut self.stage.shape
    }

    pub fn shadow(&self) -> &ShadowElement {
        &self.stage.shadow
    }

    pub fn controller(&self) -> &AnimationCycleController {
        &self.controller
    }

    pub fn config(&self) -> &CycleConfig {
        self.controller.config()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn dispatch(&mut self) {
        while let Some(event) = self.scheduler.poll_event() {
            self.controller
                .handle(event, &mut self.stage, &mut self.scheduler);
        }
    }
}
