use approx::assert_relative_eq;
use std::time::Duration;
use tumble::prelude::*;
use tumble::AnimationCycleState;

#[derive(Debug)]
struct RecordingHost {
    attached: bool,
    children: usize,
    visibility: Visibility,
    detach_calls: u32,
}

impl RecordingHost {
    fn attached() -> Self {
        Self {
            attached: true,
            children: 2,
            visibility: Visibility::Visible,
            detach_calls: 0,
        }
    }

    fn detached() -> Self {
        Self {
            attached: false,
            ..Self::attached()
        }
    }
}

impl HostView for RecordingHost {
    fn detach_from_parent(&mut self) -> bool {
        self.detach_calls += 1;
        std::mem::replace(&mut self.attached, false)
    }

    fn remove_all_children(&mut self) {
        self.children = 0;
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}

const PHASE: f32 = 0.5;

fn indicator() -> LoadingIndicator<RecordingHost> {
    let _ = env_logger::builder().is_test(true).try_init();
    LoadingIndicator::new(RecordingHost::attached(), CycleConfig::default())
}

fn started() -> LoadingIndicator<RecordingHost> {
    let mut indicator = indicator();
    indicator.on_layout();
    indicator
}

fn assert_stopped_and_detached(indicator: &LoadingIndicator<RecordingHost>) {
    assert!(indicator.is_stopped());
    assert_eq!(indicator.state(), AnimationCycleState::Stopped);
    assert!(!indicator.host().attached);
    assert_eq!(indicator.host().children, 0);
    assert_eq!(indicator.host().visibility, Visibility::Invisible);
}

#[test]
fn initial_state_is_circle_at_rest() {
    let indicator = indicator();

    assert_eq!(indicator.state(), AnimationCycleState::Pending);
    assert_eq!(indicator.shape().current_shape(), Shape::Circle);
    assert_eq!(indicator.shape().offset_y(), 0.0);
    assert_eq!(indicator.shape().rotation_deg(), 0.0);
    assert_eq!(indicator.shadow().scale_x(), 1.0);
}

#[test]
fn nothing_moves_before_layout() {
    let mut indicator = indicator();

    indicator.advance(PHASE * 3.0);

    assert_eq!(indicator.state(), AnimationCycleState::Pending);
    assert_eq!(indicator.shape().offset_y(), 0.0);
    assert_eq!(indicator.controller().shape_advances(), 0);
}

#[test]
fn falling_accelerates_toward_the_shadow() {
    let mut indicator = started();

    indicator.advance(PHASE / 2.0);

    assert_eq!(indicator.state(), AnimationCycleState::Falling);
    // Halfway through an accelerating fall covers a quarter of the distance.
    assert_relative_eq!(indicator.shape().offset_y(), 20.0);
    assert_relative_eq!(indicator.shadow().scale_x(), 0.825);
    assert_eq!(indicator.shape().current_shape(), Shape::Circle);
}

#[test]
fn first_bounce_morphs_to_square_and_rotates_half_turn() {
    let mut indicator = started();

    indicator.advance(PHASE);

    assert_eq!(indicator.shape().current_shape(), Shape::Square);
    assert_eq!(indicator.shape().offset_y(), 80.0);
    assert_eq!(indicator.shadow().scale_x(), 0.3);
    assert_eq!(indicator.state(), AnimationCycleState::Rising);
    assert!(indicator.controller().is_rotating());

    indicator.advance(PHASE / 2.0);

    // Halfway through a decelerating rise covers three quarters of the way back.
    assert_relative_eq!(indicator.shape().offset_y(), 20.0);
    assert_relative_eq!(indicator.shadow().scale_x(), 0.825);
    assert_relative_eq!(indicator.shape().rotation_deg(), 135.0);

    indicator.advance(PHASE / 2.0);

    assert_eq!(indicator.shape().offset_y(), 0.0);
    assert_eq!(indicator.shadow().scale_x(), 1.0);
    assert_eq!(indicator.shape().rotation_deg(), 180.0);
    assert_eq!(indicator.state(), AnimationCycleState::Falling);
    assert!(!indicator.controller().is_rotating());
}

#[test]
fn each_fall_advances_the_shape_once() {
    let mut indicator = started();
    let cycle = [Shape::Circle, Shape::Square, Shape::Triangle];

    for pairs in 1..=7u64 {
        indicator.advance(PHASE);
        indicator.advance(PHASE);

        assert_eq!(indicator.controller().shape_advances(), pairs);
        assert_eq!(
            indicator.shape().current_shape(),
            cycle[(pairs % 3) as usize]
        );
        assert_eq!(indicator.state(), AnimationCycleState::Falling);
    }
}

#[test]
fn rotation_target_depends_on_shape_entering_rise() {
    let mut indicator = started();
    let expected = [
        (Shape::Square, 135.0),
        (Shape::Triangle, -90.0),
        (Shape::Circle, 135.0),
    ];

    for (shape, quarter_turn) in expected {
        indicator.advance(PHASE);
        assert_eq!(indicator.shape().current_shape(), shape);

        indicator.advance(PHASE / 2.0);
        assert_relative_eq!(indicator.shape().rotation_deg(), quarter_turn);

        indicator.advance(PHASE / 2.0);
    }
}

#[test]
fn triangle_finishes_rise_at_minus_120_degrees() {
    let mut indicator = started();
    for _ in 0..3 {
        indicator.advance(PHASE);
    }

    assert_eq!(indicator.shape().current_shape(), Shape::Triangle);
    assert_eq!(indicator.state(), AnimationCycleState::Rising);

    indicator.advance(PHASE);

    assert_eq!(indicator.shape().rotation_deg(), -120.0);
}

#[test]
fn rotation_never_outlives_the_rise() {
    let mut indicator = started();

    for _ in 0..40 {
        indicator.advance(0.125);
        if indicator.state() == AnimationCycleState::Falling {
            assert!(!indicator.controller().is_rotating());
        }
    }
}

#[test]
fn fall_requests_redraw_when_shape_changes() {
    let mut indicator = started();

    indicator.advance(PHASE / 2.0);
    assert!(!indicator.shape_mut().take_redraw());

    indicator.advance(PHASE / 2.0);
    assert!(indicator.shape_mut().take_redraw());
    assert!(!indicator.shape_mut().take_redraw());
}

#[test]
fn repeated_layout_does_not_restart() {
    let mut indicator = started();
    indicator.advance(PHASE / 2.0);

    indicator.on_layout();
    indicator.advance(PHASE / 2.0);

    assert_eq!(indicator.state(), AnimationCycleState::Rising);
    assert_eq!(indicator.controller().shape_advances(), 1);
}

#[test]
fn stop_before_start() {
    let mut indicator = indicator();

    indicator.stop();
    indicator.on_layout();
    indicator.advance(PHASE * 4.0);

    assert_stopped_and_detached(&indicator);
    assert_eq!(indicator.shape().offset_y(), 0.0);
    assert_eq!(indicator.controller().shape_advances(), 0);
}

#[test]
fn stop_mid_fall_freezes_in_place() {
    let mut indicator = started();
    indicator.advance(PHASE / 2.0);

    indicator.stop();
    indicator.advance(PHASE * 4.0);

    assert_stopped_and_detached(&indicator);
    assert_relative_eq!(indicator.shape().offset_y(), 20.0);
    assert_eq!(indicator.shape().current_shape(), Shape::Circle);
    assert_eq!(indicator.controller().shape_advances(), 0);
}

#[test]
fn stop_mid_rise_and_rotation_freezes_in_place() {
    let mut indicator = started();
    indicator.advance(PHASE);
    indicator.advance(PHASE / 2.0);

    indicator.stop();
    indicator.advance(PHASE * 4.0);

    assert_stopped_and_detached(&indicator);
    assert!(!indicator.controller().is_rotating());
    assert_relative_eq!(indicator.shape().offset_y(), 20.0);
    assert_relative_eq!(indicator.shape().rotation_deg(), 135.0);
    assert_eq!(indicator.shape().current_shape(), Shape::Square);
    assert_eq!(indicator.controller().shape_advances(), 1);
}

#[test]
fn any_visibility_change_stops_and_hides() {
    let mut indicator = started();

    indicator.set_visibility(Visibility::Visible);
    indicator.advance(PHASE * 2.0);

    assert_stopped_and_detached(&indicator);
    assert_eq!(indicator.controller().shape_advances(), 0);
}

#[test]
fn stop_is_idempotent() {
    let mut once = started();
    let mut twice = started();
    for indicator in [&mut once, &mut twice] {
        indicator.advance(PHASE * 1.5);
    }

    once.stop();
    twice.stop();
    twice.stop();

    assert_stopped_and_detached(&twice);
    assert_eq!(once.shape(), twice.shape());
    assert_eq!(once.shadow(), twice.shadow());
    assert_eq!(once.state(), twice.state());
    assert_eq!(once.host().children, twice.host().children);
    assert_eq!(once.host().attached, twice.host().attached);
}

#[test]
fn stop_when_already_detached_does_not_fail() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut indicator = LoadingIndicator::new(RecordingHost::detached(), CycleConfig::default());
    indicator.on_layout();
    indicator.advance(PHASE / 2.0);

    indicator.stop();

    assert_stopped_and_detached(&indicator);
    assert_eq!(indicator.host().detach_calls, 1);
}

#[test]
fn fall_distance_follows_density() {
    let config = CycleConfiguration::new().density(2.0).build().unwrap();
    let mut indicator = LoadingIndicator::new(NullHost, config);
    indicator.on_layout();

    indicator.advance(PHASE);

    assert_eq!(indicator.shape().offset_y(), 160.0);
    assert_eq!(indicator.config().fall_distance(), 160.0);
}

#[test]
fn outline_follows_current_shape() {
    let mut indicator = started();
    assert!(matches!(
        indicator.shape().outline(20.0),
        Outline::Circle { .. }
    ));

    indicator.advance(PHASE);

    match indicator.shape().outline(20.0) {
        Outline::Polygon(points) => assert_eq!(points.len(), 4),
        other => panic!("expected a square, got {other:?}"),
    }
}

#[test]
fn huge_frame_gap_mid_phase_finishes_the_phase() {
    let mut indicator = started();
    indicator.advance(PHASE / 2.0);

    indicator.advance_by(Duration::MAX);

    assert_eq!(indicator.state(), AnimationCycleState::Rising);
    assert_eq!(indicator.shape().current_shape(), Shape::Square);
    assert_eq!(indicator.shape().offset_y(), 80.0);
}

#[test]
fn huge_finite_elapsed_seconds_finishes_the_phase() {
    let mut indicator = started();

    indicator.advance(1.0e30);

    assert_eq!(indicator.state(), AnimationCycleState::Rising);
    assert_eq!(indicator.shape().current_shape(), Shape::Square);
    assert_eq!(indicator.shape().offset_y(), 80.0);
}

#[test]
fn negative_elapsed_time_is_ignored() {
    let mut indicator = started();

    indicator.advance(-1.0);
    indicator.advance(f32::NAN);

    assert_eq!(indicator.shape().offset_y(), 0.0);
    assert_eq!(indicator.state(), AnimationCycleState::Falling);
}
