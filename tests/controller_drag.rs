// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Size};
use rec_controller::domain::geometry::{panel_sizes, INDENT};
use rec_controller::domain::{CameraMode, Position};
use rec_controller::ui::controller::{Effect, Message, Options, State};

fn attached(width: f32, height: f32) -> State {
    let mut state = State::new(Options::default());
    state.handle(Message::ContainerResized(Size::new(width, height)));
    state
}

/// Presses the handle at the panel's current top-left plus `grab`.
fn grab(state: &mut State, grab: (f32, f32)) -> Point {
    let origin = state.position().expect("controller attached");
    let pointer = Point::new(origin.x + grab.0, origin.y + grab.1);
    state.handle(Message::PointerTracked(pointer));
    state.handle(Message::StartDrag);
    assert!(state.is_dragging());
    pointer
}

#[test]
fn full_gesture_moves_then_settles_inside_canvas() {
    let mut state = attached(1000.0, 800.0);
    grab(&mut state, (12.0, 25.0));

    // Drag the panel so its top-left lands on (990, 10)
    state.handle(Message::DragMove(Point::new(600.0, 300.0)));
    state.handle(Message::DragMove(Point::new(1002.0, 35.0)));
    assert_eq!(state.position(), Some(Position::new(990.0, 10.0)));
    assert!(state.scroll_locked());

    let effect = state.handle(Message::DragEnd);

    let settled = Position::new(1000.0 - (panel_sizes::WITHOUT_CAMERA.width + INDENT), INDENT);
    assert_eq!(
        effect,
        Effect::Repositioned {
            from: Position::new(990.0, 10.0),
            to: settled,
        }
    );
    assert!(!state.is_dragging());
    assert!(!state.scroll_locked());
}

#[test]
fn every_release_point_settles_within_padded_bounds() {
    let width = 1200.0;
    let height = 700.0;

    for camera in [false, true] {
        for &(x, y) in &[
            (-500.0, -500.0),
            (0.0, 350.0),
            (600.0, 690.0),
            (1199.0, 0.0),
            (5000.0, 5000.0),
        ] {
            let mut state = attached(width, height);
            state.handle(Message::SetCameraMode(camera));
            grab(&mut state, (0.0, 0.0));
            state.handle(Message::DragMove(Point::new(x, y)));
            state.handle(Message::DragEnd);

            let mode = state.camera_mode();
            let threshold = mode.threshold();
            let position = state.position().expect("attached");
            assert!(position.x >= INDENT, "{mode:?} ({x}, {y}) -> {position:?}");
            assert!(position.y >= INDENT, "{mode:?} ({x}, {y}) -> {position:?}");
            assert!(position.x + threshold.x <= width);
            assert!(position.y + threshold.y <= height);
        }
    }
}

#[test]
fn camera_toggle_scenario_from_the_right_edge() {
    let mut state = attached(800.0, 800.0);
    grab(&mut state, (0.0, 0.0));
    state.handle(Message::DragMove(Point::new(650.0, 50.0)));
    // Release settles the compact panel first: 650 + 400 >= 800
    state.handle(Message::DragEnd);
    assert_eq!(state.position(), Some(Position::new(400.0, 50.0)));

    state.handle(Message::SetCameraMode(true));
    assert_eq!(state.camera_mode(), CameraMode::On);
    assert_eq!(state.position(), Some(Position::new(100.0, 50.0)));

    // Closing the camera leaves the panel where it is
    assert_eq!(state.handle(Message::SetCameraMode(false)), Effect::None);
    assert_eq!(state.position(), Some(Position::new(100.0, 50.0)));
}

#[test]
fn unmount_mid_gesture_stops_listening() {
    let mut state = attached(1000.0, 800.0);
    grab(&mut state, (5.0, 5.0));
    state.handle(Message::DragMove(Point::new(40.0, 40.0)));
    let mid_drag = state.position();

    state.unmount();

    assert!(!state.is_dragging());
    assert!(!state.scroll_locked());
    state.handle(Message::DragMove(Point::new(900.0, 900.0)));
    assert_eq!(state.position(), mid_drag);
}
