use approx::assert_abs_diff_eq;
use box_span::{
    BoxAnnotation, SpanController, SpanError,
    geometry::{Point3D, PrimitiveRecorder},
    replay::{ReplayScript, replay},
};
use nalgebra::{Point3, UnitQuaternion, Vector3};
use std::{f64::consts::FRAC_PI_2, path::PathBuf};

fn script_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scripts")
        .join(name)
}

#[test]
fn replaying_two_pointer_script_finishes_one_box() {
    let script = ReplayScript::from_ron_file(script_path("two_pointers.ron")).unwrap();
    let mut recorder = PrimitiveRecorder::new();
    let mut boxes: Vec<BoxAnnotation> = Vec::new();

    let summary = replay(&script, &mut recorder, &mut boxes).unwrap();

    assert_eq!(summary.n_frames, script.events.len());
    assert_eq!(summary.n_finished, 1);
    assert_eq!(summary.n_cancelled, 1);
    assert_eq!(summary.n_rejected, 0);

    assert_eq!(boxes.len(), 1);
    let cuboid = boxes[0].to_cuboid().unwrap();
    assert_abs_diff_eq!(*cuboid.center(), Point3::new(0.5, 1.0, 0.5));
    assert_abs_diff_eq!(cuboid.dimensions(), Vector3::new(2.0, 1.0, 1.0));
    assert_abs_diff_eq!(
        *cuboid.orientation(),
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
        epsilon = 1e-12
    );
}

#[test]
fn controller_previews_then_finalizes_box() {
    let mut controller = SpanController::default();
    let mut recorder = PrimitiveRecorder::new();

    controller.register_point([0.0, 0.0, 0.0]).unwrap();
    controller.update_live_cursor([2.0, 0.0, 0.0]);
    controller.render(&mut recorder).unwrap();
    assert_eq!((recorder.n_points(), recorder.n_lines()), (1, 1));
    recorder.clear();

    controller.register_point([2.0, 0.0, 0.0]).unwrap();
    controller.update_live_cursor([2.0, 1.0, 0.0]);
    controller.render(&mut recorder).unwrap();
    assert_eq!((recorder.n_points(), recorder.n_quads()), (2, 1));
    recorder.clear();

    controller.register_point([2.0, 1.0, 0.0]).unwrap();
    assert_eq!(controller.finalize(), Err(SpanError::PrematureFinalize { n_points: 3 }));

    controller.register_point([2.0, 1.0, 1.0]).unwrap();
    assert!(controller.is_complete());
    assert!(controller.render(&mut recorder).is_err());

    let cuboid = controller.finalize().unwrap();
    assert_abs_diff_eq!(cuboid.dimensions(), Vector3::new(2.0, 1.0, 1.0));
    assert_abs_diff_eq!(*cuboid.orientation(), UnitQuaternion::identity());
    for corner in cuboid.compute_corners() {
        assert!(corner.z() > -1e-12 && corner.z() < 1.0 + 1e-12);
    }
    assert_eq!(controller.points()[0], Point3D::new(0.0, 0.0, 0.0));
}
