use super::*;
use crate::core::vec3::Vec3;
use crate::primitives::{double_rect, shaded_box};

#[test]
fn test_records_world_and_buffers() {
    let cube = shaded_box(1.0, 2.0, 3.0).unwrap();
    let world = Mat4::from_translation(Vec3::new(1.0, 0.0, -2.0));
    let mut target = RecordingTarget::default();
    cube.render(&mut target, &world);

    let call = &target.calls()[0];
    assert_eq!(call.world, world);
    assert_eq!(call.vertices.as_slice(), cube.vertices());
    assert_eq!(call.indices.as_slice(), cube.indices());
    assert_eq!(target.triangle_count(), 12);
}

#[test]
fn test_vertex_bytes_match_layout() {
    let rect = double_rect(1.0, 1.0).unwrap();
    let mut target = RecordingTarget::default();
    rect.render(&mut target, &Mat4::IDENTITY);
    let call = &target.calls()[0];
    assert_eq!(call.vertex_bytes().len(), call.vertices.len() * 24);
}

#[test]
fn test_shadow_pass_uses_identity_world() {
    let mut rect = double_rect(1.0, 1.0).unwrap();
    let mut target = RecordingTarget::default();
    rect.render_shadow_volume(&mut target);
    assert!(target.calls().is_empty());

    rect.generate_shadow_volume(Vec3::new(0.0, 0.0, 4.0), &Mat4::from_rotation_x(0.4), 10.0)
        .unwrap();
    target.set_world_transform(&Mat4::from_scale(Vec3::splat(2.0)));
    rect.render_shadow_volume(&mut target);
    assert_eq!(target.calls().len(), 1);
    assert_eq!(target.calls()[0].world, Mat4::IDENTITY);

    target.clear();
    assert_eq!(target.triangle_count(), 0);
}
