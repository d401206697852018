use super::*;
use crate::core::ds::Vertex;
use crate::core::vec3::Mat4;
use approx::assert_relative_eq;

fn triangle() -> (Vec<Vec3>, Vec<Vertex>, Vec<u32>) {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let vertices = positions.iter().map(|&p| Vertex::new(p, Vec3::Z)).collect();
    (positions, vertices, vec![0, 1, 2])
}

#[test]
fn test_face_normal_follows_winding() {
    let n = face_normal([Vec3::ZERO, Vec3::X, Vec3::Y]);
    assert_relative_eq!(n, Vec3::Z);
    let flipped = face_normal([Vec3::ZERO, Vec3::Y, Vec3::X]);
    assert_relative_eq!(flipped, -Vec3::Z);
}

#[test]
fn test_degenerate_face_has_zero_normal() {
    assert_eq!(face_normal([Vec3::ZERO, Vec3::X, Vec3::X * 2.0]), Vec3::ZERO);
}

#[test]
fn test_light_in_front_and_behind() {
    let (positions, vertices, table) = triangle();
    let world = WorldGeometry::transform(&positions, &vertices, &table, &Mat4::IDENTITY);
    let face = Face::new(0, 1, 2);

    assert!(facing_front(&face, Vec3::new(0.2, 0.2, 5.0), &world));
    assert!(!facing_front(&face, Vec3::new(0.2, 0.2, -5.0), &world));
}

#[test]
fn test_edge_on_light_is_unlit() {
    let (positions, vertices, table) = triangle();
    let world = WorldGeometry::transform(&positions, &vertices, &table, &Mat4::IDENTITY);
    assert!(!facing_front(&Face::new(0, 1, 2), Vec3::new(5.0, 5.0, 0.0), &world));
}

#[test]
fn test_classification_tracks_world_transform() {
    let (positions, vertices, table) = triangle();
    let light = Vec3::new(0.0, 0.0, 5.0);
    let face = Face::new(0, 1, 2);

    let flipped = Mat4::from_rotation_x(std::f32::consts::PI);
    let world = WorldGeometry::transform(&positions, &vertices, &table, &flipped);
    assert!(!facing_front(&face, light, &world));

    let world = WorldGeometry::transform(&positions, &vertices, &table, &Mat4::IDENTITY);
    assert!(facing_front(&face, light, &world));
}

#[test]
fn test_classification_is_deterministic() {
    let (positions, vertices, table) = triangle();
    let world = WorldGeometry::transform(&positions, &vertices, &table, &Mat4::IDENTITY);
    let faces = [Face::new(0, 1, 2), Face::new(0, 2, 1)];
    let light = Vec3::new(0.3, -0.4, 2.0);

    let first = classify_faces(&faces, light, &world);
    assert_eq!(first, vec![true, false]);
    assert_eq!(first, classify_faces(&faces, light, &world));
}
