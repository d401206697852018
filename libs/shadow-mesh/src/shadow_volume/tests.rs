use super::*;
use crate::adjacency::build_edges;
use crate::core::vec3::Mat4;
use approx::assert_relative_eq;

struct Fixture {
    positions: Vec<Vec3>,
    vertices: Vec<Vertex>,
    table: Vec<u32>,
    faces: Vec<Face>,
}

impl Fixture {
    fn new(positions: Vec<Vec3>, faces: Vec<Face>) -> Self {
        let vertices = positions.iter().map(|&p| Vertex::new(p, p.normalize_or_zero())).collect();
        let table = (0..positions.len() as u32).collect();
        Self { positions, vertices, table, faces }
    }

    fn volume(&self, light: Vec3, world: &Mat4) -> ShadowVolume {
        let edges = build_edges(&self.faces, &self.table);
        let geometry = WorldGeometry::transform(&self.positions, &self.vertices, &self.table, world);
        build_shadow_volume(&geometry, &self.faces, &edges, light, 10.0).expect("volume fits u16")
    }
}

/// Outward-wound tetrahedron around the origin.
fn tetrahedron() -> Fixture {
    Fixture::new(
        vec![
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
        ],
        vec![
            Face::new(0, 1, 2),
            Face::new(0, 3, 1),
            Face::new(0, 2, 3),
            Face::new(1, 3, 2),
        ],
    )
}

#[test]
fn test_is_edge_oriented() {
    let corners = [4, 7, 9];
    assert!(is_edge_oriented(4, 7, corners));
    assert!(is_edge_oriented(7, 9, corners));
    assert!(is_edge_oriented(9, 4, corners));
    assert!(!is_edge_oriented(7, 4, corners));
    assert!(!is_edge_oriented(4, 5, corners));
}

#[test]
fn test_tetrahedron_is_outward_wound() {
    let tet = tetrahedron();
    for face in &tet.faces {
        let [a, b, c] = face.indices.map(|v| tet.positions[v as usize]);
        let n = (b - a).cross(c - a);
        assert!(n.dot((a + b + c) / 3.0) > 0.0);
    }
}

#[test]
fn test_single_triangle_lit_from_front() {
    let tri = Fixture::new(
        vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        vec![Face::new(0, 1, 2)],
    );
    let volume = tri.volume(Vec3::new(0.2, 0.2, 5.0), &Mat4::IDENTITY);

    assert_eq!(
        volume.stats(),
        VolumeStats {
            silhouette_edges: 0,
            near_caps: 1,
            far_caps: 0
        }
    );
    assert_eq!(volume.triangle_count(), 1);
    // Near cap is the reversed face with its world vertices.
    assert_eq!(volume.indices(), &[2, 1, 0]);
    assert_eq!(volume.vertices()[1].position, Vec3::X);
}

#[test]
fn test_far_cap_is_extruded_with_zero_normals() {
    let tri = Fixture::new(
        vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        vec![Face::new(0, 1, 2)],
    );
    let light = Vec3::new(0.0, 0.0, -4.0);
    let volume = tri.volume(light, &Mat4::IDENTITY);

    assert_eq!(volume.stats().far_caps, 1);
    for vertex in volume.vertices() {
        assert_eq!(vertex.normal, Vec3::ZERO);
        assert!(vertex.position.z > 9.0);
    }
    assert_relative_eq!(volume.vertices()[0].position, Vec3::new(0.0, 0.0, 10.0), epsilon = 1.0e-5);
}

#[test]
fn test_tetrahedron_volume_is_watertight() {
    let tet = tetrahedron();
    for light in [
        Vec3::new(5.0, 0.5, 0.25),
        Vec3::new(-3.0, 4.0, 2.0),
        Vec3::new(0.1, -6.0, 0.3),
    ] {
        let volume = tet.volume(light, &Mat4::IDENTITY);
        let stats = volume.stats();
        assert!(stats.silhouette_edges >= 3);
        assert_eq!(stats.near_caps + stats.far_caps, 4);
        assert_eq!(volume.triangle_count(), stats.triangle_count());
        assert_eq!(volume.vertices().len(), stats.vertex_count());
        assert_eq!(volume.unmatched_edge_count(), 0);
    }
}

#[test]
fn test_volume_follows_world_transform() {
    let tet = tetrahedron();
    let light = Vec3::new(0.0, 10.0, 0.0);
    let world = Mat4::from_translation(Vec3::new(3.0, -1.0, 2.0)) * Mat4::from_rotation_y(0.7);
    let volume = tet.volume(light, &world);

    assert_eq!(volume.unmatched_edge_count(), 0);
    let moved = world.transform_point3(tet.positions[0]);
    assert!(volume.vertices().iter().any(|v| v.position == moved));
}

#[test]
fn test_open_mesh_leaves_boundary_unmatched() {
    // Two lit triangles forming a square: no walls, open near cap.
    let square = Fixture::new(
        vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y],
        vec![Face::new(0, 1, 2), Face::new(0, 2, 3)],
    );
    let volume = square.volume(Vec3::new(0.5, 0.5, 3.0), &Mat4::IDENTITY);
    assert_eq!(volume.stats().silhouette_edges, 0);
    assert_eq!(volume.unmatched_edge_count(), 4);
}

#[test]
fn test_overflow_is_reported() {
    // 21846 unlit triangles need 65538 cap vertices.
    let n = 21_846u32;
    let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
    let vertices: Vec<Vertex> = positions.iter().map(|&p| Vertex::at(p)).collect();
    let table = vec![0, 1, 2];
    let faces = vec![Face::new(0, 1, 2); n as usize];
    let geometry = WorldGeometry::transform(&positions, &vertices, &table, &Mat4::IDENTITY);

    let err = build_shadow_volume(&geometry, &faces, &[], Vec3::new(0.0, 0.0, -1.0), 1.0)
        .expect_err("too many vertices");
    assert!(matches!(
        err,
        ShadowMeshError::IndexOverflow { count: 65_538, max: 65_536 }
    ));
}

#[test]
fn test_stats_serialize() {
    let stats = VolumeStats {
        silhouette_edges: 4,
        near_caps: 2,
        far_caps: 2,
    };
    let json = serde_json::to_string(&stats).expect("serialize");
    let back: VolumeStats = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, stats);
}
