use shadow_mesh::primitives::{cylinder, double_rect};
use shadow_mesh::{Mat4, ShadowMeshError, SmMesh, Vec3};

#[test]
fn roundtrip_cylinder() {
    let cyl = cylinder(2, 7, 1.25, 0.6).unwrap();
    let loaded = SmMesh::load_str(&cyl.to_text()).unwrap();

    assert_eq!(loaded.face_count(), cyl.face_count());
    assert_eq!(loaded.faces(), cyl.faces());
    assert_eq!(loaded.positions(), cyl.positions());
    assert_eq!(loaded.edges(), cyl.edges());
}

#[test]
fn roundtrip_preserves_shadow_volume() {
    let rect = double_rect(1.5, 1.0).unwrap();
    let loaded = SmMesh::load_str(&rect.to_text()).unwrap();
    let light = Vec3::new(2.0, 3.0, 3.0);
    let world = Mat4::from_rotation_y(1.1);

    assert_eq!(
        rect.compute_shadow_volume(light, &world, 10.0).unwrap(),
        loaded.compute_shadow_volume(light, &world, 10.0).unwrap()
    );
}

#[test]
fn trusted_edges_are_not_recomputed() {
    // A single triangle whose edge list only names one edge.
    let text = "3 0 0 0 1 0 0 0 1 0 3 0 0 0 1 1 0 0 1 2 0 0 1 1 0 1 2 1 0 1 0 -1";
    let mesh = SmMesh::load_str(text).unwrap();
    assert_eq!(mesh.edges().len(), 1);
}

#[test]
fn malformed_text_is_rejected() {
    for text in ["", "1 0 0", "1 0 0 0 1 0 0 0 1 x", "0 0 0 0 junk"] {
        let err = SmMesh::load_str(text).expect_err(text);
        assert!(matches!(err, ShadowMeshError::Parse(_)), "{text}: {err}");
    }
}
