use super::*;

const TRIANGLE: &str = "3
0 0 0
1 0 0
0 1 0
3
0 0 0 1
1 0 0 1
2 0 0 1
1
0 1 2
3
0 1 0 -1
1 2 0 -1
2 0 0 -1
";

fn parse_err(text: &str) -> ParseError {
    parse_mesh(text).expect_err("malformed mesh text")
}

#[test]
fn test_parse_triangle() {
    let data = parse_mesh(TRIANGLE).unwrap();
    assert_eq!(data.positions, vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
    assert_eq!(data.vertex_positions, vec![0, 1, 2]);
    assert!(data.normals.iter().all(|&n| n == Vec3::Z));
    assert_eq!(data.faces, vec![Face::new(0, 1, 2)]);
    assert_eq!(data.edges[1], Edge::new(1, 2, 0, NO_FACE));
}

#[test]
fn test_line_breaks_are_not_significant() {
    let flat = TRIANGLE.replace('\n', " ");
    assert_eq!(parse_mesh(&flat).unwrap(), parse_mesh(TRIANGLE).unwrap());
}

#[test]
fn test_empty_mesh() {
    let data = parse_mesh("0 0 0 0").unwrap();
    assert!(data.positions.is_empty());
    assert!(data.faces.is_empty());
}

#[test]
fn test_truncated_input() {
    let err = parse_err("3\n0 0 0\n1 0 0\n");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    assert_eq!(err.section, MeshSection::Positions);
    assert_eq!(err.line, 3);
}

#[test]
fn test_huge_counts_fail_without_reserving() {
    let err = parse_err(&format!("0\n{}\n", usize::MAX));
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    assert_eq!(err.section, MeshSection::Vertices);

    let err = parse_err(&format!("0\n{}\n0 0 0 1\n", 1usize << 40));
    assert!(matches!(
        err.kind,
        ParseErrorKind::IndexOutOfRange { index: 0, len: 0 }
    ));

    let err = parse_err(&format!("{}\n1 2 3\n", usize::MAX));
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    assert_eq!(err.section, MeshSection::Positions);
}

#[test]
fn test_invalid_token_reports_line() {
    let text = TRIANGLE.replace("1 0 0 1", "1 0 zero 1");
    let err = parse_err(&text);
    assert_eq!(err.line, 7);
    assert_eq!(err.section, MeshSection::Vertices);
    assert!(matches!(
        err.kind,
        ParseErrorKind::InvalidToken { ref token, .. } if token == "zero"
    ));
}

#[test]
fn test_non_finite_coordinate_is_rejected() {
    let text = TRIANGLE.replacen("1 0 0\n", "inf 0 0\n", 1);
    let err = parse_err(&text);
    assert_eq!(err.section, MeshSection::Positions);
    assert_eq!(err.line, 3);
}

#[test]
fn test_vertex_position_out_of_range() {
    let text = TRIANGLE.replace("2 0 0 1", "3 0 0 1");
    let err = parse_err(&text);
    assert_eq!(err.kind, ParseErrorKind::IndexOutOfRange { index: 3, len: 3 });
    assert_eq!(err.section, MeshSection::Vertices);
}

#[test]
fn test_face_index_out_of_range() {
    let text = TRIANGLE.replace("0 1 2\n", "0 1 5\n");
    let err = parse_err(&text);
    assert_eq!(err.kind, ParseErrorKind::IndexOutOfRange { index: 5, len: 3 });
    assert_eq!(err.section, MeshSection::Triangles);
    assert_eq!(err.line, 10);
}

#[test]
fn test_edge_face_out_of_range() {
    let text = TRIANGLE.replace("1 2 0 -1", "1 2 0 1");
    let err = parse_err(&text);
    assert_eq!(err.kind, ParseErrorKind::IndexOutOfRange { index: 1, len: 1 });
    assert_eq!(err.section, MeshSection::Edges);
}

#[test]
fn test_first_edge_face_is_required() {
    let text = TRIANGLE.replace("2 0 0 -1", "2 0 -1 -1");
    let err = parse_err(&text);
    assert_eq!(err.section, MeshSection::Edges);
    assert!(matches!(err.kind, ParseErrorKind::InvalidToken { .. }));
}

#[test]
fn test_trailing_data() {
    let text = format!("{TRIANGLE}extra\n");
    let err = parse_err(&text);
    assert_eq!(err.section, MeshSection::Trailer);
    assert_eq!(err.line, 15);
    assert_eq!(
        err.kind,
        ParseErrorKind::TrailingData {
            token: "extra".to_string()
        }
    );
}

#[test]
fn test_write_then_parse_preserves_data() {
    let data = parse_mesh(TRIANGLE).unwrap();
    let vertices: Vec<Vertex> = data
        .vertex_positions
        .iter()
        .zip(&data.normals)
        .map(|(&p, &n)| Vertex::new(data.positions[p as usize], n))
        .collect();
    let text = write_mesh(
        &data.positions,
        &vertices,
        &data.vertex_positions,
        &data.faces,
        &data.edges,
    );
    assert!(text.contains("2 0 0 -1"));
    assert_eq!(parse_mesh(&text).unwrap(), data);
}

#[test]
fn test_written_floats_are_exact() {
    let positions = [Vec3::new(0.1, -1.0e-7, 123.456)];
    let vertices = [Vertex::new(positions[0], Vec3::new(0.0, 0.6, 0.8))];
    let text = write_mesh(&positions, &vertices, &[0], &[], &[]);
    let data = parse_mesh(&text).unwrap();
    assert_eq!(data.positions[0], positions[0]);
    assert_eq!(data.normals[0], vertices[0].normal);
}
