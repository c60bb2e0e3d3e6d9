//! Structural conformance checks over complete converter output.

use sdfx_mesh::{Point3, Triangle3};
use sdfx_step::entities::StepEntity;
use sdfx_step::MeshConverter;

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

/// A tetrahedron over the origin plus one degenerate sliver.
fn test_mesh() -> Vec<Triangle3> {
    let a = p(0.0, 0.0, 0.0);
    let b = p(1.0, 0.0, 0.0);
    let c = p(0.0, 1.0, 0.0);
    let d = p(0.0, 0.0, 1.0);
    vec![
        Triangle3::new(a, c, b),
        Triangle3::new(a, b, d),
        Triangle3::new(b, c, d),
        Triangle3::new(c, a, d),
        Triangle3::new(a, b, p(2.0, 0.0, 0.0)),
    ]
}

fn render(mesh: &[Triangle3]) -> Vec<String> {
    MeshConverter::new()
        .convert_mesh(mesh, "conformance")
        .iter()
        .map(|e| e.to_step())
        .collect()
}

/// The id on the left of `=` in an instance string.
fn declared_id(instance: &str) -> u64 {
    let rest = instance.strip_prefix('#').unwrap();
    let end = rest.find('=').unwrap();
    rest[..end].parse().unwrap()
}

/// Every `#<id>` mentioned after the `=`.
fn referenced_ids(instance: &str) -> Vec<u64> {
    let args = &instance[instance.find('=').unwrap()..];
    let mut refs = Vec::new();
    let bytes = args.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'#' {
            let start = i + 1;
            let mut end = start;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            if end > start {
                refs.push(args[start..end].parse().unwrap());
            }
            i = end;
        } else {
            i += 1;
        }
    }
    refs
}

/// The parenthesised real list of a single-line leaf entity.
fn real_list(instance: &str, keyword: &str) -> Option<Vec<f64>> {
    let tag = format!("={keyword}('',(");
    let start = instance.find(&tag)? + tag.len();
    let end = instance[start..].find(')')? + start;
    Some(
        instance[start..end]
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect(),
    )
}

#[test]
fn test_every_reference_is_declared_exactly_once() {
    let instances = render(&test_mesh());

    let mut declared = std::collections::HashSet::new();
    for instance in &instances {
        assert!(
            declared.insert(declared_id(instance)),
            "duplicate declaration in {instance}"
        );
    }
    for instance in &instances {
        for id in referenced_ids(instance) {
            assert!(declared.contains(&id), "dangling #{id} in {instance}");
        }
    }
}

#[test]
fn test_ids_are_dense_and_ordered() {
    let instances = render(&test_mesh());
    for (i, instance) in instances.iter().enumerate() {
        assert_eq!(declared_id(instance), i as u64 + 1);
    }
}

#[test]
fn test_emitted_points_are_pairwise_distinct() {
    let instances = render(&test_mesh());
    let points: Vec<Vec<f64>> = instances
        .iter()
        .filter_map(|s| real_list(s, "CARTESIAN_POINT"))
        .collect();
    assert!(!points.is_empty());

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d2: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
            assert!(d2.sqrt() > 1e-6, "points {a:?} and {b:?} too close");
        }
    }
}

#[test]
fn test_emitted_directions_are_unit() {
    let instances = render(&test_mesh());
    let mut seen = 0;
    for instance in &instances {
        if let Some(ratios) = real_list(instance, "DIRECTION") {
            let norm: f64 = ratios.iter().map(|v| v * v).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() <= 1e-6, "non-unit direction {ratios:?}");
            seen += 1;
        }
    }
    assert!(seen > 0);
}

#[test]
fn test_face_count_matches_surviving_triangles() {
    let instances = render(&test_mesh());
    let faces = instances
        .iter()
        .filter(|s| s.contains("=ADVANCED_FACE("))
        .count();
    // One input triangle is degenerate.
    assert_eq!(faces, 4);

    for keyword in [
        "CLOSED_SHELL",
        "MANIFOLD_SOLID_BREP",
        "SHAPE_DEFINITION_REPRESENTATION",
    ] {
        let tag = format!("={keyword}(");
        assert_eq!(
            instances.iter().filter(|s| s.contains(&tag)).count(),
            1,
            "expected exactly one {keyword}"
        );
    }
}

#[test]
fn test_tetrahedron_topology_is_shared() {
    // 4 faces, 4 distinct vertices, 6 distinct edges.
    let instances = render(&test_mesh());
    let count = |kw: &str| {
        let tag = format!("={kw}(");
        instances.iter().filter(|s| s.contains(&tag)).count()
    };
    assert_eq!(count("CARTESIAN_POINT"), 4);
    assert_eq!(count("EDGE_CURVE"), 6);
    assert_eq!(count("ORIENTED_EDGE"), 12);
}
