//! Triangle mesh to STEP entity graph conversion.
//!
//! The converter walks a triangle sequence and materializes an ordered
//! entity list: a fixed prelude (application context, units, uncertainty,
//! geometric context, product hierarchy), one `ADVANCED_FACE` per
//! non-degenerate triangle, and the closing shell/solid/representation
//! entities. Points, directions, and edges are deduplicated through
//! caches so shared topology collapses to shared ids.

use std::collections::HashMap;

use sdfx_mesh::{Point3, Triangle3, Vec3};
use tracing::{debug, info};

use crate::entities::{
    AdvancedBrepShapeRepresentation, AdvancedFace, ApplicationContext, Axis2Placement3d,
    CartesianPoint, ClosedShell, Direction, EdgeCurve, EdgeLoop, EntityId, FaceOuterBound,
    GeometricRepresentationContext, LengthUnit, Line, ManifoldSolidBrep, OrientedEdge, Plane,
    PlaneAngleUnit, Product, ProductContext, ProductDefinition, ProductDefinitionContext,
    ProductDefinitionFormation, ProductDefinitionShape, ShapeDefinitionRepresentation,
    SolidAngleUnit, StepEntity, UncertaintyMeasureWithUnit, Vector, VertexPoint,
};

/// Euclidean tolerance under which two cartesian points share one id.
pub const POINT_TOLERANCE: f64 = 1e-6;

/// Tolerance for the triangle degeneracy filter on the export path.
pub const DEGENERACY_TOLERANCE: f64 = 1e-9;

/// Drop degenerate triangles from a mesh.
///
/// This is the same filter the converter applies per triangle, so
/// optimizing before conversion is idempotent. Vertex welding, coplanar
/// face merging, and edge collapse are deliberately not performed.
pub fn optimize_mesh(mesh: &[Triangle3]) -> Vec<Triangle3> {
    mesh.iter()
        .copied()
        .filter(|t| !t.degenerate(DEGENERACY_TOLERANCE))
        .collect()
}

/// Collapse negative zero so `-0.0` and `0.0` key and render identically.
fn canon_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

fn bits(p: &Point3) -> [u64; 3] {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

/// Unordered endpoint pair, canonicalized by lexicographic `(x,y,z)`
/// order so both traversal directions of an edge map to one key.
#[derive(Debug, PartialEq, Eq, Hash)]
struct EdgeKey {
    a: [u64; 3],
    b: [u64; 3],
}

impl EdgeKey {
    fn new(v1: &Point3, v2: &Point3) -> Self {
        if (v1.x, v1.y, v1.z) < (v2.x, v2.y, v2.z) {
            Self {
                a: bits(v1),
                b: bits(v2),
            }
        } else {
            Self {
                a: bits(v2),
                b: bits(v1),
            }
        }
    }
}

/// Spatial hash over cartesian points.
///
/// Coordinates are quantized to cells of `POINT_TOLERANCE` width; a
/// lookup scans the 27 cells around the query so any cached point within
/// the tolerance sphere is found. Flooring keeps neighbors within one
/// cell of each other, so the scan cannot miss.
#[derive(Debug, Default)]
struct PointCache {
    buckets: HashMap<[i64; 3], Vec<(Point3, EntityId)>>,
}

impl PointCache {
    fn cell(p: &Point3) -> [i64; 3] {
        [
            (p.x / POINT_TOLERANCE).floor() as i64,
            (p.y / POINT_TOLERANCE).floor() as i64,
            (p.z / POINT_TOLERANCE).floor() as i64,
        ]
    }

    fn find(&self, p: &Point3) -> Option<EntityId> {
        let [cx, cy, cz] = Self::cell(p);
        let tol2 = POINT_TOLERANCE * POINT_TOLERANCE;
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(bucket) = self.buckets.get(&[cx + dx, cy + dy, cz + dz]) else {
                        continue;
                    };
                    for (q, id) in bucket {
                        if (q - p).norm_squared() <= tol2 {
                            return Some(*id);
                        }
                    }
                }
            }
        }
        None
    }

    fn insert(&mut self, p: Point3, id: EntityId) {
        self.buckets.entry(Self::cell(&p)).or_default().push((p, id));
    }

    fn clear(&mut self) {
        self.buckets.clear();
    }
}

/// Converts a triangle mesh to a STEP B-rep entity graph.
///
/// Ids are assigned in creation order starting at 1, which is also the
/// emission order; Part 21 resolves references by id, so no topological
/// ordering is needed. All state is reset at the start of each
/// conversion.
#[derive(Debug)]
pub struct MeshConverter {
    entities: Vec<Box<dyn StepEntity>>,
    next_id: EntityId,
    points: PointCache,
    directions: HashMap<[u64; 3], EntityId>,
    edges: HashMap<EdgeKey, EntityId>,
}

impl MeshConverter {
    /// Create a converter with empty caches.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
            points: PointCache::default(),
            directions: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// Append an entity built from the next free id.
    fn add<E, F>(&mut self, build: F) -> EntityId
    where
        E: StepEntity + 'static,
        F: FnOnce(EntityId) -> E,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.push(Box::new(build(id)));
        id
    }

    /// Get or create the `CARTESIAN_POINT` for `p`.
    ///
    /// Any cached point within `POINT_TOLERANCE` (Euclidean) is reused.
    fn point(&mut self, p: Point3) -> EntityId {
        if let Some(id) = self.points.find(&p) {
            return id;
        }
        let id = self.add(|id| CartesianPoint {
            id,
            name: String::new(),
            coordinates: vec![p.x, p.y, p.z],
        });
        self.points.insert(p, id);
        id
    }

    /// Get or create the unit `DIRECTION` for `v`.
    ///
    /// The input is normalized before keying, so two vectors differing
    /// only in magnitude collapse to one entity.
    fn direction(&mut self, v: Vec3) -> EntityId {
        let n = v.normalize();
        let d = Vec3::new(canon_zero(n.x), canon_zero(n.y), canon_zero(n.z));
        let key = [d.x.to_bits(), d.y.to_bits(), d.z.to_bits()];
        if let Some(&id) = self.directions.get(&key) {
            return id;
        }
        let id = self.add(|id| Direction {
            id,
            name: String::new(),
            direction_ratios: vec![d.x, d.y, d.z],
        });
        self.directions.insert(key, id);
        id
    }

    /// Create an `AXIS2_PLACEMENT_3D` from an origin and two axes.
    fn axis2_placement(&mut self, origin: Point3, z_axis: Vec3, x_axis: Vec3) -> EntityId {
        let location = self.point(origin);
        let axis = self.direction(z_axis);
        let ref_direction = self.direction(x_axis);
        self.add(|id| Axis2Placement3d {
            id,
            name: String::new(),
            location,
            axis,
            ref_direction,
        })
    }

    /// Create a `VERTEX_POINT` over the (cached) point for `p`.
    fn vertex_point(&mut self, p: Point3) -> EntityId {
        let vertex_geometry = self.point(p);
        self.add(|id| VertexPoint {
            id,
            name: String::new(),
            vertex_geometry,
        })
    }

    /// Get or create the `EDGE_CURVE` between `v1` and `v2`.
    ///
    /// The cache is keyed on the unordered endpoint pair, so the edge id
    /// is shared by every triangle touching it regardless of traversal
    /// direction. A miss builds the vertices, the supporting `LINE`
    /// (direction and magnitude from `v2 - v1`), and the edge itself.
    fn edge_curve(&mut self, v1: Point3, v2: Point3) -> EntityId {
        let key = EdgeKey::new(&v1, &v2);
        if let Some(&id) = self.edges.get(&key) {
            return id;
        }

        let edge_start = self.vertex_point(v1);
        let edge_end = self.vertex_point(v2);

        let pnt = self.point(v1);
        let span = v2 - v1;
        let orientation = self.direction(span);
        let vector = self.add(|id| Vector {
            id,
            name: String::new(),
            orientation,
            magnitude: span.norm(),
        });
        let line = self.add(|id| Line {
            id,
            name: String::new(),
            pnt,
            dir: vector,
        });

        let edge = self.add(|id| EdgeCurve {
            id,
            name: String::new(),
            edge_start,
            edge_end,
            edge_geometry: line,
            same_sense: true,
        });
        self.edges.insert(key, edge);
        edge
    }

    /// Create the `ADVANCED_FACE` for one triangle.
    fn triangle_face(&mut self, t: &Triangle3) -> EntityId {
        let [v0, v1, v2] = t.0;

        let edges = [
            self.edge_curve(v0, v1),
            self.edge_curve(v1, v2),
            self.edge_curve(v2, v0),
        ];
        let edge_list = edges.map(|edge_element| {
            self.add(|id| OrientedEdge {
                id,
                name: String::new(),
                edge_element,
                orientation: true,
            })
        });

        let bound = self.add(|id| EdgeLoop {
            id,
            name: String::new(),
            edge_list: edge_list.to_vec(),
        });
        let outer_bound = self.add(|id| FaceOuterBound {
            id,
            name: String::new(),
            bound,
            orientation: true,
        });

        // Plane frame: origin at v0, z along the face normal, x along
        // the first edge.
        let position = self.axis2_placement(v0, t.normal(), v1 - v0);
        let face_geometry = self.add(|id| Plane {
            id,
            name: String::new(),
            position,
        });

        self.add(|id| AdvancedFace {
            id,
            name: String::new(),
            bounds: vec![outer_bound],
            face_geometry,
            same_sense: true,
        })
    }

    /// Convert a triangle mesh into the complete DATA-section entity
    /// list for a single manifold-solid-B-rep-backed product.
    ///
    /// Degenerate triangles are skipped silently; an empty (or fully
    /// degenerate) mesh still yields a structurally complete graph with
    /// an empty shell. The conversion is deterministic: a fixed triangle
    /// order produces a byte-identical entity list.
    pub fn convert_mesh(&mut self, mesh: &[Triangle3], name: &str) -> Vec<Box<dyn StepEntity>> {
        info!(triangles = mesh.len(), "converting mesh to STEP entities");

        self.entities.clear();
        self.next_id = 1;
        self.points.clear();
        self.directions.clear();
        self.edges.clear();

        let app_context = self.add(|id| ApplicationContext {
            id,
            application: "sdfx STEP Writer".into(),
        });

        let length_unit = self.add(|id| LengthUnit { id });
        let plane_angle_unit = self.add(|id| PlaneAngleUnit { id });
        let solid_angle_unit = self.add(|id| SolidAngleUnit { id });

        let uncertainty = self.add(|id| UncertaintyMeasureWithUnit {
            id,
            value: 1e-6,
            unit: length_unit,
            name: "DISTANCE_ACCURACY_VALUE".into(),
            description: "Maximum model space distance between geometric entities".into(),
        });

        let geom_context = self.add(|id| GeometricRepresentationContext {
            id,
            context_identifier: String::new(),
            context_type: "3D".into(),
            coordinate_space_dimension: 3,
            uncertainty: vec![uncertainty],
            units: vec![length_unit, plane_angle_unit, solid_angle_unit],
        });

        let product_context = self.add(|id| ProductContext {
            id,
            name: String::new(),
            frame_of_reference: app_context,
            discipline_type: "mechanical".into(),
        });
        let product = self.add(|id| Product {
            id,
            name: name.into(),
            description: "Generated from sdfx".into(),
            frame_of_reference: vec![product_context],
        });
        let formation = self.add(|id| ProductDefinitionFormation {
            id,
            description: String::new(),
            of_product: product,
        });
        let definition_context = self.add(|id| ProductDefinitionContext {
            id,
            name: String::new(),
            frame_of_reference: app_context,
            life_cycle_stage: "design".into(),
        });
        let definition = self.add(|id| ProductDefinition {
            id,
            description: String::new(),
            formation,
            frame_of_reference: definition_context,
        });
        let definition_shape = self.add(|id| ProductDefinitionShape {
            id,
            name: String::new(),
            description: String::new(),
            definition,
        });

        let mut faces = Vec::with_capacity(mesh.len());
        for triangle in mesh {
            if !triangle.degenerate(DEGENERACY_TOLERANCE) {
                faces.push(self.triangle_face(triangle));
            }
        }
        debug!(
            faces = faces.len(),
            skipped = mesh.len() - faces.len(),
            "built triangle faces"
        );

        let shell = self.add(|id| ClosedShell {
            id,
            name: String::new(),
            faces,
        });
        let brep = self.add(|id| ManifoldSolidBrep {
            id,
            name: String::new(),
            outer: shell,
        });

        let placement = self.axis2_placement(
            Point3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        );

        let representation = self.add(|id| AdvancedBrepShapeRepresentation {
            id,
            name: String::new(),
            items: vec![brep, placement],
            context_of_items: geom_context,
        });
        self.add(|id| ShapeDefinitionRepresentation {
            id,
            definition: definition_shape,
            used_representation: representation,
        });

        info!(entities = self.entities.len(), "conversion complete");
        std::mem::take(&mut self.entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle3 {
        Triangle3::new(
            p(a[0], a[1], a[2]),
            p(b[0], b[1], b[2]),
            p(c[0], c[1], c[2]),
        )
    }

    fn convert(mesh: &[Triangle3]) -> Vec<Box<dyn StepEntity>> {
        MeshConverter::new().convert_mesh(mesh, "test")
    }

    fn count(entities: &[Box<dyn StepEntity>], keyword: &str) -> usize {
        let tag = format!("={keyword}(");
        entities
            .iter()
            .filter(|e| e.to_step().contains(&tag))
            .count()
    }

    #[test]
    fn test_ids_are_consecutive_from_one() {
        let entities = convert(&[tri([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])]);
        for (i, e) in entities.iter().enumerate() {
            assert_eq!(e.id(), i as EntityId + 1);
        }
    }

    #[test]
    fn test_single_triangle() {
        let entities = convert(&[tri([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])]);
        assert_eq!(count(&entities, "ADVANCED_FACE"), 1);
        assert_eq!(count(&entities, "CARTESIAN_POINT"), 3);
        assert_eq!(count(&entities, "EDGE_CURVE"), 3);
        assert_eq!(count(&entities, "CLOSED_SHELL"), 1);
        assert_eq!(count(&entities, "MANIFOLD_SOLID_BREP"), 1);
        assert_eq!(count(&entities, "SHAPE_DEFINITION_REPRESENTATION"), 1);

        // The face plane's axes: z along +Z, x along +X.
        let steps: Vec<_> = entities.iter().map(|e| e.to_step()).collect();
        assert!(steps
            .iter()
            .any(|s| s.contains("=DIRECTION('',(0.000000,0.000000,1.000000));")));
        assert!(steps
            .iter()
            .any(|s| s.contains("=DIRECTION('',(1.000000,0.000000,0.000000));")));
    }

    #[test]
    fn test_shared_edge_dedups() {
        let entities = convert(&[
            tri([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            tri([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]),
        ]);
        assert_eq!(count(&entities, "ADVANCED_FACE"), 2);
        assert_eq!(count(&entities, "CARTESIAN_POINT"), 4);
        assert_eq!(count(&entities, "EDGE_CURVE"), 5);
    }

    #[test]
    fn test_vertex_only_contact_shares_no_edges() {
        let entities = convert(&[
            tri([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            tri([0.0; 3], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]),
        ]);
        assert_eq!(count(&entities, "ADVANCED_FACE"), 2);
        assert_eq!(count(&entities, "CARTESIAN_POINT"), 5);
        assert_eq!(count(&entities, "EDGE_CURVE"), 6);
    }

    #[test]
    fn test_degenerate_triangle_is_skipped() {
        let entities = convert(&[tri([0.0; 3], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0])]);
        assert_eq!(count(&entities, "ADVANCED_FACE"), 0);
        assert!(entities
            .iter()
            .any(|e| e.to_step().contains("=CLOSED_SHELL('',());")));
    }

    #[test]
    fn test_tolerance_collapsed_vertex_is_degenerate() {
        let entities = convert(&[tri([0.0; 3], [1e-9, 0.0, 0.0], [0.0, 1.0, 0.0])]);
        assert_eq!(count(&entities, "ADVANCED_FACE"), 0);
    }

    #[test]
    fn test_duplicate_triangles_share_edges_not_faces() {
        let t = tri([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let entities = convert(&[t, t]);
        assert_eq!(count(&entities, "ADVANCED_FACE"), 2);
        assert_eq!(count(&entities, "EDGE_CURVE"), 3);
        assert_eq!(count(&entities, "ORIENTED_EDGE"), 6);
    }

    #[test]
    fn test_opposite_winding_shares_edges() {
        let entities = convert(&[
            tri([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            tri([0.0; 3], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        ]);
        assert_eq!(count(&entities, "ADVANCED_FACE"), 2);
        assert_eq!(count(&entities, "EDGE_CURVE"), 3);
    }

    #[test]
    fn test_points_dedup_within_tolerance() {
        let entities = convert(&[
            tri([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            tri([1e-7, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        ]);
        // (1e-7, 0, 0) aliases (0, 0, 0); four distinct corners remain.
        assert_eq!(count(&entities, "CARTESIAN_POINT"), 4);
    }

    #[test]
    fn test_directions_dedup_after_normalization() {
        // Both triangles face +Z and share the +X first edge direction;
        // magnitudes differ, so dedup must happen post-normalization.
        let entities = convert(&[
            tri([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            tri([5.0, 5.0, 0.0], [7.0, 5.0, 0.0], [5.0, 7.0, 0.0]),
        ]);
        let z = "=DIRECTION('',(0.000000,0.000000,1.000000));";
        let count_z = entities
            .iter()
            .filter(|e| e.to_step().contains(z))
            .count();
        assert_eq!(count_z, 1);
    }

    #[test]
    fn test_empty_mesh_has_complete_skeleton() {
        let entities = convert(&[]);
        assert_eq!(count(&entities, "ADVANCED_FACE"), 0);
        assert_eq!(count(&entities, "CLOSED_SHELL"), 1);
        assert_eq!(count(&entities, "MANIFOLD_SOLID_BREP"), 1);
        assert_eq!(count(&entities, "APPLICATION_CONTEXT"), 1);
        assert_eq!(count(&entities, "UNCERTAINTY_MEASURE_WITH_UNIT"), 1);
        assert_eq!(count(&entities, "SHAPE_DEFINITION_REPRESENTATION"), 1);
    }

    #[test]
    fn test_product_name_is_emitted() {
        let entities = MeshConverter::new().convert_mesh(&[], "Widget");
        assert!(entities
            .iter()
            .any(|e| e.to_step() == "#8=PRODUCT('','Widget','Generated from sdfx',(#7));"));
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let mesh = [
            tri([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            tri([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]),
        ];
        let render = |entities: Vec<Box<dyn StepEntity>>| {
            entities
                .iter()
                .map(|e| e.to_step())
                .collect::<Vec<_>>()
                .join("\n")
        };
        let mut converter = MeshConverter::new();
        let first = render(converter.convert_mesh(&mesh, "test"));
        let second = render(converter.convert_mesh(&mesh, "test"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_optimize_mesh_filters_and_is_idempotent() {
        let mesh = [
            tri([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            tri([0.0; 3], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]),
        ];
        let once = optimize_mesh(&mesh);
        assert_eq!(once.len(), 1);
        let twice = optimize_mesh(&once);
        assert_eq!(once, twice);
    }
}
