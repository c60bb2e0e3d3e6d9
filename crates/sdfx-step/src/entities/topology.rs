//! Topology entities: vertex, edge, loop, face, shell, and solid.

use super::{fmt_bool, fmt_refs, EntityId, StepEntity};

/// `VERTEX_POINT`: a topological vertex at a cartesian point.
#[derive(Debug, Clone)]
pub struct VertexPoint {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to a `CARTESIAN_POINT`.
    pub vertex_geometry: EntityId,
}

impl StepEntity for VertexPoint {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=VERTEX_POINT('{}',#{});",
            self.id, self.name, self.vertex_geometry
        )
    }
}

/// `EDGE_CURVE`: a topological edge between two vertices along a curve.
#[derive(Debug, Clone)]
pub struct EdgeCurve {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to the start `VERTEX_POINT`.
    pub edge_start: EntityId,
    /// Reference to the end `VERTEX_POINT`.
    pub edge_end: EntityId,
    /// Reference to the underlying curve.
    pub edge_geometry: EntityId,
    /// Whether the curve parameterization runs start to end.
    pub same_sense: bool,
}

impl StepEntity for EdgeCurve {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=EDGE_CURVE('{}',#{},#{},#{},{});",
            self.id,
            self.name,
            self.edge_start,
            self.edge_end,
            self.edge_geometry,
            fmt_bool(self.same_sense)
        )
    }
}

/// `ORIENTED_EDGE`: an edge with a traversal direction.
///
/// The start and end vertex slots are derived from the underlying edge,
/// so they render as the `*` wildcard.
#[derive(Debug, Clone)]
pub struct OrientedEdge {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to an `EDGE_CURVE`.
    pub edge_element: EntityId,
    /// Traversal direction relative to the edge.
    pub orientation: bool,
}

impl StepEntity for OrientedEdge {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=ORIENTED_EDGE('{}',*,*,#{},{});",
            self.id,
            self.name,
            self.edge_element,
            fmt_bool(self.orientation)
        )
    }
}

/// `EDGE_LOOP`: a closed cycle of oriented edges.
#[derive(Debug, Clone)]
pub struct EdgeLoop {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// References to `ORIENTED_EDGE`s in traversal order.
    pub edge_list: Vec<EntityId>,
}

impl StepEntity for EdgeLoop {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=EDGE_LOOP('{}',({}));",
            self.id,
            self.name,
            fmt_refs(&self.edge_list)
        )
    }
}

/// `FACE_OUTER_BOUND`: the distinguished outer bound of a face.
#[derive(Debug, Clone)]
pub struct FaceOuterBound {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to an `EDGE_LOOP`.
    pub bound: EntityId,
    /// Whether the loop direction agrees with the face normal.
    pub orientation: bool,
}

impl StepEntity for FaceOuterBound {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=FACE_OUTER_BOUND('{}',#{},{});",
            self.id,
            self.name,
            self.bound,
            fmt_bool(self.orientation)
        )
    }
}

/// `FACE_BOUND`: an inner bound (hole) of a face.
#[derive(Debug, Clone)]
pub struct FaceBound {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to an `EDGE_LOOP`.
    pub bound: EntityId,
    /// Whether the loop direction agrees with the face normal.
    pub orientation: bool,
}

impl StepEntity for FaceBound {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=FACE_BOUND('{}',#{},{});",
            self.id,
            self.name,
            self.bound,
            fmt_bool(self.orientation)
        )
    }
}

/// `ADVANCED_FACE`: a face bounded by edge loops over a surface.
#[derive(Debug, Clone)]
pub struct AdvancedFace {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// References to `FACE_OUTER_BOUND` / `FACE_BOUND` entities.
    pub bounds: Vec<EntityId>,
    /// Reference to the surface geometry.
    pub face_geometry: EntityId,
    /// Whether the face normal agrees with the surface normal.
    pub same_sense: bool,
}

impl StepEntity for AdvancedFace {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=ADVANCED_FACE('{}',({}),#{},{});",
            self.id,
            self.name,
            fmt_refs(&self.bounds),
            self.face_geometry,
            fmt_bool(self.same_sense)
        )
    }
}

/// `CLOSED_SHELL`: an ordered set of faces bounding a volume.
#[derive(Debug, Clone)]
pub struct ClosedShell {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// References to `ADVANCED_FACE` entities.
    pub faces: Vec<EntityId>,
}

impl StepEntity for ClosedShell {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=CLOSED_SHELL('{}',({}));",
            self.id,
            self.name,
            fmt_refs(&self.faces)
        )
    }
}

/// `MANIFOLD_SOLID_BREP`: a solid bounded by a closed shell.
#[derive(Debug, Clone)]
pub struct ManifoldSolidBrep {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to the outer `CLOSED_SHELL`.
    pub outer: EntityId,
}

impl StepEntity for ManifoldSolidBrep {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=MANIFOLD_SOLID_BREP('{}',#{});",
            self.id, self.name, self.outer
        )
    }
}
