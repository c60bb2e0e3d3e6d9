//! Curve geometry entities.
//!
//! The triangle export path only constructs `LINE`; `CIRCLE` and
//! `B_SPLINE_CURVE_WITH_KNOTS` are part of the entity vocabulary for
//! curved-edge support.

use super::{fmt_bool, fmt_ints, fmt_real, fmt_reals, fmt_refs, EntityId, StepEntity};

/// `LINE`: an unbounded straight line through a point along a vector.
#[derive(Debug, Clone)]
pub struct Line {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to a `CARTESIAN_POINT`.
    pub pnt: EntityId,
    /// Reference to a `VECTOR`.
    pub dir: EntityId,
}

impl StepEntity for Line {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!("#{}=LINE('{}',#{},#{});", self.id, self.name, self.pnt, self.dir)
    }
}

/// `CIRCLE`: a circle in the plane of an axis placement.
#[derive(Debug, Clone)]
pub struct Circle {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to an `AXIS2_PLACEMENT_3D`.
    pub position: EntityId,
    /// Circle radius.
    pub radius: f64,
}

impl StepEntity for Circle {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=CIRCLE('{}',#{},{});",
            self.id,
            self.name,
            self.position,
            fmt_real(self.radius)
        )
    }
}

/// `B_SPLINE_CURVE_WITH_KNOTS`: a NURBS curve without weights.
#[derive(Debug, Clone)]
pub struct BSplineCurveWithKnots {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Polynomial degree.
    pub degree: i64,
    /// References to `CARTESIAN_POINT` control points.
    pub control_points_list: Vec<EntityId>,
    /// Curve form enumeration, e.g. `.UNSPECIFIED.`.
    pub curve_form: String,
    /// Whether the curve is closed.
    pub closed_curve: bool,
    /// Whether the curve self-intersects.
    pub self_intersect: bool,
    /// Knot multiplicities, parallel to `knots`.
    pub knot_multiplicities: Vec<i64>,
    /// Knot values.
    pub knots: Vec<f64>,
    /// Knot spec enumeration, e.g. `.UNSPECIFIED.`.
    pub knot_spec: String,
}

impl StepEntity for BSplineCurveWithKnots {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=B_SPLINE_CURVE_WITH_KNOTS('{}',{},({}),{},{},{},({}),({}),{});",
            self.id,
            self.name,
            self.degree,
            fmt_refs(&self.control_points_list),
            self.curve_form,
            fmt_bool(self.closed_curve),
            fmt_bool(self.self_intersect),
            fmt_ints(&self.knot_multiplicities),
            fmt_reals(&self.knots),
            self.knot_spec
        )
    }
}
