//! Fundamental geometry entities: points, directions, vectors, placements.

use super::{fmt_real, fmt_reals, EntityId, StepEntity};

/// `CARTESIAN_POINT`: a position given by its coordinates.
#[derive(Debug, Clone)]
pub struct CartesianPoint {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Coordinates, `(x, y, z)` for the 3D case.
    pub coordinates: Vec<f64>,
}

impl StepEntity for CartesianPoint {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=CARTESIAN_POINT('{}',({}));",
            self.id,
            self.name,
            fmt_reals(&self.coordinates)
        )
    }
}

/// `DIRECTION`: a unit direction given by its ratios.
///
/// The converter only ever stores normalized ratios here; the entity
/// itself renders whatever it is given.
#[derive(Debug, Clone)]
pub struct Direction {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Direction ratios, `(dx, dy, dz)`.
    pub direction_ratios: Vec<f64>,
}

impl StepEntity for Direction {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=DIRECTION('{}',({}));",
            self.id,
            self.name,
            fmt_reals(&self.direction_ratios)
        )
    }
}

/// `VECTOR`: a direction scaled by a magnitude.
#[derive(Debug, Clone)]
pub struct Vector {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to a `DIRECTION`.
    pub orientation: EntityId,
    /// Vector length.
    pub magnitude: f64,
}

impl StepEntity for Vector {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=VECTOR('{}',#{},{});",
            self.id,
            self.name,
            self.orientation,
            fmt_real(self.magnitude)
        )
    }
}

/// `AXIS2_PLACEMENT_3D`: a right-handed local coordinate system: an
/// origin, a z axis, and an x reference direction.
#[derive(Debug, Clone)]
pub struct Axis2Placement3d {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to a `CARTESIAN_POINT`.
    pub location: EntityId,
    /// Reference to the z-axis `DIRECTION`.
    pub axis: EntityId,
    /// Reference to the x-axis `DIRECTION`.
    pub ref_direction: EntityId,
}

impl StepEntity for Axis2Placement3d {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=AXIS2_PLACEMENT_3D('{}',#{},#{},#{});",
            self.id, self.name, self.location, self.axis, self.ref_direction
        )
    }
}
