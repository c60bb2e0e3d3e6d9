//! Unit and context entities.
//!
//! The unit entities and the geometric representation context use the
//! Part 21 complex-instance form: a parenthesised concatenation of
//! subtype invocations with no separating commas, spread over several
//! lines. Consumers rely on the line structure, so it is emitted exactly.

use super::{fmt_refs, fmt_scientific, EntityId, StepEntity};

/// Complex `LENGTH_UNIT` instance fixed to millimetres.
#[derive(Debug, Clone)]
pub struct LengthUnit {
    /// Entity id.
    pub id: EntityId,
}

impl StepEntity for LengthUnit {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=(LENGTH_UNIT()\nNAMED_UNIT(*)\nSI_UNIT(.MILLI.,.METRE.));",
            self.id
        )
    }
}

/// Complex `PLANE_ANGLE_UNIT` instance fixed to radians.
#[derive(Debug, Clone)]
pub struct PlaneAngleUnit {
    /// Entity id.
    pub id: EntityId,
}

impl StepEntity for PlaneAngleUnit {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=(NAMED_UNIT(*)\nPLANE_ANGLE_UNIT()\nSI_UNIT($,.RADIAN.));",
            self.id
        )
    }
}

/// Complex `SOLID_ANGLE_UNIT` instance fixed to steradians.
#[derive(Debug, Clone)]
pub struct SolidAngleUnit {
    /// Entity id.
    pub id: EntityId,
}

impl StepEntity for SolidAngleUnit {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=(NAMED_UNIT(*)\nSI_UNIT($,.STERADIAN.)\nSOLID_ANGLE_UNIT());",
            self.id
        )
    }
}

/// `UNCERTAINTY_MEASURE_WITH_UNIT`: the model-space distance accuracy.
///
/// The value renders in scientific notation wrapped in `LENGTH_MEASURE`,
/// unlike every other real in the file.
#[derive(Debug, Clone)]
pub struct UncertaintyMeasureWithUnit {
    /// Entity id.
    pub id: EntityId,
    /// Accuracy value, in the referenced unit.
    pub value: f64,
    /// Reference to the unit entity.
    pub unit: EntityId,
    /// Measure name, e.g. `DISTANCE_ACCURACY_VALUE`.
    pub name: String,
    /// Measure description.
    pub description: String,
}

impl StepEntity for UncertaintyMeasureWithUnit {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=UNCERTAINTY_MEASURE_WITH_UNIT(LENGTH_MEASURE({}),#{},'{}','{}');",
            self.id,
            fmt_scientific(self.value),
            self.unit,
            self.name,
            self.description
        )
    }
}

/// Complex `GEOMETRIC_REPRESENTATION_CONTEXT` instance combining the
/// coordinate dimension, uncertainty assignment, and unit assignment.
#[derive(Debug, Clone)]
pub struct GeometricRepresentationContext {
    /// Entity id.
    pub id: EntityId,
    /// Context identifier (usually empty).
    pub context_identifier: String,
    /// Context type, e.g. `3D`.
    pub context_type: String,
    /// Coordinate space dimension.
    pub coordinate_space_dimension: i64,
    /// References to `UNCERTAINTY_MEASURE_WITH_UNIT` entities.
    pub uncertainty: Vec<EntityId>,
    /// References to the unit entities.
    pub units: Vec<EntityId>,
}

impl StepEntity for GeometricRepresentationContext {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=(GEOMETRIC_REPRESENTATION_CONTEXT({})\nGLOBAL_UNCERTAINTY_ASSIGNED_CONTEXT(({}))\nGLOBAL_UNIT_ASSIGNED_CONTEXT(({}))\nREPRESENTATION_CONTEXT('{}','{}'));",
            self.id,
            self.coordinate_space_dimension,
            fmt_refs(&self.uncertainty),
            fmt_refs(&self.units),
            self.context_identifier,
            self.context_type
        )
    }
}
