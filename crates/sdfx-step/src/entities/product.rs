//! Product hierarchy and representation entities.
//!
//! AP214 ties a shape to a product through a fixed chain:
//! `APPLICATION_CONTEXT` → `PRODUCT_CONTEXT` → `PRODUCT` →
//! `PRODUCT_DEFINITION_FORMATION` → `PRODUCT_DEFINITION` →
//! `PRODUCT_DEFINITION_SHAPE` → `SHAPE_DEFINITION_REPRESENTATION`.

use super::{fmt_refs, EntityId, StepEntity};

/// `APPLICATION_CONTEXT`: the application that produced the data.
#[derive(Debug, Clone)]
pub struct ApplicationContext {
    /// Entity id.
    pub id: EntityId,
    /// Application description.
    pub application: String,
}

impl StepEntity for ApplicationContext {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!("#{}=APPLICATION_CONTEXT('{}');", self.id, self.application)
    }
}

/// `PRODUCT_CONTEXT`: the engineering discipline a product belongs to.
#[derive(Debug, Clone)]
pub struct ProductContext {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to an `APPLICATION_CONTEXT`.
    pub frame_of_reference: EntityId,
    /// Discipline type, e.g. `mechanical`.
    pub discipline_type: String,
}

impl StepEntity for ProductContext {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=PRODUCT_CONTEXT('{}',#{},'{}');",
            self.id, self.name, self.frame_of_reference, self.discipline_type
        )
    }
}

/// `PRODUCT`: the exported product itself.
#[derive(Debug, Clone)]
pub struct Product {
    /// Entity id.
    pub id: EntityId,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// References to `PRODUCT_CONTEXT` entities.
    pub frame_of_reference: Vec<EntityId>,
}

impl StepEntity for Product {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=PRODUCT('','{}','{}',({}));",
            self.id,
            self.name,
            self.description,
            fmt_refs(&self.frame_of_reference)
        )
    }
}

/// `PRODUCT_DEFINITION_FORMATION`: a version of a product.
#[derive(Debug, Clone)]
pub struct ProductDefinitionFormation {
    /// Entity id.
    pub id: EntityId,
    /// Formation description.
    pub description: String,
    /// Reference to a `PRODUCT`.
    pub of_product: EntityId,
}

impl StepEntity for ProductDefinitionFormation {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=PRODUCT_DEFINITION_FORMATION('','{}',#{});",
            self.id, self.description, self.of_product
        )
    }
}

/// `PRODUCT_DEFINITION_CONTEXT`: the life-cycle stage of a definition.
#[derive(Debug, Clone)]
pub struct ProductDefinitionContext {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to an `APPLICATION_CONTEXT`.
    pub frame_of_reference: EntityId,
    /// Life-cycle stage, e.g. `design`.
    pub life_cycle_stage: String,
}

impl StepEntity for ProductDefinitionContext {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=PRODUCT_DEFINITION_CONTEXT('{}',#{},'{}');",
            self.id, self.name, self.frame_of_reference, self.life_cycle_stage
        )
    }
}

/// `PRODUCT_DEFINITION`: a product version in a life-cycle context.
#[derive(Debug, Clone)]
pub struct ProductDefinition {
    /// Entity id.
    pub id: EntityId,
    /// Definition description.
    pub description: String,
    /// Reference to a `PRODUCT_DEFINITION_FORMATION`.
    pub formation: EntityId,
    /// Reference to a `PRODUCT_DEFINITION_CONTEXT`.
    pub frame_of_reference: EntityId,
}

impl StepEntity for ProductDefinition {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=PRODUCT_DEFINITION('','{}',#{},#{});",
            self.id, self.description, self.formation, self.frame_of_reference
        )
    }
}

/// `PRODUCT_DEFINITION_SHAPE`: the shape aspect of a definition.
#[derive(Debug, Clone)]
pub struct ProductDefinitionShape {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Shape description.
    pub description: String,
    /// Reference to a `PRODUCT_DEFINITION`.
    pub definition: EntityId,
}

impl StepEntity for ProductDefinitionShape {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=PRODUCT_DEFINITION_SHAPE('{}','{}',#{});",
            self.id, self.name, self.description, self.definition
        )
    }
}

/// `SHAPE_DEFINITION_REPRESENTATION`: links a product definition shape
/// to its geometric representation.
#[derive(Debug, Clone)]
pub struct ShapeDefinitionRepresentation {
    /// Entity id.
    pub id: EntityId,
    /// Reference to a `PRODUCT_DEFINITION_SHAPE`.
    pub definition: EntityId,
    /// Reference to an `ADVANCED_BREP_SHAPE_REPRESENTATION`.
    pub used_representation: EntityId,
}

impl StepEntity for ShapeDefinitionRepresentation {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=SHAPE_DEFINITION_REPRESENTATION(#{},#{});",
            self.id, self.definition, self.used_representation
        )
    }
}

/// `ADVANCED_BREP_SHAPE_REPRESENTATION`: the representation holding the
/// solid and its placement, tied to a geometric context.
#[derive(Debug, Clone)]
pub struct AdvancedBrepShapeRepresentation {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// References to the representation items (solid and placement).
    pub items: Vec<EntityId>,
    /// Reference to a `GEOMETRIC_REPRESENTATION_CONTEXT`.
    pub context_of_items: EntityId,
}

impl StepEntity for AdvancedBrepShapeRepresentation {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=ADVANCED_BREP_SHAPE_REPRESENTATION('{}',({}),#{});",
            self.id,
            self.name,
            fmt_refs(&self.items),
            self.context_of_items
        )
    }
}
