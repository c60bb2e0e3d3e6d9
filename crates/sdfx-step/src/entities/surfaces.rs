//! Surface geometry entities.
//!
//! Triangle faces always sit on a `PLANE`; the analytic surface kinds are
//! part of the vocabulary for exporters that recognize higher-order shapes.

use super::{fmt_real, EntityId, StepEntity};

/// `PLANE`: an unbounded plane positioned by an axis placement.
#[derive(Debug, Clone)]
pub struct Plane {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to an `AXIS2_PLACEMENT_3D`.
    pub position: EntityId,
}

impl StepEntity for Plane {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!("#{}=PLANE('{}',#{});", self.id, self.name, self.position)
    }
}

/// `CYLINDRICAL_SURFACE`: a cylinder around the placement's z axis.
#[derive(Debug, Clone)]
pub struct CylindricalSurface {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to an `AXIS2_PLACEMENT_3D`.
    pub position: EntityId,
    /// Cylinder radius.
    pub radius: f64,
}

impl StepEntity for CylindricalSurface {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=CYLINDRICAL_SURFACE('{}',#{},{});",
            self.id,
            self.name,
            self.position,
            fmt_real(self.radius)
        )
    }
}

/// `CONICAL_SURFACE`: a cone opening along the placement's z axis.
#[derive(Debug, Clone)]
pub struct ConicalSurface {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to an `AXIS2_PLACEMENT_3D`.
    pub position: EntityId,
    /// Radius at the placement origin.
    pub radius: f64,
    /// Half-angle of the cone, radians.
    pub semi_angle: f64,
}

impl StepEntity for ConicalSurface {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=CONICAL_SURFACE('{}',#{},{},{});",
            self.id,
            self.name,
            self.position,
            fmt_real(self.radius),
            fmt_real(self.semi_angle)
        )
    }
}

/// `SPHERICAL_SURFACE`: a sphere centered at the placement origin.
#[derive(Debug, Clone)]
pub struct SphericalSurface {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to an `AXIS2_PLACEMENT_3D`.
    pub position: EntityId,
    /// Sphere radius.
    pub radius: f64,
}

impl StepEntity for SphericalSurface {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=SPHERICAL_SURFACE('{}',#{},{});",
            self.id,
            self.name,
            self.position,
            fmt_real(self.radius)
        )
    }
}

/// `TOROIDAL_SURFACE`: a torus around the placement's z axis.
#[derive(Debug, Clone)]
pub struct ToroidalSurface {
    /// Entity id.
    pub id: EntityId,
    /// Entity name (usually empty).
    pub name: String,
    /// Reference to an `AXIS2_PLACEMENT_3D`.
    pub position: EntityId,
    /// Distance from the torus center to the tube center.
    pub major_radius: f64,
    /// Tube radius.
    pub minor_radius: f64,
}

impl StepEntity for ToroidalSurface {
    fn id(&self) -> EntityId {
        self.id
    }

    fn to_step(&self) -> String {
        format!(
            "#{}=TOROIDAL_SURFACE('{}',#{},{},{});",
            self.id,
            self.name,
            self.position,
            fmt_real(self.major_radius),
            fmt_real(self.minor_radius)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane() {
        let p = Plane {
            id: 11,
            name: String::new(),
            position: 10,
        };
        assert_eq!(p.to_step(), "#11=PLANE('',#10);");
    }

    #[test]
    fn test_cylindrical_surface() {
        let s = CylindricalSurface {
            id: 6,
            name: String::new(),
            position: 5,
            radius: 12.5,
        };
        assert_eq!(s.to_step(), "#6=CYLINDRICAL_SURFACE('',#5,12.500000);");
    }

    #[test]
    fn test_toroidal_surface() {
        let s = ToroidalSurface {
            id: 6,
            name: String::new(),
            position: 5,
            major_radius: 10.0,
            minor_radius: 2.0,
        };
        assert_eq!(s.to_step(), "#6=TOROIDAL_SURFACE('',#5,10.000000,2.000000);");
    }
}
