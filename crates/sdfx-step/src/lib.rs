#![warn(missing_docs)]

//! STEP AP214 (ISO 10303-21) file generation for triangle meshes.
//!
//! Converts a triangle soup (typically produced by isosurface extraction
//! from a signed-distance-field model) into a boundary representation
//! (B-rep) and writes it as a Part 21 text file under the
//! `AUTOMOTIVE_DESIGN` schema, so mainstream CAD tools can open geometry
//! that was authored as implicit surfaces.
//!
//! Every face in the output is an `ADVANCED_FACE` bounded by straight
//! edges over a `PLANE`; no analytic surfaces are reconstructed. Points,
//! directions, and edges are deduplicated so the entity graph is compact
//! and topologically consistent.
//!
//! # Example
//!
//! ```no_run
//! use sdfx_mesh::{Point3, Triangle3};
//! use sdfx_step::StepWriter;
//!
//! let tri = Triangle3::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! );
//! let mut writer = StepWriter::create("face.step").unwrap();
//! writer.write_mesh(&[tri], "face").unwrap();
//! writer.close().unwrap();
//! ```

pub mod entities;

mod convert;
mod error;
mod reader;
mod stream;
mod writer;

pub use convert::{optimize_mesh, MeshConverter, DEGENERACY_TOLERANCE, POINT_TOLERANCE};
pub use error::StepError;
pub use reader::read_step;
pub use stream::{StreamWriter, TriangleSink, BATCH_QUEUE_CAPACITY};
pub use writer::StepWriter;
