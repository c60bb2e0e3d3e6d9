#![warn(missing_docs)]

//! Renderer-facing STEP export drivers.
//!
//! A renderer tessellates an implicit-surface model into triangle
//! batches; the drivers here wire it to the streaming STEP writer and
//! apply the export options. The model type is opaque to this crate;
//! only the renderer ever evaluates it.
//!
//! # Example
//!
//! ```no_run
//! use sdfx_render::{to_step_with_options, ExportOptions, Render3, TriangleSink};
//!
//! struct UnitCube;
//! struct MyRenderer;
//!
//! impl Render3<UnitCube> for MyRenderer {
//!     fn render(&self, _model: &UnitCube, sink: &TriangleSink) {
//!         // push triangle batches, then drop the sink
//!         let _ = sink;
//!     }
//!     fn info(&self, _model: &UnitCube) -> String {
//!         "unit cube".into()
//!     }
//! }
//!
//! let opts = ExportOptions {
//!     author: "Jane".into(),
//!     ..ExportOptions::default()
//! };
//! to_step_with_options(&UnitCube, "cube.step", &MyRenderer, &opts).unwrap();
//! ```

use std::path::Path;

use sdfx_mesh::Triangle3;
use sdfx_step::{StepError, StepWriter, StreamWriter};
use tracing::info;

pub use sdfx_step::TriangleSink;

/// A 3D rendering method: turns a model into triangle batches.
///
/// Implementations (e.g. a marching-cubes octree sampler) push batches
/// into the sink as they are produced and must drop every sink clone
/// when done; that closes the stream.
pub trait Render3<S: ?Sized> {
    /// Tessellate `model`, pushing triangle batches into `sink`.
    fn render(&self, model: &S, sink: &TriangleSink);

    /// One-line description of the render pass, for progress output.
    fn info(&self, model: &S) -> String;
}

/// Options for STEP export.
///
/// Empty fields take the writer defaults; if exactly one of `author` and
/// `organization` is given, the other is written as `Unknown`.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Author written to the `FILE_NAME` header entry.
    pub author: String,
    /// Organization written to the `FILE_NAME` header entry.
    pub organization: String,
    /// Name written to the `PRODUCT` entity; `sdfx_model` if empty.
    pub product_name: String,
}

impl ExportOptions {
    fn product_name(&self) -> &str {
        if self.product_name.is_empty() {
            "sdfx_model"
        } else {
            &self.product_name
        }
    }

    fn author_slots(&self) -> Option<(&str, &str)> {
        if self.author.is_empty() && self.organization.is_empty() {
            return None;
        }
        let author = if self.author.is_empty() {
            "Unknown"
        } else {
            &self.author
        };
        let organization = if self.organization.is_empty() {
            "Unknown"
        } else {
            &self.organization
        };
        Some((author, organization))
    }
}

/// Render a model to a STEP AP214 file with default options.
pub fn to_step<S, R>(model: &S, path: impl AsRef<Path>, renderer: &R) -> Result<(), StepError>
where
    S: ?Sized,
    R: Render3<S>,
{
    to_step_with_options(model, path, renderer, &ExportOptions::default())
}

/// Render a model to a STEP AP214 file.
///
/// The renderer runs on the calling thread while the collector drains
/// its batches concurrently; the file is converted and written once the
/// stream closes.
pub fn to_step_with_options<S, R>(
    model: &S,
    path: impl AsRef<Path>,
    renderer: &R,
    opts: &ExportOptions,
) -> Result<(), StepError>
where
    S: ?Sized,
    R: Render3<S>,
{
    let path = path.as_ref();
    info!(path = %path.display(), pass = %renderer.info(model), "rendering STEP output");

    let (mut stream, sink) = StreamWriter::create(path)?;
    if let Some((author, organization)) = opts.author_slots() {
        stream.set_author(author, organization);
    }

    renderer.render(model, &sink);
    drop(sink);

    stream.finalize(opts.product_name())?;
    info!(path = %path.display(), "STEP export completed");
    Ok(())
}

/// Write a pre-computed triangle mesh to a STEP file with default
/// options.
pub fn save_step(path: impl AsRef<Path>, mesh: &[Triangle3]) -> Result<(), StepError> {
    save_step_with_options(path, mesh, &ExportOptions::default())
}

/// Write a pre-computed triangle mesh to a STEP file.
pub fn save_step_with_options(
    path: impl AsRef<Path>,
    mesh: &[Triangle3],
    opts: &ExportOptions,
) -> Result<(), StepError> {
    let path = path.as_ref();
    let mut writer = StepWriter::create(path)?;
    if let Some((author, organization)) = opts.author_slots() {
        writer.set_author(author, organization);
    }
    writer.write_mesh(mesh, opts.product_name())?;
    writer.close()?;
    info!(path = %path.display(), "STEP export completed");
    Ok(())
}

/// Load a STEP file as a triangle mesh.
///
/// Import is a future collaborator; this always returns
/// [`StepError::ImportUnsupported`].
pub fn load_step(path: impl AsRef<Path>) -> Result<Vec<Triangle3>, StepError> {
    sdfx_step::read_step(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdfx_mesh::Point3;

    /// Renderer that emits a fixed triangle list in two batches.
    struct FixtureRenderer {
        triangles: Vec<Triangle3>,
    }

    impl FixtureRenderer {
        fn quad() -> Self {
            let p = Point3::new;
            Self {
                triangles: vec![
                    Triangle3::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)),
                    Triangle3::new(p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0)),
                ],
            }
        }
    }

    impl Render3<()> for FixtureRenderer {
        fn render(&self, _model: &(), sink: &TriangleSink) {
            for triangle in &self.triangles {
                sink.push(vec![*triangle]);
            }
        }

        fn info(&self, _model: &()) -> String {
            format!("fixture ({} triangles)", self.triangles.len())
        }
    }

    fn file_name_line(out: &str) -> &str {
        out.lines().find(|l| l.starts_with("FILE_NAME(")).unwrap()
    }

    #[test]
    fn test_to_step_renders_all_batches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quad.step");
        to_step(&(), &path, &FixtureRenderer::quad()).unwrap();

        let out = std::fs::read_to_string(&path).unwrap();
        assert_eq!(out.matches("=ADVANCED_FACE(").count(), 2);
        assert!(out.contains("=PRODUCT('','sdfx_model',"));
        assert!(file_name_line(&out).contains("('sdfx User'),('sdfx Organization')"));
    }

    #[test]
    fn test_author_without_organization_defaults_to_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("authored.step");
        let opts = ExportOptions {
            author: "Jane".into(),
            organization: String::new(),
            product_name: "Widget".into(),
        };
        to_step_with_options(&(), &path, &FixtureRenderer::quad(), &opts).unwrap();

        let out = std::fs::read_to_string(&path).unwrap();
        assert!(file_name_line(&out).contains("('Jane'),('Unknown')"));
        assert!(out.contains("=PRODUCT('','Widget',"));
    }

    #[test]
    fn test_organization_without_author_defaults_to_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("org.step");
        let opts = ExportOptions {
            organization: "ACME Corp".into(),
            ..ExportOptions::default()
        };
        save_step_with_options(&path, &[], &opts).unwrap();

        let out = std::fs::read_to_string(&path).unwrap();
        assert!(file_name_line(&out).contains("('Unknown'),('ACME Corp')"));
    }

    #[test]
    fn test_save_step_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.step");
        let mesh = FixtureRenderer::quad().triangles;
        save_step(&path, &mesh).unwrap();

        let out = std::fs::read_to_string(&path).unwrap();
        assert_eq!(out.matches("=ADVANCED_FACE(").count(), 2);
        assert!(file_name_line(&out).contains("('sdfx User'),('sdfx Organization')"));
        assert!(out.contains("=PRODUCT('','sdfx_model',"));
    }

    #[test]
    fn test_load_step_is_unsupported() {
        let err = load_step("missing.step").unwrap_err();
        assert!(matches!(err, StepError::ImportUnsupported));
    }

    #[test]
    fn test_create_failure_propagates_io_error() {
        let err = save_step("/nonexistent-dir/out.step", &[]).unwrap_err();
        assert!(matches!(err, StepError::Io(_)));
    }
}
