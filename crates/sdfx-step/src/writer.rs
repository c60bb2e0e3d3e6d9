//! STEP Part 21 file writer: header, data, and footer emission.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sdfx_mesh::Triangle3;
use tracing::{debug, info};

use crate::convert::{optimize_mesh, MeshConverter};
use crate::entities::StepEntity;
use crate::error::StepError;

/// Writes a triangle mesh to a STEP AP214 file.
///
/// Output is buffered; the first write error is returned and the file is
/// closed (best effort) when the writer is dropped.
#[derive(Debug)]
pub struct StepWriter {
    writer: BufWriter<File>,
    converter: MeshConverter,
    file_name: String,
    author: String,
    organization: String,
}

impl StepWriter {
    /// Create the output file and a writer over it.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, StepError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            writer: BufWriter::new(file),
            converter: MeshConverter::new(),
            file_name,
            author: "sdfx User".into(),
            organization: "sdfx Organization".into(),
        })
    }

    /// Override the author and organization written to `FILE_NAME`.
    pub fn set_author(&mut self, name: impl Into<String>, organization: impl Into<String>) {
        self.author = name.into();
        self.organization = organization.into();
    }

    fn write_header(&mut self) -> Result<(), StepError> {
        let timestamp = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S");
        writeln!(self.writer, "ISO-10303-21;")?;
        writeln!(self.writer, "HEADER;")?;
        writeln!(self.writer, "FILE_DESCRIPTION(('STEP AP214'),'1');")?;
        writeln!(
            self.writer,
            "FILE_NAME('{}','{}',('{}'),('{}'),'sdfx STEP Writer','sdfx','');",
            self.file_name, timestamp, self.author, self.organization
        )?;
        writeln!(self.writer, "FILE_SCHEMA(('AUTOMOTIVE_DESIGN'));")?;
        writeln!(self.writer, "ENDSEC;")?;
        Ok(())
    }

    fn write_data(&mut self, entities: &[Box<dyn StepEntity>]) -> Result<(), StepError> {
        writeln!(self.writer, "DATA;")?;
        for entity in entities {
            writeln!(self.writer, "{}", entity.to_step())?;
        }
        writeln!(self.writer, "ENDSEC;")?;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<(), StepError> {
        writeln!(self.writer, "END-ISO-10303-21;")?;
        Ok(())
    }

    /// Convert `mesh` and write the complete file.
    ///
    /// The mesh is run through the degeneracy filter first; the converter
    /// applies the same filter, so the pass is idempotent. An empty mesh
    /// produces a valid file with an empty shell.
    pub fn write_mesh(&mut self, mesh: &[Triangle3], name: &str) -> Result<(), StepError> {
        info!(triangles = mesh.len(), file = %self.file_name, "writing STEP file");

        let mesh = optimize_mesh(mesh);
        debug!(triangles = mesh.len(), "mesh optimized");

        let entities = self.converter.convert_mesh(&mesh, name);

        self.write_header()?;
        self.write_data(&entities)?;
        self.write_footer()?;
        self.writer.flush()?;

        debug!(entities = entities.len(), "STEP file written");
        Ok(())
    }

    /// Flush any buffered output and close the file.
    pub fn close(mut self) -> Result<(), StepError> {
        self.writer.flush()?;
        Ok(())
    }
}
