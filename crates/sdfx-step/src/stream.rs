//! Streaming triangle collection for concurrent renderers.
//!
//! A renderer produces triangle batches while the file is being set up;
//! the collector drains them into an accumulator on its own thread. The
//! channel is bounded, so a fast producer is backpressured rather than
//! buffering the whole mesh twice.

use std::sync::mpsc::{self, SyncSender};
use std::sync::{Arc, Mutex};
use std::thread;

use sdfx_mesh::Triangle3;
use tracing::{debug, info, warn};

use crate::error::StepError;
use crate::writer::StepWriter;

/// Capacity of the triangle batch queue, in batches.
pub const BATCH_QUEUE_CAPACITY: usize = 100;

/// Producer handle for streaming triangle batches to a [`StreamWriter`].
///
/// `push` blocks while the queue is full. Dropping every sink closes the
/// stream; that is the only completion signal.
#[derive(Debug, Clone)]
pub struct TriangleSink {
    tx: SyncSender<Vec<Triangle3>>,
}

impl TriangleSink {
    /// Enqueue one batch, blocking while the queue is full.
    ///
    /// Batches pushed after the collector has gone away are dropped.
    pub fn push(&self, batch: Vec<Triangle3>) {
        if self.tx.send(batch).is_err() {
            warn!("triangle sink is closed; batch dropped");
        }
    }
}

/// Collects triangle batches from a renderer and writes them out as one
/// mesh once the stream completes.
///
/// Triangles keep their in-batch order; batches are appended in delivery
/// order. Nothing is reordered or deduplicated here.
#[derive(Debug)]
pub struct StreamWriter {
    writer: StepWriter,
    triangles: Arc<Mutex<Vec<Triangle3>>>,
    collector: Option<thread::JoinHandle<()>>,
}

impl StreamWriter {
    /// Create the output file, spawn the collector task, and hand back
    /// the producer sink.
    pub fn create(path: impl AsRef<std::path::Path>) -> Result<(Self, TriangleSink), StepError> {
        let writer = StepWriter::create(path)?;
        let (tx, rx) = mpsc::sync_channel::<Vec<Triangle3>>(BATCH_QUEUE_CAPACITY);

        let triangles = Arc::new(Mutex::new(Vec::new()));
        let accumulator = Arc::clone(&triangles);
        let collector = thread::spawn(move || {
            let mut total = 0usize;
            for batch in rx {
                total += batch.len();
                debug!(batch = batch.len(), total, "collected triangle batch");
                accumulator.lock().unwrap().extend(batch);
            }
            debug!(total, "triangle collection completed");
        });

        Ok((
            Self {
                writer,
                triangles,
                collector: Some(collector),
            },
            TriangleSink { tx },
        ))
    }

    /// Override the author and organization written to `FILE_NAME`.
    pub fn set_author(&mut self, name: impl Into<String>, organization: impl Into<String>) {
        self.writer.set_author(name, organization);
    }

    /// Wait for the stream to complete, then convert and write the file.
    ///
    /// Every [`TriangleSink`] must have been dropped first; this blocks
    /// until the collector has drained the queue and exited. A partially
    /// delivered mesh is still written (the shell may not close).
    pub fn finalize(mut self, name: &str) -> Result<(), StepError> {
        if let Some(collector) = self.collector.take() {
            let _ = collector.join();
        }

        let mesh = {
            let mut triangles = self.triangles.lock().unwrap();
            std::mem::take(&mut *triangles)
        };
        info!(triangles = mesh.len(), "finalizing STEP file");

        self.writer.write_mesh(&mesh, name)?;
        self.writer.close()
    }
}
