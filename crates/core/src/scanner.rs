//! Background enumeration of a directory's immediate children.
//!
//! Each scan runs on its own spawned thread and streams batched [`Entry`]
//! snapshots back through a bounded channel. The worker never touches view
//! state; it only produces [`ScanUpdate`] messages that the owning thread
//! applies in delivery order.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::thread;

use tracing::{debug, warn};

use dirview_stream::{Envelope, StreamSender, channel};

use crate::entry::Entry;

/// Maximum number of entries delivered in a single batch.
pub const SCAN_BATCH_SIZE: usize = 50;

/// Batches the channel buffers before the worker blocks on the consumer.
const SCAN_CHANNEL_CAPACITY: usize = 8;

/// Message emitted by a scan worker.
#[derive(Debug)]
pub enum ScanUpdate {
	/// A batch of discovered entries, never more than [`SCAN_BATCH_SIZE`].
	/// The final batch of a scan is flushed unconditionally and may be empty.
	Batch(Vec<Entry>),
	/// Enumeration ended. Sent exactly once per scan, after the final batch.
	Completed(ScanOutcome),
}

/// Terminal status of a scan, delivered with its completion message.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
	/// Why enumeration stopped early, if it did. Partial batches emitted
	/// before the failure remain valid.
	pub error: Option<String>,
}

impl ScanOutcome {
	/// Whether enumeration ran to the end of the directory.
	#[must_use]
	pub fn is_ok(&self) -> bool {
		self.error.is_none()
	}
}

/// Parameters snapshotted when a scan starts.
///
/// The worker reads only this snapshot; configuration changes made after
/// launch affect the next scan, not this one.
#[derive(Debug, Clone)]
pub struct ScanRequest {
	/// Directory whose immediate children are enumerated.
	pub path: PathBuf,
	/// Whether leaf names starting with `.` are included.
	pub show_hidden: bool,
}

/// Spawn a worker that enumerates `request.path` and streams batches tagged
/// with `generation`.
///
/// The worker thread is detached; it winds down on its own once enumeration
/// ends or the receiver is dropped, releasing its directory handle either way.
#[must_use]
pub fn spawn_scan(request: ScanRequest, generation: u64) -> Receiver<Envelope<ScanUpdate>> {
	let (tx, rx) = channel(SCAN_CHANNEL_CAPACITY, generation);
	thread::spawn(move || run_scan(&request, &tx));
	rx
}

fn run_scan(request: &ScanRequest, stream: &StreamSender<ScanUpdate>) {
	debug!(
		path = %request.path.display(),
		generation = stream.generation(),
		show_hidden = request.show_hidden,
		"directory scan started"
	);

	let mut batch = Vec::with_capacity(SCAN_BATCH_SIZE);
	let mut outcome = ScanOutcome::default();

	match fs::read_dir(&request.path) {
		Ok(reader) => {
			for dirent in reader {
				let dirent = match dirent {
					Ok(dirent) => dirent,
					Err(err) => {
						warn!(path = %request.path.display(), %err, "error reading directory entry");
						continue;
					}
				};

				let name = dirent.file_name();
				if !request.show_hidden && name.to_string_lossy().starts_with('.') {
					continue;
				}

				let path = dirent.path();
				match Entry::from_path(&path) {
					Ok(entry) => {
						batch.push(entry);
						if batch.len() >= SCAN_BATCH_SIZE {
							let full =
								std::mem::replace(&mut batch, Vec::with_capacity(SCAN_BATCH_SIZE));
							if !stream.send(ScanUpdate::Batch(full)) {
								debug!("scan receiver dropped, stopping enumeration");
								return;
							}
						}
					}
					Err(err) => {
						debug!(path = %path.display(), %err, "skipping entry that failed to stat");
					}
				}
			}
		}
		Err(err) => {
			warn!(path = %request.path.display(), %err, "failed to open directory");
			outcome.error = Some(err.to_string());
		}
	}

	// Final batch is flushed unconditionally, then completion exactly once.
	if !stream.send(ScanUpdate::Batch(batch)) {
		return;
	}
	let _ = stream.send(ScanUpdate::Completed(outcome));

	debug!(generation = stream.generation(), "directory scan finished");
}
