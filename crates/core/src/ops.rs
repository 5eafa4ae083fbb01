//! Synchronous filesystem mutations, each followed by a full view rebuild.
//!
//! These are single blocking calls made on the view's owning thread. None of
//! them edit `entries` in place; the rebuild re-derives the view from a fresh
//! enumeration so filter and order state can never drift from disk state.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{OpError, ViewError};
use crate::view::DirectoryView;

impl DirectoryView {
	/// Remove each of `paths`, best-effort.
	///
	/// Individual failures are reported per path (and to observers) without
	/// stopping the rest; the view is rebuilt afterwards regardless.
	pub fn remove(&mut self, paths: &[PathBuf]) -> Vec<(PathBuf, Result<(), OpError>)> {
		let results: Vec<_> = paths
			.iter()
			.map(|path| (path.clone(), remove_one(path)))
			.collect();

		for (path, result) in &results {
			if let Err(err) = result {
				warn!(path = %path.display(), %err, "failed to remove entry");
				let reason = err.to_string();
				self.notify(|observer| observer.on_operation_error("remove", &reason));
			}
		}

		self.rebuild_after_mutation();
		results
	}

	/// Rename the entry at `row` to `new_name` within its directory.
	///
	/// # Errors
	///
	/// Out-of-bounds rows, names containing separators, and OS-level rename
	/// failures; the latter are also reported to observers.
	pub fn rename(&mut self, row: usize, new_name: &str) -> Result<(), OpError> {
		let len = self.len();
		let source = match self.entry(row) {
			Some(entry) => entry.path().to_path_buf(),
			None => return Err(ViewError::RowOutOfBounds { row, len }.into()),
		};
		if !is_valid_leaf_name(new_name) {
			return Err(OpError::InvalidName(new_name.to_string()));
		}

		let target = source
			.parent()
			.map_or_else(|| PathBuf::from(new_name), |parent| parent.join(new_name));
		debug!(from = %source.display(), to = %target.display(), "renaming entry");

		if let Err(err) = fs::rename(&source, &target) {
			warn!(from = %source.display(), %err, "rename failed");
			let reason = err.to_string();
			self.notify(|observer| observer.on_operation_error("rename", &reason));
			return Err(OpError::Io {
				action: "rename",
				path: source,
				source: err,
			});
		}

		self.rebuild_after_mutation();
		Ok(())
	}

	/// Create a subdirectory named `name` under the current directory.
	///
	/// # Errors
	///
	/// Invalid names, a view with no current directory, and OS-level
	/// failures; the latter carry the OS error description and are also
	/// reported to observers.
	pub fn create_directory(&mut self, name: &str) -> Result<(), OpError> {
		if !is_valid_leaf_name(name) {
			return Err(OpError::InvalidName(name.to_string()));
		}
		let current = match self.current_path() {
			Some(path) => path.to_path_buf(),
			None => return Err(ViewError::NoCurrentPath.into()),
		};

		let target = current.join(name);
		debug!(path = %target.display(), "creating directory");

		if let Err(err) = fs::create_dir(&target) {
			warn!(path = %target.display(), %err, "failed to create directory");
			let reason = err.to_string();
			self.notify(|observer| observer.on_operation_error("create directory", &reason));
			return Err(OpError::Io {
				action: "create directory",
				path: target,
				source: err,
			});
		}

		self.rebuild_after_mutation();
		Ok(())
	}

	// Rebuilds are best-effort: a busy or pathless view logs and moves on.
	fn rebuild_after_mutation(&mut self) {
		match self.refresh() {
			Ok(()) | Err(ViewError::NoCurrentPath) => {}
			Err(err) => warn!(%err, "could not rebuild the view after a mutation"),
		}
	}
}

fn remove_one(path: &Path) -> Result<(), OpError> {
	let io_error = |source| OpError::Io {
		action: "remove",
		path: path.to_path_buf(),
		source,
	};

	let metadata = fs::metadata(path).map_err(io_error)?;
	if metadata.is_dir() {
		fs::remove_dir_all(path).map_err(io_error)
	} else {
		fs::remove_file(path).map_err(io_error)
	}
}

fn is_valid_leaf_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.contains('/')
		&& !name.contains(std::path::MAIN_SEPARATOR)
		&& name != "."
		&& name != ".."
}
