//! Error taxonomy for the view and its filesystem operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A glob pattern that failed to compile.
#[derive(Debug, Error)]
#[error("invalid filter pattern `{pattern}`: {source}")]
pub struct FilterError {
	/// The offending pattern, verbatim.
	pub pattern: String,
	/// Compilation failure reported by the glob engine.
	#[source]
	pub source: globset::Error,
}

/// Failures reported by [`DirectoryView`](crate::DirectoryView) itself.
#[derive(Debug, Error)]
pub enum ViewError {
	/// `set_path` was called with an empty path.
	#[error("path must not be empty")]
	EmptyPath,
	/// A path change or refresh arrived while a scan was still in flight.
	#[error("a directory scan is already in flight")]
	ScanInFlight,
	/// A row index beyond the current view contents.
	#[error("row {row} is out of bounds (the view holds {len} entries)")]
	RowOutOfBounds {
		/// Requested row.
		row: usize,
		/// Number of entries currently held.
		len: usize,
	},
	/// An operation that needs a current directory ran before any `set_path`.
	#[error("no directory is currently set")]
	NoCurrentPath,
	/// A name-filter update carried an invalid pattern.
	#[error(transparent)]
	Filter(#[from] FilterError),
}

/// Failures from the synchronous filesystem mutation operations.
#[derive(Debug, Error)]
pub enum OpError {
	/// A target name contained a path separator or was empty.
	#[error("invalid name `{0}`: names must be non-empty and free of separators")]
	InvalidName(String),
	/// The underlying filesystem call failed.
	#[error("failed to {action} {path}: {source}", path = .path.display())]
	Io {
		/// What was being attempted.
		action: &'static str,
		/// Path the operation targeted.
		path: PathBuf,
		/// OS-level failure.
		#[source]
		source: io::Error,
	},
	/// The request was invalid at the view level before touching the filesystem.
	#[error(transparent)]
	View(#[from] ViewError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn io_errors_describe_action_and_path() {
		let err = OpError::Io {
			action: "remove",
			path: PathBuf::from("/tmp/x.txt"),
			source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
		};
		let message = err.to_string();
		assert!(message.contains("remove"));
		assert!(message.contains("/tmp/x.txt"));
	}

	#[test]
	fn view_errors_convert_into_op_errors() {
		let err: OpError = ViewError::RowOutOfBounds { row: 9, len: 2 }.into();
		assert!(err.to_string().contains("row 9"));
	}
}
