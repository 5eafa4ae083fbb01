//! Immutable metadata snapshots for filesystem objects.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Immutable snapshot of one filesystem object's metadata.
///
/// Constructed from a single stat and never mutated afterwards. Equality
/// depends only on the leaf name and whether the object is a directory, which
/// is also all the view's ordering rule consults.
#[derive(Debug, Clone)]
pub struct Entry {
	name: String,
	path: PathBuf,
	is_dir: bool,
	size: u64,
	created: Option<SystemTime>,
	modified: Option<SystemTime>,
	readable: bool,
	writable: bool,
	executable: bool,
}

impl Entry {
	/// Snapshot the object at `path` with one metadata call.
	///
	/// Symlinks are followed, so a link to a directory reads as a directory.
	///
	/// # Errors
	///
	/// Returns the underlying I/O error when the object cannot be stat'd.
	pub fn from_path(path: &Path) -> io::Result<Self> {
		let metadata = fs::metadata(path)?;
		let name = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_default();
		let is_dir = metadata.is_dir();
		let (readable, writable, executable) = permission_bits(&metadata);

		Ok(Self {
			name,
			path: path.to_path_buf(),
			is_dir,
			size: if is_dir { 0 } else { metadata.len() },
			created: metadata.created().ok(),
			modified: metadata.modified().ok(),
			readable,
			writable,
			executable,
		})
	}

	/// Leaf name, without any path separators.
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Absolute path of the object.
	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Whether the object is a directory.
	#[must_use]
	pub fn is_dir(&self) -> bool {
		self.is_dir
	}

	/// Whether the object is a regular file (anything not a directory).
	#[must_use]
	pub fn is_file(&self) -> bool {
		!self.is_dir
	}

	/// Size in bytes; always 0 for directories.
	#[must_use]
	pub fn size(&self) -> u64 {
		self.size
	}

	/// Creation time, where the platform records one.
	#[must_use]
	pub fn created(&self) -> Option<SystemTime> {
		self.created
	}

	/// Last modification time, where the platform records one.
	#[must_use]
	pub fn modified(&self) -> Option<SystemTime> {
		self.modified
	}

	/// Whether the owner may read the object.
	#[must_use]
	pub fn readable(&self) -> bool {
		self.readable
	}

	/// Whether the owner may write the object.
	#[must_use]
	pub fn writable(&self) -> bool {
		self.writable
	}

	/// Whether the owner may execute the object.
	#[must_use]
	pub fn executable(&self) -> bool {
		self.executable
	}

	/// Look up a single field by role.
	#[must_use]
	pub fn value(&self, field: EntryField) -> FieldValue {
		match field {
			EntryField::Name => FieldValue::Text(self.name.clone()),
			EntryField::CreatedAt => FieldValue::Timestamp(self.created),
			EntryField::ModifiedAt => FieldValue::Timestamp(self.modified),
			EntryField::SizeDisplay => FieldValue::Text(format_size(self.size)),
			EntryField::Path => FieldValue::Text(self.path.to_string_lossy().into_owned()),
			EntryField::IsDir => FieldValue::Bool(self.is_dir),
			EntryField::IsFile => FieldValue::Bool(!self.is_dir),
			EntryField::Readable => FieldValue::Bool(self.readable),
			EntryField::Writable => FieldValue::Bool(self.writable),
			EntryField::Executable => FieldValue::Bool(self.executable),
		}
	}

	#[cfg(test)]
	pub(crate) fn fixture(name: &str, is_dir: bool) -> Self {
		Self {
			name: name.to_string(),
			path: PathBuf::from(format!("/fixture/{name}")),
			is_dir,
			size: 0,
			created: None,
			modified: None,
			readable: true,
			writable: true,
			executable: is_dir,
		}
	}
}

impl PartialEq for Entry {
	fn eq(&self, other: &Self) -> bool {
		self.is_dir == other.is_dir && self.name == other.name
	}
}

impl Eq for Entry {}

/// Role set for per-row field access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
	/// Leaf name.
	Name,
	/// Creation timestamp.
	CreatedAt,
	/// Modification timestamp.
	ModifiedAt,
	/// Size rendered as a human-readable string.
	SizeDisplay,
	/// Absolute path.
	Path,
	/// Directory flag.
	IsDir,
	/// File flag (negation of [`EntryField::IsDir`]).
	IsFile,
	/// Owner-readable flag.
	Readable,
	/// Owner-writable flag.
	Writable,
	/// Owner-executable flag.
	Executable,
}

/// Value produced by a field lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
	/// Textual field.
	Text(String),
	/// Boolean field.
	Bool(bool),
	/// Timestamp field; `None` when the platform does not record it.
	Timestamp(Option<SystemTime>),
}

/// Render a byte count the way the view displays sizes.
///
/// Integer division throughout: below 1 kb the exact byte count is shown,
/// then whole kilobytes up to a megabyte, then whole megabytes.
#[must_use]
pub fn format_size(bytes: u64) -> String {
	let kb = bytes / 1024;
	if kb < 1 {
		format!("{bytes} bytes")
	} else if kb < 1024 {
		format!("{kb} kb")
	} else {
		format!("{} mb", kb / 1024)
	}
}

#[cfg(unix)]
fn permission_bits(metadata: &fs::Metadata) -> (bool, bool, bool) {
	use std::os::unix::fs::PermissionsExt;

	let mode = metadata.permissions().mode();
	(mode & 0o400 != 0, mode & 0o200 != 0, mode & 0o100 != 0)
}

#[cfg(not(unix))]
fn permission_bits(metadata: &fs::Metadata) -> (bool, bool, bool) {
	(true, !metadata.permissions().readonly(), false)
}
