//! Total order over entries: directories first, then name comparison.

use std::cmp::Ordering;

use crate::entry::Entry;

/// Compare two entries for display order.
///
/// Directories sort before files; within the same kind, names compare
/// case-insensitively with the raw name as a tiebreak, standing in for a
/// single-locale collation.
#[must_use]
pub fn compare(a: &Entry, b: &Entry) -> Ordering {
	match (a.is_dir(), b.is_dir()) {
		(true, false) => Ordering::Less,
		(false, true) => Ordering::Greater,
		_ => compare_names(a.name(), b.name()),
	}
}

/// Locale-style comparison of two leaf names.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
	let folded = a
		.chars()
		.flat_map(char::to_lowercase)
		.cmp(b.chars().flat_map(char::to_lowercase));
	if folded == Ordering::Equal {
		a.cmp(b)
	} else {
		folded
	}
}

/// Index at which `entry` slots into the already-sorted `entries`.
///
/// Uses an upper-bound binary search so entries that compare equal keep
/// their insertion order.
#[must_use]
pub fn insertion_index(entries: &[Entry], entry: &Entry) -> usize {
	entries.partition_point(|existing| compare(existing, entry) != Ordering::Greater)
}
