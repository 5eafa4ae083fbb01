//! Name-based admission rules for directory entries.

use globset::{GlobBuilder, GlobMatcher};
use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// How a [`NameFilter`]'s patterns combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
	/// Admit an entry when any pattern matches; nothing matching means rejected.
	Inclusive,
	/// Admit an entry only when every pattern matches.
	#[default]
	Exclusive,
}

/// Glob-based admission rule over entry names.
///
/// Patterns are matched case-insensitively against the leaf name only. In
/// `Exclusive` mode an entry must match every pattern, so an empty pattern
/// list admits everything; in `Inclusive` mode it must match at least one,
/// so an empty list admits nothing.
#[derive(Debug, Clone)]
pub struct NameFilter {
	mode: FilterMode,
	patterns: Vec<String>,
	matchers: Vec<GlobMatcher>,
}

impl NameFilter {
	/// Compile a filter from a mode and an ordered pattern list.
	///
	/// # Errors
	///
	/// Returns a [`FilterError`] naming the first pattern that fails to
	/// compile; no partially-built filter is produced.
	pub fn new(mode: FilterMode, patterns: Vec<String>) -> Result<Self, FilterError> {
		let matchers = patterns
			.iter()
			.map(|pattern| {
				GlobBuilder::new(pattern)
					.case_insensitive(true)
					.build()
					.map(|glob| glob.compile_matcher())
					.map_err(|source| FilterError {
						pattern: pattern.clone(),
						source,
					})
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self {
			mode,
			patterns,
			matchers,
		})
	}

	/// The default filter: `Exclusive` with a single `*` pattern, admitting
	/// every name.
	#[must_use]
	pub fn match_all() -> Self {
		Self::new(FilterMode::Exclusive, vec!["*".to_string()])
			.expect("`*` is a valid glob pattern")
	}

	/// Active combination mode.
	#[must_use]
	pub fn mode(&self) -> FilterMode {
		self.mode
	}

	/// Change the combination mode; the compiled patterns are unaffected.
	pub fn set_mode(&mut self, mode: FilterMode) {
		self.mode = mode;
	}

	/// Patterns in the order they were supplied.
	#[must_use]
	pub fn patterns(&self) -> &[String] {
		&self.patterns
	}

	/// Decide whether an entry with this leaf name belongs in the view.
	#[must_use]
	pub fn admits(&self, name: &str) -> bool {
		match self.mode {
			FilterMode::Inclusive => self.matchers.iter().any(|matcher| matcher.is_match(name)),
			FilterMode::Exclusive => self.matchers.iter().all(|matcher| matcher.is_match(name)),
		}
	}
}

impl Default for NameFilter {
	fn default() -> Self {
		Self::match_all()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filter(mode: FilterMode, patterns: &[&str]) -> NameFilter {
		NameFilter::new(mode, patterns.iter().map(ToString::to_string).collect()).unwrap()
	}

	#[test]
	fn default_filter_admits_everything() {
		let filter = NameFilter::match_all();
		assert!(filter.admits("notes.txt"));
		assert!(filter.admits(".hidden"));
		assert!(filter.admits("weird name with spaces"));
	}

	#[test]
	fn inclusive_admits_on_any_match() {
		let filter = filter(FilterMode::Inclusive, &["*.txt", "*.md"]);
		assert!(filter.admits("readme.md"));
		assert!(filter.admits("notes.txt"));
		assert!(!filter.admits("image.png"));
	}

	#[test]
	fn inclusive_with_no_patterns_rejects_everything() {
		let filter = filter(FilterMode::Inclusive, &[]);
		assert!(!filter.admits("anything"));
	}

	#[test]
	fn exclusive_requires_every_pattern() {
		let filter = filter(FilterMode::Exclusive, &["*.txt", "report*"]);
		assert!(filter.admits("report-final.txt"));
		assert!(!filter.admits("report-final.md"));
		assert!(!filter.admits("summary.txt"));
	}

	#[test]
	fn exclusive_with_no_patterns_admits_everything() {
		let filter = filter(FilterMode::Exclusive, &[]);
		assert!(filter.admits("anything"));
	}

	#[test]
	fn matching_ignores_case() {
		let filter = filter(FilterMode::Inclusive, &["*.TXT"]);
		assert!(filter.admits("notes.txt"));
		assert!(filter.admits("NOTES.TXT"));
	}

	#[test]
	fn invalid_patterns_are_rejected_up_front() {
		let err = NameFilter::new(FilterMode::Inclusive, vec!["[unclosed".to_string()])
			.expect_err("pattern should not compile");
		assert_eq!(err.pattern, "[unclosed");
	}

	#[test]
	fn mode_can_change_without_recompiling() {
		let mut filter = filter(FilterMode::Inclusive, &["*.txt"]);
		assert!(!filter.admits("image.png"));
		assert!(filter.admits("notes.txt"));

		filter.set_mode(FilterMode::Exclusive);
		assert_eq!(filter.mode(), FilterMode::Exclusive);
		assert!(filter.admits("notes.txt"));
		assert!(!filter.admits("image.png"));
	}
}
