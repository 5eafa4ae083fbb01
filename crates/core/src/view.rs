//! Single-writer, sorted, filtered view over one directory's contents.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError};

use tracing::{debug, warn};

use dirview_stream::Envelope;

use crate::entry::{Entry, EntryField, FieldValue};
use crate::error::{FilterError, ViewError};
use crate::filter::{FilterMode, NameFilter};
use crate::ordering;
use crate::scanner::{self, ScanOutcome, ScanRequest, ScanUpdate};

/// Configuration field named in an [`on_config_changed`] notification.
///
/// [`on_config_changed`]: ViewObserver::on_config_changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
	/// Whether directories appear in the view.
	ShowDirectories,
	/// Whether dotfiles appear in the view.
	ShowHidden,
	/// How name-filter patterns combine.
	FilterMode,
	/// The name-filter pattern list.
	NameFilters,
}

/// Structural-change notifications emitted by [`DirectoryView`].
///
/// Every method has a no-op default so observers implement only what they
/// care about. Callbacks run on the view's owning thread, between mutations,
/// and must stay fast: no blocking I/O.
pub trait ViewObserver {
	/// All entries were removed at once.
	fn on_reset(&mut self) {}

	/// One entry was inserted at exactly `index`.
	fn on_inserted(&mut self, _index: usize) {}

	/// The view started or stopped waiting on a scan.
	fn on_awaiting_changed(&mut self, _awaiting: bool) {}

	/// The view now targets a different directory.
	fn on_path_changed(&mut self, _path: &Path) {}

	/// A configuration field changed value.
	fn on_config_changed(&mut self, _field: ConfigField) {}

	/// A filesystem mutation operation failed.
	fn on_operation_error(&mut self, _context: &str, _reason: &str) {}
}

/// Live, incrementally updated, sorted and filtered directory listing.
///
/// The view is single-writer: all mutation of its entries happens on the
/// thread that owns it, by draining batches the scan worker produced on its
/// own thread. `entries` is always sorted by [`ordering::compare`] and always
/// satisfies the active configuration, even while a scan is mid-flight.
pub struct DirectoryView {
	entries: Vec<Entry>,
	show_directories: bool,
	show_hidden: bool,
	filter: NameFilter,
	current_path: Option<PathBuf>,
	awaiting: bool,
	pending_rescan: bool,
	generation: u64,
	session: Option<Receiver<Envelope<ScanUpdate>>>,
	last_outcome: Option<ScanOutcome>,
	observers: Vec<Box<dyn ViewObserver>>,
}

impl Default for DirectoryView {
	fn default() -> Self {
		Self {
			entries: Vec::new(),
			show_directories: true,
			show_hidden: false,
			filter: NameFilter::match_all(),
			current_path: None,
			awaiting: false,
			pending_rescan: false,
			generation: 0,
			session: None,
			last_outcome: None,
			observers: Vec::new(),
		}
	}
}

impl DirectoryView {
	/// Create an empty view with default configuration: directories shown,
	/// dotfiles hidden, a match-everything filter.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an observer for structural-change notifications.
	pub fn add_observer(&mut self, observer: impl ViewObserver + 'static) {
		self.observers.push(Box::new(observer));
	}

	/// Point the view at a new directory and start scanning it.
	///
	/// The view is emptied (one reset notification) before the scan starts,
	/// so no stale content ever coexists with new results.
	///
	/// # Errors
	///
	/// [`ViewError::EmptyPath`] for an empty path. [`ViewError::ScanInFlight`]
	/// when a scan is already running; the request is rejected outright and
	/// no state changes.
	pub fn set_path(&mut self, path: impl Into<PathBuf>) -> Result<(), ViewError> {
		let path = path.into();
		if path.as_os_str().is_empty() {
			return Err(ViewError::EmptyPath);
		}
		if self.awaiting {
			warn!(
				requested = %path.display(),
				"rejecting path change while a scan is in flight"
			);
			return Err(ViewError::ScanInFlight);
		}

		self.start_scan(path);
		Ok(())
	}

	/// Rescan the current directory from scratch.
	///
	/// # Errors
	///
	/// [`ViewError::NoCurrentPath`] before the first `set_path`;
	/// [`ViewError::ScanInFlight`] while a scan is running.
	pub fn refresh(&mut self) -> Result<(), ViewError> {
		let path = self
			.current_path
			.clone()
			.ok_or(ViewError::NoCurrentPath)?;
		if self.awaiting {
			warn!("rejecting refresh while a scan is in flight");
			return Err(ViewError::ScanInFlight);
		}

		self.start_scan(path);
		Ok(())
	}

	fn start_scan(&mut self, path: PathBuf) {
		self.awaiting = true;
		self.notify(|observer| observer.on_awaiting_changed(true));

		self.entries.clear();
		self.notify(|observer| observer.on_reset());

		self.generation += 1;
		self.last_outcome = None;
		self.pending_rescan = false;
		let request = ScanRequest {
			path: path.clone(),
			show_hidden: self.show_hidden,
		};
		debug!(
			path = %path.display(),
			generation = self.generation,
			"starting directory scan"
		);
		self.session = Some(scanner::spawn_scan(request, self.generation));

		self.current_path = Some(path.clone());
		self.notify(|observer| observer.on_path_changed(&path));
	}

	/// Apply everything the current scan has delivered so far, without
	/// blocking.
	pub fn drain_pending(&mut self) {
		loop {
			let next = match &self.session {
				Some(rx) => rx.try_recv(),
				None => return,
			};
			match next {
				Ok(envelope) => self.apply_update(envelope),
				Err(TryRecvError::Empty) => return,
				Err(TryRecvError::Disconnected) => {
					self.end_session_without_completion();
					return;
				}
			}
		}
	}

	/// Block until the in-flight scan, if any, has completed and been fully
	/// applied.
	pub fn drain_until_complete(&mut self) {
		while self.awaiting {
			let next = match &self.session {
				Some(rx) => rx.recv(),
				None => return,
			};
			match next {
				Ok(envelope) => self.apply_update(envelope),
				Err(_) => {
					self.end_session_without_completion();
					return;
				}
			}
		}
	}

	/// Apply one scan message. Messages tagged with a superseded generation
	/// are discarded without touching any state.
	pub fn apply_update(&mut self, update: Envelope<ScanUpdate>) {
		if update.generation != self.generation {
			debug!(
				received = update.generation,
				current = self.generation,
				"discarding update from a superseded scan"
			);
			return;
		}

		match update.payload {
			ScanUpdate::Batch(batch) => self.merge_batch(batch),
			ScanUpdate::Completed(outcome) => self.complete_scan(outcome),
		}
	}

	fn merge_batch(&mut self, batch: Vec<Entry>) {
		debug!(count = batch.len(), "merging scan batch");
		for entry in batch {
			if !self.conforms(&entry) {
				continue;
			}

			let index = ordering::insertion_index(&self.entries, &entry);
			self.entries.insert(index, entry);
			self.notify(|observer| observer.on_inserted(index));
		}
	}

	fn complete_scan(&mut self, outcome: ScanOutcome) {
		if let Some(reason) = &outcome.error {
			warn!(%reason, "scan completed with an error");
		}
		self.last_outcome = Some(outcome);
		self.session = None;
		if self.awaiting {
			self.awaiting = false;
			self.notify(|observer| observer.on_awaiting_changed(false));
		}
		if self.pending_rescan {
			self.pending_rescan = false;
			debug!("running rescan deferred by a mid-scan configuration change");
			if let Err(err) = self.refresh() {
				warn!(%err, "deferred rescan could not start");
			}
		}
	}

	// Worker vanished without its completion message; don't wait forever.
	fn end_session_without_completion(&mut self) {
		warn!("scan channel closed before completion");
		self.session = None;
		if self.awaiting {
			self.awaiting = false;
			self.notify(|observer| observer.on_awaiting_changed(false));
		}
	}

	/// Show or hide directories; a change triggers a full rescan.
	pub fn set_show_directories(&mut self, show: bool) {
		if self.show_directories == show {
			return;
		}
		self.show_directories = show;
		self.notify(|observer| observer.on_config_changed(ConfigField::ShowDirectories));
		self.refresh_after_config_change();
	}

	/// Show or hide dotfiles; a change triggers a full rescan.
	pub fn set_show_hidden(&mut self, show: bool) {
		if self.show_hidden == show {
			return;
		}
		self.show_hidden = show;
		self.notify(|observer| observer.on_config_changed(ConfigField::ShowHidden));
		self.refresh_after_config_change();
	}

	/// Switch how filter patterns combine; a change triggers a full rescan.
	pub fn set_filter_mode(&mut self, mode: FilterMode) {
		if self.filter.mode() == mode {
			return;
		}
		self.filter.set_mode(mode);
		self.notify(|observer| observer.on_config_changed(ConfigField::FilterMode));
		self.refresh_after_config_change();
	}

	/// Replace the name-filter patterns; a change triggers a full rescan.
	///
	/// Patterns are compiled before anything is committed, so an invalid
	/// pattern leaves the filter and the view untouched.
	///
	/// # Errors
	///
	/// [`FilterError`] naming the pattern that failed to compile.
	pub fn set_name_filters(&mut self, patterns: Vec<String>) -> Result<(), FilterError> {
		if self.filter.patterns() == patterns.as_slice() {
			return Ok(());
		}
		self.filter = NameFilter::new(self.filter.mode(), patterns)?;
		self.notify(|observer| observer.on_config_changed(ConfigField::NameFilters));
		self.refresh_after_config_change();
		Ok(())
	}

	// Before the first set_path there is nothing to rescan. While a scan is
	// in flight the rescan is deferred until its completion; entries that no
	// longer conform are purged right away so the view never exposes content
	// the active configuration excludes.
	fn refresh_after_config_change(&mut self) {
		match self.refresh() {
			Ok(()) | Err(ViewError::NoCurrentPath) => {}
			Err(ViewError::ScanInFlight) => {
				debug!("deferring rescan until the in-flight scan completes");
				self.pending_rescan = true;
				self.purge_nonconforming();
			}
			Err(err) => warn!(%err, "configuration change could not trigger a rescan"),
		}
	}

	fn conforms(&self, entry: &Entry) -> bool {
		(!entry.is_dir() || self.show_directories)
			&& (self.show_hidden || !entry.name().starts_with('.'))
			&& self.filter.admits(entry.name())
	}

	fn purge_nonconforming(&mut self) {
		let mut entries = std::mem::take(&mut self.entries);
		let before = entries.len();
		entries.retain(|entry| self.conforms(entry));
		let changed = entries.len() != before;
		self.entries = entries;
		if changed {
			self.notify(|observer| observer.on_reset());
		}
	}

	/// Number of entries currently in the view.
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the view currently holds no entries.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entry at `row`, if in bounds.
	#[must_use]
	pub fn entry(&self, row: usize) -> Option<&Entry> {
		self.entries.get(row)
	}

	/// The sorted, filtered entries.
	#[must_use]
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Field of the entry at `row`, if in bounds.
	#[must_use]
	pub fn field(&self, row: usize, field: EntryField) -> Option<FieldValue> {
		self.entries.get(row).map(|entry| entry.value(field))
	}

	/// Directory the view currently targets.
	#[must_use]
	pub fn current_path(&self) -> Option<&Path> {
		self.current_path.as_deref()
	}

	/// Parent of the current directory; at the filesystem root the current
	/// path itself is returned.
	#[must_use]
	pub fn parent_path(&self) -> Option<PathBuf> {
		let current = self.current_path.as_ref()?;
		match current.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => Some(parent.to_path_buf()),
			_ => Some(current.clone()),
		}
	}

	/// The platform's home directory, when one is defined.
	#[must_use]
	pub fn home_path() -> Option<PathBuf> {
		dirs::home_dir()
	}

	/// Whether a scan is currently in flight.
	#[must_use]
	pub fn awaiting_results(&self) -> bool {
		self.awaiting
	}

	/// Generation of the currently-authoritative scan session.
	#[must_use]
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Outcome of the most recently completed scan.
	#[must_use]
	pub fn last_outcome(&self) -> Option<&ScanOutcome> {
		self.last_outcome.as_ref()
	}

	/// Whether directories appear in the view.
	#[must_use]
	pub fn show_directories(&self) -> bool {
		self.show_directories
	}

	/// Whether dotfiles appear in the view.
	#[must_use]
	pub fn show_hidden(&self) -> bool {
		self.show_hidden
	}

	/// Active filter combination mode.
	#[must_use]
	pub fn filter_mode(&self) -> FilterMode {
		self.filter.mode()
	}

	/// Active name-filter patterns.
	#[must_use]
	pub fn name_filters(&self) -> &[String] {
		self.filter.patterns()
	}

	pub(crate) fn notify(&mut self, mut f: impl FnMut(&mut dyn ViewObserver)) {
		for observer in &mut self.observers {
			f(observer.as_mut());
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::fs::{self, File};
	use std::rc::Rc;

	use tempfile::TempDir;

	use super::*;

	#[derive(Debug, Clone, PartialEq, Eq)]
	enum Event {
		Reset,
		Inserted(usize),
		Awaiting(bool),
		PathChanged(PathBuf),
		ConfigChanged(ConfigField),
		OperationError(String),
	}

	#[derive(Clone, Default)]
	struct Recorder {
		events: Rc<RefCell<Vec<Event>>>,
	}

	impl Recorder {
		fn events(&self) -> Vec<Event> {
			self.events.borrow().clone()
		}

		fn clear(&self) {
			self.events.borrow_mut().clear();
		}
	}

	impl ViewObserver for Recorder {
		fn on_reset(&mut self) {
			self.events.borrow_mut().push(Event::Reset);
		}

		fn on_inserted(&mut self, index: usize) {
			self.events.borrow_mut().push(Event::Inserted(index));
		}

		fn on_awaiting_changed(&mut self, awaiting: bool) {
			self.events.borrow_mut().push(Event::Awaiting(awaiting));
		}

		fn on_path_changed(&mut self, path: &Path) {
			self.events
				.borrow_mut()
				.push(Event::PathChanged(path.to_path_buf()));
		}

		fn on_config_changed(&mut self, field: ConfigField) {
			self.events.borrow_mut().push(Event::ConfigChanged(field));
		}

		fn on_operation_error(&mut self, context: &str, reason: &str) {
			self.events
				.borrow_mut()
				.push(Event::OperationError(format!("{context}: {reason}")));
		}
	}

	fn observed_view() -> (DirectoryView, Recorder) {
		let mut view = DirectoryView::new();
		let recorder = Recorder::default();
		view.add_observer(recorder.clone());
		(view, recorder)
	}

	fn scan(view: &mut DirectoryView, path: &Path) {
		view.set_path(path).unwrap();
		view.drain_until_complete();
	}

	fn names(view: &DirectoryView) -> Vec<&str> {
		view.entries().iter().map(Entry::name).collect()
	}

	fn is_sorted(view: &DirectoryView) -> bool {
		view.entries()
			.windows(2)
			.all(|pair| ordering::compare(&pair[0], &pair[1]) != std::cmp::Ordering::Greater)
	}

	#[test]
	fn directories_sort_before_files_in_the_final_view() {
		let dir = TempDir::new().unwrap();
		File::create(dir.path().join("b.txt")).unwrap();
		File::create(dir.path().join("a.txt")).unwrap();
		fs::create_dir(dir.path().join("z")).unwrap();

		let mut view = DirectoryView::new();
		scan(&mut view, dir.path());

		assert_eq!(names(&view), vec!["z", "a.txt", "b.txt"]);
		assert!(!view.awaiting_results());
		assert!(view.last_outcome().unwrap().is_ok());
	}

	#[test]
	fn large_directory_lands_sorted_and_complete() {
		let dir = TempDir::new().unwrap();
		for index in 1..=120 {
			File::create(dir.path().join(format!("f{index:03}"))).unwrap();
		}

		let mut view = DirectoryView::new();
		scan(&mut view, dir.path());

		assert_eq!(view.len(), 120);
		assert!(is_sorted(&view));
		assert_eq!(view.entry(0).unwrap().name(), "f001");
		assert_eq!(view.entry(119).unwrap().name(), "f120");
	}

	#[test]
	fn path_change_while_busy_is_rejected_and_the_first_scan_lands() {
		let dir_a = TempDir::new().unwrap();
		File::create(dir_a.path().join("from-a.txt")).unwrap();
		let dir_b = TempDir::new().unwrap();
		File::create(dir_b.path().join("from-b.txt")).unwrap();

		let mut view = DirectoryView::new();
		view.set_path(dir_a.path()).unwrap();

		let rejected = view.set_path(dir_b.path());
		assert!(matches!(rejected, Err(ViewError::ScanInFlight)));
		assert_eq!(view.current_path(), Some(dir_a.path()));

		view.drain_until_complete();
		assert_eq!(names(&view), vec!["from-a.txt"]);
		assert_eq!(view.current_path(), Some(dir_a.path()));
	}

	#[test]
	fn empty_path_is_rejected() {
		let mut view = DirectoryView::new();
		assert!(matches!(view.set_path(""), Err(ViewError::EmptyPath)));
		assert!(view.current_path().is_none());
		assert!(!view.awaiting_results());
	}

	#[test]
	fn stale_generations_never_mutate_the_view() {
		let dir = TempDir::new().unwrap();
		File::create(dir.path().join("real.txt")).unwrap();

		let mut view = DirectoryView::new();
		scan(&mut view, dir.path());
		let before = view.len();

		let stale_batch = Envelope {
			generation: view.generation() + 7,
			payload: ScanUpdate::Batch(vec![Entry::fixture("ghost.txt", false)]),
		};
		view.apply_update(stale_batch);
		assert_eq!(view.len(), before);

		let stale_completion = Envelope {
			generation: view.generation().wrapping_sub(1),
			payload: ScanUpdate::Completed(ScanOutcome::default()),
		};
		view.apply_update(stale_completion);
		assert!(!view.awaiting_results());
		assert_eq!(view.len(), before);
	}

	#[test]
	fn rescanning_the_same_directory_is_idempotent() {
		let dir = TempDir::new().unwrap();
		for name in ["one.txt", "two.txt", "three.txt"] {
			File::create(dir.path().join(name)).unwrap();
		}
		fs::create_dir(dir.path().join("nested")).unwrap();

		let mut view = DirectoryView::new();
		scan(&mut view, dir.path());
		let first: Vec<String> = names(&view).iter().map(ToString::to_string).collect();

		scan(&mut view, dir.path());
		let second: Vec<String> = names(&view).iter().map(ToString::to_string).collect();
		assert_eq!(first, second);
	}

	#[test]
	fn showing_hidden_files_rebuilds_the_view() {
		let dir = TempDir::new().unwrap();
		File::create(dir.path().join(".cfg")).unwrap();
		File::create(dir.path().join("visible.txt")).unwrap();

		let (mut view, recorder) = observed_view();
		scan(&mut view, dir.path());
		assert_eq!(names(&view), vec!["visible.txt"]);
		recorder.clear();

		view.set_show_hidden(true);
		view.drain_until_complete();

		assert_eq!(names(&view), vec![".cfg", "visible.txt"]);
		assert!(is_sorted(&view));
		let events = recorder.events();
		assert_eq!(events[0], Event::ConfigChanged(ConfigField::ShowHidden));
		assert!(events.contains(&Event::Reset));
	}

	#[test]
	fn hiding_directories_excludes_them_from_the_rebuild() {
		let dir = TempDir::new().unwrap();
		fs::create_dir(dir.path().join("sub")).unwrap();
		File::create(dir.path().join("file.txt")).unwrap();

		let mut view = DirectoryView::new();
		scan(&mut view, dir.path());
		assert_eq!(view.len(), 2);

		view.set_show_directories(false);
		view.drain_until_complete();
		assert_eq!(names(&view), vec!["file.txt"]);
	}

	#[test]
	fn mid_scan_config_change_purges_entries_and_rescans_on_completion() {
		let dir = TempDir::new().unwrap();
		fs::create_dir(dir.path().join("sub")).unwrap();
		File::create(dir.path().join("file.txt")).unwrap();

		let mut view = DirectoryView::new();
		view.set_path(dir.path()).unwrap();

		// Merge a batch under the old configuration while the scan is still
		// in flight.
		view.apply_update(Envelope {
			generation: view.generation(),
			payload: ScanUpdate::Batch(vec![
				Entry::fixture("zeta", true),
				Entry::fixture("alpha.txt", false),
			]),
		});
		assert_eq!(view.len(), 2);

		// Hiding directories mid-scan must evict the directory immediately;
		// conforming entries stay put.
		view.set_show_directories(false);
		assert_eq!(names(&view), vec!["alpha.txt"]);

		// Completion of the superseded configuration's scan triggers the
		// deferred full rescan.
		view.apply_update(Envelope {
			generation: view.generation(),
			payload: ScanUpdate::Completed(ScanOutcome::default()),
		});
		assert!(view.awaiting_results());
		view.drain_until_complete();
		assert_eq!(names(&view), vec!["file.txt"]);
	}

	#[test]
	fn unchanged_configuration_does_not_rescan() {
		let dir = TempDir::new().unwrap();
		File::create(dir.path().join("a.txt")).unwrap();

		let (mut view, recorder) = observed_view();
		scan(&mut view, dir.path());
		let generation = view.generation();
		recorder.clear();

		view.set_show_directories(true);
		view.set_show_hidden(false);
		view.set_filter_mode(FilterMode::Exclusive);
		view.set_name_filters(vec!["*".to_string()]).unwrap();

		assert_eq!(view.generation(), generation);
		assert!(recorder.events().is_empty());
	}

	#[test]
	fn inclusive_filter_admits_only_matching_names() {
		let dir = TempDir::new().unwrap();
		File::create(dir.path().join("keep.txt")).unwrap();
		File::create(dir.path().join("drop.png")).unwrap();
		File::create(dir.path().join("also.txt")).unwrap();

		let mut view = DirectoryView::new();
		view.set_filter_mode(FilterMode::Inclusive);
		view.set_name_filters(vec!["*.txt".to_string()]).unwrap();
		scan(&mut view, dir.path());

		assert_eq!(names(&view), vec!["also.txt", "keep.txt"]);
	}

	#[test]
	fn invalid_name_filters_leave_the_view_untouched() {
		let dir = TempDir::new().unwrap();
		File::create(dir.path().join("a.txt")).unwrap();

		let mut view = DirectoryView::new();
		scan(&mut view, dir.path());
		let before = names(&view)
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>();

		assert!(view.set_name_filters(vec!["[oops".to_string()]).is_err());
		assert_eq!(view.name_filters(), ["*".to_string()]);
		assert_eq!(
			names(&view)
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>(),
			before
		);
	}

	#[test]
	fn insert_notifications_carry_the_exact_index() {
		let dir = TempDir::new().unwrap();
		File::create(dir.path().join("b.txt")).unwrap();
		File::create(dir.path().join("a.txt")).unwrap();
		fs::create_dir(dir.path().join("z")).unwrap();

		let (mut view, recorder) = observed_view();
		scan(&mut view, dir.path());

		// Replaying the recorded inserts against an empty list must rebuild
		// the final view exactly.
		let mut replayed: Vec<usize> = Vec::new();
		let mut inserts = 0;
		for event in recorder.events() {
			if let Event::Inserted(index) = event {
				assert!(index <= replayed.len());
				replayed.insert(index, index);
				inserts += 1;
			}
		}
		assert_eq!(inserts, view.len());
	}

	#[test]
	fn scan_of_missing_directory_completes_with_diagnostic() {
		let dir = TempDir::new().unwrap();
		let missing = dir.path().join("gone");

		let (mut view, recorder) = observed_view();
		scan(&mut view, &missing);

		assert!(view.is_empty());
		assert!(!view.awaiting_results());
		let outcome = view.last_outcome().unwrap();
		assert!(outcome.error.is_some());
		assert!(recorder.events().contains(&Event::Awaiting(false)));
	}

	#[test]
	fn parent_path_follows_the_current_directory() {
		let mut view = DirectoryView::new();
		assert!(view.parent_path().is_none());

		let dir = TempDir::new().unwrap();
		scan(&mut view, dir.path());
		assert_eq!(view.parent_path(), dir.path().parent().map(Path::to_path_buf));
	}

	#[test]
	fn notifications_follow_the_documented_sequence_on_set_path() {
		let dir = TempDir::new().unwrap();
		File::create(dir.path().join("only.txt")).unwrap();

		let (mut view, recorder) = observed_view();
		scan(&mut view, dir.path());

		let events = recorder.events();
		assert_eq!(events[0], Event::Awaiting(true));
		assert_eq!(events[1], Event::Reset);
		assert_eq!(events[2], Event::PathChanged(dir.path().to_path_buf()));
		assert_eq!(events.last(), Some(&Event::Awaiting(false)));
	}
}
