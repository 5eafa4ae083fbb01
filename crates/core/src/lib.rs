//! Live, incrementally updated directory views.
//!
//! A [`DirectoryView`] owns a sorted, filtered listing of one directory's
//! immediate children. Population is asynchronous: [`spawn_scan`] enumerates
//! the directory on a background thread and streams [`SCAN_BATCH_SIZE`]-capped
//! batches back over a bounded channel, and the view merges each accepted
//! entry into place with a binary-search insert, telling its observers the
//! exact index of every change. Scans are never cancelled; a superseded
//! session's output is discarded on arrival by its generation tag.
//!
//! ```no_run
//! use dirview_core::DirectoryView;
//!
//! let mut view = DirectoryView::new();
//! view.set_path("/tmp")?;
//! view.drain_until_complete();
//! for entry in view.entries() {
//!     println!("{}", entry.name());
//! }
//! # Ok::<(), dirview_core::ViewError>(())
//! ```

mod entry;
mod error;
mod filter;
mod ops;
/// Total order over entries and binary-search insertion.
pub mod ordering;
mod scanner;
mod view;

pub use entry::{Entry, EntryField, FieldValue, format_size};
pub use error::{FilterError, OpError, ViewError};
pub use filter::{FilterMode, NameFilter};
pub use scanner::{SCAN_BATCH_SIZE, ScanOutcome, ScanRequest, ScanUpdate, spawn_scan};
pub use view::{ConfigField, DirectoryView, ViewObserver};
