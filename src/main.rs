//! `dirview`: list a directory through the live scan/stream/merge pipeline.

mod cli;
mod config;
mod logging;

use std::path::Path;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{debug, error, info};

use dirview_core::{DirectoryView, EntryField, FieldValue, ViewObserver};

use crate::cli::CliArgs;
use crate::config::Config;

fn main() -> Result<()> {
	logging::init();
	let cli = CliArgs::parse();
	let config = Config::from_cli(&cli)?;
	run_listing(&config)
}

/// Build the view, scan the configured root to completion, and print it.
fn run_listing(config: &Config) -> Result<()> {
	let mut view = DirectoryView::new();
	view.add_observer(ScanLogger);
	view.set_show_hidden(config.show_hidden);
	view.set_show_directories(config.show_directories);
	view.set_filter_mode(config.mode);
	view.set_name_filters(config.patterns.clone())?;

	view.set_path(&config.root)?;
	view.drain_until_complete();

	if let Some(reason) = view.last_outcome().and_then(|outcome| outcome.error.as_ref()) {
		bail!("failed to scan {}: {reason}", config.root.display());
	}

	print_listing(&view, config.long);
	Ok(())
}

fn print_listing(view: &DirectoryView, long: bool) {
	for (row, entry) in view.entries().iter().enumerate() {
		if long {
			let size = match view.field(row, EntryField::SizeDisplay) {
				Some(FieldValue::Text(text)) => text,
				_ => String::new(),
			};
			let kind = if entry.is_dir() { 'd' } else { '-' };
			let read = if entry.readable() { 'r' } else { '-' };
			let write = if entry.writable() { 'w' } else { '-' };
			let exec = if entry.executable() { 'x' } else { '-' };
			println!("{kind}{read}{write}{exec} {size:>10} {}", entry.name());
		} else if entry.is_dir() {
			println!("{}{}", entry.name(), std::path::MAIN_SEPARATOR);
		} else {
			println!("{}", entry.name());
		}
	}
}

/// Observer that mirrors view notifications into the log stream.
struct ScanLogger;

impl ViewObserver for ScanLogger {
	fn on_reset(&mut self) {
		debug!("view reset");
	}

	fn on_inserted(&mut self, index: usize) {
		debug!(index, "row inserted");
	}

	fn on_awaiting_changed(&mut self, awaiting: bool) {
		debug!(awaiting, "awaiting results changed");
	}

	fn on_path_changed(&mut self, path: &Path) {
		info!(path = %path.display(), "listing directory");
	}

	fn on_operation_error(&mut self, context: &str, reason: &str) {
		error!(context, reason, "filesystem operation failed");
	}
}
