//! Application configuration derived from CLI arguments and defaults.

use std::path::PathBuf;
use std::{env, fs};

use anyhow::{Context, Result, ensure};
use dirview_core::FilterMode;

use crate::cli::CliArgs;

/// Resolved settings for one listing run.
#[derive(Debug)]
pub struct Config {
	pub root: PathBuf,
	pub show_hidden: bool,
	pub show_directories: bool,
	pub mode: FilterMode,
	pub patterns: Vec<String>,
	pub long: bool,
}

impl Config {
	/// Build configuration from CLI arguments with sensible defaults.
	pub fn from_cli(cli: &CliArgs) -> Result<Self> {
		let root = resolve_root(cli)?;
		let patterns = resolve_patterns(&cli.filters);

		Ok(Self {
			root,
			show_hidden: cli.hidden,
			show_directories: !cli.no_directories,
			mode: cli.mode.into(),
			patterns,
			long: cli.long,
		})
	}
}

fn resolve_root(cli: &CliArgs) -> Result<PathBuf> {
	let mut root = match &cli.root {
		Some(path) => path.clone(),
		None => env::current_dir().context("failed to determine working directory")?,
	};

	if root.is_relative() {
		root = env::current_dir()
			.context("failed to resolve current directory for root")?
			.join(root);
	}

	root = fs::canonicalize(&root)
		.with_context(|| format!("failed to canonicalize listing root {}", root.display()))?;

	let metadata = fs::metadata(&root)
		.with_context(|| format!("failed to inspect listing root {}", root.display()))?;
	ensure!(metadata.is_dir(), "listing root must be a directory");

	Ok(root)
}

fn resolve_patterns(filters: &[String]) -> Vec<String> {
	let patterns: Vec<String> = filters
		.iter()
		.map(|pattern| pattern.trim().to_string())
		.filter(|pattern| !pattern.is_empty())
		.collect();

	if patterns.is_empty() {
		vec!["*".to_string()]
	} else {
		patterns
	}
}
