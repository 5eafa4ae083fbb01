//! Command-line arguments for the `dirview` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dirview_core::FilterMode;

/// Command-line arguments accepted by the `dirview` binary.
#[derive(Parser, Debug)]
#[command(
	name = "dirview",
	version,
	about = "List a directory through a live, incrementally merged scan"
)]
pub struct CliArgs {
	/// Directory to list; defaults to the working directory.
	pub root: Option<PathBuf>,

	/// Include entries whose names start with `.`.
	#[arg(long)]
	pub hidden: bool,

	/// List files only, omitting directories.
	#[arg(long = "no-directories")]
	pub no_directories: bool,

	/// How multiple name filters combine.
	#[arg(long, value_enum, default_value = "exclusive")]
	pub mode: ModeArg,

	/// Glob pattern applied to entry names; repeatable.
	#[arg(long = "filter", value_name = "PATTERN")]
	pub filters: Vec<String>,

	/// Show permissions and sizes alongside names.
	#[arg(short, long)]
	pub long: bool,
}

/// CLI spelling of the filter combination mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
	/// Admit entries matching any pattern.
	Inclusive,
	/// Admit only entries matching every pattern.
	Exclusive,
}

impl From<ModeArg> for FilterMode {
	fn from(mode: ModeArg) -> Self {
		match mode {
			ModeArg::Inclusive => FilterMode::Inclusive,
			ModeArg::Exclusive => FilterMode::Exclusive,
		}
	}
}
