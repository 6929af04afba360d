use crate::util;
use slashpath_error::{Result, WrapErr};
use std::io::Write;

pub mod create;
pub mod join;
pub mod join_only;
pub mod normalize;

/// Join slash-separated path and URL segments.
#[derive(Debug, clap::Parser)]
#[command(
	version = env!("CARGO_PKG_VERSION"),
	disable_help_subcommand = true,
)]
pub struct Args {
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
	Create(create::Args),
	JoinOnly(join_only::Args),
	Join(join::Args),
	Normalize(normalize::Args),
}

/// The segments to join, given as arguments or read from standard input.
#[derive(Debug, clap::Args)]
pub struct Segments {
	/// The segments.
	#[arg(conflicts_with = "stdin")]
	pub segments: Vec<String>,

	/// Read one list of segments per line from standard input.
	#[arg(long)]
	pub stdin: bool,

	/// The delimiter between the segments of a line read from standard input.
	#[arg(long, env = "SLASHPATH_DELIMITER", default_value = "\t")]
	pub delimiter: String,
}

impl Segments {
	/// Write `f` applied to the segments, or to each line of standard input.
	pub fn run<F>(&self, f: F) -> Result<()>
	where
		F: Fn(&[&str]) -> String,
	{
		let stdout = std::io::stdout();
		let mut output = stdout.lock();

		if self.stdin {
			let stdin = std::io::stdin();
			return util::join_lines(stdin.lock(), output, &self.delimiter, f);
		}

		let segments: Vec<&str> = self.segments.iter().map(String::as_str).collect();
		tracing::debug!(count = segments.len(), "Joining the segments.");
		writeln!(output, "{}", f(&segments)).wrap_err("Failed to write the output.")?;

		Ok(())
	}
}
