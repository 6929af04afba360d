use crate::util;
use slashpath_error::{Result, WrapErr};
use std::io::Write;

/// Normalize a path lexically.
#[derive(Debug, clap::Args)]
#[command(verbatim_doc_comment)]
pub struct Args {
	/// The path.
	#[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
	pub path: Option<String>,

	/// Normalize each line read from standard input.
	#[arg(long)]
	pub stdin: bool,
}

pub fn run(args: Args) -> Result<()> {
	let stdout = std::io::stdout();
	let mut output = stdout.lock();

	if args.stdin {
		let stdin = std::io::stdin();
		return util::map_lines(stdin.lock(), output, slashpath::normalize);
	}

	let path = args.path.wrap_err("Expected a path.")?;
	tracing::debug!(%path, "Normalizing the path.");
	writeln!(output, "{}", slashpath::normalize(&path)).wrap_err("Failed to write the output.")?;

	Ok(())
}
