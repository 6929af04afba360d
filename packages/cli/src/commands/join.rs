use super::Segments;
use slashpath_error::Result;

/// Join segments and normalize the result.
///
/// Do not use this for URLs, "https://" becomes "https:/".
#[derive(Debug, clap::Args)]
#[command(verbatim_doc_comment)]
pub struct Args {
	#[command(flatten)]
	pub segments: Segments,
}

pub fn run(args: Args) -> Result<()> {
	args.segments
		.run(|segments: &[&str]| slashpath::join(segments))
}
