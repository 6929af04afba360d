use super::Segments;
use slashpath_error::Result;

/// Join segments with a single slash at each joint, without normalizing.
///
/// This keeps the "//" after a URL scheme and any trailing slash.
#[derive(Debug, clap::Args)]
#[command(verbatim_doc_comment)]
pub struct Args {
	#[command(flatten)]
	pub segments: Segments,
}

pub fn run(args: Args) -> Result<()> {
	args.segments
		.run(|segments: &[&str]| slashpath::join_only(segments))
}
