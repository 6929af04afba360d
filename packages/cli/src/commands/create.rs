use super::Segments;
use slashpath_error::Result;

/// Concatenate segments with a slash between every pair.
///
/// Slashes already at the ends of the segments are kept, so a joint can end up with up to three
/// consecutive slashes. Nothing is normalized.
#[derive(Debug, clap::Args)]
#[command(verbatim_doc_comment)]
pub struct Args {
	#[command(flatten)]
	pub segments: Segments,
}

pub fn run(args: Args) -> Result<()> {
	args.segments
		.run(|segments: &[&str]| slashpath::create(segments))
}
