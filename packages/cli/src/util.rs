use slashpath_error::{return_error, Result, WrapErr};
use std::io::{BufRead, Write};

/// Write `f` applied to each line of `input` as a line of `output`.
pub fn map_lines<R, W, F>(input: R, mut output: W, f: F) -> Result<()>
where
	R: BufRead,
	W: Write,
	F: Fn(&str) -> String,
{
	for line in input.lines() {
		let line = line.wrap_err("Failed to read a line from standard input.")?;
		tracing::trace!(%line, "Read a line.");
		writeln!(output, "{}", f(&line)).wrap_err("Failed to write the output.")?;
	}
	output.flush().wrap_err("Failed to flush the output.")?;
	Ok(())
}

/// Split each line of `input` on `delimiter` and write `f` applied to the segments as a line of
/// `output`.
pub fn join_lines<R, W, F>(input: R, output: W, delimiter: &str, f: F) -> Result<()>
where
	R: BufRead,
	W: Write,
	F: Fn(&[&str]) -> String,
{
	if delimiter.is_empty() {
		return_error!("The delimiter must not be empty.");
	}
	map_lines(input, output, |line| {
		let segments: Vec<&str> = line.split(delimiter).collect();
		f(&segments)
	})
}

#[cfg(test)]
mod tests {
	use super::{join_lines, map_lines};
	use pretty_assertions::assert_eq;

	fn run_join_lines(input: &str, delimiter: &str, f: fn(&[&str]) -> String) -> String {
		let mut output = Vec::new();
		join_lines(input.as_bytes(), &mut output, delimiter, f).unwrap();
		String::from_utf8(output).unwrap()
	}

	#[test]
	fn test_join_lines() {
		let input = "https://\texample.com/\na/\t/b\n//\t//\n\n";
		assert_eq!(
			run_join_lines(input, "\t", |segments| slashpath::join_only(segments)),
			"https://example.com/\na/b\n///\n\n"
		);
		assert_eq!(
			run_join_lines(input, "\t", |segments| slashpath::join(segments)),
			"https:/example.com\na/b\n/\n\n"
		);
		assert_eq!(
			run_join_lines(input, "\t", |segments| slashpath::create(segments)),
			"https:///example.com/\na///b\n/////\n\n"
		);
	}

	#[test]
	fn test_join_lines_delimiter() {
		assert_eq!(
			run_join_lines("a/b, ../../../xyz\n", ", ", |segments| slashpath::join(segments)),
			"../xyz\n"
		);
		assert_eq!(
			run_join_lines("a b\n", "\t", |segments| slashpath::create(segments)),
			"a b\n"
		);
	}

	#[test]
	fn test_empty_delimiter() {
		let mut output = Vec::new();
		let error = join_lines("a\n".as_bytes(), &mut output, "", |segments| {
			slashpath::join(segments)
		})
		.unwrap_err();
		assert_eq!(error.to_string(), "The delimiter must not be empty.");
		assert!(output.is_empty());
	}

	#[test]
	fn test_map_lines() {
		let mut output = Vec::new();
		map_lines("a//b/../c\n\n/..\n".as_bytes(), &mut output, slashpath::normalize).unwrap();
		assert_eq!(String::from_utf8(output).unwrap(), "a/c\n.\n/\n");
	}
}
