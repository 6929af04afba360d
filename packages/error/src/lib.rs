use std::panic::Location;
use thiserror::Error;

/// A result.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error with the location it was raised at and the error that caused it.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Error {
	message: String,
	location: Option<&'static Location<'static>>,
	source: Option<Box<Error>>,
}

/// Displays an error followed by each of its sources, one per line.
pub struct Trace<'a>(&'a Error);

/// Attach a message to a failed [`Result`] or an empty [`Option`].
pub trait WrapErr<T>: Sized {
	#[track_caller]
	fn wrap_err<M>(self, message: M) -> Result<T>
	where
		M: std::fmt::Display,
	{
		self.wrap_err_with(|| message)
	}

	#[track_caller]
	fn wrap_err_with<M, F>(self, f: F) -> Result<T>
	where
		M: std::fmt::Display,
		F: FnOnce() -> M;
}

impl Error {
	#[track_caller]
	pub fn with_message(message: impl std::fmt::Display) -> Error {
		Error {
			message: message.to_string(),
			location: Some(Location::caller()),
			source: None,
		}
	}

	/// Convert a foreign error and its chain of sources. Foreign errors carry no location.
	fn with_error(error: &dyn std::error::Error) -> Error {
		Error {
			message: error.to_string(),
			location: None,
			source: error.source().map(|source| Box::new(Error::with_error(source))),
		}
	}

	#[must_use]
	pub fn trace(&self) -> Trace {
		Trace(self)
	}
}

impl<'a> std::fmt::Display for Trace<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut error = Some(self.0);
		while let Some(current) = error {
			writeln!(f, "{current}")?;
			if let Some(location) = current.location {
				writeln!(f, "  {location}")?;
			}
			error = current.source.as_deref();
		}
		Ok(())
	}
}

impl<T, E> WrapErr<T> for std::result::Result<T, E>
where
	E: std::error::Error,
{
	#[track_caller]
	fn wrap_err_with<M, F>(self, f: F) -> Result<T>
	where
		M: std::fmt::Display,
		F: FnOnce() -> M,
	{
		match self {
			Ok(value) => Ok(value),
			Err(error) => Err(Error {
				source: Some(Box::new(Error::with_error(&error))),
				..Error::with_message(f())
			}),
		}
	}
}

impl<T> WrapErr<T> for Option<T> {
	#[track_caller]
	fn wrap_err_with<M, F>(self, f: F) -> Result<T>
	where
		M: std::fmt::Display,
		F: FnOnce() -> M,
	{
		match self {
			Some(value) => Ok(value),
			None => Err(Error::with_message(f())),
		}
	}
}

#[macro_export]
macro_rules! error {
	($($t:tt)*) => {{
		$crate::Error::with_message(format!($($t)*))
	}};
}

#[macro_export]
macro_rules! return_error {
	($($t:tt)*) => {{
		return $crate::Result::Err($crate::error!($($t)*))
	}};
}

#[cfg(test)]
mod tests {
	use super::{Result, WrapErr};
	use pretty_assertions::assert_eq;

	fn check_delimiter(delimiter: &str) -> Result<()> {
		if delimiter.is_empty() {
			crate::return_error!("The delimiter must not be empty.");
		}
		Ok(())
	}

	#[test]
	fn test_return_error() {
		assert!(check_delimiter("\t").is_ok());
		let error = check_delimiter("").unwrap_err();
		assert_eq!(error.to_string(), "The delimiter must not be empty.");

		let trace = error.trace().to_string();
		let lines: Vec<_> = trace.lines().collect();
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0], "The delimiter must not be empty.");
		assert!(lines[1].starts_with(&format!("  {}:", file!())));
	}

	#[test]
	fn test_wrap_io_error() {
		let result: std::result::Result<String, std::io::Error> = Err(std::io::Error::new(
			std::io::ErrorKind::InvalidData,
			"stream did not contain valid UTF-8",
		));
		let error = result
			.wrap_err("Failed to read a line from standard input.")
			.unwrap_err();
		assert_eq!(
			error.to_string(),
			"Failed to read a line from standard input."
		);

		let trace = error.trace().to_string();
		let lines: Vec<_> = trace.lines().collect();
		assert_eq!(lines.len(), 3);
		assert_eq!(lines[0], "Failed to read a line from standard input.");
		assert!(lines[1].starts_with(&format!("  {}:", file!())));
		assert_eq!(lines[2], "stream did not contain valid UTF-8");
	}

	#[test]
	fn test_wrap_none() {
		let path: Option<String> = None;
		let (error, line) = (path.wrap_err("Expected a path.").unwrap_err(), line!());
		let trace = error.trace().to_string();
		let lines: Vec<_> = trace.lines().collect();
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0], "Expected a path.");
		assert!(lines[1].starts_with(&format!("  {}:{line}:", file!())));

		let path = Some(String::from("a/../b"));
		assert_eq!(path.wrap_err("Expected a path.").unwrap(), "a/../b");
	}

	#[test]
	fn test_wrap_err_with() {
		let result: std::result::Result<(), std::fmt::Error> = Err(std::fmt::Error);
		let filter = "slashpath=[";
		let error = result
			.wrap_err_with(|| format!(r#"Failed to parse the tracing filter "{filter}"."#))
			.unwrap_err();
		assert_eq!(
			error.to_string(),
			r#"Failed to parse the tracing filter "slashpath=["."#
		);
		assert!(std::error::Error::source(&error).is_some());
	}
}
