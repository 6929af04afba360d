use crate::normalize::normalize;

/// Concatenate segments, inserting a slash between every adjacent pair.
///
/// The slash is inserted unconditionally. A segment that ends with a slash followed by one that
/// starts with a slash produces three consecutive slashes at the joint. Nothing is trimmed and
/// nothing is normalized, so `.` and `..` are kept as is.
///
/// The result is allocated once, with exactly the required capacity.
///
/// # Example
///
/// ```
/// assert_eq!(slashpath::create(&["a", "b", "c"]), "a/b/c");
/// assert_eq!(slashpath::create(&["a/", "/b"]), "a///b");
/// assert_eq!(slashpath::create::<&str>(&[]), "");
/// ```
#[must_use]
pub fn create<S: AsRef<str>>(segments: &[S]) -> String {
	let len = segments
		.iter()
		.map(|segment| segment.as_ref().len())
		.sum::<usize>()
		+ segments.len().saturating_sub(1);
	let mut string = String::with_capacity(len);
	for (i, segment) in segments.iter().enumerate() {
		if i != 0 {
			string.push('/');
		}
		string.push_str(segment.as_ref());
	}
	string
}

/// Concatenate segments, inserting or merging a slash at each joint, without normalizing.
///
/// A slash is inserted between two segments only when the first does not end with one and the
/// second does not start with one. When the first ends with a slash and the second starts with
/// one, a single leading slash of the second is dropped. Empty segments are ignored. Slash runs
/// away from a joint, and `.` or `..` elements, are kept verbatim.
///
/// For two non-empty segments the result is the same as
/// `a.strip_suffix('/') + "/" + b.strip_prefix('/')`.
///
/// Unlike [`join()`], this is safe for URLs: the `//` after a scheme is left alone and trailing
/// slashes survive.
///
/// The result is allocated once, with exactly the required capacity.
///
/// # Example
///
/// ```
/// assert_eq!(slashpath::join_only(&["a/", "/b"]), "a/b");
/// assert_eq!(slashpath::join_only(&["//", "//"]), "///");
/// assert_eq!(
/// 	slashpath::join_only(&["https://", "example.com/"]),
/// 	"https://example.com/"
/// );
/// ```
#[must_use]
pub fn join_only<S: AsRef<str>>(segments: &[S]) -> String {
	// Compute the exact size.
	let mut len = 0;
	for_each_piece(segments, |piece| len += piece.len());

	// Write the pieces.
	let mut string = String::with_capacity(len);
	for_each_piece(segments, |piece| string.push_str(piece));

	string
}

/// Concatenate segments, ensuring slash separation, ignoring empty segments, and normalizing the
/// result with [`normalize()`].
///
/// If every segment is empty the result is the empty string. Note that this differs from
/// `normalize("")`, which returns `"."`. Keep it that way.
///
/// Be careful with URLs. Normalization cannot tell a scheme's `//` from an accidental double
/// slash, so `https://` becomes `https:/`, and a trailing slash is removed. Use [`join_only()`] for
/// URLs.
///
/// # Example
///
/// ```
/// assert_eq!(slashpath::join(&["a/b/", "../../../xyz"]), "../xyz");
/// assert_eq!(slashpath::join(&["https://", "example.com/"]), "https:/example.com");
/// assert_eq!(slashpath::join(&["", ""]), "");
/// ```
#[must_use]
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
	let joined = join_only(segments);
	if joined.is_empty() {
		return joined;
	}
	normalize(&joined)
}

/// Call `f` with each piece of the conditional join of `segments`, in order.
///
/// Both passes of [`join_only()`] go through here, so the computed size always matches what is
/// written.
fn for_each_piece<S, F>(segments: &[S], mut f: F)
where
	S: AsRef<str>,
	F: FnMut(&str),
{
	// Whether the last non-empty segment ended with a slash.
	let mut trailing_slash = false;

	// Whether anything has been emitted.
	let mut started = false;

	for segment in segments.iter().map(AsRef::as_ref) {
		if segment.is_empty() {
			continue;
		}
		if let Some(rest) = segment.strip_prefix('/') {
			// Drop exactly one leading slash if there is already one at the joint.
			f(if trailing_slash { rest } else { segment });
		} else {
			if started && !trailing_slash {
				f("/");
			}
			f(segment);
		}
		trailing_slash = segment.ends_with('/');
		started = true;
	}
}

/// Concatenate any number of segments with [`create()`](crate::create).
///
/// ```
/// assert_eq!(slashpath::create!("a", String::from("b")), "a/b");
/// ```
#[macro_export]
macro_rules! create {
	($($segment:expr),* $(,)?) => {{
		$crate::create::<&str>(&[$(::core::convert::AsRef::<str>::as_ref(&$segment)),*])
	}};
}

/// Concatenate any number of segments with [`join_only()`](crate::join_only).
///
/// ```
/// assert_eq!(slashpath::join_only!("https://", "example.com", "/api/"), "https://example.com/api/");
/// ```
#[macro_export]
macro_rules! join_only {
	($($segment:expr),* $(,)?) => {{
		$crate::join_only::<&str>(&[$(::core::convert::AsRef::<str>::as_ref(&$segment)),*])
	}};
}

/// Concatenate any number of segments with [`join()`](crate::join).
///
/// ```
/// assert_eq!(slashpath::join!("a", "./b", "../c"), "a/c");
/// ```
#[macro_export]
macro_rules! join {
	($($segment:expr),* $(,)?) => {{
		$crate::join::<&str>(&[$(::core::convert::AsRef::<str>::as_ref(&$segment)),*])
	}};
}
