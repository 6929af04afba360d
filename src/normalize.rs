use itertools::Itertools;

/// Return the shortest path equivalent to `path` by purely lexical processing.
///
/// The rules are applied until none applies:
///
/// 1. Replace multiple slashes with a single slash.
/// 2. Eliminate each `.` element.
/// 3. Eliminate each inner `..` element and the non-`..` element that precedes it.
/// 4. Eliminate `..` elements that begin a rooted path, so `/..` becomes `/`.
///
/// The result ends with a slash only if it is the root `/`. An empty result becomes `"."`.
///
/// Nothing here knows about URLs. A scheme's `//` is collapsed like any other slash run.
///
/// # Example
///
/// ```
/// use slashpath::normalize;
///
/// assert_eq!(normalize("abc//def/./ghi/../jkl/"), "abc/def/jkl");
/// assert_eq!(normalize("/../abc"), "/abc");
/// assert_eq!(normalize("abc/../../def"), "../def");
/// assert_eq!(normalize(""), ".");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
	let rooted = path.starts_with('/');

	// Resolve the components.
	let mut components: Vec<&str> = Vec::new();
	for component in path.split('/') {
		match component {
			// Ignore empty and current dir components.
			"" | "." => {},

			// Pop a preceding normal component, drop at the root, or keep as a leading parent.
			".." => match components.last() {
				Some(&last) if last != ".." => {
					components.pop();
				},
				_ if rooted => {},
				_ => components.push(".."),
			},

			component => components.push(component),
		}
	}

	if !rooted && components.is_empty() {
		return ".".to_owned();
	}

	// The input is non-empty here, and the result is never longer than it.
	let mut string = String::with_capacity(path.len());
	if rooted {
		string.push('/');
	}
	string.extend(Itertools::intersperse(components.into_iter(), "/"));
	string
}
