//! Join slash-separated path and URL segments.
//!
//! | Function      | Slash at each joint | Existing slashes       | Normalizes |
//! |---------------|---------------------|------------------------|------------|
//! | [`create()`]    | always inserted     | kept                   | no         |
//! | [`join_only()`] | at most one         | kept away from joints  | no         |
//! | [`join()`]      | at most one         | collapsed              | yes        |
//!
//! Only [`join_only()`] is safe for URLs. It leaves the `//` after a scheme alone.
//!
//! [`normalize()`] is the lexical normalization used by [`join()`].
//!
//! Each function has a variadic macro counterpart: [`create!`], [`join_only!`], and [`join!`].

pub use self::{
	join::{create, join, join_only},
	normalize::normalize,
};

mod join;
mod normalize;
