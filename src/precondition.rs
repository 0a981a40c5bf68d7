//! Precondition checks for the algorithm entry points
//!
//! Every algorithm validates its arguments through [`precondition!`], which is
//! compiled in whenever `debug_assertions` are on and compiled out otherwise.
//! A violated precondition is a bug in the caller, so it panics; in release
//! builds the safe slice indexing inside the algorithms still panics instead of
//! reading out of bounds.

/// Check an algorithm precondition in debug builds
///
/// The message names the algorithm and the offending argument:
///
/// ```rust,ignore
/// precondition!(b.len() >= a.len(), "equal", "b shorter than a");
/// // panics with "equal - b shorter than a"
/// ```
macro_rules! precondition {
    ($cond:expr, $algorithm:literal, $problem:literal) => {
        debug_assert!($cond, concat!($algorithm, " - ", $problem));
    };
}

pub(crate) use precondition;
