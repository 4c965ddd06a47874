//! The failure type of the tree's fallible operations.

use thiserror::Error;

/// Errors returned by [`Tree`][crate::Tree] operations.
///
/// Lookups that simply find nothing (`find`, `successor`, `replace`, ...) return `None`
/// instead; an `Error` means the caller asked for something the tree could not do.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The item to remove is not stored in the tree.
    #[error("item not in tree")]
    NotFound,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
