//! External renderer invocation.

/// Subprocess invocation and output naming.
pub mod invoke;
