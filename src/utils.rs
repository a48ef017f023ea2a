//! Various utilities
//!
//! External crate wrappers, small functions, etc.

pub mod progress;
pub mod random;
pub mod vector;
