//! notemirror - Mirror note folders onto the file system
//!
//! Finds a folder in a multi-account note store and exports it, together
//! with every subfolder, as a directory tree of `.html` files.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MirrorError;
